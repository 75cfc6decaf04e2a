//! Shared fixtures: a deterministic engine that "reads" solid blocks of
//! known ink colours, plus helpers to draw such images.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use ocr_bridge::{DecodedImage, OcrEngine, Rect, RecognizedText, Result};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const RED: Rgb<u8> = Rgb([200, 0, 0]);
pub const BLUE: Rgb<u8> = Rgb([0, 0, 200]);

/// Each ink colour stands for one word.
const INKS: [(Rgb<u8>, &str); 2] = [(RED, "HELLO"), (BLUE, "WORLD")];

pub struct InkEngine;

impl OcrEngine for InkEngine {
    fn recognize(&self, image: &DecodedImage) -> Result<Vec<RecognizedText>> {
        let pixels = image.image.to_rgb8();
        let mut regions = Vec::new();

        for (ink, word) in INKS {
            let mut bounds: Option<(u32, u32, u32, u32)> = None;
            for (x, y, pixel) in pixels.enumerate_pixels() {
                if *pixel != ink {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
            if let Some((x0, y0, x1, y1)) = bounds {
                regions.push(RecognizedText::new(
                    word,
                    Rect::new(x0 as i32, y0 as i32, (x1 - x0 + 1) as i32, (y1 - y0 + 1) as i32),
                    0.95,
                ));
            }
        }

        // reading order: top to bottom, then left to right
        regions.sort_by_key(|r| (r.bounds.y, r.bounds.x));
        Ok(regions)
    }

    fn name(&self) -> &str {
        "ink"
    }
}

/// Draw a white canvas with filled ink rectangles and save it as PNG.
pub fn write_image(dir: &Path, name: &str, inks: &[(Rgb<u8>, Rect)]) -> PathBuf {
    let mut canvas = RgbImage::from_pixel(160, 120, WHITE);
    for (ink, rect) in inks {
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                canvas.put_pixel(x as u32, y as u32, *ink);
            }
        }
    }
    let path = dir.join(name);
    canvas.save(&path).unwrap();
    path
}

pub fn hello_rect() -> Rect {
    Rect::new(20, 30, 60, 14)
}

pub fn world_rect() -> Rect {
    Rect::new(24, 70, 64, 14)
}
