use std::borrow::Cow;
use std::io::{Seek, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use image::{ColorType, DynamicImage, ImageFormat};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::engine::{DecodedImage, OcrEngine};
use crate::error::{OcrError, Result};
use crate::options::EngineOptions;
use crate::region::RecognizedText;

use super::tsv::parse_tsv;

pub struct TesseractEngine {
    options: EngineOptions,
}

impl TesseractEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    fn command(&self, input: &Path) -> Command {
        let mut cmd = Command::new(&self.options.tesseract_path);
        cmd.arg(input).arg("stdout");
        if let Some(lang) = &self.options.language {
            cmd.arg("-l").arg(lang);
        }
        if let Some(psm) = self.options.page_segmentation_mode {
            cmd.arg("--psm").arg(psm.to_string());
        }
        cmd.arg("tsv");
        cmd.stdin(Stdio::null());
        cmd
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

fn write_png<W: Write + Seek>(image: &DynamicImage, out: &mut W) -> Result<()> {
    // The PNG encoder has no float formats.
    let encodable = match image.color() {
        ColorType::Rgb32F | ColorType::Rgba32F => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        _ => Cow::Borrowed(image),
    };

    encodable
        .write_to(out, ImageFormat::Png)
        .map_err(|e| OcrError::EngineFailed(format!("failed to encode image for tesseract: {}", e)))
}

/// Stage the image on disk so tesseract reads it by path.
fn stage_image(image: &DynamicImage) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("ocr-bridge-")
        .suffix(".png")
        .tempfile()
        .map_err(|e| OcrError::EngineFailed(format!("failed to create temp image: {}", e)))?;
    write_png(image, &mut file)?;
    file.flush()
        .map_err(|e| OcrError::EngineFailed(format!("failed to write temp image: {}", e)))?;
    Ok(file)
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &DecodedImage) -> Result<Vec<RecognizedText>> {
        let input = stage_image(&image.image)?;

        // `output` waits for the child on every path, so nothing is left unreaped.
        let output = self.command(input.path()).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OcrError::EngineFailed(format!(
                    "tesseract executable {} not found. Install it with \
                    `brew install tesseract` (macOS) or `apt-get install tesseract-ocr` (Debian/Ubuntu)",
                    self.options.tesseract_path.display()
                ))
            } else {
                OcrError::EngineFailed(format!("failed to run tesseract: {}", e))
            }
        })?;
        drop(input);

        if !output.status.success() {
            return Err(OcrError::EngineFailed(format!(
                "tesseract failed ({}): {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let regions = parse_tsv(&String::from_utf8_lossy(&output.stdout));
        debug!(
            "tesseract recognized {} regions in {}x{} image",
            regions.len(),
            image.width(),
            image.height()
        );
        Ok(regions)
    }

    fn name(&self) -> &str {
        "Tesseract OCR"
    }
}
