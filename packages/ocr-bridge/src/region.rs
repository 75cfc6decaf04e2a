//! Text region types.
//!
//! All coordinates are in source-image pixels with the origin at the top-left
//! corner of the decoded image, x growing right and y growing down.

use std::borrow::Cow;
use std::os::raw::c_char;
use std::ptr;

use serde::{Deserialize, Serialize};

use crate::error::{OcrError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A single region as reported by an engine, in engine-native order.
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizedText {
    pub text: String,
    pub bounds: Rect,
    pub confidence: f32,
}

impl RecognizedText {
    pub fn new(text: impl Into<String>, bounds: Rect, confidence: f32) -> Self {
        Self {
            text: text.into(),
            bounds,
            confidence,
        }
    }
}

/// Owned copy of a [`TextBox`] for Rust consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLocation {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub confidence: f32,
}

/// Fixed-layout record handed across the C boundary.
///
/// Field order and widths are the wire contract:
/// `text`, `text_len: u32`, `x`, `y`, `width`, `height: i32`, `confidence: f32`.
/// `text` is not NUL-terminated; read exactly `text_len` bytes.
///
/// Every `TextBox` owns its text buffer and frees it on drop.
#[repr(C)]
#[derive(Debug)]
pub struct TextBox {
    text: *const c_char,
    text_len: u32,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    confidence: f32,
}

// The text buffer is uniquely owned and never mutated after construction.
unsafe impl Send for TextBox {}
unsafe impl Sync for TextBox {}

impl TextBox {
    /// Copy `region` into a new record with its own text buffer.
    pub(crate) fn from_region(region: &RecognizedText) -> Result<Self> {
        let bytes = region.text.as_bytes();
        let text_len = u32::try_from(bytes.len()).map_err(|_| {
            OcrError::AllocationFailed(format!(
                "text of {} bytes does not fit the record",
                bytes.len()
            ))
        })?;

        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes.len())?;
        buf.extend_from_slice(bytes);
        let text = Box::into_raw(buf.into_boxed_slice()) as *mut u8 as *const c_char;

        Ok(Self {
            text,
            text_len,
            x: region.bounds.x,
            y: region.bounds.y,
            width: region.bounds.width,
            height: region.bounds.height,
            confidence: normalize_confidence(region.confidence),
        })
    }

    pub fn text_bytes(&self) -> &[u8] {
        if self.text.is_null() {
            return &[];
        }
        unsafe { std::slice::from_raw_parts(self.text as *const u8, self.text_len as usize) }
    }

    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.text_bytes())
    }

    pub fn text_len(&self) -> u32 {
        self.text_len
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn to_location(&self) -> TextLocation {
        TextLocation {
            text: self.text_lossy().into_owned(),
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            confidence: self.confidence,
        }
    }
}

impl Drop for TextBox {
    fn drop(&mut self) {
        if self.text.is_null() {
            return;
        }
        let slice = ptr::slice_from_raw_parts_mut(self.text as *mut u8, self.text_len as usize);
        unsafe { drop(Box::from_raw(slice)) };
        self.text = ptr::null();
    }
}

/// Clamp an engine score into `[0.0, 1.0]`; NaN becomes `0.0`.
pub fn normalize_confidence(confidence: f32) -> f32 {
    if confidence.is_nan() {
        tracing::warn!("engine reported NaN confidence, using 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&confidence) {
        tracing::warn!("engine confidence {} outside [0, 1], clamping", confidence);
    }
    confidence.clamp(0.0, 1.0)
}
