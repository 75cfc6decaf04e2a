//! # ocr-bridge
//!
//! A C ABI boundary around an OCR engine. A caller passes an image path and
//! gets back an array of fixed-layout [`TextBox`] records that it owns until
//! it hands them back with `ocr_free_boxes`.
//!
//! Rust callers can skip the raw pointers entirely:
//!
//! ```ignore
//! use ocr_bridge::Recognizer;
//!
//! let recognizer = Recognizer::from_env();
//! let results = recognizer.recognize_path("receipt.png")?;
//! for text_box in &results {
//!     println!("{} @ {:?} ({:.2})", text_box.text_lossy(), text_box.rect(), text_box.confidence());
//! }
//! // `results` is released here
//! ```
//!
//! Coordinates are source-image pixels, origin at the top-left corner, y down.

pub mod engine;
pub mod error;
pub mod ffi;
pub mod options;
pub mod recognizer;
pub mod region;
pub mod result_set;
pub mod tesseract;

pub use engine::{Concurrency, DecodedImage, OcrEngine, TextRecognizer};
pub use error::{OcrError, OcrStatus, Result};
pub use options::EngineOptions;
pub use recognizer::{global_recognizer, install_recognizer, Recognizer};
pub use region::{RecognizedText, Rect, TextBox, TextLocation};
pub use result_set::ResultSet;
pub use tesseract::TesseractEngine;
