//! Tesseract-backed engine. Each call runs the `tesseract` executable, so the
//! engine is safe to use from several threads at once.

mod engine;
mod tsv;

pub use engine::TesseractEngine;
pub use tsv::parse_tsv;
