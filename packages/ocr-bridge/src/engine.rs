use std::path::{Path, PathBuf};

use async_trait::async_trait;
use image::DynamicImage;

use crate::error::Result;
use crate::region::{RecognizedText, TextLocation};

/// A decoded image handed to an engine.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub source: Option<PathBuf>,
}

impl DecodedImage {
    pub fn new(image: DynamicImage, source: Option<PathBuf>) -> Self {
        Self { image, source }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Whether an engine may be called from several threads at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    Parallel,
    Serialized,
}

/// The recognition engine behind the boundary.
///
/// Implementations return regions in their native reading order, with
/// top-left-origin pixel coordinates and confidences in `[0, 1]`.
pub trait OcrEngine: Send + Sync {
    fn recognize(&self, image: &DecodedImage) -> Result<Vec<RecognizedText>>;

    fn name(&self) -> &str;

    /// Engines that are not internally thread-safe return `Serialized` and
    /// the recognizer holds a lock around each call.
    fn concurrency(&self) -> Concurrency {
        Concurrency::Parallel
    }
}

/// Async entry point for Rust callers running on tokio.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn extract_text_with_locations(&self, path: &Path) -> Result<Vec<TextLocation>>;

    fn name(&self) -> &str;
}
