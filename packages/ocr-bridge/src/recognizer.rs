use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::engine::{Concurrency, DecodedImage, OcrEngine, TextRecognizer};
use crate::error::{OcrError, Result};
use crate::options::EngineOptions;
use crate::region::TextLocation;
use crate::result_set::ResultSet;
use crate::tesseract::TesseractEngine;

struct Inner {
    engine: Box<dyn OcrEngine>,
    // held around engine calls for engines that are not thread-safe
    serial: Mutex<()>,
}

/// Reads, decodes and recognizes images, materializing the output as a
/// [`ResultSet`]. Cheap to clone; clones share the engine.
#[derive(Clone)]
pub struct Recognizer {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Recognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recognizer")
            .field("engine", &self.engine_name())
            .finish()
    }
}

impl Recognizer {
    pub fn new(engine: impl OcrEngine + 'static) -> Self {
        Self {
            inner: Arc::new(Inner {
                engine: Box::new(engine),
                serial: Mutex::new(()),
            }),
        }
    }

    pub fn from_options(options: EngineOptions) -> Self {
        Self::new(TesseractEngine::new(options))
    }

    pub fn from_env() -> Self {
        Self::from_options(EngineOptions::from_env())
    }

    pub fn engine_name(&self) -> &str {
        self.inner.engine.name()
    }

    pub fn recognize_path(&self, path: impl AsRef<Path>) -> Result<ResultSet> {
        let path = path.as_ref();
        let start = Instant::now();

        let data = std::fs::read(path).map_err(|source| OcrError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let image = image::load_from_memory(&data)?;
        drop(data);

        let set = self.recognize_decoded(DecodedImage::new(image, Some(path.to_path_buf())))?;
        debug!(
            "recognized {} regions in {} ({:?})",
            set.len(),
            path.display(),
            start.elapsed()
        );
        Ok(set)
    }

    /// Recognize a path given as raw bytes. On Unix the bytes are used as-is,
    /// so non-UTF-8 names work; elsewhere they must be UTF-8.
    pub fn recognize_path_bytes(&self, path: &[u8]) -> Result<ResultSet> {
        self.recognize_path(path_from_bytes(path)?)
    }

    /// Recognize an encoded image held in memory.
    pub fn recognize_bytes(&self, data: &[u8]) -> Result<ResultSet> {
        let image = image::load_from_memory(data)?;
        self.recognize_decoded(DecodedImage::new(image, None))
    }

    pub fn recognize_decoded(&self, image: DecodedImage) -> Result<ResultSet> {
        let engine = &self.inner.engine;
        let regions = match engine.concurrency() {
            Concurrency::Parallel => engine.recognize(&image),
            Concurrency::Serialized => {
                let _guard = self.inner.serial.lock();
                engine.recognize(&image)
            }
        }
        .inspect_err(|e| warn!("{} failed: {}", engine.name(), e))?;

        ResultSet::from_regions(&regions)
    }
}

#[async_trait]
impl TextRecognizer for Recognizer {
    async fn extract_text_with_locations(&self, path: &Path) -> Result<Vec<TextLocation>> {
        let recognizer = self.clone();
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            recognizer
                .recognize_path(&path)
                .map(|set| set.to_locations())
        })
        .await
        .map_err(|e| OcrError::EngineFailed(e.to_string()))?
    }

    fn name(&self) -> &str {
        self.engine_name()
    }
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> Result<&Path> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    Ok(Path::new(OsStr::from_bytes(bytes)))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> Result<&Path> {
    std::str::from_utf8(bytes)
        .map(Path::new)
        .map_err(|_| OcrError::InvalidInput("image path is not valid UTF-8".into()))
}

static GLOBAL: OnceLock<Recognizer> = OnceLock::new();

/// Install the recognizer used by the C entry points.
///
/// Must happen before the first C call; afterwards the slot is taken and
/// this returns an error.
pub fn install_recognizer(recognizer: Recognizer) -> Result<()> {
    GLOBAL
        .set(recognizer)
        .map_err(|_| OcrError::InvalidInput("a recognizer is already installed".into()))
}

/// The recognizer used by the C entry points, created from the environment
/// on first use.
pub fn global_recognizer() -> &'static Recognizer {
    GLOBAL.get_or_init(Recognizer::from_env)
}
