//! Command line arguments backing the `ocrb` binary.
use clap::{Parser, Subcommand};
use ocr_bridge::EngineOptions;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ocrb",
    about = "Recognize text in images through the ocr-bridge boundary",
    version
)]
pub struct Args {
    /// Log debug output to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print version information
    Version,
    /// Recognize text regions in an image
    Recognize {
        /// Image file to read
        image: PathBuf,

        /// Print regions as a JSON array
        #[arg(long)]
        json: bool,

        /// Tesseract language pack, e.g. "eng" or "eng+deu"
        #[arg(long, short = 'l')]
        lang: Option<String>,

        /// Tesseract page segmentation mode
        #[arg(long)]
        psm: Option<u8>,

        /// Path to the tesseract executable
        #[arg(long)]
        tesseract: Option<PathBuf>,
    },
}

/// Environment defaults overridden by whatever flags were given.
pub fn engine_options(
    lang: Option<String>,
    psm: Option<u8>,
    tesseract: Option<PathBuf>,
) -> EngineOptions {
    let mut options = EngineOptions::from_env();
    if let Some(lang) = lang {
        options = options.with_language(lang);
    }
    if let Some(psm) = psm {
        options = options.with_page_segmentation_mode(psm);
    }
    if let Some(path) = tesseract {
        options = options.with_tesseract_path(path);
    }
    options
}
