use std::path::PathBuf;

use thiserror::Error;

/// Status code reported across the C boundary.
///
/// Values are part of the ABI and must never be renumbered.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OcrStatus {
    Ok = 0,
    NotFound = 1,
    DecodeFailed = 2,
    EngineFailed = 3,
    AllocationFailed = 4,
    InvalidArgument = 5,
}

impl OcrStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(OcrStatus::Ok),
            1 => Some(OcrStatus::NotFound),
            2 => Some(OcrStatus::DecodeFailed),
            3 => Some(OcrStatus::EngineFailed),
            4 => Some(OcrStatus::AllocationFailed),
            5 => Some(OcrStatus::InvalidArgument),
            _ => None,
        }
    }

    pub fn is_ok(self) -> bool {
        self == OcrStatus::Ok
    }

    /// Static, NUL-terminated description suitable for handing to C callers.
    pub fn message(self) -> &'static std::ffi::CStr {
        match self {
            OcrStatus::Ok => c"ok",
            OcrStatus::NotFound => c"image path does not exist or is unreadable",
            OcrStatus::DecodeFailed => c"image data could not be decoded",
            OcrStatus::EngineFailed => c"OCR engine failed",
            OcrStatus::AllocationFailed => c"failed to allocate result array",
            OcrStatus::InvalidArgument => c"invalid argument",
        }
    }
}

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("image not found or unreadable: {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    DecodeFailed(#[from] image::ImageError),
    #[error("engine error: {0}")]
    EngineFailed(String),
    #[error("allocation failed: {0}")]
    AllocationFailed(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl OcrError {
    pub fn status(&self) -> OcrStatus {
        match self {
            OcrError::NotFound { .. } => OcrStatus::NotFound,
            OcrError::DecodeFailed(_) => OcrStatus::DecodeFailed,
            OcrError::EngineFailed(_) => OcrStatus::EngineFailed,
            OcrError::AllocationFailed(_) => OcrStatus::AllocationFailed,
            OcrError::InvalidInput(_) => OcrStatus::InvalidArgument,
        }
    }
}

impl From<std::collections::TryReserveError> for OcrError {
    fn from(e: std::collections::TryReserveError) -> Self {
        OcrError::AllocationFailed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OcrError>;
