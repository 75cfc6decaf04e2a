//! C entry points. See `include/ocr_bridge.h` for the caller-side contract.

use std::os::raw::c_char;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;

use tracing::{error, warn};

use crate::error::OcrStatus;
use crate::recognizer::global_recognizer;
use crate::region::TextBox;
use crate::result_set;

/// Recognize text in an image and return its regions.
///
/// Returns `true` on success. The array in `*out_boxes` is then owned by the
/// caller (non-null even when `*out_count` is 0) and must be released with
/// [`ocr_free_boxes`]. On failure `*out_boxes` is null and `*out_count` is 0.
///
/// # Safety
///
/// `image_path` must point to `image_path_len` readable bytes (it may be null
/// only when the length is 0). `out_boxes` and `out_count` must be valid for
/// writes.
#[no_mangle]
pub unsafe extern "C" fn ocr_recognize_text(
    image_path: *const c_char,
    image_path_len: u32,
    out_boxes: *mut *mut TextBox,
    out_count: *mut u32,
) -> bool {
    ocr_recognize_text_status(image_path, image_path_len, out_boxes, out_count).is_ok()
}

/// Same as [`ocr_recognize_text`] but reports why a call failed.
///
/// # Safety
///
/// Same contract as [`ocr_recognize_text`].
#[no_mangle]
pub unsafe extern "C" fn ocr_recognize_text_status(
    image_path: *const c_char,
    image_path_len: u32,
    out_boxes: *mut *mut TextBox,
    out_count: *mut u32,
) -> OcrStatus {
    if !out_boxes.is_null() {
        *out_boxes = ptr::null_mut();
    }
    if !out_count.is_null() {
        *out_count = 0;
    }
    if out_boxes.is_null() || out_count.is_null() {
        warn!("ocr_recognize_text called with a null output location");
        return OcrStatus::InvalidArgument;
    }

    let path: &[u8] = if image_path_len == 0 {
        &[]
    } else if image_path.is_null() {
        warn!("ocr_recognize_text called with a null path of length {}", image_path_len);
        return OcrStatus::InvalidArgument;
    } else {
        std::slice::from_raw_parts(image_path as *const u8, image_path_len as usize)
    };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        global_recognizer().recognize_path_bytes(path)
    }));

    match outcome {
        Ok(Ok(set)) => {
            let (boxes, count) = set.into_raw();
            *out_boxes = boxes;
            *out_count = count;
            OcrStatus::Ok
        }
        Ok(Err(e)) => {
            warn!("recognition failed: {}", e);
            e.status()
        }
        Err(_) => {
            error!("recognition panicked");
            OcrStatus::EngineFailed
        }
    }
}

/// Release an array returned by [`ocr_recognize_text`] together with every
/// text buffer it references. A null `boxes` is a no-op.
///
/// # Safety
///
/// `boxes` and `count` must be exactly what a successful recognition call
/// produced, and the array must not have been released already.
#[no_mangle]
pub unsafe extern "C" fn ocr_free_boxes(boxes: *mut TextBox, count: u32) {
    result_set::release(boxes, count);
}

/// Static description of a status code. The string must not be freed.
#[no_mangle]
pub extern "C" fn ocr_status_message(status: i32) -> *const c_char {
    match OcrStatus::from_code(status) {
        Some(status) => status.message().as_ptr(),
        None => c"unknown status".as_ptr(),
    }
}
