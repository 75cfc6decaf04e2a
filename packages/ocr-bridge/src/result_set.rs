use std::ptr;

use crate::error::{OcrError, Result};
use crate::region::{RecognizedText, TextBox, TextLocation};

/// The records produced by one recognition call.
///
/// Dropping a `ResultSet` releases the array and every text buffer it
/// references. Use [`ResultSet::into_raw`] to hand ownership to a foreign
/// caller and [`release`] (or [`ResultSet::from_raw`]) to take it back.
#[derive(Debug)]
pub struct ResultSet {
    records: Box<[TextBox]>,
}

impl ResultSet {
    /// A successful result with no regions. The raw array pointer is still non-null.
    pub fn empty() -> Self {
        Self {
            records: Vec::new().into_boxed_slice(),
        }
    }

    /// Materialize engine output, preserving engine order.
    pub fn from_regions(regions: &[RecognizedText]) -> Result<Self> {
        if u32::try_from(regions.len()).is_err() {
            return Err(OcrError::AllocationFailed(format!(
                "{} regions exceed the record count range",
                regions.len()
            )));
        }

        let mut records = Vec::new();
        records.try_reserve_exact(regions.len())?;
        for region in regions {
            records.push(TextBox::from_region(region)?);
        }

        Ok(Self {
            records: records.into_boxed_slice(),
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TextBox> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TextBox> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[TextBox] {
        &self.records
    }

    pub fn to_locations(&self) -> Vec<TextLocation> {
        self.records.iter().map(TextBox::to_location).collect()
    }

    /// Give up ownership. The pointer is never null; pass it with the same
    /// count to [`release`] exactly once.
    pub fn into_raw(self) -> (*mut TextBox, u32) {
        let count = self.records.len() as u32;
        (Box::into_raw(self.records) as *mut TextBox, count)
    }

    /// Reclaim a pointer/count pair produced by [`ResultSet::into_raw`].
    ///
    /// Returns `None` for a null pointer.
    ///
    /// # Safety
    ///
    /// `boxes` must come from `into_raw` with exactly this `count` and must not
    /// have been reclaimed or released already.
    pub unsafe fn from_raw(boxes: *mut TextBox, count: u32) -> Option<Self> {
        if boxes.is_null() {
            return None;
        }
        let slice = ptr::slice_from_raw_parts_mut(boxes, count as usize);
        Some(Self {
            records: Box::from_raw(slice),
        })
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a TextBox;
    type IntoIter = std::slice::Iter<'a, TextBox>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Free an array previously returned through the C boundary.
///
/// A null pointer is a no-op regardless of `count`.
///
/// # Safety
///
/// Same contract as [`ResultSet::from_raw`].
pub unsafe fn release(boxes: *mut TextBox, count: u32) {
    drop(ResultSet::from_raw(boxes, count));
}
