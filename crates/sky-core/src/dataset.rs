// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::SkyError;

/// Immutable row-major store of `size` items with `ndims` attributes each.
///
/// Constructed once, read through [`Dataset::value`], never mutated. Non-finite
/// attributes are rejected at construction so every downstream comparison is
/// total.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    size: usize,
    ndims: usize,
    storage: Vec<f64>,
}

impl Dataset {
    /// Constructs a validated dataset from a flat row-major buffer.
    pub fn new(storage: Vec<f64>, size: usize, ndims: usize) -> Result<Self, SkyError> {
        if size == 0 {
            return Err(SkyError::invalid_input("dataset size must be >= 1"));
        }
        if ndims == 0 {
            return Err(SkyError::invalid_input("dataset dimension must be >= 1"));
        }

        let expected_len = size.checked_mul(ndims).ok_or_else(|| {
            SkyError::invalid_input("size*ndims overflow while validating shape")
        })?;
        if storage.len() != expected_len {
            return Err(SkyError::invalid_input(format!(
                "storage length mismatch: got {}, expected {expected_len} (size={size}, ndims={ndims})",
                storage.len()
            )));
        }

        if let Some((idx, value)) = storage
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(SkyError::invalid_input(format!(
                "non-finite attribute at flat index {idx}: {value}"
            )));
        }

        Ok(Self {
            size,
            ndims,
            storage,
        })
    }

    /// Constructs a dataset from per-item rows, validating consistent widths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SkyError> {
        if rows.is_empty() {
            return Err(SkyError::invalid_input(
                "dataset must contain at least one item",
            ));
        }

        let ndims = rows[0].len();
        let size = rows.len();
        let capacity = size
            .checked_mul(ndims)
            .ok_or_else(|| SkyError::invalid_input("size*ndims overflow while flattening rows"))?;

        let mut storage = Vec::with_capacity(capacity);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != ndims {
                return Err(SkyError::invalid_input(format!(
                    "item {idx} has {} attributes but expected {ndims}",
                    row.len()
                )));
            }
            storage.extend_from_slice(row);
        }

        Self::new(storage, size, ndims)
    }

    /// Number of items.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of attributes per item.
    pub fn ndims(&self) -> usize {
        self.ndims
    }

    /// Attribute of `item` on dimension `dim`.
    ///
    /// Panics when either index is out of range; that is an invariant
    /// violation in the caller, not a recoverable condition.
    pub fn value(&self, item: usize, dim: usize) -> f64 {
        assert!(
            item < self.size && dim < self.ndims,
            "dataset access out of range: item={item}, dim={dim} (size={}, ndims={})",
            self.size,
            self.ndims
        );
        self.storage[self.ndims * item + dim]
    }
}
