//! Ragged-array padding and stacking.

use ndarray::{ArrayD, IxDyn};

use crate::config::FillPolicy;
use crate::error::SieveError;

/// Stacks per-frame arrays into one tensor of shape `(n, max_lead, trailing...)`.
///
/// Arrays whose leading dimension is shorter than the longest are extended
/// along axis 0 with rows of the fill value; arrays already at the maximum
/// pass through unchanged, every original row preserved at its position.
/// Rank-0 inputs stack directly into a `(n,)` vector with no padding.
///
/// All inputs must share rank and trailing shape (everything after axis 0).
///
/// # Errors
///
/// Returns [`SieveError::EmptyFrames`] for an empty input and
/// [`SieveError::TrailingShapeMismatch`] when ranks or trailing shapes
/// disagree.
pub fn pad_stack(arrays: &[ArrayD<f64>], fill: FillPolicy) -> Result<ArrayD<f64>, SieveError> {
    let first = arrays.first().ok_or(SieveError::EmptyFrames)?;
    let trailing: Vec<usize> = first.shape().iter().skip(1).copied().collect();

    for (i, arr) in arrays.iter().enumerate().skip(1) {
        // skip(1) rather than indexing: rank-0 arrays have an empty shape.
        if arr.ndim() != first.ndim() || arr.shape().iter().skip(1).ne(trailing.iter()) {
            return Err(SieveError::TrailingShapeMismatch {
                expected: trailing.clone(),
                got: arr.shape().iter().skip(1).copied().collect(),
                frame: i,
            });
        }
    }

    let n = arrays.len();

    // Scalars: nothing to pad, stack straight into (n,).
    if first.ndim() == 0 {
        let flat: Vec<f64> = arrays.iter().flat_map(|a| a.iter().copied()).collect();
        return Ok(ArrayD::from_shape_vec(IxDyn(&[n]), flat)
            .expect("n rank-0 arrays yield n elements"));
    }

    let max_lead = arrays
        .iter()
        .map(|a| a.shape()[0])
        .max()
        .unwrap_or(0);
    let trailing_len: usize = trailing.iter().product();
    let slot = max_lead * trailing_len;

    let mut shape = Vec::with_capacity(first.ndim() + 1);
    shape.push(n);
    shape.push(max_lead);
    shape.extend_from_slice(&trailing);

    let mut buf = vec![fill.value(); n * slot];
    for (i, arr) in arrays.iter().enumerate() {
        for (offset, value) in arr.iter().enumerate() {
            buf[i * slot + offset] = *value;
        }
    }

    Ok(ArrayD::from_shape_vec(IxDyn(&shape), buf)
        .expect("buffer length matches output shape"))
}
