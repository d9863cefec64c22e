//! NaN-aware dimensionality reduction and the rank guard.

use ndarray::{ArrayD, IxDyn};

use crate::config::Reduction;
use crate::error::SieveError;

/// Collapses the tensor's reduction axes to one value per remaining cell.
///
/// `Mean`, `Max`, and `Min` aggregate jointly over the given axes, skipping
/// NaN entries so NaN padding never influences the result; a cell with no
/// finite entries reduces to NaN. `Flatten` reshapes to one dimension without
/// aggregating (the axis set is ignored).
///
/// An empty axis set means all axes after the frame axis.
///
/// # Errors
///
/// Returns [`SieveError::InvalidReductionAxes`] when an axis is 0 (the frame
/// axis) or out of bounds for the tensor's rank.
pub fn reduce(
    tensor: &ArrayD<f64>,
    reduction: Reduction,
    axes: &[usize],
) -> Result<ArrayD<f64>, SieveError> {
    if reduction == Reduction::Flatten {
        let flat: Vec<f64> = tensor.iter().copied().collect();
        let len = flat.len();
        return Ok(ArrayD::from_shape_vec(IxDyn(&[len]), flat)
            .expect("flattened buffer matches its own length"));
    }

    let ndim = tensor.ndim();
    let axes: Vec<usize> = if axes.is_empty() {
        (1..ndim).collect()
    } else {
        axes.to_vec()
    };
    for &axis in &axes {
        if axis == 0 || axis >= ndim {
            return Err(SieveError::InvalidReductionAxes { axis });
        }
    }

    let keep: Vec<usize> = (0..ndim).filter(|d| !axes.contains(d)).collect();
    let out_shape: Vec<usize> = keep.iter().map(|&d| tensor.shape()[d]).collect();
    let out_len: usize = out_shape.iter().product();

    // Single pass: map each element to its output cell by dropping the
    // reduced axes from its index, then fold NaN-aware.
    let mut acc = vec![f64::NAN; out_len];
    let mut count = vec![0usize; out_len];
    for (idx, &value) in tensor.indexed_iter() {
        if value.is_nan() {
            continue;
        }
        let mut cell = 0;
        for &d in &keep {
            cell = cell * tensor.shape()[d] + idx[d];
        }
        match reduction {
            Reduction::Mean => {
                acc[cell] = if count[cell] == 0 {
                    value
                } else {
                    acc[cell] + value
                };
                count[cell] += 1;
            }
            Reduction::Max => {
                acc[cell] = if acc[cell].is_nan() {
                    value
                } else {
                    acc[cell].max(value)
                };
            }
            Reduction::Min => {
                acc[cell] = if acc[cell].is_nan() {
                    value
                } else {
                    acc[cell].min(value)
                };
            }
            Reduction::Flatten => unreachable!("flatten handled above"),
        }
    }
    if reduction == Reduction::Mean {
        for (sum, &n) in acc.iter_mut().zip(count.iter()) {
            if n > 0 {
                *sum /= n as f64;
            }
        }
    }

    Ok(ArrayD::from_shape_vec(IxDyn(&out_shape), acc)
        .expect("accumulator length matches output shape"))
}

/// Verifies the reduced tensor holds exactly one score per frame.
///
/// This is the gate every run passes before classification, whether or not a
/// reduction ran.
///
/// # Errors
///
/// Returns [`SieveError::Dimensionality`] when the rank is not 1 and
/// [`SieveError::ScoreLengthMismatch`] when the rank is 1 but the length
/// disagrees with the frame count (e.g. `flatten` applied to multi-valued
/// frames).
pub fn check_dimension(values: &ArrayD<f64>, n_frames: usize) -> Result<(), SieveError> {
    if values.ndim() != 1 {
        return Err(SieveError::Dimensionality {
            ndim: values.ndim(),
        });
    }
    if values.len() != n_frames {
        return Err(SieveError::ScoreLengthMismatch {
            scores: values.len(),
            frames: n_frames,
        });
    }
    Ok(())
}
