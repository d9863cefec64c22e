//! Per-frame property collection.

use ndarray::ArrayD;
use tracing::debug;

use crate::error::SieveError;
use crate::frame::{Evaluator, Frame};

/// Collects the named property value for every frame, in frame order.
///
/// With an evaluator, properties are computed in one batch invocation and
/// read from the evaluator's output; the input frames are left untouched.
/// Without one, the property must already be attached to every frame.
///
/// # Errors
///
/// Returns [`SieveError::EmptyFrames`] for an empty frame sequence,
/// [`SieveError::MissingProperty`] when a frame (or the evaluator's output
/// for it) lacks the property, and propagates evaluator failures.
pub fn collect_property(
    frames: &[Frame],
    property: &str,
    evaluator: Option<&dyn Evaluator>,
) -> Result<Vec<ArrayD<f64>>, SieveError> {
    if frames.is_empty() {
        return Err(SieveError::EmptyFrames);
    }

    match evaluator {
        Some(evaluator) => {
            debug!(frames = frames.len(), property, "batch-evaluating frames");
            let batches = evaluator.evaluate_batch(frames)?;
            if batches.len() != frames.len() {
                return Err(SieveError::Evaluator {
                    reason: format!(
                        "batch evaluation returned {} results for {} frames",
                        batches.len(),
                        frames.len()
                    ),
                });
            }
            batches
                .into_iter()
                .enumerate()
                .map(|(i, mut props)| {
                    props
                        .remove(property)
                        .ok_or_else(|| SieveError::MissingProperty {
                            property: property.to_string(),
                            frame: i,
                        })
                })
                .collect()
        }
        None => frames
            .iter()
            .enumerate()
            .map(|(i, frame)| {
                frame
                    .property(property)
                    .cloned()
                    .ok_or_else(|| SieveError::MissingProperty {
                        property: property.to_string(),
                        frame: i,
                    })
            })
            .collect(),
    }
}
