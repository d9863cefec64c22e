//! Sieve pipeline entry point.

use tracing::{debug, info};

use crate::classify::classify;
use crate::collect::collect_property;
use crate::config::SieveConfig;
use crate::error::SieveError;
use crate::frame::{Evaluator, Frame};
use crate::pad::pad_stack;
use crate::reduce::{check_dimension, reduce};
use crate::result::{Outcome, SelectionResult};
use crate::select::greedy_select;

/// Runs the full outlier sieve over a frame sequence.
///
/// Stages, in order: collect the property (optionally via one batch
/// evaluator call), pad ragged per-frame arrays to a common shape, reduce to
/// one score per frame, classify scores against the cutoff band, and greedily
/// select a minimum-spaced subset of the most severe out-of-band frames.
///
/// The run either fully succeeds or fails before producing any result; an
/// all-in-band score vector is a success with
/// [`Outcome::NoOutliersPresent`].
///
/// # Errors
///
/// Any [`SieveError`] from configuration validation, property collection,
/// padding, reduction, or the rank guard aborts the run.
pub fn sieve(
    frames: &[Frame],
    evaluator: Option<&dyn Evaluator>,
    config: &SieveConfig,
) -> Result<SelectionResult, SieveError> {
    config.validate()?;

    let values = collect_property(frames, config.property(), evaluator)?;
    let tensor = pad_stack(&values, config.fill())?;
    debug!(shape = ?tensor.shape(), "stacked property tensor");

    let reduced = match config.reduction() {
        Some(reduction) => reduce(&tensor, reduction, config.reduction_axes())?,
        None => tensor,
    };
    check_dimension(&reduced, frames.len())?;
    let scores: Vec<f64> = reduced.iter().copied().collect();

    let candidates = classify(&scores, config.cutoffs(), config.direction());
    if candidates.is_empty() {
        info!(
            property = config.property(),
            frames = frames.len(),
            "no out-of-band frames"
        );
        return Ok(SelectionResult::new(
            Vec::new(),
            scores,
            *config.cutoffs(),
            Outcome::NoOutliersPresent,
        ));
    }

    let selected = greedy_select(&candidates, config.min_distance(), config.max_count());
    info!(
        property = config.property(),
        candidates = candidates.len(),
        selected = selected.len(),
        "selected outlier frames"
    );
    Ok(SelectionResult::new(
        selected,
        scores,
        *config.cutoffs(),
        Outcome::OutliersSelected,
    ))
}
