//! Low-value frame screening.
//!
//! Companion to the outlier sieve for the opposite failure mode: frames
//! where a per-atom uncertainty estimate collapses toward zero, which in
//! practice signals an atom that lost its neighborhood rather than a
//! trustworthy prediction.

use tracing::info;

use crate::collect::collect_property;
use crate::error::SieveError;
use crate::frame::{Evaluator, Frame};

/// Result of a low-value screen.
#[derive(Debug, Clone)]
pub struct ScreenResult {
    /// Indices of frames flagged by the screen, ascending.
    flagged: Vec<usize>,
    /// All frame indices not flagged, ascending.
    kept: Vec<usize>,
}

impl ScreenResult {
    /// Returns the flagged frame indices.
    pub fn flagged(&self) -> &[usize] {
        &self.flagged
    }

    /// Returns the unflagged frame indices.
    pub fn kept(&self) -> &[usize] {
        &self.kept
    }
}

/// Flags every frame whose named property contains any value below `floor`.
///
/// The property is collected the same way the sieve collects it: one batch
/// evaluator call when an evaluator is given, attached values otherwise.
/// NaN entries satisfy no comparison and never trigger the flag.
///
/// # Errors
///
/// Returns [`SieveError::EmptyFrames`] or [`SieveError::MissingProperty`]
/// under the same conditions as the sieve, and propagates evaluator failures.
pub fn screen_low_values(
    frames: &[Frame],
    property: &str,
    floor: f64,
    evaluator: Option<&dyn Evaluator>,
) -> Result<ScreenResult, SieveError> {
    let values = collect_property(frames, property, evaluator)?;

    let mut flagged = Vec::new();
    let mut kept = Vec::new();
    for (i, arr) in values.iter().enumerate() {
        if arr.iter().any(|&v| v < floor) {
            flagged.push(i);
        } else {
            kept.push(i);
        }
    }
    info!(
        property,
        floor,
        flagged = flagged.len(),
        frames = frames.len(),
        "screened low-value frames"
    );
    Ok(ScreenResult { flagged, kept })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    fn frame_with(values: &[f64]) -> Frame {
        Frame::new().with_property("forces_uncertainty", arr1(values).into_dyn())
    }

    #[test]
    fn test_flags_frames_below_floor() {
        let frames = vec![
            frame_with(&[0.2, 0.3]),
            frame_with(&[0.2, 1e-6]),
            frame_with(&[0.5, 0.4]),
        ];
        let result = screen_low_values(&frames, "forces_uncertainty", 1e-4, None).unwrap();
        assert_eq!(result.flagged(), &[1]);
        assert_eq!(result.kept(), &[0, 2]);
    }

    #[test]
    fn test_nothing_flagged() {
        let frames = vec![frame_with(&[0.2]), frame_with(&[0.3])];
        let result = screen_low_values(&frames, "forces_uncertainty", 1e-4, None).unwrap();
        assert!(result.flagged().is_empty());
        assert_eq!(result.kept(), &[0, 1]);
    }

    #[test]
    fn test_nan_does_not_flag() {
        let frames = vec![frame_with(&[f64::NAN, 0.2])];
        let result = screen_low_values(&frames, "forces_uncertainty", 1e-4, None).unwrap();
        assert!(result.flagged().is_empty());
    }

    #[test]
    fn test_missing_property() {
        let frames = vec![Frame::new()];
        assert!(matches!(
            screen_low_values(&frames, "forces_uncertainty", 1e-4, None),
            Err(SieveError::MissingProperty { .. })
        ));
    }
}
