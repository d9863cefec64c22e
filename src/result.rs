//! Output type for sieve runs.

use serde::Serialize;

use crate::config::CutoffBand;
use crate::error::SieveError;

/// Terminal outcome of a sieve run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// At least one frame was out of band; `selected` holds the picks.
    OutliersSelected,
    /// Every score was in band; `selected` is empty.
    ///
    /// Distinct from an empty selection under a `max_count` of zero, which
    /// still reports [`Outcome::OutliersSelected`].
    NoOutliersPresent,
}

/// Result of one sieve run.
///
/// Carries everything downstream collaborators need: the selected indices for
/// the training-set update, the kept complement for continued sampling, and
/// the score curve plus band for diagnostic plotting.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionResult {
    /// Selected frame indices in acceptance (severity rank) order.
    selected: Vec<usize>,
    /// All frame indices not selected, ascending.
    kept: Vec<usize>,
    /// One reduced score per frame, in frame order.
    scores: Vec<f64>,
    /// The cutoff band the scores were classified against.
    cutoffs: CutoffBand,
    /// Whether any frame was out of band.
    outcome: Outcome,
}

impl SelectionResult {
    /// Builds a result; the kept complement is derived from the score
    /// vector, which has one entry per frame.
    pub(crate) fn new(
        selected: Vec<usize>,
        scores: Vec<f64>,
        cutoffs: CutoffBand,
        outcome: Outcome,
    ) -> Self {
        let kept = (0..scores.len())
            .filter(|i| !selected.contains(i))
            .collect();
        Self {
            selected,
            kept,
            scores,
            cutoffs,
            outcome,
        }
    }

    /// Returns the selected frame indices in acceptance order.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Returns the unselected frame indices in ascending order.
    pub fn kept(&self) -> &[usize] {
        &self.kept
    }

    /// Returns the reduced score of every frame, in frame order.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Returns the cutoff band used for classification.
    pub fn cutoffs(&self) -> &CutoffBand {
        &self.cutoffs
    }

    /// Returns the run outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true if any frame was out of band.
    pub fn any_outlier(&self) -> bool {
        self.outcome == Outcome::OutliersSelected
    }

    /// Serializes the result to JSON for plotting or persistence.
    ///
    /// # Errors
    ///
    /// Returns [`SieveError::Serialization`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SieveError> {
        serde_json::to_string_pretty(self).map_err(|e| SieveError::Serialization {
            reason: e.to_string(),
        })
    }
}
