//! Configuration for outlier sieve runs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SieveError;

/// Which side(s) of the cutoff band count as out-of-band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Scores strictly above the upper limit.
    Above,
    /// Scores strictly below the lower limit.
    Below,
    /// Scores strictly outside either limit.
    #[default]
    Both,
}

impl FromStr for Direction {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "above" => Ok(Direction::Above),
            "below" => Ok(Direction::Below),
            "both" => Ok(Direction::Both),
            other => Err(SieveError::InvalidDirection {
                name: other.to_string(),
            }),
        }
    }
}

/// How per-frame arrays are collapsed to one scalar per frame.
///
/// `Mean`, `Max`, and `Min` aggregate jointly over the configured axes and
/// ignore NaN entries, so NaN padding rows never influence the result.
/// `Flatten` reshapes without aggregating and is only valid when each frame
/// already contributes a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reduction {
    /// NaN-aware arithmetic mean over the reduction axes.
    Mean,
    /// NaN-aware maximum over the reduction axes.
    Max,
    /// NaN-aware minimum over the reduction axes.
    Min,
    /// Reshape to one dimension without aggregating.
    Flatten,
}

impl FromStr for Reduction {
    type Err = SieveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Reduction::Mean),
            "max" => Ok(Reduction::Max),
            "min" => Ok(Reduction::Min),
            "flatten" => Ok(Reduction::Flatten),
            other => Err(SieveError::UnknownReduction {
                name: other.to_string(),
            }),
        }
    }
}

/// Fill value used when padding ragged per-frame arrays to a common shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillPolicy {
    /// Pad with NaN. NaN-aware reductions skip the padding entirely.
    #[default]
    Nan,
    /// Pad with zero. Biases magnitude-sensitive reductions (a zero row
    /// drags `mean` toward zero and caps `min` at zero); prefer [`FillPolicy::Nan`].
    Zero,
}

impl FillPolicy {
    /// Returns the fill value for this policy.
    pub fn value(&self) -> f64 {
        match self {
            FillPolicy::Nan => f64::NAN,
            FillPolicy::Zero => 0.0,
        }
    }
}

/// Two-sided cutoff band defining the in-band ("normal") score interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutoffBand {
    /// Lower band limit.
    lower: f64,
    /// Upper band limit.
    upper: f64,
}

impl CutoffBand {
    /// Creates a new band. Call [`CutoffBand::validate`] (or run the pipeline,
    /// which validates eagerly) to check `lower <= upper`.
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Returns the lower limit.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper limit.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the band midpoint, the reference point for severity in
    /// [`Direction::Both`] mode.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Validates that the limits are ordered and not NaN.
    ///
    /// Infinite limits are allowed; `(-inf, x)` or `(x, inf)` make the band
    /// one-sided.
    pub fn validate(&self) -> Result<(), SieveError> {
        if self.lower.is_nan() || self.upper.is_nan() || self.lower > self.upper {
            return Err(SieveError::InvalidCutoff {
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }
}

fn default_min_distance() -> usize {
    1
}

/// Configuration for one sieve run.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use frame_sieve::{CutoffBand, Direction, Reduction, SieveConfig};
///
/// let config = SieveConfig::new("forces_uncertainty", CutoffBand::new(0.0, 0.5))
///     .with_direction(Direction::Above)
///     .with_reduction(Reduction::Max)
///     .with_min_distance(10)
///     .with_max_count(32);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SieveConfig {
    /// Name of the per-frame property to score.
    property: String,
    /// In-band score interval.
    cutoffs: CutoffBand,
    /// Which side(s) of the band count as out-of-band.
    #[serde(default)]
    direction: Direction,
    /// Optional reduction collapsing per-frame arrays to scalars.
    #[serde(default)]
    reduction: Option<Reduction>,
    /// Axes the reduction aggregates over. Empty means all axes after the
    /// frame axis.
    #[serde(default)]
    reduction_axes: Vec<usize>,
    /// Padding fill policy for ragged per-frame arrays.
    #[serde(default)]
    fill: FillPolicy,
    /// Minimum index gap between any two selected frames.
    #[serde(default = "default_min_distance")]
    min_distance: usize,
    /// Maximum number of frames to select. `None` means unbounded.
    #[serde(default)]
    max_count: Option<usize>,
}

impl SieveConfig {
    /// Creates a new configuration for the given property and band.
    ///
    /// Defaults: `direction = Both`, no reduction, `fill = Nan`,
    /// `min_distance = 1`, unbounded `max_count`.
    pub fn new(property: impl Into<String>, cutoffs: CutoffBand) -> Self {
        Self {
            property: property.into(),
            cutoffs,
            direction: Direction::Both,
            reduction: None,
            reduction_axes: Vec::new(),
            fill: FillPolicy::Nan,
            min_distance: default_min_distance(),
            max_count: None,
        }
    }

    /// Sets the out-of-band direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the reduction.
    pub fn with_reduction(mut self, reduction: Reduction) -> Self {
        self.reduction = Some(reduction);
        self
    }

    /// Sets the reduction axes. Axis 0 (the frame axis) is not allowed.
    pub fn with_reduction_axes(mut self, axes: impl Into<Vec<usize>>) -> Self {
        self.reduction_axes = axes.into();
        self
    }

    /// Sets the padding fill policy.
    pub fn with_fill(mut self, fill: FillPolicy) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the minimum index gap between selected frames. Zero disables
    /// the spacing constraint.
    pub fn with_min_distance(mut self, min_distance: usize) -> Self {
        self.min_distance = min_distance;
        self
    }

    /// Caps the number of selected frames.
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = Some(max_count);
        self
    }

    /// Returns the property name.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Returns the cutoff band.
    pub fn cutoffs(&self) -> &CutoffBand {
        &self.cutoffs
    }

    /// Returns the direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the reduction, if any.
    pub fn reduction(&self) -> Option<Reduction> {
        self.reduction
    }

    /// Returns the reduction axes.
    pub fn reduction_axes(&self) -> &[usize] {
        &self.reduction_axes
    }

    /// Returns the padding fill policy.
    pub fn fill(&self) -> FillPolicy {
        self.fill
    }

    /// Returns the minimum index gap.
    pub fn min_distance(&self) -> usize {
        self.min_distance
    }

    /// Returns the selection cap, if any.
    pub fn max_count(&self) -> Option<usize> {
        self.max_count
    }

    /// Validates this configuration.
    ///
    /// Returns an error if the cutoff band is inverted or non-finite, or if
    /// the reduction axes name the frame axis.
    pub fn validate(&self) -> Result<(), SieveError> {
        self.cutoffs.validate()?;
        if self.reduction_axes.contains(&0) {
            return Err(SieveError::InvalidReductionAxes { axis: 0 });
        }
        Ok(())
    }
}
