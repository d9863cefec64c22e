//! Error types for the frame-sieve crate.

/// Error type for all fallible operations in the frame-sieve crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SieveError {
    /// Returned when the frame sequence is empty.
    #[error("no frames provided")]
    EmptyFrames,

    /// Returned when the cutoff band is inverted or has a NaN limit.
    #[error("invalid cutoff band: lower {lower} must be <= upper {upper} and neither NaN")]
    InvalidCutoff {
        /// Lower band limit.
        lower: f64,
        /// Upper band limit.
        upper: f64,
    },

    /// Returned when a direction string is not one of `above`, `below`, `both`.
    #[error("unknown direction '{name}', expected 'above', 'below', or 'both'")]
    InvalidDirection {
        /// The unrecognized direction string.
        name: String,
    },

    /// Returned when a reduction string is not one of `mean`, `max`, `min`, `flatten`.
    #[error("unknown reduction '{name}', expected 'mean', 'max', 'min', or 'flatten'")]
    UnknownReduction {
        /// The unrecognized reduction string.
        name: String,
    },

    /// Returned when a frame has no value for the requested property.
    #[error("property '{property}' missing on frame {frame}")]
    MissingProperty {
        /// Name of the requested property.
        property: String,
        /// Index of the offending frame.
        frame: usize,
    },

    /// Returned when per-frame arrays disagree in shape beyond the leading axis.
    #[error("frame {frame} has trailing shape {got:?}, expected {expected:?}")]
    TrailingShapeMismatch {
        /// Trailing shape of the first frame's array.
        expected: Vec<usize>,
        /// Trailing shape of the offending frame's array.
        got: Vec<usize>,
        /// Index of the offending frame.
        frame: usize,
    },

    /// Returned when the reduced scores are not one value per frame.
    #[error(
        "score dimension is {ndim} != 1; configure a reduction (mean, max, or min) \
         to collapse per-frame arrays to one scalar per frame"
    )]
    Dimensionality {
        /// Observed rank of the reduced tensor.
        ndim: usize,
    },

    /// Returned when the reduced scores are rank 1 but the wrong length.
    #[error("got {scores} scores for {frames} frames")]
    ScoreLengthMismatch {
        /// Number of reduced scores.
        scores: usize,
        /// Number of input frames.
        frames: usize,
    },

    /// Returned when a reduction axis is the frame axis or out of bounds.
    #[error("invalid reduction axis {axis}: axis 0 is the frame axis, and axes must be within the tensor rank")]
    InvalidReductionAxes {
        /// The offending axis.
        axis: usize,
    },

    /// Returned when an external evaluation capability fails.
    #[error("evaluator failed: {reason}")]
    Evaluator {
        /// Description of the failure, as reported by the evaluator.
        reason: String,
    },

    /// JSON serialization of a result failed.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the serialization failure.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_frames() {
        let e = SieveError::EmptyFrames;
        assert_eq!(e.to_string(), "no frames provided");
    }

    #[test]
    fn error_invalid_cutoff() {
        let e = SieveError::InvalidCutoff {
            lower: 2.0,
            upper: 1.0,
        };
        assert_eq!(
            e.to_string(),
            "invalid cutoff band: lower 2 must be <= upper 1 and neither NaN"
        );
    }

    #[test]
    fn error_invalid_direction() {
        let e = SieveError::InvalidDirection {
            name: "sideways".to_string(),
        };
        assert!(e.to_string().contains("unknown direction 'sideways'"));
    }

    #[test]
    fn error_unknown_reduction() {
        let e = SieveError::UnknownReduction {
            name: "median".to_string(),
        };
        assert!(e.to_string().contains("unknown reduction 'median'"));
    }

    #[test]
    fn error_missing_property() {
        let e = SieveError::MissingProperty {
            property: "forces".to_string(),
            frame: 7,
        };
        assert_eq!(e.to_string(), "property 'forces' missing on frame 7");
    }

    #[test]
    fn error_trailing_shape_mismatch() {
        let e = SieveError::TrailingShapeMismatch {
            expected: vec![3],
            got: vec![2],
            frame: 4,
        };
        assert_eq!(e.to_string(), "frame 4 has trailing shape [2], expected [3]");
    }

    #[test]
    fn error_dimensionality_mentions_reduction() {
        let e = SieveError::Dimensionality { ndim: 3 };
        let msg = e.to_string();
        assert!(msg.contains("score dimension is 3"));
        assert!(msg.contains("configure a reduction"));
    }

    #[test]
    fn error_score_length_mismatch() {
        let e = SieveError::ScoreLengthMismatch {
            scores: 24,
            frames: 8,
        };
        assert_eq!(e.to_string(), "got 24 scores for 8 frames");
    }

    #[test]
    fn error_invalid_reduction_axes() {
        let e = SieveError::InvalidReductionAxes { axis: 0 };
        assert!(e.to_string().contains("invalid reduction axis 0"));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<SieveError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SieveError>();
    }
}
