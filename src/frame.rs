//! Trajectory frames and the external property-evaluation capability.

use std::collections::BTreeMap;

use ndarray::ArrayD;

use crate::error::SieveError;

/// Named per-frame property values.
///
/// Values are dynamic-rank arrays: rank 0 for scalars (energy), rank 1 for
/// per-structure vectors, rank 2 for per-atom vectors (forces, shape
/// `(n_atoms, 3)` where `n_atoms` may differ between frames).
pub type PropertyMap = BTreeMap<String, ArrayD<f64>>;

/// One configuration snapshot from a simulation trajectory.
///
/// At this layer a frame is only a carrier of named property values; atomic
/// positions, cells, and constraints live with the simulation driver. Frames
/// are read-only inputs to the pipeline and are never mutated by it.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    properties: PropertyMap,
}

impl Frame {
    /// Creates a frame with no attached properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a property value, replacing any previous value of that name.
    pub fn with_property(mut self, name: impl Into<String>, value: ArrayD<f64>) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Returns the named property value, if attached.
    pub fn property(&self, name: &str) -> Option<&ArrayD<f64>> {
        self.properties.get(name)
    }

    /// Returns true if the named property is attached.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Returns all attached properties.
    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

/// External capability that computes properties for frames, typically a
/// machine-learned interatomic potential.
///
/// The pipeline makes exactly one logical invocation per run, always through
/// [`Evaluator::evaluate_batch`]. The default batch implementation maps
/// [`Evaluator::evaluate`] over the frames; implementations backed by batched
/// device computation should override it to amortize per-call overhead.
///
/// Evaluation may block for as long as it needs; no timeout is imposed here.
/// Callers needing cancellation must wrap their evaluator.
pub trait Evaluator {
    /// Computes the properties of a single frame.
    fn evaluate(&self, frame: &Frame) -> Result<PropertyMap, SieveError>;

    /// Computes the properties of every frame in one call.
    ///
    /// Must return exactly one property map per input frame, in order.
    fn evaluate_batch(&self, frames: &[Frame]) -> Result<Vec<PropertyMap>, SieveError> {
        frames.iter().map(|frame| self.evaluate(frame)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{IxDyn, arr0, arr2};

    #[test]
    fn test_frame_property_roundtrip() {
        let frame = Frame::new()
            .with_property("energy", arr0(-12.5).into_dyn())
            .with_property("forces", arr2(&[[0.1, 0.0, -0.1]]).into_dyn());

        assert!(frame.has_property("energy"));
        assert!(frame.has_property("forces"));
        assert!(!frame.has_property("stress"));
        assert_eq!(frame.property("energy").unwrap().ndim(), 0);
        assert_eq!(frame.property("forces").unwrap().shape(), &[1, 3]);
    }

    #[test]
    fn test_with_property_replaces() {
        let frame = Frame::new()
            .with_property("energy", arr0(1.0).into_dyn())
            .with_property("energy", arr0(2.0).into_dyn());
        assert_eq!(frame.property("energy").unwrap()[IxDyn(&[])], 2.0);
        assert_eq!(frame.properties().len(), 1);
    }

    /// Evaluator that doubles a frame's energy, used to exercise the default
    /// batch implementation.
    struct Doubler;

    impl Evaluator for Doubler {
        fn evaluate(&self, frame: &Frame) -> Result<PropertyMap, SieveError> {
            let energy = frame
                .property("energy")
                .ok_or_else(|| SieveError::Evaluator {
                    reason: "frame has no energy".to_string(),
                })?;
            let mut props = PropertyMap::new();
            props.insert("energy".to_string(), energy * 2.0);
            Ok(props)
        }
    }

    #[test]
    fn test_default_batch_maps_single() {
        let frames = vec![
            Frame::new().with_property("energy", arr0(1.0).into_dyn()),
            Frame::new().with_property("energy", arr0(3.0).into_dyn()),
        ];
        let batches = Doubler.evaluate_batch(&frames).unwrap();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0]["energy"][IxDyn(&[])], 2.0);
        assert_eq!(batches[1]["energy"][IxDyn(&[])], 6.0);
    }

    #[test]
    fn test_default_batch_propagates_error() {
        let frames = vec![Frame::new()];
        assert!(matches!(
            Doubler.evaluate_batch(&frames),
            Err(SieveError::Evaluator { .. })
        ));
    }
}
