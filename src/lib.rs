//! Outlier detection and greedy diverse selection for simulation trajectories.
//!
//! Given an ordered sequence of trajectory frames annotated with scalar or
//! per-atom properties (energy, forces, uncertainty estimates), this crate
//! identifies frames whose reduced property score falls outside a configured
//! cutoff band and picks a bounded, minimum-spaced subset of the most severe
//! ones — the post-processing stage of an active-learning loop for
//! machine-learned interatomic potentials.
//!
//! # Quick start
//!
//! ```
//! use frame_sieve::{CutoffBand, Direction, Frame, SieveConfig, sieve};
//! use ndarray::arr0;
//!
//! let frames: Vec<Frame> = [0.0, 0.2, 8.5, 0.1, 9.1]
//!     .iter()
//!     .map(|&e| Frame::new().with_property("energy_uncertainty", arr0(e).into_dyn()))
//!     .collect();
//!
//! let config = SieveConfig::new("energy_uncertainty", CutoffBand::new(-1.0, 1.0))
//!     .with_direction(Direction::Above)
//!     .with_min_distance(1)
//!     .with_max_count(2);
//!
//! let result = sieve(&frames, None, &config).unwrap();
//! // Most severe first: 9.1 (frame 4), then 8.5 (frame 2).
//! assert_eq!(result.selected(), &[4, 2]);
//! assert_eq!(result.kept(), &[0, 1, 3]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! sieve()
//!   ├─ collect_property()   (collect.rs — optional batch evaluator call)
//!   ├─ pad_stack()          (pad.rs — NaN/zero padding of ragged arrays)
//!   ├─ reduce()             (reduce.rs — NaN-aware mean/max/min, flatten)
//!   ├─ check_dimension()    (reduce.rs — one score per frame, or bail)
//!   ├─ classify()           (classify.rs — band check + severity ranking)
//!   └─ greedy_select()      (select.rs — min-spaced, capped acceptance)
//! ```
//!
//! Every stage is pure and synchronous; the only potentially blocking call is
//! the caller-supplied [`Evaluator`]. Frame index order is preserved through
//! every stage except the final selection, which is in severity-rank order by
//! design (the most extreme outliers win a limited selection budget).
//!
//! [`screen_low_values`] is a companion filter for the opposite failure mode:
//! per-atom uncertainties collapsing to zero.

pub mod collect;
pub mod config;
pub mod error;
pub mod filter;
pub mod frame;
pub mod pad;
pub mod reduce;
pub mod result;
pub mod screen;

pub(crate) mod classify;
pub(crate) mod select;

pub use collect::collect_property;
pub use config::{CutoffBand, Direction, FillPolicy, Reduction, SieveConfig};
pub use error::SieveError;
pub use filter::sieve;
pub use frame::{Evaluator, Frame, PropertyMap};
pub use pad::pad_stack;
pub use reduce::{check_dimension, reduce};
pub use result::{Outcome, SelectionResult};
pub use screen::{ScreenResult, screen_low_values};
