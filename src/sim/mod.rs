//! Simulation: where the vehicle is, how fast it goes and which phase of a
//! run we are in. Nothing in here touches the renderer.

pub mod curvature;
pub mod phase;
pub mod traversal;

pub use curvature::{CurvatureAnalyzer, WrapCorrection};
pub use phase::{PhaseController, SpeedMode, Tuning};
pub use traversal::{Phase, TravelDirection, TraversalState};
