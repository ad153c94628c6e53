//! isoroad
//!
//! A pseudo-3D isometric road traversal demo. A camera drives along one of a
//! few precomputed winding courses, speeding up on straights and braking
//! into curves, while the road ribbon, roadside trees and a small vehicle
//! are drawn in an orthographic, tilted view. Runs fade in, cruise to the
//! end of the course, fade out and start over on the next course, stage and
//! vehicle.
//!
//! High-level modules
//! - `clock`: stabilized per-tick delta time and optional cooperative pacing
//! - `data_structures`: courses, stations, stages, vehicles and the vertex format
//! - `resources`: the built-in course tables and vehicle meshes, baked at load
//! - `sim`: curvature queries, traversal state and the phase state machine
//! - `scene`: translation of simulation state into draw batches
//! - `render`: the frame and draw batch vocabulary handed to backends
//! - `backend`: the renderer boundary and an in-memory recording backend
//! - `flow`: one tick = clock, update, compose, draw
//! - `settings`: runtime configuration consumed by the flow
//! - `app`, `context`, `pipelines`: the winit host and wgpu backend (feature `window`)
//!

#[cfg(feature = "window")]
pub mod app;
pub mod backend;
pub mod clock;
#[cfg(feature = "window")]
pub mod context;
pub mod data_structures;
pub mod flow;
#[cfg(feature = "window")]
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;
pub mod settings;
pub mod sim;

// Re-exports commonly used types for convenience in downstream code.
pub use backend::{BackendError, RecordingBackend, RenderBackend};
pub use clock::{AnimationClock, ManualClock, MonotonicClock, Pacing, TimeSource};
pub use flow::{RoadFlow, TickOutcome};
pub use render::{DrawBatch, Frame, Viewport};
pub use settings::Settings;
