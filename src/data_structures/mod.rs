//! Engine data structures: courses, vehicles, stages and the shared vertex format.
//!
//! - `course` contains stations and the read-only course container
//! - `vehicle` holds vehicle catalog entries (mesh, scale, speed, view sway)
//! - `stage` defines the seasonal colour schemes
//! - `catalog` owns all of the above and the round-robin selection into it
//! - `vertex` is the vertex layout used by every draw batch
//! - `texture` is the depth buffer of the wgpu backend (feature `window`)

pub mod catalog;
pub mod course;
pub mod stage;
#[cfg(feature = "window")]
pub mod texture;
pub mod vehicle;
pub mod vertex;
