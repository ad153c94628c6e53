//! Precomputed road geometry.
//!
//! A [`Course`] is a named, ordered run of [`Station`]s. Travel order is
//! increasing index. Courses are baked once at load time and never mutated
//! afterwards; every consumer only gets shared references.

use anyhow::ensure;
use cgmath::Point2;

/// Smallest course that still allows interpolating over `(i, i + 1, i + 2)`.
pub const MIN_STATIONS: usize = 3;

/// A roadside tree attached to a station.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tree {
    pub position: Point2<f32>,
    pub radius: f32,
    /// Index into the active stage's 6-entry palette.
    pub palette_index: usize,
}

/// One road sample.
///
/// "Left" and "right" are relative to the direction of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Station {
    pub center: Point2<f32>,
    pub left_edge: Point2<f32>,
    pub right_edge: Point2<f32>,
    pub left_marker: Point2<f32>,
    pub right_marker: Point2<f32>,
    pub tree: Option<Tree>,
}

#[derive(Clone, Debug)]
pub struct Course {
    name: String,
    stations: Vec<Station>,
}

impl Course {
    pub fn new(name: impl Into<String>, stations: Vec<Station>) -> anyhow::Result<Self> {
        let name = name.into();
        ensure!(
            stations.len() >= MIN_STATIONS,
            "course {:?} has {} stations, at least {} are required",
            name,
            stations.len(),
            MIN_STATIONS
        );
        Ok(Self { name, stations })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stations `N`.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Station `i`. Panics when `i >= N`: callers clamp positions first.
    pub fn station(&self, i: usize) -> &Station {
        &self.stations[i]
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Largest continuous position, `N - 3`.
    pub fn last_position(&self) -> f32 {
        (self.stations.len() - MIN_STATIONS) as f32
    }
}
