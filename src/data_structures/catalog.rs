//! Process-wide read-only catalogs and the round-robin selectors into them.

use anyhow::ensure;
use rand::Rng;

use crate::data_structures::{course::Course, stage::Stage, vehicle::VehicleModel};

/// Everything loaded once at startup: courses and vehicle models.
#[derive(Debug)]
pub struct Catalog {
    courses: Vec<Course>,
    vehicles: Vec<VehicleModel>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>, vehicles: Vec<VehicleModel>) -> anyhow::Result<Self> {
        ensure!(!courses.is_empty(), "catalog needs at least one course");
        ensure!(!vehicles.is_empty(), "catalog needs at least one vehicle model");
        Ok(Self { courses, vehicles })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn vehicles(&self) -> &[VehicleModel] {
        &self.vehicles
    }

    pub fn course(&self, selection: &Selection) -> &Course {
        &self.courses[selection.course % self.courses.len()]
    }

    pub fn vehicle(&self, selection: &Selection) -> &VehicleModel {
        &self.vehicles[selection.vehicle % self.vehicles.len()]
    }
}

/// Which course, stage and vehicle the current run uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub course: usize,
    pub stage: Stage,
    pub vehicle: usize,
}

impl Selection {
    pub fn new(course: usize, stage: Stage, vehicle: usize) -> Self {
        Self {
            course,
            stage,
            vehicle,
        }
    }

    pub fn random<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Self {
        Self {
            course: rng.gen_range(0..catalog.courses.len()),
            stage: Stage::from_index(rng.gen_range(0..Stage::COUNT)),
            vehicle: rng.gen_range(0..catalog.vehicles.len()),
        }
    }

    /// Step every selector by one, each modulo its own count.
    pub fn advance(&mut self, catalog: &Catalog) {
        self.course = (self.course + 1) % catalog.courses.len();
        self.stage = self.stage.next();
        self.vehicle = (self.vehicle + 1) % catalog.vehicles.len();
    }
}
