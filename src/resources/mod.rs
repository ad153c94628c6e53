use std::sync::Arc;

use anyhow::Context as _;

use crate::data_structures::{catalog::Catalog, stage::TREE_PALETTE_LEN};

/**
 * This module contains all logic for producing the static course and vehicle
 * data. Nothing is read from disk: the tables are compiled in and baked once.
 */
mod course_tables;
pub mod mesh;
pub mod road;

/// Build the built-in catalog: four courses and two vehicles.
///
/// Any failure here is a load-time defect in the static tables and fatal to
/// the host.
pub fn load_catalog() -> anyhow::Result<Arc<Catalog>> {
    let courses = course_tables::COURSES
        .iter()
        .map(|table| {
            road::bake(table.name, table.control_points, table.seed)
                .with_context(|| format!("Failed to bake course {:?}", table.name))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    for course in &courses {
        let bad_tree = course
            .stations()
            .iter()
            .filter_map(|s| s.tree)
            .any(|t| t.palette_index >= TREE_PALETTE_LEN);
        anyhow::ensure!(
            !bad_tree,
            "course {:?} references a tree colour outside the palette",
            course.name()
        );
    }

    let vehicles = vec![mesh::car(), mesh::scooter()];
    let catalog = Catalog::new(courses, vehicles)?;
    log::info!(
        "Loaded {} courses ({} stations) and {} vehicle models",
        catalog.courses().len(),
        catalog.courses().iter().map(|c| c.len()).sum::<usize>(),
        catalog.vehicles().len()
    );
    Ok(Arc::new(catalog))
}
