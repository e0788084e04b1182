mod aggregate;
mod report;

use std::error::Error;
use std::path::Path;

use crate::catalog::{self, Catalog, MemoryCatalog};
use crate::component::Category;
use crate::scoring::{self, CategoryReport};

pub use aggregate::{SystemReport, aggregate_system};
pub use report::{print_category, print_json, print_report};

/// `analyze`: load a build, score it, print the verdict.
pub fn run(build_path: &Path, catalog_path: Option<&Path>, json: bool) -> Result<(), Box<dyn Error>> {
    let catalog = catalog_path.map(MemoryCatalog::load).transpose()?;
    let build = catalog::load_build(build_path, catalog.as_ref().map(|c| c as &dyn Catalog))?;
    let report = aggregate_system(&build);

    let target = build_path.to_str();
    if json {
        print_json(&report, target)?;
    } else {
        print_report(&report, target);
    }
    Ok(())
}

/// `component`: score a single component file on its own.
///
/// A PSU is judged without CPU and GPU, so only the fixed system overhead
/// counts toward its required wattage.
pub fn run_component(category: Category, path: &Path, json: bool) -> Result<(), Box<dyn Error>> {
    let component = catalog::load_component(path, category)?;
    let report = score_one(category, &component);

    let target = path.to_str();
    if json {
        print_json(&report, target)?;
    } else {
        print_category(&report, target);
    }
    Ok(())
}

fn score_one(category: Category, component: &crate::component::Component) -> CategoryReport {
    let c = Some(component);
    match category {
        Category::Cpu => scoring::score_cpu(c),
        Category::Gpu => scoring::score_gpu(c),
        Category::Memory => scoring::score_memory(c),
        Category::Storage => scoring::score_storage(c),
        Category::PowerSupply => scoring::score_power_supply(c, None, None),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
