//! Design-case loading, saving, validation, and introspection.

use ag_design::Technology;
use ag_influent::Influent;
use ag_project::DesignCase;
use std::path::Path;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Summary of a case for listing.
#[derive(Debug, Clone)]
pub struct CaseSummary {
    pub name: String,
    pub influent: Influent,
    pub technologies: Vec<Technology>,
}

/// Load a case from YAML or JSON (chosen by extension).
pub fn load_case(path: &Path) -> AppResult<DesignCase> {
    let case = ag_project::load_case(path).map_err(|e| AppError::CaseFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), name = %case.name, "loaded design case");
    Ok(case)
}

/// Save a case, as JSON for `.json` paths and YAML otherwise.
pub fn save_case(path: &Path, case: &DesignCase) -> AppResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => ag_project::save_json(path, case)?,
        _ => ag_project::save_yaml(path, case)?,
    }
    Ok(())
}

pub fn validate_case(case: &DesignCase) -> AppResult<()> {
    ag_project::validate_case(case)?;
    Ok(())
}

/// Resolve the influent and technology selection of a case.
pub fn summarize_case(case: &DesignCase) -> AppResult<CaseSummary> {
    Ok(CaseSummary {
        name: case.name.clone(),
        influent: case.influent.to_influent()?,
        technologies: case.selected_technologies()?,
    })
}
