//! Markdown export of the lesson plan

use std::path::{Path, PathBuf};

use lstudio_core::prelude::*;

use crate::state::AppState;

const FALLBACK_STEM: &str = "lesson-plan";
const EXTENSION: &str = "md";

/// File name for a plan titled `title`
///
/// Whitespace becomes `_`; anything other than letters, digits, `-` and `_`
/// is dropped.
pub fn export_file_name(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .filter_map(|c| {
            if c.is_whitespace() {
                Some('_')
            } else if c.is_alphanumeric() || c == '-' || c == '_' {
                Some(c)
            } else {
                None
            }
        })
        .collect();

    let stem = if stem.trim_matches('_').is_empty() {
        FALLBACK_STEM
    } else {
        stem.as_str()
    };

    format!("{}.{}", stem, EXTENSION)
}

/// The stored plan, if the current view allows exporting it
pub fn exportable_plan(state: &AppState) -> Result<&str> {
    match state.plan.as_deref() {
        Some(plan) if state.can_export() => Ok(plan),
        _ => Err(Error::ExportUnavailable),
    }
}

/// Write `plan` under `directory`, returning the written path
pub fn write_plan(directory: &Path, title: &str, plan: &str) -> Result<PathBuf> {
    if !directory.as_os_str().is_empty() && !directory.exists() {
        std::fs::create_dir_all(directory)
            .map_err(|e| Error::export(directory, e.to_string()))?;
    }

    let path = directory.join(export_file_name(title));

    let mut content = plan.trim_end().to_string();
    content.push('\n');

    std::fs::write(&path, content).map_err(|e| Error::export(&path, e.to_string()))?;
    info!("Exported lesson plan to {:?}", path);
    Ok(path)
}
