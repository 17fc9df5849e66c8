//! Input Names List
//!
//! One candidate name per line. Blank lines are skipped and surrounding
//! whitespace is trimmed. A missing, unreadable or empty list is fatal.

use namecheck_common::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Turn a user-typed path into a PathBuf (drops surrounding quotes from
/// drag-and-dropped paths)
pub fn clean_path_input(input: &str) -> PathBuf {
    PathBuf::from(input.trim().replace('"', ""))
}

/// Split file content into names
pub fn parse_names(content: &str) -> Vec<String> {
    content
        .trim_start_matches('\u{feff}')
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse the names file
pub fn load_names(path: &Path) -> Result<Vec<String>> {
    if path.as_os_str().is_empty() {
        return Err(Error::InvalidInput("No names list given".to_string()));
    }

    if !path.is_file() {
        return Err(Error::NotFound(format!("names list {}", path.display())));
    }
    let content = std::fs::read_to_string(path)?;

    let names = parse_names(&content);
    if names.is_empty() {
        return Err(Error::InvalidInput(format!(
            "Names list {} contains no names",
            path.display()
        )));
    }

    info!(count = names.len(), file = %path.display(), "Loaded names list");
    Ok(names)
}
