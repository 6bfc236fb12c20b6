use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::inflect::slugify;
use crate::model::Api;

/// File name for the document of `api`.
///
/// `<urlFriendlyName>-<version>.yaml`, or with `unique`
/// `<urlFriendlyName>-<version>-<ulid>.yaml`. An API without a usable name
/// falls back to `openapi`.
pub fn output_file_name(api: &Api, unique: bool) -> String {
    let mut stem = match api.url_friendly_name() {
        "" => "openapi".to_string(),
        slug => slug.to_string(),
    };
    let version = slugify(api.version());
    if !version.is_empty() {
        stem.push('-');
        stem.push_str(&version);
    }
    if unique {
        stem.push('-');
        stem.push_str(&ulid::Ulid::new().to_string().to_lowercase());
    }
    format!("{stem}.yaml")
}

/// Write `content` to `dir/file_name`, creating `dir` if needed.
///
/// An existing file with the same name is overwritten.
pub fn write_document(dir: &Path, file_name: &str, content: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(file_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write document to {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote document");
    Ok(path)
}
