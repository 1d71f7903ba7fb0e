//! Loading declared signatures from YAML or JSON documents.
//!
//! A manifest lists parameters in declared order:
//!
//! ```yaml
//! parameters:
//!   - name: a
//!   - name: b
//!     default: 1
//!   - name: tag
//!     kind: keyword_only
//!     default: null
//! ```
//!
//! `kind` defaults to `positional_or_keyword`; an explicit `default: null` is a real default.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use dynfunc_types::Signature;

/// Serialization format of a signature manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    /// Picks the format from a file extension; anything other than `.json` is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|extension| extension.to_str()) {
            Some(extension) if extension.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parses a signature manifest held in memory.
///
/// # Errors
///
/// Fails when the text is not valid for `format` or describes an invalid signature.
pub fn parse_signature_str(content: &str, format: ManifestFormat) -> Result<Signature> {
    let signature = match format {
        ManifestFormat::Json => serde_json::from_str(content).context("Failed to parse JSON signature manifest")?,
        ManifestFormat::Yaml => serde_yaml::from_str(content).context("Failed to parse YAML signature manifest")?,
    };
    Ok(signature)
}

/// Loads a signature manifest from disk, choosing the format from the file extension.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read from the filesystem
/// - The file content is not valid YAML or JSON
/// - The declared parameters do not form a valid signature
///
/// # Examples
///
/// ```rust
/// use dynfunc_engine::parse_signature_file;
///
/// let temp_dir = tempfile::tempdir()?;
/// let manifest_path = temp_dir.path().join("square.yaml");
/// std::fs::write(&manifest_path, "parameters:\n  - name: n\n")?;
///
/// let signature = parse_signature_file(&manifest_path)?;
/// assert_eq!(signature.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_signature_file(file_path: impl AsRef<Path>) -> Result<Signature> {
    let file_path = file_path.as_ref();
    let file_content = fs::read_to_string(file_path).with_context(|| format!("Failed to read signature manifest: {}", file_path.display()))?;

    parse_signature_str(&file_content, ManifestFormat::from_path(file_path))
        .with_context(|| format!("Invalid signature manifest: {}", file_path.display()))
}
