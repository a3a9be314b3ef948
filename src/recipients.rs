//! Recipient list loading.
//!
//! The list is a JSON array of address strings. Addresses are not validated
//! here; an unparsable one fails only its own transfer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ConfigError;

/// Resolve the recipient file next to the running executable.
///
/// Absolute names are used as-is. When the file is not beside the executable
/// the current working directory is tried, which covers `cargo run`.
pub fn resolve_recipients_path(filename: &str) -> PathBuf {
    let name = Path::new(filename);
    if name.is_absolute() {
        return name.to_path_buf();
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(name)));

    match beside_exe {
        Some(path) if path.is_file() => path,
        _ => name.to_path_buf(),
    }
}

/// Read and parse the recipient list.
pub fn load_recipients(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let recipients: Vec<String> =
        serde_json::from_str(&content).map_err(ConfigError::Recipients)?;

    tracing::info!(
        path = %path.display(),
        count = recipients.len(),
        "Recipient list loaded"
    );

    Ok(recipients)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_list(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receivers.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_preserves_order() {
        let (_dir, path) = write_list(r#"["Addr2", "Addr1", "Addr3"]"#);
        let recipients = load_recipients(&path).unwrap();
        assert_eq!(recipients, vec!["Addr2", "Addr1", "Addr3"]);
    }

    #[test]
    fn test_empty_array() {
        let (_dir, path) = write_list("[]");
        assert!(load_recipients(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        let (_dir, path) = write_list(r#"["Addr1", "#);
        assert!(matches!(load_recipients(&path), Err(ConfigError::Recipients(_))));
    }

    #[test]
    fn test_non_array_rejected() {
        let (_dir, path) = write_list(r#"{"to": "Addr1"}"#);
        assert!(matches!(load_recipients(&path), Err(ConfigError::Recipients(_))));

        let (_dir, path) = write_list("[1, 2]");
        assert!(matches!(load_recipients(&path), Err(ConfigError::Recipients(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_recipients(Path::new("/nonexistent/receivers.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_absolute_path_kept() {
        let (_dir, path) = write_list("[]");
        let resolved = resolve_recipients_path(path.to_str().unwrap());
        assert_eq!(resolved, path);
    }

    #[test]
    fn test_relative_name_falls_back_to_cwd() {
        let resolved = resolve_recipients_path("definitely-not-beside-the-test-binary.json");
        assert_eq!(resolved, PathBuf::from("definitely-not-beside-the-test-binary.json"));
    }
}
