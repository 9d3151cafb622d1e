// src/utils.rs
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}

/// Build a timestamped export path, e.g. `candidates_20251019_143000.csv`
pub fn export_file_path(base: &Path, stem: &str) -> PathBuf {
    base.join(format!(
        "{}_{}.csv",
        stem,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    ))
}

/// Split comma-separated CLI values, dropping blanks and repeats.
pub fn split_list(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in values.iter().flat_map(|v| v.split(',')).map(|s| s.trim()) {
        if !item.is_empty() && !out.iter().any(|s| s == item) {
            out.push(item.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_file_extension() {
        assert_eq!(get_file_extension("jobs.csv"), Some("csv".to_string()));
        assert_eq!(get_file_extension("EXPORT.CSV"), Some("csv".to_string()));
        assert_eq!(get_file_extension("noext"), None);
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("market.csv", &["csv"]).is_ok());
        assert!(validate_file_extension("market.xlsx", &["csv"]).is_err());
        assert!(validate_file_extension("noext", &["csv"]).is_err());
    }

    #[test]
    fn test_export_file_path() {
        let path = export_file_path(Path::new("/tmp/out"), "candidates");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("candidates_"));
        assert!(name.ends_with(".csv"));
        assert_eq!(path.parent(), Some(Path::new("/tmp/out")));
    }

    #[test]
    fn test_split_list() {
        let values = vec![
            "Python, SQL".to_string(),
            "Docker".to_string(),
            " ,SQL".to_string(),
        ];
        assert_eq!(split_list(&values), vec!["Python", "SQL", "Docker"]);
    }
}
