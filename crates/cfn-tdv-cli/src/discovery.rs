//! Template discovery.
//!
//! Only files directly inside the search directory are considered; the
//! search does not descend into subdirectories.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, trace};

use cfn_tdv::{CfnTdvError, config::DiscoveryConfig};

/// List the template files in `directory`, sorted by path.
///
/// # Errors
///
/// Returns [`CfnTdvError::Io`] if the directory cannot be read.
pub fn discover_templates(
    directory: &Path,
    discovery: &DiscoveryConfig,
) -> Result<Vec<PathBuf>, CfnTdvError> {
    let mut templates = Vec::new();

    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let matches = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|extension| discovery.matches(extension));
        if matches {
            templates.push(path);
        } else {
            trace!(path = path.display().to_string(); "Skipping non-template file");
        }
    }

    templates.sort();
    debug!(
        directory = directory.display().to_string(),
        count = templates.len();
        "Discovered templates"
    );
    Ok(templates)
}

/// Name under which a template appears in the diagram: its file name.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovers_only_templates_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["vpc.yml", "ec2.yaml", "notes.md", "b.json", "a.yml"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.yml")).unwrap();
        fs::write(dir.path().join("nested.yml").join("inner.yml"), "").unwrap();

        let found = discover_templates(dir.path(), &DiscoveryConfig::default()).unwrap();
        let names: Vec<_> = found.iter().map(|path| display_name(path)).collect();

        assert_eq!(names, vec!["a.yml", "ec2.yaml", "vpc.yml"]);
    }

    #[test]
    fn test_configured_extensions() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["vpc.yml", "s3.json", "ec2.template"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let discovery = DiscoveryConfig::new(vec!["json".to_string(), "template".to_string()]);

        let found = discover_templates(dir.path(), &discovery).unwrap();
        let names: Vec<_> = found.iter().map(|path| display_name(path)).collect();

        assert_eq!(names, vec!["ec2.template", "s3.json"]);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_templates(&dir.path().join("missing"), &DiscoveryConfig::default());

        assert!(matches!(result, Err(CfnTdvError::Io(_))));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("templates/vpc.yml")), "vpc.yml");
        assert_eq!(display_name(Path::new("vpc.yml")), "vpc.yml");
    }
}
