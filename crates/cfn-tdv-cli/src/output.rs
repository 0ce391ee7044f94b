//! Writing the rendered diagram.

use std::{fs, io::Write, path::Path};

use log::info;

use cfn_tdv::CfnTdvError;

/// Write `text` to `output_file`, or to `out` when no file is given.
///
/// When a file is written, a confirmation line is printed to `out` instead.
///
/// # Errors
///
/// Returns [`CfnTdvError::Output`] if the file cannot be written and
/// [`CfnTdvError::Io`] if `out` fails.
pub fn write_output(
    text: &str,
    output_file: Option<&Path>,
    out: &mut impl Write,
) -> Result<(), CfnTdvError> {
    match output_file {
        Some(path) => {
            fs::write(path, text).map_err(|source| CfnTdvError::Output {
                path: path.to_path_buf(),
                source,
            })?;
            info!(output_file = path.display().to_string(); "Mermaid text written");
            writeln!(
                out,
                "Mermaid notation has been output to {}.",
                path.display()
            )?;
        }
        None => out.write_all(text.as_bytes())?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::ErrorKind;

    use super::*;

    const TEXT: &str = "# CFn template dependency\n\n```mermaid\ngraph LR\n```\n";

    #[test]
    fn test_stdout() {
        let mut out = Vec::new();
        write_output(TEXT, None, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), TEXT);
    }

    #[test]
    fn test_file_with_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.md");
        let mut out = Vec::new();

        write_output(TEXT, Some(&path), &mut out).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), TEXT);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Mermaid notation has been output to {}.\n", path.display())
        );
    }

    #[test]
    fn test_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("result.md");

        let err = write_output(TEXT, Some(&path), &mut Vec::new()).unwrap_err();
        match &err {
            CfnTdvError::Output { path: failed, source } => {
                assert_eq!(failed, &path);
                assert_eq!(source.kind(), ErrorKind::NotFound);
            }
            other => panic!("Expected output error, got {other:?}"),
        }
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_directory_as_output() {
        let dir = tempfile::tempdir().unwrap();

        let err = write_output(TEXT, Some(dir.path()), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CfnTdvError::Output { .. }));
    }
}
