use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::SampleSet;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: token {column} '{token}' is not a number", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        token: String,
    },

    #[error("{} contains no samples", path.display())]
    Empty { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a whitespace/newline separated file of numbers as a [`SampleSet`].
///
/// The whole file is read as a single sequence regardless of how values are
/// laid out across lines. `#` starts a comment running to end of line.
pub fn load_samples(label: &str, path: &Path) -> Result<SampleSet, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let values = parse_samples(&text).map_err(|bad| LoadError::Parse {
        path: path.to_path_buf(),
        line: bad.line,
        column: bad.column,
        token: bad.token,
    })?;

    let set = SampleSet::new(label, path, values);
    if set.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::debug!("Read {} samples from {}", set.len(), path.display());
    Ok(set)
}

// ---------------------------------------------------------------------------
// Text parsing
// ---------------------------------------------------------------------------

/// Position of the first token that failed to parse (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadToken {
    pub line: usize,
    pub column: usize,
    pub token: String,
}

/// Parse every numeric token in `text`, stopping at the first bad one.
///
/// A leading byte-order mark is ignored.
pub fn parse_samples(text: &str) -> Result<Vec<f64>, BadToken> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut values = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        for (col_no, tok) in content.split_whitespace().enumerate() {
            let value = tok.parse::<f64>().map_err(|_| BadToken {
                line: line_no + 1,
                column: col_no + 1,
                token: tok.to_string(),
            })?;
            values.push(value);
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn mixed_layout_is_flattened() {
        let values = parse_samples("1 2\n\n  3.5\t4e1\n").unwrap();
        assert_eq!(values, vec![1.0, 2.0, 3.5, 40.0]);
    }

    #[test]
    fn comments_are_skipped() {
        let values = parse_samples("# header\n10 # trailing\n20\n").unwrap();
        assert_eq!(values, vec![10.0, 20.0]);
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let values = parse_samples("\u{feff}10\n20\n").unwrap();
        assert_eq!(values, vec![10.0, 20.0]);
    }

    #[test]
    fn first_bad_token_is_reported() {
        let err = parse_samples("1 2\n3 x 4\ny\n").unwrap_err();
        assert_eq!(
            err,
            BadToken {
                line: 2,
                column: 2,
                token: "x".to_string()
            }
        );
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10\n20\n30").unwrap();

        let set = load_samples("pure", file.path()).unwrap();
        assert_eq!(set.label(), "pure");
        assert_eq!(set.values(), &[10.0, 20.0, 30.0]);
        assert_eq!(set.source(), file.path());
    }

    #[test]
    fn empty_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   \n# nothing here\n").unwrap();

        let err = load_samples("pure", file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_samples("mixed", &dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn parse_error_names_path_and_position() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1\n2 abc").unwrap();

        let err = load_samples("pure", file.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(":2:"), "unexpected message: {msg}");
        assert!(msg.contains("'abc'"), "unexpected message: {msg}");
    }
}
