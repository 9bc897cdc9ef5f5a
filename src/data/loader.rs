use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("sample file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// `line` is 1-based.
    #[error("line {line}: '{text}' is not a number")]
    Parse {
        line: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("reading {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the sample sequence from a text file with one float per line.
///
/// The file is opened, read to the end and closed before this returns,
/// whether parsing succeeds or not.
pub fn load_samples(path: &Path) -> Result<Vec<f64>, LoadError> {
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    let samples = parse_samples(BufReader::new(file), path)?;

    log::debug!("Read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Parse newline-delimited floats in order. Lines are trimmed first; blank
/// lines are skipped but still count towards `LoadError::Parse::line`.
fn parse_samples<R: BufRead>(reader: R, path: &Path) -> Result<Vec<f64>, LoadError> {
    let mut samples = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| io_error(path, source))?;
        let tok = line.trim();
        if tok.is_empty() {
            continue;
        }
        let value = tok.parse::<f64>().map_err(|source| LoadError::Parse {
            line: i + 1,
            text: tok.to_string(),
            source,
        })?;
        samples.push(value);
    }

    Ok(samples)
}

fn io_error(path: &Path, source: io::Error) -> LoadError {
    if source.kind() == io::ErrorKind::NotFound {
        LoadError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        LoadError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_lines_in_file_order() {
        let text = "0.000123\n0.5\n-2\n1e-3\n";
        let samples = parse_samples(Cursor::new(text), Path::new("samples.txt")).unwrap();
        assert_eq!(samples, vec![0.000123, 0.5, -2.0, 0.001]);
    }

    #[test]
    fn trims_whitespace_and_skips_blank_lines() {
        let text = "  1.5  \r\n\n\t2.5\n   \n";
        let samples = parse_samples(Cursor::new(text), Path::new("samples.txt")).unwrap();
        assert_eq!(samples, vec![1.5, 2.5]);
    }

    #[test]
    fn empty_input_is_an_empty_sequence() {
        let samples = parse_samples(Cursor::new(""), Path::new("samples.txt")).unwrap();
        assert!(samples.is_empty());
    }

    #[test]
    fn malformed_line_is_a_parse_error() {
        let text = "1.0\n2.0\nabc\n4.0\n";
        match parse_samples(Cursor::new(text), Path::new("samples.txt")) {
            Err(LoadError::Parse { line, text, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "abc");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn blank_lines_count_towards_error_line() {
        let text = "1\n\nabc\n";
        match parse_samples(Cursor::new(text), Path::new("samples.txt")) {
            Err(LoadError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_an_io_error_naming_the_file() {
        let bytes = vec![b'1', b'\n', 0xff, 0xfe, b'\n'];
        let err = parse_samples(Cursor::new(bytes), Path::new("samples.txt")).unwrap_err();
        assert_eq!(err.to_string(), "reading samples.txt");
        match err {
            LoadError::Io { path, source } => {
                assert_eq!(path, Path::new("samples.txt"));
                assert_eq!(source.kind(), io::ErrorKind::InvalidData);
            }
            other => panic!("expected an io error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let path = std::env::temp_dir().join("timing-compare-does-not-exist.txt");
        match load_samples(&path) {
            Err(LoadError::NotFound { path: p }) => assert_eq!(p, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn loads_samples_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "timing-compare-loader-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "1.0\n2.0\n3.0\n").unwrap();

        let samples = load_samples(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(samples.unwrap(), vec![1.0, 2.0, 3.0]);
    }
}
