//! Monomer file reading

use crate::domain::monomer::{BlankLines, LineStyle, count_blank_lines, parse_monomers_with};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Normalized monomers of one file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonomerFile {
    /// Monomers in file order
    pub monomers: Vec<String>,
    /// Raw lines that were blank, whether kept or skipped
    pub blank_lines: usize,
}

/// Read and normalize a monomer file with the style's own blank-line handling
pub fn load_monomers(path: impl AsRef<Path>, style: LineStyle) -> io::Result<MonomerFile> {
    load_monomers_with(path, style, style.default_blank_lines())
}

/// Read and normalize a monomer file
pub fn load_monomers_with(
    path: impl AsRef<Path>,
    style: LineStyle,
    blank_lines: BlankLines,
) -> io::Result<MonomerFile> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let file = MonomerFile {
        monomers: parse_monomers_with(&text, style, blank_lines),
        blank_lines: count_blank_lines(&text),
    };
    debug!(
        path = %path.display(),
        count = file.monomers.len(),
        blank = file.blank_lines,
        ?style,
        "loaded monomers"
    );
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_monomers_per_style() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("monomers.txt");
        fs::write(&path, "m1: a b, x, y\n\nm2: b*\n").unwrap();

        let encoder = load_monomers(&path, LineStyle::Encoder).unwrap();
        assert_eq!(encoder.monomers, vec!["a b, x", "b*"]);
        assert_eq!(encoder.blank_lines, 1);

        let decoder = load_monomers(&path, LineStyle::Decoder).unwrap();
        assert_eq!(decoder.monomers, vec!["a b", "", "b*"]);

        let skipped = load_monomers_with(&path, LineStyle::Decoder, BlankLines::Skip).unwrap();
        assert_eq!(skipped.monomers, vec!["a b", "b*"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_monomers(dir.path().join("absent.txt"), LineStyle::Encoder).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
