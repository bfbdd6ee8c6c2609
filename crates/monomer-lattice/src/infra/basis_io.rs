//! Hilbert basis file I/O (`hilbert_basis.txt`)

use crate::domain::basis::{BasisError, parse_basis};
use crate::domain::matrix::join_row;
use crate::domain::vector::Vector;
use crate::infra::ensure_parent_dir;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Load a Hilbert basis matrix
pub fn load_basis(path: impl AsRef<Path>) -> Result<Vec<Vector>, BasisError> {
    let text = fs::read_to_string(path)?;
    parse_basis(&text)
}

/// Save a Hilbert basis matrix, one row per line
pub fn save_basis(path: impl AsRef<Path>, rows: &[Vector]) -> io::Result<()> {
    ensure_parent_dir(path.as_ref())?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for row in rows {
        writeln!(writer, "{}", join_row(row))?;
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_basis() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hilbert_basis.txt");
        let rows = vec![vec![1, 1, 0], vec![0, 2, 1]];

        save_basis(&path, &rows).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1 1 0\n0 2 1\n");
        assert_eq!(load_basis(&path).unwrap(), rows);
    }

    #[test]
    fn test_load_basis_rejects_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hilbert_basis.txt");
        fs::write(&path, "1 2\n3 4.5\n").unwrap();

        assert!(matches!(
            load_basis(&path),
            Err(BasisError::InvalidInteger { line: 2, .. })
        ));
    }
}
