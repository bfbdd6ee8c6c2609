//! Normaliz input file I/O (`eqs.in`)

use crate::domain::normaliz_format::{EquationSystem, NormalizFormatError};
use crate::infra::ensure_parent_dir;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Save an equation system
pub fn save_eqs_in(path: impl AsRef<Path>, system: &EquationSystem) -> io::Result<()> {
    ensure_parent_dir(path.as_ref())?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(system.to_text().as_bytes())?;

    writer.flush()
}

/// Load and validate an equation system
pub fn load_eqs_in(path: impl AsRef<Path>) -> Result<EquationSystem, NormalizFormatError> {
    let text = fs::read_to_string(path)?;
    EquationSystem::from_text(&text)
}
