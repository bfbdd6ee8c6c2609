//! Vector table output (`vectors.txt`)

use crate::domain::matrix::format_vector_table;
use crate::domain::vector::Vector;
use crate::domain::vocabulary::Vocabulary;
use crate::infra::ensure_parent_dir;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Save the domain header and all vectors
pub fn save_vector_table(
    path: impl AsRef<Path>,
    vocabulary: &Vocabulary,
    vectors: &[Vector],
) -> io::Result<()> {
    ensure_parent_dir(path.as_ref())?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writer.write_all(format_vector_table(vocabulary, vectors).as_bytes())?;

    writer.flush()
}
