//! Vector table text format and matrix helpers

use crate::domain::vector::Vector;
use crate::domain::vocabulary::Vocabulary;
use std::fmt::Write;

/// Transpose a rectangular matrix given as rows
///
/// An empty matrix transposes to an empty matrix. All rows must have the
/// width of the first row.
pub fn transpose(rows: &[Vector]) -> Vec<Vector> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    debug_assert!(rows.iter().all(|row| row.len() == first.len()));

    (0..first.len())
        .map(|j| rows.iter().map(|row| row[j]).collect())
        .collect()
}

/// Join integers with single spaces
pub fn join_row(row: &[i64]) -> String {
    let mut line = String::new();
    for (i, value) in row.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        // Writing to a String cannot fail
        let _ = write!(line, "{}", value);
    }
    line
}

/// Header line of domain names followed by one line per vector
pub fn format_vector_table(vocabulary: &Vocabulary, vectors: &[Vector]) -> String {
    let mut text = vocabulary.domains().join(" ");
    text.push('\n');
    for vector in vectors {
        text.push_str(&join_row(vector));
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(transpose(&rows), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn test_transpose_empty() {
        assert!(transpose(&[]).is_empty());
    }

    #[test]
    fn test_join_row() {
        assert_eq!(join_row(&[0, -1, 12]), "0 -1 12");
        assert_eq!(join_row(&[]), "");
    }

    #[test]
    fn test_format_vector_table() {
        let vocabulary: Vocabulary = ["a", "b"].into_iter().collect();
        let text = format_vector_table(&vocabulary, &[vec![0, 1], vec![-1, 0]]);
        assert_eq!(text, "a b\n0 1\n-1 0\n");
    }

    #[test]
    fn test_format_vector_table_empty_vocabulary() {
        let text = format_vector_table(&Vocabulary::new(), &[]);
        assert_eq!(text, "\n");
    }
}
