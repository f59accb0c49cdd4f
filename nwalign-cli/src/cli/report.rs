//! Human-readable rendering of an alignment run

use crate::cli::output::{create_standard_table, header_cell, section_header, tree_item, warning};
use colored::*;
use comfy_table::{Cell, CellAlignment, Table};
use nwalign_bio::alignment::{AlignmentResult, ScoreMatrix, ScoringScheme};
use nwalign_bio::formats::AlignmentInput;

/// Label used for the empty-prefix row and column
const PREFIX_LABEL: &str = "-";

pub fn print_text_report(
    input: &AlignmentInput,
    scoring: ScoringScheme,
    result: &AlignmentResult<char>,
    show_matrix: bool,
) {
    section_header("Input");
    tree_item(false, "Seq1", Some(&display_sequence(&input.seq1)));
    tree_item(false, "Seq2", Some(&display_sequence(&input.seq2)));
    tree_item(
        true,
        "Scoring",
        Some(&format!(
            "match {}, mismatch {}, gap {}",
            scoring.match_score, scoring.mismatch, scoring.gap
        )),
    );

    section_header("Alignment");
    let (aligned1, aligned2) = result.alignment.to_strings();
    if result.alignment.is_empty() {
        println!("  {}", "(empty)".dimmed());
    } else {
        println!("  {}", aligned1);
        println!("  {}", result.alignment.midline().dimmed());
        println!("  {}", aligned2);
    }

    section_header("Results");
    tree_item(false, "Score", Some(&result.score.to_string().bold().to_string()));
    tree_item(false, "Matrix score", Some(&result.matrix_score().to_string()));
    tree_item(false, "Length", Some(&result.alignment.len().to_string()));
    tree_item(
        false,
        "Identity",
        Some(&format!("{:.1}%", result.alignment.identity() * 100.0)),
    );
    tree_item(true, "Gaps", Some(&result.alignment.gap_count().to_string()));

    if !result.score_matches_matrix() {
        warning(&format!(
            "Traceback score {} differs from the matrix optimum {}",
            result.score,
            result.matrix_score()
        ));
    }

    if show_matrix {
        section_header("Matrix");
        let (seq1, seq2) = input.symbols();
        println!("{}", matrix_table(&result.matrix, &seq1, &seq2));
    }
}

/// Score matrix as a table with seq1 down the side and seq2 across the top
pub fn matrix_table(matrix: &ScoreMatrix, seq1: &[char], seq2: &[char]) -> Table {
    let mut table = create_standard_table();

    let mut header = vec![Cell::new(""), header_cell(PREFIX_LABEL)];
    header.extend(seq2.iter().map(|c| header_cell(&c.to_string())));
    table.set_header(header);

    for (i, values) in matrix.iter_rows().enumerate() {
        let label = match i {
            0 => PREFIX_LABEL.to_string(),
            _ => seq1[i - 1].to_string(),
        };
        let mut row = vec![header_cell(&label)];
        row.extend(
            values
                .iter()
                .map(|v| Cell::new(v).set_alignment(CellAlignment::Right)),
        );
        table.add_row(row);
    }

    table
}

fn display_sequence(seq: &str) -> String {
    if seq.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        seq.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nwalign_bio::alignment::align;

    #[test]
    fn test_matrix_table_shape() {
        let seq1: Vec<char> = "GA".chars().collect();
        let seq2: Vec<char> = "GCA".chars().collect();
        let result = align(&seq1, &seq2, ScoringScheme::new(1, -1, -1));

        let table = matrix_table(&result.matrix, &seq1, &seq2);

        assert_eq!(table.row_iter().count(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains('G'));
        assert!(rendered.contains('C'));
        assert!(rendered.contains("-3"));
    }

    #[test]
    fn test_matrix_table_for_empty_sequences() {
        let result = align::<char>(&[], &[], ScoringScheme::default());
        let table = matrix_table(&result.matrix, &[], &[]);

        assert_eq!(table.row_iter().count(), 1);
    }
}
