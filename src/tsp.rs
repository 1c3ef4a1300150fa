//! Coordinate-file ingestion.
//!
//! Reads the line-oriented TSP instance format: six header lines, one
//! `<id> <x> <y>` line per vertex, and a trailing footer line. Header and
//! footer are skipped; coordinates are kept in file order, so vertex
//! indices are assigned by position.

use crate::error::AcsError;
use std::fs;
use std::path::Path;

/// Number of header lines preceding the coordinate section.
const HEADER_LINES: usize = 6;

/// Reads vertex coordinates from an instance file.
///
/// # Errors
///
/// Returns [`AcsError::Io`] if the file cannot be read and
/// [`AcsError::Parse`] if a coordinate line is malformed.
pub fn read_coordinates<P: AsRef<Path>>(path: P) -> Result<Vec<(f64, f64)>, AcsError> {
    let content = fs::read_to_string(path)?;
    parse_coordinates(&content)
}

/// Parses the coordinate section out of instance-file content.
pub fn parse_coordinates(content: &str) -> Result<Vec<(f64, f64)>, AcsError> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.len() <= HEADER_LINES + 1 {
        return Ok(Vec::new());
    }

    let body = &lines[HEADER_LINES..lines.len() - 1];
    let mut points = Vec::with_capacity(body.len());
    for (offset, line) in body.iter().enumerate() {
        let line_no = HEADER_LINES + offset + 1;
        let mut tokens = line.split_whitespace();
        let _id = tokens.next();
        let x = tokens.next().and_then(|t| t.parse::<f64>().ok());
        let y = tokens.next().and_then(|t| t.parse::<f64>().ok());
        match (x, y) {
            (Some(x), Some(y)) => points.push((x, y)),
            _ => {
                return Err(AcsError::Parse {
                    line: line_no,
                    content: (*line).to_string(),
                })
            }
        }
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(body: &str) -> String {
        format!(
            "NAME: sample\nCOMMENT: test\nTYPE: TSP\nDIMENSION: 3\n\
             EDGE_WEIGHT_TYPE: EUC_2D\nNODE_COORD_SECTION\n{body}EOF\n"
        )
    }

    #[test]
    fn test_parse_coordinates() {
        let content = instance("1 565.0 575.0\n2 25.0 185.0\n3 345.0 750.0\n");
        let points = parse_coordinates(&content).expect("parses");
        assert_eq!(
            points,
            vec![(565.0, 575.0), (25.0, 185.0), (345.0, 750.0)]
        );
    }

    #[test]
    fn test_header_and_footer_skipped() {
        let content = instance("1 1.0 2.0\n");
        let points = parse_coordinates(&content).expect("parses");
        assert_eq!(points, vec![(1.0, 2.0)]);
    }

    #[test]
    fn test_short_file_yields_no_points() {
        assert!(parse_coordinates("NAME: empty\nEOF\n")
            .expect("parses")
            .is_empty());
    }

    #[test]
    fn test_malformed_line() {
        let content = instance("1 565.0 575.0\n2 oops 185.0\n");
        let err = parse_coordinates(&content).expect_err("must fail");
        match err {
            AcsError::Parse { line, content } => {
                assert_eq!(line, 8);
                assert!(content.contains("oops"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = read_coordinates("no-such-instance.tsp").expect_err("must fail");
        assert!(matches!(err, AcsError::Io(_)));
    }
}
