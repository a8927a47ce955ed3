//! Coordinate file parsing.
//!
//! One location per line as `id x y`, fields separated by spaces or tabs.
//! Blank lines and lines starting with `#` are skipped. Locations keep file
//! order, so the first data line becomes city 0.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Location;

/// Parses coordinate text into locations.
///
/// # Examples
///
/// ```
/// use held_karp::io::parse_locations;
///
/// let text = "1 0 0\n2\t3\t4\n";
/// let locations = parse_locations(text).unwrap();
/// assert_eq!(locations.len(), 2);
/// assert!((locations[0].distance_to(&locations[1]) - 5.0).abs() < 1e-10);
/// ```
pub fn parse_locations(text: &str) -> Result<Vec<Location>> {
    let mut locations = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        locations.push(parse_line(idx + 1, line)?);
    }
    Ok(locations)
}

/// Reads and parses a coordinate file.
pub fn read_locations(path: impl AsRef<Path>) -> Result<Vec<Location>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let locations = parse_locations(&text)?;
    log::debug!(
        "io.read_locations: path={} locations={}",
        path.display(),
        locations.len()
    );
    Ok(locations)
}

fn parse_line(line_no: usize, line: &str) -> Result<Location> {
    let mut fields = line.split_whitespace();
    let id = fields
        .next()
        .ok_or_else(|| Error::parse(line_no, "missing id"))?;
    let id = id
        .parse::<usize>()
        .map_err(|_| Error::parse(line_no, format!("invalid id '{id}'")))?;
    let x = parse_coordinate(line_no, "x", fields.next())?;
    let y = parse_coordinate(line_no, "y", fields.next())?;
    if let Some(extra) = fields.next() {
        return Err(Error::parse(line_no, format!("unexpected field '{extra}'")));
    }
    Ok(Location::new(id, x, y))
}

fn parse_coordinate(line_no: usize, axis: &str, field: Option<&str>) -> Result<f64> {
    let field = field.ok_or_else(|| Error::parse(line_no, format!("missing {axis} coordinate")))?;
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::parse(
            line_no,
            format!("invalid {axis} coordinate '{field}'"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_separated() {
        let locs = parse_locations("1 10 20\n2 30 40\n").expect("valid");
        assert_eq!(locs.len(), 2);
        assert_eq!(locs[0], Location::new(1, 10.0, 20.0));
        assert_eq!(locs[1], Location::new(2, 30.0, 40.0));
    }

    #[test]
    fn test_tab_separated_with_crlf() {
        let locs = parse_locations("1\t0\t0\r\n2\t-1.5\t2.25\r\n").expect("valid");
        assert_eq!(locs[1], Location::new(2, -1.5, 2.25));
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let text = "# cities\n\n1 0 0\n   \n2 1 1\n";
        assert_eq!(parse_locations(text).expect("valid").len(), 2);
    }

    #[test]
    fn test_reports_line_numbers() {
        let err = parse_locations("1 0 0\n2 abc 1\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
        assert_eq!(err.to_string(), "line 2: invalid x coordinate 'abc'");

        let err = parse_locations("1 0\n").unwrap_err();
        assert_eq!(err.to_string(), "line 1: missing y coordinate");

        let err = parse_locations("x 0 0\n").unwrap_err();
        assert_eq!(err.to_string(), "line 1: invalid id 'x'");

        let err = parse_locations("1 0 0 9\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(parse_locations("1 inf 0\n").is_err());
        assert!(parse_locations("1 0 NaN\n").is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_locations("/nonexistent/held-karp/cities.txt").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir().join(format!("held_karp_io_{}.txt", std::process::id()));
        fs::write(&path, "1 0 0\n2 0 1\n3 1 0\n").expect("write temp file");
        let locs = read_locations(&path).expect("readable");
        fs::remove_file(&path).ok();
        assert_eq!(locs.len(), 3);
    }
}
