//! TSPLIB-style text input and tour output.
//!
//! Only the subset needed for planar Euclidean instances is supported:
//!
//! ```text
//! NAME : square4
//! TYPE : TSP
//! DIMENSION : 4
//! EDGE_WEIGHT_TYPE : EUC_2D
//! NODE_COORD_SECTION
//! 1 0.0 0.0
//! 2 0.0 1.0
//! 3 1.0 1.0
//! 4 1.0 0.0
//! EOF
//! ```
//!
//! Header keys other than `NAME` and `DIMENSION` are accepted and ignored.
//! The coordinate section ends at `EOF` or after `DIMENSION` rows, whichever
//! comes first.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::city::City;
use super::instance::Instance;
use crate::error::{Result, TspError};
use crate::ga::Solution;

/// A parsed TSPLIB file: the optional `NAME` header and the instance.
#[derive(Debug, Clone)]
pub struct TsplibProblem {
    pub name: Option<String>,
    pub instance: Instance,
}

/// Parses TSPLIB text.
///
/// # Errors
///
/// [`TspError::Parse`] with a 1-based line number for malformed headers or
/// rows, a missing `DIMENSION`, a missing `NODE_COORD_SECTION`, or a row
/// count that disagrees with `DIMENSION`. Instance-level errors (duplicate
/// ids) are passed through from [`Instance::new`].
pub fn parse_str(text: &str) -> Result<TsplibProblem> {
    let mut name = None;
    let mut dimension: Option<usize> = None;
    let mut in_coords = false;
    let mut saw_coords = false;
    let mut cities = Vec::new();
    let mut last_line = 0;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if line == "EOF" {
            break;
        }

        if in_coords {
            cities.push(parse_city(line, line_no)?);
            if dimension == Some(cities.len()) {
                break;
            }
            continue;
        }

        let (key, value) = match line.split_once(':') {
            Some((k, v)) => (k.trim(), v.trim()),
            None => match line.split_once(char::is_whitespace) {
                Some((k, v)) => (k.trim(), v.trim()),
                None => (line, ""),
            },
        };

        match key {
            "NODE_COORD_SECTION" => {
                if dimension.is_none() {
                    return Err(parse_error(line_no, "NODE_COORD_SECTION before DIMENSION"));
                }
                in_coords = true;
                saw_coords = true;
                if dimension == Some(0) {
                    break;
                }
            }
            "DIMENSION" => {
                let n = value
                    .parse::<usize>()
                    .map_err(|_| parse_error(line_no, format!("invalid DIMENSION '{value}'")))?;
                dimension = Some(n);
            }
            "NAME" => name = Some(value.to_string()),
            _ => {}
        }
    }

    let dimension = dimension.ok_or_else(|| parse_error(last_line, "missing DIMENSION"))?;
    if !saw_coords {
        return Err(parse_error(last_line, "missing NODE_COORD_SECTION"));
    }
    if cities.len() != dimension {
        return Err(parse_error(
            last_line,
            format!("expected {dimension} cities, found {}", cities.len()),
        ));
    }

    Ok(TsplibProblem {
        name,
        instance: Instance::new(cities)?,
    })
}

/// Reads and parses a TSPLIB file from disk.
pub fn read_instance(path: impl AsRef<Path>) -> Result<TsplibProblem> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let problem = parse_str(&text)?;
    tracing::debug!(
        path = %path.display(),
        cities = problem.instance.len(),
        "loaded TSPLIB instance"
    );
    Ok(problem)
}

/// Writes `solution` as a TSPLIB tour, listing external city ids.
///
/// # Errors
///
/// [`TspError::InvalidIndex`] if the solution does not belong to `instance`,
/// [`TspError::Io`] on write failure.
pub fn write_tour<W: Write>(
    mut out: W,
    name: &str,
    solution: &Solution,
    instance: &Instance,
) -> Result<()> {
    let ids = solution.city_ids(instance)?;
    writeln!(out, "NAME : {name}")?;
    writeln!(out, "COMMENT : Total distance = {}", solution.distance)?;
    writeln!(out, "TYPE : TOUR")?;
    writeln!(out, "DIMENSION : {}", solution.dimension)?;
    writeln!(out, "TOUR_SECTION")?;
    for id in ids {
        writeln!(out, "{id}")?;
    }
    writeln!(out, "-1")?;
    writeln!(out, "EOF")?;
    out.flush()?;
    Ok(())
}

/// Writes a tour file to `path`, replacing any existing file.
pub fn write_tour_file(
    path: impl AsRef<Path>,
    name: &str,
    solution: &Solution,
    instance: &Instance,
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_tour(BufWriter::new(file), name, solution, instance)
}

fn parse_city(line: &str, line_no: usize) -> Result<City> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(parse_error(
            line_no,
            format!("expected 'id x y', found {} fields", fields.len()),
        ));
    }
    let id = fields[0]
        .parse::<i64>()
        .map_err(|_| parse_error(line_no, format!("invalid city id '{}'", fields[0])))?;
    let x = parse_coord(fields[1], line_no)?;
    let y = parse_coord(fields[2], line_no)?;
    Ok(City::new(id, x, y))
}

fn parse_coord(field: &str, line_no: usize) -> Result<f64> {
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(parse_error(line_no, format!("invalid coordinate '{field}'"))),
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> TspError {
    TspError::Parse {
        line,
        message: message.into(),
    }
}
