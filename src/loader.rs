//! Shape file reader
//!
//! File format: the first line holds the number of shapes, each following
//! line holds `<ShapeType> <height> <secondValue>` separated by whitespace.

use crate::error::{ShapeSortContext, ShapeSortError, ShapeSortResult};
use crate::shape::{Shape, ShapeKind};
use log::{debug, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const MAX_PREALLOCATED_SHAPES: usize = 4096;

/// Load every shape from the file at `path`
pub fn load_shapes(path: impl AsRef<Path>) -> ShapeSortResult<Vec<Shape>> {
    let path = path.as_ref();
    let display = path.to_string_lossy();

    let file = File::open(path).with_file_context(&display)?;
    let shapes = parse_shapes(BufReader::new(file)).with_file_context(&display)?;

    debug!("loaded {} shapes from {}", shapes.len(), display);
    Ok(shapes)
}

/// Parse shapes from any buffered reader
pub fn parse_shapes<R: BufRead>(reader: R) -> ShapeSortResult<Vec<Shape>> {
    let mut lines = reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.map(|text| (idx + 1, text)));

    let expected = loop {
        match lines.next().transpose()? {
            Some((_, text)) if text.trim().is_empty() => continue,
            Some((line_no, text)) => break parse_count(line_no, &text)?,
            None => return Ok(Vec::new()),
        }
    };

    // The count line is untrusted; never size the buffer from it alone
    let mut shapes = Vec::with_capacity(expected.min(MAX_PREALLOCATED_SHAPES));
    let mut negative = 0usize;

    while shapes.len() < expected {
        let (line_no, text) = match lines.next().transpose()? {
            Some(entry) => entry,
            None => {
                return Err(ShapeSortError::UnexpectedEof {
                    expected,
                    found: shapes.len(),
                })
            }
        };
        if text.trim().is_empty() {
            continue;
        }

        let shape = parse_shape_line(line_no, &text)?;
        if shape.height() < 0.0 || shape.second_dimension() < 0.0 {
            negative += 1;
        }
        shapes.push(shape);
    }

    if negative > 0 {
        warn!("{negative} shapes have negative dimensions");
    }

    Ok(shapes)
}

fn parse_count(line_no: usize, text: &str) -> ShapeSortResult<usize> {
    let token = text.trim();
    token
        .parse::<usize>()
        .map_err(|_| ShapeSortError::invalid_count(line_no, token))
}

/// Parse a single `<ShapeType> <height> <secondValue>` line
pub fn parse_shape_line(line_no: usize, text: &str) -> ShapeSortResult<Shape> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let &[kind, height, second] = tokens.as_slice() else {
        return Err(ShapeSortError::malformed_line(line_no, text.trim()));
    };

    let kind: ShapeKind = kind
        .parse()
        .map_err(|_| ShapeSortError::unknown_shape_type(line_no, kind))?;
    let height = parse_number(line_no, height)?;
    let second = parse_number(line_no, second)?;

    Ok(Shape::new(kind, height, second))
}

fn parse_number(line_no: usize, token: &str) -> ShapeSortResult<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ShapeSortError::invalid_number(line_no, token)),
    }
}
