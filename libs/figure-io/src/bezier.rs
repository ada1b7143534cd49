//! # Bezier Patch Files
//!
//! ```text
//! 2                               <- patch count
//! 0, 1, 2, 3, 4, ..., 15          <- 16 control point indices per patch
//! 3, 16, 17, 18, ..., 27
//! 28                              <- control point count
//! 1.4, 0, 2.4                     <- x, y, z per control point
//! ...
//! ```
//!
//! Fields are comma separated with optional whitespace. Blank lines are
//! skipped. Anything after the last declared control point is an error.

use std::fs;
use std::path::Path;

use config::constants::BEZIER_PATCH_SIZE;
use figure_mesh::{BezierSurface, PatchIndices, Point};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Non-blank lines paired with their 1-based line numbers.
struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Records<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            last: 0,
        }
    }

    /// Next non-blank line, or an error naming what was expected.
    fn require(&mut self, what: &str) -> IoResult<(usize, &'a str)> {
        self.next().ok_or_else(|| {
            IoError::malformed(
                self.last + 1,
                format!("unexpected end of input, expected {what}"),
            )
        })
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, line) in self.lines.by_ref() {
            self.last = idx + 1;
            let text = line.trim();
            if !text.is_empty() {
                return Some((idx + 1, text));
            }
        }
        None
    }
}

/// Parses the text of a patch file.
///
/// # Errors
///
/// [`IoError::MalformedInput`] with the offending line number for missing
/// records, wrong field counts, unparsable numbers, indices past the control
/// point list, and trailing content.
///
/// # Example
///
/// ```rust
/// use figure_io::parse_bezier;
///
/// let mut text = String::from("1\n");
/// text.push_str(&(0..16).map(|i| i.to_string()).collect::<Vec<_>>().join(", "));
/// text.push_str("\n16\n");
/// for i in 0..16 {
///     text.push_str(&format!("{}, 0, {}\n", i % 4, i / 4));
/// }
///
/// let surface = parse_bezier(&text).unwrap();
/// assert_eq!(surface.patches().len(), 1);
/// assert_eq!(surface.control_points().len(), 16);
/// ```
pub fn parse_bezier(text: &str) -> IoResult<BezierSurface> {
    let mut records = Records::new(text);

    let patch_count = parse_count(records.require("patch count")?)?;
    // Counts come from the file; records are pushed as they are read.
    let mut patches = Vec::new();
    for _ in 0..patch_count {
        let (line, record) = records.require("patch indices")?;
        patches.push((line, parse_patch(line, record)?));
    }

    let point_count = parse_count(records.require("control point count")?)?;
    let mut points = Vec::new();
    for _ in 0..point_count {
        let (line, record) = records.require("control point")?;
        points.push(parse_point(line, record)?);
    }

    if let Some((line, _)) = records.next() {
        return Err(IoError::malformed(line, "unexpected content after the last control point"));
    }

    for (line, patch) in &patches {
        if let Some(idx) = patch.iter().find(|&&idx| idx as usize >= point_count) {
            return Err(IoError::malformed(
                *line,
                format!("index {idx} is out of range for {point_count} control points"),
            ));
        }
    }

    let surface = BezierSurface::new(points, patches.into_iter().map(|(_, p)| p).collect())?;
    Ok(surface)
}

/// Reads and parses a patch file from disk.
pub fn read_bezier(path: impl AsRef<Path>) -> IoResult<BezierSurface> {
    let path = path.as_ref();
    let surface = parse_bezier(&fs::read_to_string(path)?)?;

    debug!(
        path = %path.display(),
        patches = surface.patches().len(),
        control_points = surface.control_points().len(),
        "read bezier patches"
    );
    Ok(surface)
}

fn parse_count((line, record): (usize, &str)) -> IoResult<usize> {
    record
        .parse()
        .map_err(|_| IoError::malformed(line, format!("invalid count '{record}'")))
}

fn fields(record: &str) -> Vec<&str> {
    record.split(',').map(str::trim).collect()
}

fn parse_patch(line: usize, record: &str) -> IoResult<PatchIndices> {
    let fields = fields(record);
    if fields.len() != BEZIER_PATCH_SIZE {
        return Err(IoError::malformed(
            line,
            format!("expected {BEZIER_PATCH_SIZE} indices, found {}", fields.len()),
        ));
    }

    let mut patch: PatchIndices = [0; BEZIER_PATCH_SIZE];
    for (slot, field) in patch.iter_mut().zip(fields) {
        *slot = field
            .parse()
            .map_err(|_| IoError::malformed(line, format!("invalid index '{field}'")))?;
    }
    Ok(patch)
}

fn parse_point(line: usize, record: &str) -> IoResult<Point> {
    let fields = fields(record);
    let [x, y, z] = fields[..] else {
        return Err(IoError::malformed(
            line,
            format!("expected 3 coordinates, found {}", fields.len()),
        ));
    };

    let parse = |field: &str| {
        field
            .parse::<f64>()
            .map_err(|_| IoError::malformed(line, format!("invalid coordinate '{field}'")))
    };
    Ok(Point::new(parse(x)?, parse(y)?, parse(z)?))
}
