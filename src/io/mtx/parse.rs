//! # Parsing Matrix Market files
//!
//! Reads the banner, the size line and the entries. Coordinates are checked against the declared
//! shape, but entries are otherwise stored as they are found: no sorting and no summing of
//! repeated coordinates.
use crate::data::matrix::{CoordinateMatrix, Entry};
use crate::io::error::{FileLocation, ImportError, InconsistencyError, ParseError, ParseResult};
use crate::io::mtx::{Banner, Field, Size, Symmetry};
use crate::io::mtx::number::{parse_count, parse_index, parse_value};
use crate::io::mtx::token::{
    ARRAY, BANNER, COMMENT_INDICATOR, COMPLEX, COORDINATE, DOUBLE, GENERAL, HERMITIAN, INTEGER,
    MATRIX, PATTERN, PATTERN_VALUE, REAL, SKEW_SYMMETRIC, SYMMETRIC,
};

/// Parse a Matrix Market file in the coordinate format.
///
/// # Arguments
///
/// * `program`: Entire contents of the file.
///
/// # Return value
///
/// The matrix, with symmetric storage expanded and 0-based indices.
///
/// # Errors
///
/// Parse errors if the file is syntactically wrong: a missing banner or size line, unreadable
/// tokens, indices out of the declared range, fewer entries than declared or more lines after the
/// last entry, or a declared number of rows that is too large to index. Inconsistency errors if a
/// symmetric matrix is not square.
pub fn parse(program: &str) -> Result<CoordinateMatrix, ImportError> {
    let mut numbered = program.lines()
        .enumerate()
        .map(|(number, line)| (number + 1, line)); // Count from 1

    let banner = parse_banner(numbered.next())
        .map_err(|e| e.wrap("Error while reading the banner."))?;

    let mut lines = into_lines(numbered);
    let size_location = lines.next()
        .ok_or_else(|| ParseError::new("No size line to read, the file contains only comments."))?;
    let size = parse_size_line(size_location)
        .map_err(|e| e.wrap("Error while reading the size line."))?;
    if banner.symmetry != Symmetry::General && size.nr_rows != size.nr_columns {
        return Err(InconsistencyError::new(format!(
            "A matrix with symmetric storage should be square, but it is {} x {}.",
            size.nr_rows, size.nr_columns,
        )).into());
    }

    let entries = parse_entries(&mut lines, banner, size)?;

    if let Some(location) = lines.next() {
        return Err(ParseError::with_location(
            format!("Read all {} declared entries, but the file has more nonempty lines.", size.nnz),
            location,
        ).into());
    }

    CoordinateMatrix::new_unchecked(size.nr_rows, size.nr_columns, entries)
        .map_err(|error| ParseError::with_location(
            format!("Can't hold a matrix with {} rows: {}", size.nr_rows, error),
            size_location,
        ).into())
}

/// Skip comment lines and blank lines.
///
/// # Arguments
///
/// * `lines`: Lines numbered as in the file, the banner already removed.
fn into_lines<'a>(
    lines: impl Iterator<Item = FileLocation<'a>>,
) -> impl Iterator<Item = FileLocation<'a>> {
    lines
        .filter(|(_, line)| !line.trim_start().starts_with(COMMENT_INDICATOR))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Read the banner.
///
/// The line should start with `%%MatrixMarket`. The words that follow are read if present, a
/// missing word is read as if it were `matrix coordinate real general`.
///
/// # Arguments
///
/// `location`: First line of the file, which should exist.
///
/// # Errors
///
/// If there is no first line, it isn't a banner, or it describes a kind of matrix that can't be
/// read.
fn parse_banner(location: Option<FileLocation>) -> ParseResult<Banner> {
    let (number, line) = location
        .ok_or_else(|| ParseError::new("No line to read, is the file empty?"))?;

    let mut words = line.split_whitespace();
    match words.next() {
        Some(first) if first.eq_ignore_ascii_case(BANNER) => {},
        _ => return Err(ParseError::with_location(
            format!("Expected the file to start with \"{}\"", BANNER),
            (number, line),
        )),
    }
    let mut words = words.map(str::to_ascii_lowercase);

    if let Some(object) = words.next() {
        if object != MATRIX {
            return Err(ParseError::with_location(
                format!("Object \"{}\" is not supported, expected \"{}\"", object, MATRIX),
                (number, line),
            ));
        }
    }

    match words.next().as_deref() {
        None | Some(COORDINATE) => {},
        Some(ARRAY) => return Err(ParseError::with_location(
            "Dense (array) matrices are not supported",
            (number, line),
        )),
        Some(format) => return Err(ParseError::with_location(
            format!("Unknown format \"{}\"", format),
            (number, line),
        )),
    }

    let field = match words.next().as_deref() {
        None | Some(REAL | DOUBLE) => Field::Real,
        Some(INTEGER) => Field::Integer,
        Some(PATTERN) => Field::Pattern,
        Some(COMPLEX) => return Err(ParseError::with_location(
            "Complex matrices are not supported",
            (number, line),
        )),
        Some(field) => return Err(ParseError::with_location(
            format!("Unknown field \"{}\"", field),
            (number, line),
        )),
    };
    let symmetry = match words.next().as_deref() {
        None | Some(GENERAL) => Symmetry::General,
        Some(SYMMETRIC) => Symmetry::Symmetric,
        Some(SKEW_SYMMETRIC) => Symmetry::SkewSymmetric,
        Some(HERMITIAN) => return Err(ParseError::with_location(
            "Hermitian matrices are not supported",
            (number, line),
        )),
        Some(symmetry) => return Err(ParseError::with_location(
            format!("Unknown symmetry \"{}\"", symmetry),
            (number, line),
        )),
    };

    Ok(Banner { field, symmetry })
}

/// Read the number of rows, columns and entries.
///
/// # Arguments
///
/// `location`: First line after the banner that is not a comment.
fn parse_size_line((number, line): FileLocation) -> ParseResult<Size> {

    let words = line.split_whitespace().collect::<Vec<_>>();
    let &[nr_rows, nr_columns, nnz] = &words[..] else {
        return Err(ParseError::with_location(
            format!("Expected three integers \"rows columns entries\", found {} words", words.len()),
            (number, line),
        ));
    };

    let read = |text: &str| parse_count(text)
        .map_err(|e| e.wrap(format!("Could not read the size line at line {}: \"{}\"", number, line)));
    Ok(Size {
        nr_rows: read(nr_rows)?,
        nr_columns: read(nr_columns)?,
        nnz: read(nnz)?,
    })
}

/// Read exactly `size.nnz` data lines.
///
/// # Arguments
///
/// * `lines`: Non-comment lines, the first of which is the first data line.
/// * `banner`: Determines whether a value is expected and whether entries are mirrored.
/// * `size`: Bounds for the indices and the number of lines to read.
///
/// # Return value
///
/// Entries in the order of the file. With symmetric storage, each off-diagonal entry is directly
/// followed by its mirror image.
fn parse_entries<'a>(
    lines: &mut impl Iterator<Item = FileLocation<'a>>,
    banner: Banner,
    size: Size,
) -> ParseResult<Vec<Entry>> {
    // The declared count is not trusted for allocation before the lines are actually there.
    let mut entries = Vec::with_capacity(size.nnz.min(1 << 20));

    for read in 0..size.nnz {
        let (number, line) = lines.next().ok_or_else(|| ParseError::new(format!(
            "The size line declares {} entries, but the file ended after {}.", size.nnz, read,
        )))?;

        let entry = parse_entry(line, banner.field, size)
            .map_err(|e| e.wrap(format!("Could not read entry {} at line {}: \"{}\"", read + 1, number, line)))?;
        entries.push(entry);

        if entry.row != entry.column {
            match banner.symmetry {
                Symmetry::General => {},
                Symmetry::Symmetric => entries.push(Entry::new(entry.column, entry.row, entry.value)),
                Symmetry::SkewSymmetric => entries.push(Entry::new(entry.column, entry.row, -entry.value)),
            }
        } else if banner.symmetry == Symmetry::SkewSymmetric {
            return Err(ParseError::with_location(
                "A skew-symmetric matrix can't have entries on the diagonal.",
                (number, line),
            ));
        }
    }

    Ok(entries)
}

/// Read a single `row column [value]` line.
fn parse_entry(line: &str, field: Field, size: Size) -> ParseResult<Entry> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    let (row, column, value) = match (field, &words[..]) {
        (_, &[row, column]) => (row, column, None),
        (Field::Real | Field::Integer, &[row, column, value]) => (row, column, Some(value)),
        _ => return Err(ParseError::new(format!(
            "Expected \"row column{}\", found {} words.",
            if field == Field::Pattern { "" } else { " [value]" },
            words.len(),
        ))),
    };

    let row = parse_index(row, size.nr_rows)
        .map_err(|e| e.wrap("Could not read the row index."))?;
    let column = parse_index(column, size.nr_columns)
        .map_err(|e| e.wrap("Could not read the column index."))?;
    let value = match value {
        Some(text) => parse_value(text)?,
        None => PATTERN_VALUE,
    };

    Ok(Entry::new(row, column, value))
}
