//! Reading point lists and writing triangle lists as comma-separated text.

use std::{fs, io, path};
use std::io::{Read, Write};

use crate::{LoadError, Point, Triangulation};

/// Decode a flat list of comma-separated decimal numbers into points, pairing consecutive values.
///
/// Whitespace around each number is ignored and an empty source yields no points.
/// A final unpaired value is dropped.
pub fn read_points<R: Read>(mut reader: R) -> Result<Vec<Point>, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut values = Vec::new();
    for (position, token) in text.split(',').enumerate() {
        let token = token.trim();
        let value = token.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
            position,
            token: token.to_owned(),
        })?;
        values.push(value);
    }

    Ok(values.chunks_exact(2).map(|xy| Point::new(xy[0], xy[1])).collect())
}

/// Write point indices separated by commas, without a trailing separator.
pub fn write_triangles<W: Write>(mut writer: W, triangles: &[usize]) -> io::Result<()> {
    let mut iter = triangles.iter();
    if let Some(first) = iter.next() {
        write!(writer, "{}", first)?;
        for i in iter {
            write!(writer, ",{}", i)?;
        }
    }
    writer.flush()
}

/// Read points from the file at `path`. See [read_points].
pub fn load_points<P: AsRef<path::Path>>(path: P) -> Result<Vec<Point>, LoadError> {
    let f = fs::File::open(path)?;
    read_points(io::BufReader::new(f))
}

/// Write the triangles of `triangulation` to `path`, replacing any existing content. See [write_triangles].
pub fn save_triangles<P: AsRef<path::Path>>(path: P, triangulation: &Triangulation) -> io::Result<()> {
    let f = fs::File::create(path)?;
    write_triangles(io::BufWriter::new(f), triangulation.triangles())
}
