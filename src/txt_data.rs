//! Column access for the NASR fixed-width TXT files.
//!
//! Every field in `APT.txt` lives at a fixed byte range of its line. Fields are
//! read with [`extract`], which never fails: ranges falling off the end of a
//! short line come back empty.

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, ErrorKind};
use std::path::Path;

/// Opens `path`, reporting a missing file as [`Error::FileNotFound`].
pub fn open_file<P: AsRef<Path>>(path: P) -> Result<File> {
    let path = path.as_ref();
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => e.into(),
    })
}

/// A column range given as `(start, end)` byte offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span(pub usize, pub usize);

impl Span {
    /// Span of `len` bytes starting at `start`.
    pub const fn at(start: usize, len: usize) -> Span {
        Span(start, start + len)
    }

    pub fn extract<'a>(&self, line: &'a [u8]) -> Cow<'a, str> {
        let Span(l, r) = *self;
        extract(line, l, r - l)
    }
}

/// Trimmed text of the bytes `start..start + length` of `line`.
///
/// The range is clamped to the line. Columns are byte offsets, so the bytes
/// are sliced first and only the field itself is decoded; invalid UTF-8
/// inside one field cannot move the columns of the fields after it.
pub fn extract(line: &[u8], start: usize, length: usize) -> Cow<'_, str> {
    let end = line.len().min(start.saturating_add(length));
    if start >= end {
        return Cow::Borrowed("");
    }
    match String::from_utf8_lossy(&line[start..end]) {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_owned()),
    }
}

lazy_static! {
    static ref LEADING_FLOAT: Regex =
        Regex::new(r"^\s*[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap();
    static ref LEADING_INT: Regex = Regex::new(r"^\s*[+-]?\d+").unwrap();
}

/// Parses the leading numeric prefix of `raw` as a float, ignoring whatever
/// follows it (`"12.5N"` is `12.5`).
///
/// Defaults to `0.0` when there is no numeric prefix.
pub fn float_or_zero(raw: &str) -> f64 {
    LEADING_FLOAT
        .find(raw)
        .and_then(|m| m.as_str().trim().parse().ok())
        .unwrap_or(0.0)
}

/// Parses the leading digits of `raw` as a non-negative integer.
///
/// Defaults to `0` for non-numeric, negative or out of range input.
pub fn int_or_zero(raw: &str) -> u32 {
    LEADING_INT
        .find(raw)
        .and_then(|m| m.as_str().trim().parse().ok())
        .unwrap_or(0)
}

/// Physical lines of a TXT file as raw bytes, with line terminators removed.
///
/// The NASR extracts are not guaranteed to be valid UTF-8, so decoding is
/// left to [`extract`].
pub struct RawLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> RawLines<R> {
    pub fn new(reader: R) -> Self {
        RawLines {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for RawLines<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(std::mem::take(&mut self.buf)))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
