//! FASTA reader for assembly statistics.
//!
//! Records are delimited by `>` markers. The header is the rest of the marker
//! line; the payload runs until the next `>` or end of stream. Payload bytes
//! are filtered against the DNA alphabet in [`crate::utils::validation`]:
//!
//! - valid residues are kept (case preserved, `U`/`u` become `T`/`t`)
//! - whitespace is dropped silently
//! - anything else is dropped with a warning
//!
//! Name and residue buffers grow with `try_reserve`, so a failed allocation is
//! reported as [`ParseError::Allocation`] instead of aborting the process.

use std::collections::TryReserveError;
use std::io::{self, BufRead, ErrorKind, Seek, SeekFrom};

use thiserror::Error;
use tracing::warn;

use crate::core::sequence::SequenceRecord;
use crate::utils::validation::{display_byte, is_valid_residue, normalize_residue};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to allocate record buffer: {0}")]
    Allocation(#[from] TryReserveError),
}

const RECORD_MARKER: u8 = b'>';

/// C `isspace` set, which also covers vertical tab
fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

fn is_line_end(c: u8) -> bool {
    c == b'\n' || c == b'\r'
}

/// Sequential FASTA reader over any buffered byte stream.
///
/// The reader never consumes the `>` of the following record, so records can
/// be pulled one at a time with [`FastaReader::read_sequence`] or through the
/// [`Iterator`] impl.
pub struct FastaReader<R> {
    inner: R,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Read the next record, or `None` once no further `>` marker exists.
    ///
    /// Bytes before the first marker are skipped. A header followed directly
    /// by end of stream yields a record with no residues.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if the stream cannot be read and
    /// `ParseError::Allocation` if a buffer cannot grow.
    pub fn read_sequence(&mut self) -> Result<Option<SequenceRecord>, ParseError> {
        if !self.skip_to_marker()? {
            return Ok(None);
        }
        self.inner.consume(1);

        let header = self.read_header()?;
        let name = String::from_utf8_lossy(&header).into_owned();
        let residues = self.read_residues(&name)?;

        Ok(Some(SequenceRecord::new(name, residues)))
    }

    /// Advance until a marker sits at the front of the buffer.
    /// Returns `false` at end of stream.
    fn skip_to_marker(&mut self) -> io::Result<bool> {
        loop {
            let (found, used) = {
                let buf = match self.inner.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if buf.is_empty() {
                    return Ok(false);
                }
                match buf.iter().position(|&c| c == RECORD_MARKER) {
                    Some(pos) => (true, pos),
                    None => (false, buf.len()),
                }
            };
            self.inner.consume(used);
            if found {
                return Ok(true);
            }
        }
    }

    /// Read header bytes up to (not including) the line terminator.
    fn read_header(&mut self) -> Result<Vec<u8>, ParseError> {
        let mut header = Vec::new();
        loop {
            let (done, used) = {
                let buf = match self.inner.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                };
                if buf.is_empty() {
                    (true, 0)
                } else {
                    let end = buf.iter().position(|&c| is_line_end(c));
                    let line = &buf[..end.unwrap_or(buf.len())];
                    header.try_reserve(line.len())?;
                    header.extend_from_slice(line);
                    (end.is_some(), line.len())
                }
            };
            self.inner.consume(used);
            if done {
                return Ok(header);
            }
        }
    }

    /// Read and filter payload bytes up to the next marker or end of stream.
    fn read_residues(&mut self, name: &str) -> Result<Vec<u8>, ParseError> {
        let mut residues = Vec::new();
        loop {
            let (done, used) = {
                let buf = match self.inner.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e.into()),
                };
                if buf.is_empty() {
                    (true, 0)
                } else {
                    let end = buf.iter().position(|&c| c == RECORD_MARKER);
                    let chunk = &buf[..end.unwrap_or(buf.len())];
                    residues.try_reserve(chunk.len())?;
                    for &c in chunk {
                        if is_valid_residue(c) {
                            residues.push(normalize_residue(c));
                        } else if !is_space(c) {
                            warn!(record = %name, "{} is invalid character", display_byte(c));
                        }
                    }
                    (end.is_some(), chunk.len())
                }
            };
            self.inner.consume(used);
            if done {
                return Ok(residues);
            }
        }
    }
}

impl<R: BufRead + Seek> FastaReader<R> {
    /// Count the records left in the stream, then restore the read position.
    ///
    /// The count matches the number of records [`FastaReader::read_sequence`]
    /// will return from the same position.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream cannot be read or repositioned.
    pub fn count_records(&mut self) -> io::Result<usize> {
        let start = self.inner.stream_position()?;
        let count = count_records(&mut self.inner);
        self.inner.seek(SeekFrom::Start(start))?;
        count
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<SequenceRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_sequence().transpose()
    }
}

/// Count record markers by consuming the stream.
///
/// A `>` inside a header line belongs to the name and is not counted. Used
/// directly for streams that cannot seek, which must be re-opened afterwards.
///
/// # Errors
///
/// Returns an error if the stream cannot be read.
pub fn count_records<R: BufRead>(reader: &mut R) -> io::Result<usize> {
    let mut count = 0;
    let mut in_header = false;
    loop {
        let used = {
            let buf = match reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if buf.is_empty() {
                return Ok(count);
            }
            for &c in buf {
                if in_header {
                    in_header = !is_line_end(c);
                } else if c == RECORD_MARKER {
                    count += 1;
                    in_header = true;
                }
            }
            buf.len()
        };
        reader.consume(used);
    }
}
