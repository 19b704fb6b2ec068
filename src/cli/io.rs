//! Opening inputs and outputs for the command line.
//!
//! Every input is read twice: a quick pass counts records to size the
//! scaffold list, then the full parse runs. Plain files are rewound between
//! passes, standard input is first spooled to an anonymous temporary file,
//! and gzip input is simply opened a second time.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::debug;

use crate::parsing::fasta::{self, FastaReader};
use crate::stats::engine::Assembly;

/// Where the FASTA text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    Plain(PathBuf),
    Gzip(PathBuf),
}

impl InputSource {
    /// A gzip path wins over a plain one; neither means standard input.
    #[must_use]
    pub fn from_paths(plain: Option<PathBuf>, gzip: Option<PathBuf>) -> Self {
        match (gzip, plain) {
            (Some(path), _) => Self::Gzip(path),
            (None, Some(path)) => Self::Plain(path),
            (None, None) => Self::Stdin,
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "standard input"),
            Self::Plain(path) => write!(f, "input fasta file {}", path.display()),
            Self::Gzip(path) => write!(f, "input fasta gzip file {}", path.display()),
        }
    }
}

/// Where the tables go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    Plain(PathBuf),
    Gzip(PathBuf),
}

impl OutputSink {
    /// A gzip path wins over a plain one; neither means standard output.
    #[must_use]
    pub fn from_paths(plain: Option<PathBuf>, gzip: Option<PathBuf>) -> Self {
        match (gzip, plain) {
            (Some(path), _) => Self::Gzip(path),
            (None, Some(path)) => Self::Plain(path),
            (None, None) => Self::Stdout,
        }
    }

    /// Open the sink for writing, truncating any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the output file cannot be created.
    pub fn create(&self) -> anyhow::Result<Output> {
        let output = match self {
            Self::Stdout => Output::Stdout(BufWriter::new(io::stdout())),
            Self::Plain(path) => Output::Plain(BufWriter::new(self.create_file(path)?)),
            Self::Gzip(path) => Output::Gzip(GzEncoder::new(
                BufWriter::new(self.create_file(path)?),
                Compression::default(),
            )),
        };
        Ok(output)
    }

    fn create_file(&self, path: &Path) -> anyhow::Result<File> {
        File::create(path).with_context(|| format!("Can't open {self}"))
    }
}

impl fmt::Display for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "standard output"),
            Self::Plain(path) => write!(f, "output file {}", path.display()),
            Self::Gzip(path) => write!(f, "output gzip file {}", path.display()),
        }
    }
}

/// An opened output stream
pub enum Output {
    Stdout(BufWriter<io::Stdout>),
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Output {
    /// Flush buffers and, for gzip, write the trailer.
    ///
    /// # Errors
    ///
    /// Returns any error from the final writes.
    pub fn finish(self) -> io::Result<()> {
        match self {
            Self::Stdout(mut w) => w.flush(),
            Self::Plain(mut w) => w.flush(),
            Self::Gzip(encoder) => encoder.finish()?.flush(),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(w) => w.write(buf),
            Self::Plain(w) => w.write(buf),
            Self::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::Plain(w) => w.flush(),
            Self::Gzip(w) => w.flush(),
        }
    }
}

/// Read a whole assembly from `source`.
///
/// # Errors
///
/// Returns an error naming the source if it cannot be opened or read.
pub fn read_assembly(source: &InputSource) -> anyhow::Result<Assembly> {
    let cant_open = || format!("Can't open {source}");
    let cant_read = || format!("Can't read {source}");

    match source {
        InputSource::Stdin => {
            let spool = spool_stdin().with_context(cant_read)?;
            read_seekable(BufReader::new(spool)).with_context(cant_read)
        }
        InputSource::Plain(path) => {
            let file = File::open(path).with_context(cant_open)?;
            read_seekable(BufReader::new(file)).with_context(cant_read)
        }
        InputSource::Gzip(path) => {
            let mut first_pass = open_gzip(path).with_context(cant_open)?;
            let expected = fasta::count_records(&mut first_pass).with_context(cant_read)?;
            debug!("Counted {expected} records");

            let mut reader = FastaReader::new(open_gzip(path).with_context(cant_open)?);
            Assembly::from_reader(&mut reader, Some(expected)).with_context(cant_read)
        }
    }
}

/// Copy standard input into an anonymous temporary file so it can be rewound.
fn spool_stdin() -> io::Result<File> {
    let mut spool = tempfile::tempfile()?;
    let copied = io::copy(&mut io::stdin().lock(), &mut spool)?;
    spool.rewind()?;
    debug!("Spooled {copied} bytes of standard input");
    Ok(spool)
}

fn read_seekable<R: BufRead + Seek>(reader: R) -> anyhow::Result<Assembly> {
    let mut reader = FastaReader::new(reader);
    let expected = reader.count_records()?;
    debug!("Counted {expected} records");
    Ok(Assembly::from_reader(&mut reader, Some(expected))?)
}

fn open_gzip(path: &Path) -> io::Result<BufReader<MultiGzDecoder<File>>> {
    File::open(path)
        .map(MultiGzDecoder::new)
        .map(BufReader::new)
}
