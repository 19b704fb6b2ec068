//! Contig splitting and cumulative size statistics.
//!
//! - [`splitter`]: split a scaffold's residues into contigs at `N` runs
//! - [`percentile`]: N-percentile / L-percentile tables over a set of lengths
//! - [`engine`]: read a whole assembly and produce both tables
//!
//! ## Example
//!
//! ```rust
//! use scaffold_stats::parsing::fasta::FastaReader;
//! use scaffold_stats::stats::engine::Assembly;
//! use scaffold_stats::stats::percentile::Thresholds;
//! use std::io::Cursor;
//!
//! let mut reader = FastaReader::new(Cursor::new(">s1\nACGTNNNNACGT\n>s2\nACGT\n"));
//! let assembly = Assembly::from_reader(&mut reader, None).unwrap();
//! let report = assembly.report(&Thresholds::default(), false);
//!
//! let n50 = report.scaffolds.rows.iter().find(|r| r.percentile == 0.5).unwrap();
//! assert_eq!(n50.critical_size, 12);
//! assert_eq!(n50.rank, 0);
//! ```

pub mod engine;
pub mod percentile;
pub mod splitter;
