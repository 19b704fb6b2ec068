//! # scaffold-stats
//!
//! Size distribution statistics for genome assemblies.
//!
//! Every FASTA record is treated as a scaffold and split into contigs at runs
//! of gap characters (`N`/`n`). For scaffolds and contigs separately, the
//! lengths are sorted from largest to smallest and the running total is
//! reported each time it first exceeds 5%, 10%, ..., 100% of the overall
//! size. The 50% row gives the familiar N50 (critical size) and L50 (rank).
//!
//! ## Example
//!
//! ```rust
//! use scaffold_stats::{Assembly, FastaReader, Thresholds};
//! use std::io::Cursor;
//!
//! let fasta = ">s1\nACGTNNNNACGT\n>s2\nACGT\n";
//! let mut reader = FastaReader::new(Cursor::new(fasta));
//! let expected = reader.count_records().unwrap();
//! let assembly = Assembly::from_reader(&mut reader, Some(expected)).unwrap();
//!
//! assert_eq!(assembly.scaffold_lengths(), vec![12, 4]);
//! assert_eq!(assembly.contig_lengths(), vec![4, 4, 4]);
//!
//! let report = assembly.report(&Thresholds::default(), false);
//! let last = report.scaffolds.rows.last().unwrap();
//! assert_eq!((last.rank, last.cumulative_size), (2, 16));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: sequence records, scaffolds, and contigs
//! - [`parsing`]: FASTA reader with residue validation
//! - [`stats`]: contig splitting, percentile tables, and the assembly pipeline
//! - [`cli`]: command-line interface implementation
//! - [`utils`]: residue alphabet helpers

pub mod cli;
pub mod core;
pub mod parsing;
pub mod stats;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::scaffold::{Contig, Scaffold};
pub use crate::core::sequence::SequenceRecord;
pub use parsing::fasta::{FastaReader, ParseError};
pub use stats::engine::{Assembly, AssemblyReport};
pub use stats::percentile::{PercentileRow, SizeReport, Thresholds};
