//! Parsers for assembly input.
//!
//! Only FASTA is supported. [`fasta::FastaReader`] reads `>`-delimited records
//! from any [`std::io::BufRead`] source and validates residues as it goes.
//!
//! ## Example
//!
//! ```rust
//! use scaffold_stats::parsing::fasta::FastaReader;
//! use std::io::Cursor;
//!
//! let mut reader = FastaReader::new(Cursor::new(">s1\nACGTNNNNACGT\n>s2\nACGT\n"));
//! assert_eq!(reader.count_records().unwrap(), 2);
//!
//! let record = reader.read_sequence().unwrap().unwrap();
//! assert_eq!(record.name, "s1");
//! assert_eq!(record.length(), 12);
//! ```

pub mod fasta;
