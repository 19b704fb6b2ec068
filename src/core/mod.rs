//! Core data types for assembly size statistics.
//!
//! - [`SequenceRecord`](sequence::SequenceRecord): a validated FASTA record
//! - [`Scaffold`](scaffold::Scaffold): a record's name and length plus the
//!   index range of its contigs
//! - [`Contig`](scaffold::Contig): a maximal gap-free run inside a scaffold
//!
//! All contigs of an assembly live in one flat list; each scaffold refers to
//! its own contigs by index range so per-scaffold order is preserved.

pub mod scaffold;
pub mod sequence;
