use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, info};

use crate::core::scaffold::{Contig, Scaffold};
use crate::core::sequence::SequenceRecord;
use crate::parsing::fasta::{FastaReader, ParseError};
use crate::stats::percentile::{SizeReport, Thresholds};
use crate::stats::splitter::split_contigs;

/// All scaffolds of an assembly and the contigs derived from them.
///
/// Contigs are stored in one flat list in input order; each scaffold holds
/// the index range of its own contigs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub scaffolds: Vec<Scaffold>,
    pub contigs: Vec<Contig>,
}

impl Assembly {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every record from `reader`, splitting each into contigs.
    ///
    /// `expected` is a record count hint used to size the scaffold list up
    /// front; reading still continues until the stream is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the first `ParseError` hit while reading; no partial assembly
    /// is returned.
    pub fn from_reader<R: BufRead>(
        reader: &mut FastaReader<R>,
        expected: Option<usize>,
    ) -> Result<Self, ParseError> {
        let mut assembly = Self::new();
        if let Some(n) = expected {
            assembly.scaffolds.try_reserve_exact(n)?;
        }

        while let Some(record) = reader.read_sequence()? {
            assembly.add_record(&record)?;
        }

        info!(
            "Read {} scaffolds ({} bp) and {} contigs ({} bp)",
            assembly.scaffolds.len(),
            assembly.scaffold_total(),
            assembly.contigs.len(),
            assembly.contig_total()
        );
        Ok(assembly)
    }

    /// Split one record into contigs and append it as a scaffold.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Allocation` if the contig or scaffold list cannot grow.
    pub fn add_record(&mut self, record: &SequenceRecord) -> Result<(), ParseError> {
        let lengths = split_contigs(&record.residues);
        self.contigs.try_reserve(lengths.len())?;
        self.scaffolds.try_reserve(1)?;

        let start = self.contigs.len();
        self.contigs.extend(lengths.into_iter().map(Contig::new));
        let scaffold = Scaffold::new(record, start..self.contigs.len());

        debug!(
            "Scaffold '{}': {} bp in {} contigs",
            scaffold.name,
            scaffold.length,
            scaffold.contig_count()
        );
        self.scaffolds.push(scaffold);
        Ok(())
    }

    #[must_use]
    pub fn scaffold_lengths(&self) -> Vec<u64> {
        self.scaffolds.iter().map(|s| s.length).collect()
    }

    #[must_use]
    pub fn contig_lengths(&self) -> Vec<u64> {
        self.contigs.iter().map(|c| c.length).collect()
    }

    #[must_use]
    pub fn scaffold_total(&self) -> u64 {
        self.scaffolds.iter().map(|s| s.length).sum()
    }

    #[must_use]
    pub fn contig_total(&self) -> u64 {
        self.contigs.iter().map(|c| c.length).sum()
    }

    /// Name, length, contig count and gap size of every scaffold in input order
    #[must_use]
    pub fn scaffold_summaries(&self) -> Vec<ScaffoldSummary> {
        self.scaffolds
            .iter()
            .map(|s| ScaffoldSummary {
                name: s.name.clone(),
                length: s.length,
                contig_count: s.contig_count(),
                gap_size: s.gap_length(&self.contigs),
            })
            .collect()
    }

    /// Build the scaffold and contig percentile tables.
    #[must_use]
    pub fn report(&self, thresholds: &Thresholds, per_scaffold: bool) -> AssemblyReport {
        AssemblyReport {
            scaffolds: SizeReport::from_lengths(&self.scaffold_lengths(), thresholds),
            contigs: SizeReport::from_lengths(&self.contig_lengths(), thresholds),
            per_scaffold: per_scaffold.then(|| self.scaffold_summaries()),
        }
    }
}

/// Per-scaffold breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldSummary {
    pub name: String,
    pub length: u64,
    pub contig_count: usize,
    pub gap_size: u64,
}

/// Both percentile tables for an assembly
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyReport {
    pub scaffolds: SizeReport,
    pub contigs: SizeReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_scaffold: Option<Vec<ScaffoldSummary>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn assemble(input: &str) -> Assembly {
        let mut reader = FastaReader::new(Cursor::new(input.as_bytes()));
        let expected = reader.count_records().unwrap();
        Assembly::from_reader(&mut reader, Some(expected)).unwrap()
    }

    #[test]
    fn test_scaffolds_and_contigs() {
        let assembly = assemble(">s1\nACGTNNNNACGT\n>s2\nACGT\n");

        assert_eq!(assembly.scaffold_lengths(), vec![12, 4]);
        assert_eq!(assembly.contig_lengths(), vec![4, 4, 4]);
        assert_eq!(assembly.scaffolds[0].contigs, 0..2);
        assert_eq!(assembly.scaffolds[1].contigs, 2..3);
        assert_eq!(assembly.contig_total(), 12);
        assert_eq!(assembly.scaffold_total(), 16);
    }

    #[test]
    fn test_report_final_rows() {
        let report = assemble(">s1\nACGTNNNNACGT\n>s2\nACGT\n").report(&Thresholds::default(), false);

        let last = report.scaffolds.rows.last().unwrap();
        assert_eq!(last.rank, 2);
        assert_eq!(last.cumulative_size, 16);

        let last = report.contigs.rows.last().unwrap();
        assert_eq!(last.rank, 3);
        assert_eq!(last.cumulative_size, 12);
        assert!(report.per_scaffold.is_none());
    }

    #[test]
    fn test_all_gap_scaffold() {
        let assembly = assemble(">s\nNNNN\n");
        assert_eq!(assembly.scaffold_lengths(), vec![4]);
        assert_eq!(assembly.contig_lengths(), vec![0]);

        let summaries = assembly.scaffold_summaries();
        assert_eq!(summaries[0].contig_count, 1);
        assert_eq!(summaries[0].gap_size, 4);
    }

    #[test]
    fn test_empty_input() {
        let assembly = assemble("");
        assert!(assembly.scaffolds.is_empty());
        assert!(assembly.contigs.is_empty());

        let report = assembly.report(&Thresholds::default(), true);
        assert_eq!(report.scaffolds.total_size, 0);
        assert!(report.scaffolds.rows.is_empty());
        assert!(report.contigs.rows.is_empty());
        assert_eq!(report.per_scaffold, Some(Vec::new()));
    }

    #[test]
    fn test_per_scaffold_summaries() {
        let assembly = assemble(">a b\nNNACGTnnAC\n>c\nAAAA\n");
        let summaries = assembly.scaffold_summaries();

        assert_eq!(
            summaries,
            vec![
                ScaffoldSummary {
                    name: "a b".to_string(),
                    length: 10,
                    contig_count: 2,
                    gap_size: 4,
                },
                ScaffoldSummary {
                    name: "c".to_string(),
                    length: 4,
                    contig_count: 1,
                    gap_size: 0,
                },
            ]
        );
    }

    #[test]
    fn test_without_count_hint() {
        let mut reader = FastaReader::new(Cursor::new(b">a\nAC\n>b\nG\n".as_slice()));
        let assembly = Assembly::from_reader(&mut reader, None).unwrap();
        assert_eq!(assembly.scaffolds.len(), 2);
    }
}
