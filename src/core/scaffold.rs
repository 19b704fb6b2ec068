use std::ops::Range;

use serde::Serialize;

use crate::core::sequence::SequenceRecord;

/// A maximal gap-free run within one scaffold.
///
/// A scaffold made only of gaps (or with no residues at all) still
/// contributes a single contig of length zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contig {
    pub length: u64,
}

impl Contig {
    pub fn new(length: u64) -> Self {
        Self { length }
    }
}

/// A FASTA record together with the contigs derived from its residues.
///
/// The residues themselves are released once the contigs are known; the
/// contig lengths are never recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaffold {
    /// Header name from the FASTA record
    pub name: String,

    /// Validated residue count
    pub length: u64,

    /// Indices of this scaffold's contigs in the assembly-wide contig list,
    /// in the order they occur along the scaffold
    pub contigs: Range<usize>,
}

impl Scaffold {
    pub fn new(record: &SequenceRecord, contigs: Range<usize>) -> Self {
        Self {
            name: record.name.clone(),
            length: record.length(),
            contigs,
        }
    }

    /// Number of contigs this scaffold was split into
    #[must_use]
    pub fn contig_count(&self) -> usize {
        self.contigs.len()
    }

    /// Contigs belonging to this scaffold, resolved against the shared list
    #[must_use]
    pub fn contigs_in<'a>(&self, all: &'a [Contig]) -> &'a [Contig] {
        &all[self.contigs.clone()]
    }

    /// Bases not covered by any contig, i.e. the gap characters
    #[must_use]
    pub fn gap_length(&self, all: &[Contig]) -> u64 {
        let covered: u64 = self.contigs_in(all).iter().map(|c| c.length).sum();
        self.length - covered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_resolves_its_contigs() {
        let all = vec![Contig::new(10), Contig::new(4), Contig::new(4), Contig::new(7)];
        let record = SequenceRecord::new("scf2", b"ACGTNNNNACGT".to_vec());
        let scaffold = Scaffold::new(&record, 1..3);

        assert_eq!(scaffold.name, "scf2");
        assert_eq!(scaffold.length, 12);
        assert_eq!(scaffold.contig_count(), 2);
        assert_eq!(scaffold.contigs_in(&all), &[Contig::new(4), Contig::new(4)]);
        assert_eq!(scaffold.gap_length(&all), 4);
    }
}
