//! Splitting scaffolds into contigs at gap runs.

use crate::utils::validation::is_gap;

/// Split a residue string into contig lengths.
///
/// Scans left to right: skip a (possibly empty) run of gap characters, then
/// measure the following run of non-gap characters up to the next gap or the
/// end. Each measured run is one contig. The scan always runs at least once,
/// so input without any non-gap character (all gaps, or empty) yields a
/// single contig of length zero.
///
/// Run lengths count every non-gap byte, whether or not it is a nucleotide.
///
/// # Examples
///
/// ```
/// use scaffold_stats::stats::splitter::split_contigs;
///
/// assert_eq!(split_contigs(b"ACGTNNNNACGT"), vec![4, 4]);
/// assert_eq!(split_contigs(b"NNACnGTTN"), vec![2, 3]);
/// assert_eq!(split_contigs(b"NNNN"), vec![0]);
/// ```
#[must_use]
pub fn split_contigs(residues: &[u8]) -> Vec<u64> {
    let mut contigs = Vec::new();
    let mut pos = 0;
    loop {
        pos += gap_run(&residues[pos..]);
        let run = residues[pos..].iter().take_while(|&&c| !is_gap(c)).count();
        contigs.push(run as u64);
        pos += run;
        pos += gap_run(&residues[pos..]);
        if pos >= residues.len() {
            break;
        }
    }
    contigs
}

fn gap_run(residues: &[u8]) -> usize {
    residues.iter().take_while(|&&c| is_gap(c)).count()
}
