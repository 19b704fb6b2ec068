use serde::Serialize;

/// One FASTA record after residue validation.
///
/// `residues` only holds bytes that passed the alphabet check, so its length
/// is the validated sequence length rather than the raw payload size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceRecord {
    /// Full header line after `>`, up to the first line terminator
    pub name: String,

    /// Validated residues, case preserved, uracil normalized to thymine
    #[serde(skip)]
    pub residues: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, residues: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            residues,
        }
    }

    /// Number of validated residues
    #[must_use]
    pub fn length(&self) -> u64 {
        self.residues.len() as u64
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}
