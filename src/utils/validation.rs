//! Residue alphabet and gap classification for DNA sequences.

/// IUPAC nucleotide codes accepted in DNA mode, plus the unknown (`?`) and
/// alignment gap (`-`) symbols. Letters are accepted in either case.
pub const DNA_ALPHABET: &[u8] = b"TCAGUYRMKSWHBVDN?-";

/// Lookup table indexed by byte value; `true` for bytes in [`DNA_ALPHABET`].
static DNA_RESIDUES: [bool; 256] = build_residue_table(DNA_ALPHABET);

const fn build_residue_table(alphabet: &[u8]) -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < alphabet.len() {
        let c = alphabet[i];
        table[c as usize] = true;
        if c.is_ascii_alphabetic() {
            table[c.to_ascii_lowercase() as usize] = true;
        }
        i += 1;
    }
    table
}

/// Check whether a byte is a valid DNA residue.
///
/// # Examples
///
/// ```
/// use scaffold_stats::utils::validation::is_valid_residue;
///
/// assert!(is_valid_residue(b'A'));
/// assert!(is_valid_residue(b'n'));
/// assert!(is_valid_residue(b'-'));
/// assert!(!is_valid_residue(b'X'));
/// assert!(!is_valid_residue(b'*'));
/// ```
#[must_use]
#[inline]
pub fn is_valid_residue(c: u8) -> bool {
    DNA_RESIDUES[c as usize]
}

/// Normalize a valid residue for DNA mode: uracil becomes thymine, case is kept.
#[must_use]
#[inline]
pub fn normalize_residue(c: u8) -> u8 {
    match c {
        b'U' => b'T',
        b'u' => b't',
        _ => c,
    }
}

/// Gap characters delimit contigs within a scaffold
#[must_use]
#[inline]
pub fn is_gap(c: u8) -> bool {
    matches!(c, b'N' | b'n')
}

/// Render a byte for diagnostics, escaping anything that is not printable ASCII.
#[must_use]
pub fn display_byte(c: u8) -> String {
    if c.is_ascii_graphic() {
        (c as char).to_string()
    } else {
        c.escape_ascii().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_both_cases() {
        for &c in DNA_ALPHABET {
            assert!(is_valid_residue(c), "{} should be valid", c as char);
            assert!(is_valid_residue(c.to_ascii_lowercase()));
        }
    }

    #[test]
    fn test_invalid_residues() {
        for c in [b'X', b'x', b'E', b'*', b'.', b'1', b'>', b' ', b'\n', 0xFF] {
            assert!(!is_valid_residue(c), "{c:#x} should be invalid");
        }
    }

    #[test]
    fn test_normalize_uracil() {
        assert_eq!(normalize_residue(b'U'), b'T');
        assert_eq!(normalize_residue(b'u'), b't');
        assert_eq!(normalize_residue(b'a'), b'a');
        assert_eq!(normalize_residue(b'N'), b'N');
    }

    #[test]
    fn test_is_gap() {
        assert!(is_gap(b'N'));
        assert!(is_gap(b'n'));
        assert!(!is_gap(b'-'));
        assert!(!is_gap(b'?'));
        assert!(!is_gap(b'A'));
    }

    #[test]
    fn test_display_byte() {
        assert_eq!(display_byte(b'X'), "X");
        assert_eq!(display_byte(b'\t'), "\\t");
        assert_eq!(display_byte(0xC3), "\\xc3");
    }
}
