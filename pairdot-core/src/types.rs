/// Symbol inserted into an aligned sequence opposite a residue of the other sequence
pub const GAP_SYMBOL: char = '-';

/// A named sequence of symbols. Each `char` is one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub id: String,
    pub residues: String,
}

impl Sequence {
    pub fn new(id: impl Into<String>, residues: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            residues: residues.into(),
        }
    }

    /// Number of symbols, not bytes
    pub fn len(&self) -> usize {
        self.residues.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.residues
    }

    /// Symbols in order, one per `char`
    pub fn symbols(&self) -> Vec<char> {
        self.residues.chars().collect()
    }

    /// Copy with surrounding whitespace removed and symbols uppercased
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id.clone(),
            residues: self.residues.trim().to_uppercase(),
        }
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.residues
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.residues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_basics() {
        let seq = Sequence::new("s1", "GATTACA");
        assert_eq!(seq.len(), 7);
        assert!(!seq.is_empty());
        assert_eq!(seq.as_str(), "GATTACA");
        assert_eq!(seq.to_string(), "GATTACA");
    }

    #[test]
    fn test_length_counts_symbols() {
        let seq = Sequence::new("s1", "éAß");
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.symbols(), vec!['é', 'A', 'ß']);
    }

    #[test]
    fn test_normalized() {
        let seq = Sequence::new("s1", "  gaTTaca\n");
        let norm = seq.normalized();
        assert_eq!(norm.id, "s1");
        assert_eq!(norm.as_str(), "GATTACA");

        assert_eq!(Sequence::new("u", " éa ").normalized().as_str(), "ÉA");

        let blank = Sequence::new("blank", " \t\n");
        assert!(blank.normalized().is_empty());
    }
}
