//! Error type for entropy computations

use std::fmt;

/// Errors reported for invalid inputs
///
/// Every computation in this crate is deterministic, so an error always means
/// the input has to be corrected; there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntropyError {
    /// The number of bins was zero
    NoBins,
    /// Entropy was requested for an empty or all-zero count vector
    EmptyCounts,
    /// A partition contained a zero part
    ZeroPart,
    /// A partition has more non-zero parts than there are bins
    TooManyParts { parts: usize, bins: u64 },
    /// The counts sum to more than `u64::MAX` elements
    TotalOverflow,
    /// A partition string could not be parsed
    Parse(String),
}

impl fmt::Display for EntropyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBins => write!(f, "Number of bins must be at least 1"),
            Self::EmptyCounts => write!(f, "Counts must sum to a positive total"),
            Self::ZeroPart => write!(f, "Partition parts must be positive"),
            Self::TooManyParts { parts, bins } => {
                write!(f, "Partition has {parts} non-zero parts but only {bins} bins")
            }
            Self::TotalOverflow => write!(f, "Total number of elements exceeds {}", u64::MAX),
            Self::Parse(input) => write!(f, "Invalid partition: {input}"),
        }
    }
}

impl std::error::Error for EntropyError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            EntropyError::NoBins.to_string(),
            "Number of bins must be at least 1"
        );
        assert_eq!(
            EntropyError::TooManyParts { parts: 3, bins: 2 }.to_string(),
            "Partition has 3 non-zero parts but only 2 bins"
        );
        assert_eq!(
            EntropyError::TotalOverflow.to_string(),
            "Total number of elements exceeds 18446744073709551615"
        );
        assert_eq!(
            EntropyError::Parse("2,x".to_string()).to_string(),
            "Invalid partition: 2,x"
        );
    }
}
