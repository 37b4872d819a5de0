//! Symbol sets used to generate and resample genomes.

use super::types::Symbol;
use crate::error::{EvolveError, Result};
use rand::Rng;

/// Printable characters of the default text alphabet.
const TEXT_SYMBOLS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ 1234567890, .-;:_!\"#%&/()=?@${[]}";

/// A non-empty set of symbols.
///
/// Used both for the initial random genome and for the replacement draws of
/// mutation. Duplicated symbols are kept and simply raise their sampling
/// probability.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::Alphabet;
///
/// let dna = Alphabet::new(vec!['A', 'C', 'G', 'T']).unwrap();
/// assert_eq!(dna.len(), 4);
///
/// assert!(Alphabet::<char>::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet<T> {
    symbols: Vec<T>,
}

impl<T: Symbol> Alphabet<T> {
    /// Creates an alphabet from the given symbols.
    ///
    /// # Errors
    /// [`EvolveError::DegenerateAlphabet`] if `symbols` is empty.
    pub fn new(symbols: Vec<T>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(EvolveError::DegenerateAlphabet);
        }
        Ok(Self { symbols })
    }

    /// Draws one symbol uniformly at random.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> T {
        self.symbols[rng.random_range(0..self.symbols.len())].clone()
    }

    /// Draws `length` symbols uniformly, with replacement.
    pub fn sample_many<R: Rng>(&self, length: usize, rng: &mut R) -> Vec<T> {
        (0..length).map(|_| self.sample(rng)).collect()
    }

    /// Returns the symbols in insertion order.
    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }

    /// Number of symbols (always at least 1).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always `false`; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns `true` if `symbol` is part of the alphabet.
    pub fn contains(&self, symbol: &T) -> bool {
        self.symbols.contains(symbol)
    }
}

impl Alphabet<char> {
    /// Default printable-character alphabet for text genomes.
    ///
    /// Latin letters, digits, space and common punctuation.
    pub fn text() -> Self {
        Self {
            symbols: TEXT_SYMBOLS.chars().collect(),
        }
    }
}

impl Alphabet<u8> {
    /// The `{0, 1}` alphabet for bit-string genomes.
    pub fn binary() -> Self {
        Self {
            symbols: vec![0, 1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::random::create_rng;

    #[test]
    fn test_empty_alphabet_rejected() {
        assert_eq!(
            Alphabet::<u8>::new(Vec::new()),
            Err(EvolveError::DegenerateAlphabet)
        );
    }

    #[test]
    fn test_text_alphabet_covers_hello_world() {
        let alphabet = Alphabet::text();
        assert!("Hello World!!!".chars().all(|c| alphabet.contains(&c)));
        assert!(!alphabet.contains(&'\n'));
    }

    #[test]
    fn test_sample_stays_in_alphabet() {
        let alphabet = Alphabet::new(vec!["red", "green", "blue"]).unwrap();
        let mut rng = create_rng(42);
        for symbol in alphabet.sample_many(200, &mut rng) {
            assert!(alphabet.contains(&symbol));
        }
    }

    #[test]
    fn test_sample_is_roughly_uniform() {
        let alphabet = Alphabet::binary();
        let mut rng = create_rng(7);
        let ones = alphabet
            .sample_many(10_000, &mut rng)
            .into_iter()
            .filter(|&b| b == 1)
            .count();
        assert!(
            (4_500..5_500).contains(&ones),
            "expected about half ones, got {ones}"
        );
    }

    #[test]
    fn test_single_symbol_alphabet() {
        let alphabet = Alphabet::new(vec!['x']).unwrap();
        let mut rng = create_rng(1);
        assert_eq!(alphabet.sample_many(5, &mut rng), vec!['x'; 5]);
    }
}
