//! Length of the longest common substring of two sequences in linear time.
//!
//! The two inputs are concatenated around a unique separator, the suffix array of the
//! concatenation is built with DC3 and its LCP array with Kasai's algorithm. The answer is the
//! largest LCP between suffix-array neighbours that start on different sides of the separator.

use log::debug;

mod common;
pub mod dc3;
pub mod encoding;
mod error;
pub mod extract;
pub mod kasai;
pub mod naive;

pub use common::PaddedSequence;
pub use error::LcsError;

/// A symbol that is compared by its raw ordinal value.
pub trait Ordinal: Copy {
  fn ordinal(self) -> u32;
}

impl Ordinal for u8 {
  fn ordinal(self) -> u32 {
    self.into()
  }
}

impl Ordinal for u16 {
  fn ordinal(self) -> u32 {
    self.into()
  }
}

impl Ordinal for u32 {
  fn ordinal(self) -> u32 {
    self
  }
}

impl Ordinal for char {
  fn ordinal(self) -> u32 {
    self.into()
  }
}

/// How ordinals are turned into the integer alphabet of the suffix array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alphabet {
  /// Distinct ordinals are ranked densely; always has room for the separator.
  #[default]
  Compact,
  /// Ordinals are used unchanged and the separator is one below the smallest of them.
  /// Fails with [`LcsError::NoSeparator`] if some ordinal is below 2.
  ///
  /// The radix count tables get one entry per ordinal up to the largest one, so this is only
  /// meant for small alphabets such as bytes; wide `u32` ordinals need `Compact`.
  Raw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LcsConfig {
  pub alphabet: Alphabet,
  /// answer directly when one input contains the other (linear-time check)
  pub substring_shortcut: bool,
}

impl Default for LcsConfig {
  fn default() -> Self {
    Self {
      alphabet: Alphabet::Compact,
      substring_shortcut: true,
    }
  }
}

impl LcsConfig {
  pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
    self.alphabet = alphabet;
    self
  }

  pub fn with_substring_shortcut(mut self, enabled: bool) -> Self {
    self.substring_shortcut = enabled;
    self
  }
}

pub trait LongestCommonSubstring {
  // length of the longest sequence occurring contiguously in both `a` and `b`
  fn lcs_length<S: Ordinal>(&self, a: &[S], b: &[S]) -> Result<usize, LcsError>;
}

/// The suffix-array based solver. Runtime O(|a| + |b| + alphabet size).
#[derive(Clone, Debug, Default)]
pub struct SuffixArrayLcs {
  config: LcsConfig,
}

impl SuffixArrayLcs {
  pub fn new(config: LcsConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &LcsConfig {
    &self.config
  }
}

impl LongestCommonSubstring for SuffixArrayLcs {
  fn lcs_length<S: Ordinal>(&self, a: &[S], b: &[S]) -> Result<usize, LcsError> {
    let a: Vec<u32> = a.iter().map(|x| x.ordinal()).collect();
    let b: Vec<u32> = b.iter().map(|x| x.ordinal()).collect();

    let encoded = encoding::encode(&a, &b, self.config.alphabet)?;
    let (n, m) = (encoded.first_len, encoded.second_len);
    let symbols = encoded.text.symbols();

    if self.config.substring_shortcut {
      let (first, second) = (&symbols[..n], &symbols[n + 1..]);
      let (shorter, longer) = if n <= m { (first, second) } else { (second, first) };
      if common::contains(longer, shorter) {
        debug!("shortcut: input of length {} is contained in the other", shorter.len());
        return Ok(shorter.len());
      }
    }

    let sa = dc3::suffix_array(&encoded.text, encoded.alphabet);
    let lcp = kasai::lcp_array(symbols, &sa);
    let len = extract::longest_cross_lcp(&sa, &lcp, n, m);
    debug!("longest common substring of {n} and {m} symbols has length {len}");
    return Ok(len);
  }
}

/// [`SuffixArrayLcs`] with the default configuration.
pub fn lcs_length<S: Ordinal>(a: &[S], b: &[S]) -> Result<usize, LcsError> {
  SuffixArrayLcs::default().lcs_length(a, b)
}

/// Like [`lcs_length`], comparing the strings char by char.
pub fn lcs_length_str(a: &str, b: &str) -> Result<usize, LcsError> {
  let a: Vec<char> = a.chars().collect();
  let b: Vec<char> = b.chars().collect();
  lcs_length(&a, &b)
}
