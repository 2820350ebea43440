use std::ops::{Index, IndexMut};

use kmp;

/// Number of zero sentinels stored behind every [`PaddedSequence`].
pub const PADDING: usize = 3;

/// An integer sequence that always carries [`PADDING`] trailing zero sentinels.
///
/// Real symbols are expected to be `>= 1`, so the sentinels compare less than everything
/// and reads up to two positions past the logical end stay in bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedSequence {
  symbols: Vec<usize>,
}

impl PaddedSequence {
  /// `len` zero symbols followed by the sentinels
  pub fn zeroed(len: usize) -> Self {
    Self { symbols: vec![0; len + PADDING] }
  }

  pub fn from_symbols(symbols: impl IntoIterator<Item = usize>) -> Self {
    let mut symbols: Vec<usize> = symbols.into_iter().collect();
    symbols.extend(std::iter::repeat_n(0, PADDING));
    Self { symbols }
  }

  /// logical length, sentinels excluded
  pub fn len(&self) -> usize {
    self.symbols.len() - PADDING
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// the real symbols, without sentinels
  pub fn symbols(&self) -> &[usize] {
    &self.symbols[..self.len()]
  }

  /// the real symbols followed by the sentinels
  pub fn padded(&self) -> &[usize] {
    &self.symbols
  }
}

impl Index<usize> for PaddedSequence {
  type Output = usize;

  fn index(&self, i: usize) -> &usize {
    &self.symbols[i]
  }
}

impl IndexMut<usize> for PaddedSequence {
  // sentinels are read-only
  fn index_mut(&mut self, i: usize) -> &mut usize {
    debug_assert!(i < self.len(), "write into sentinel padding at {i}");
    &mut self.symbols[i]
  }
}

// stable counting sort of the positions in `input` by the key `keys[p + offset]`
// all keys must be <= `alphabet`
// runtime O(|input| + alphabet)
pub fn radix_pass(keys: &[usize], input: &[usize], offset: usize, alphabet: usize) -> Vec<usize> {
  let mut count = vec![0usize; alphabet + 1];
  for &p in input {
    count[keys[p + offset]] += 1;
  }

  let mut sum = 0;
  for c in count.iter_mut() {
    let t = *c;
    *c = sum;
    sum += t;
  }

  let mut output = vec![0; input.len()];
  for &p in input {
    let slot = &mut count[keys[p + offset]];
    output[*slot] = p;
    *slot += 1;
  }
  output
}

// lexicographic <= on pairs and triples of symbols
#[inline]
pub fn leq_pair(a1: usize, a2: usize, b1: usize, b2: usize) -> bool {
  a1 < b1 || (a1 == b1 && a2 <= b2)
}

#[inline]
pub fn leq_triple(a1: usize, a2: usize, a3: usize, b1: usize, b2: usize, b3: usize) -> bool {
  a1 < b1 || (a1 == b1 && leq_pair(a2, a3, b2, b3))
}

// checks whether `pattern` occurs contiguously in `text`
// runtime: linear in |text| + |pattern|
// the empty pattern is contained in every text
pub fn contains<A>(text: &[A], pattern: &[A]) -> bool
where A: Eq
{
  if pattern.is_empty() {
    return true;
  }
  if pattern.len() > text.len() {
    return false;
  }

  let lsp_array = kmp::kmp_table(pattern);

  let mut text_index = 0;
  let mut pattern_index = 0;

  while text_index < text.len() {
    if text[text_index] == pattern[pattern_index] {
      text_index += 1;
      pattern_index += 1;

      if pattern_index == pattern.len() {
        return true;
      }
    } else if pattern_index > 0 {
      pattern_index = lsp_array[pattern_index - 1];
    } else {
      text_index += 1;
    }
  }
  false
}
