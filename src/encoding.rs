use std::iter;

use itertools::Itertools;
use log::debug;

use crate::{
  Alphabet,
  LcsError,
  common::{PADDING, PaddedSequence},
};

/// `A ++ [separator] ++ B` over an integer alphabet ready for radix sorting.
///
/// Every real symbol (separator included) is `>= 1`, the separator is strictly smaller than
/// every symbol of A and B, and `text` carries the zero sentinels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedPair {
  pub text: PaddedSequence,
  /// length of A, which is also the position of the separator
  pub first_len: usize,
  pub second_len: usize,
  /// largest symbol value occurring in `text`
  pub alphabet: usize,
}

impl EncodedPair {
  pub fn separator(&self) -> usize {
    self.first_len
  }
}

pub fn encode(a: &[u32], b: &[u32], alphabet: Alphabet) -> Result<EncodedPair, LcsError> {
  a.len()
    .checked_add(b.len())
    .and_then(|len| len.checked_add(1 + PADDING))
    .ok_or(LcsError::LengthOverflow { first: a.len(), second: b.len() })?;

  let (symbols, max) = match alphabet {
    Alphabet::Compact => encode_compact(a, b),
    Alphabet::Raw => encode_raw(a, b)?,
  };
  debug!("encoded {} + 1 + {} symbols over alphabet {:?} of size {}", a.len(), b.len(), alphabet, max);

  return Ok(EncodedPair {
    text: PaddedSequence::from_symbols(symbols),
    first_len: a.len(),
    second_len: b.len(),
    alphabet: max,
  });
}

// ranks the distinct ordinals densely from 2 upwards, the separator becomes 1
fn encode_compact(a: &[u32], b: &[u32]) -> (Vec<usize>, usize) {
  let Some((&min, &max)) = a.iter().chain(b).minmax().into_option() else {
    return (vec![1], 1);
  };

  let ordinals = a.iter().chain(b).copied().collect_vec();
  let (mut symbols, largest) = if u64::from(max - min) <= 2 * ordinals.len() as u64 {
    rank_by_table(&ordinals, min, max)
  } else {
    rank_by_sorting(&ordinals)
  };
  symbols.insert(a.len(), 1);
  (symbols, largest)
}

// presence table over [min, max], only used when that range is O(|ordinals|)
fn rank_by_table(ordinals: &[u32], min: u32, max: u32) -> (Vec<usize>, usize) {
  let mut rank = vec![0usize; (max - min) as usize + 1];
  for &x in ordinals {
    rank[(x - min) as usize] = 1;
  }
  let mut next = 2;
  for r in rank.iter_mut().filter(|r| **r != 0) {
    *r = next;
    next += 1;
  }

  let symbols = ordinals.iter().map(|&x| rank[(x - min) as usize]).collect();
  (symbols, next - 1)
}

// sparse ordinals: rank by position among the sorted distinct values
fn rank_by_sorting(ordinals: &[u32]) -> (Vec<usize>, usize) {
  let distinct = ordinals.iter().copied().sorted_unstable().dedup().collect_vec();
  let symbols = ordinals.iter()
    .map(|x| distinct.partition_point(|d| d < x) + 2)
    .collect();
  (symbols, distinct.len() + 1)
}

// keeps the ordinals, the separator is one less than the smallest of them
// the alphabet size is the largest ordinal, so wide ordinals mean wide count tables
fn encode_raw(a: &[u32], b: &[u32]) -> Result<(Vec<usize>, usize), LcsError> {
  let (separator, max) = match a.iter().chain(b).minmax().into_option() {
    None => (1, 1),
    Some((&min, _)) if min < 2 => return Err(LcsError::NoSeparator { min }),
    Some((&min, &max)) => (min as usize - 1, max as usize),
  };

  let symbols = a.iter().map(|&x| x as usize)
    .chain(iter::once(separator))
    .chain(b.iter().map(|&x| x as usize))
    .collect();
  Ok((symbols, max))
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_case::test_case;

  fn ordinals(s: &str) -> Vec<u32> {
    s.chars().map(u32::from).collect()
  }

  #[test_case("ab", "ba", vec![2, 3, 1, 3, 2], 3)]
  #[test_case("", "", vec![1], 1 ; "only the separator")]
  #[test_case("zz", "", vec![2, 2, 1], 2)]
  #[test_case("a~", "ma", vec![2, 4, 1, 3, 2], 4 ; "gaps in the ordinals are closed")]
  fn compact(a: &str, b: &str, expected: Vec<usize>, alphabet: usize) {
    let encoded = encode(&ordinals(a), &ordinals(b), Alphabet::Compact).unwrap();
    assert_eq!(expected, encoded.text.symbols());
    assert_eq!(alphabet, encoded.alphabet);
    assert_eq!(a.len(), encoded.separator());
    assert_eq!(&[0, 0, 0], &encoded.text.padded()[encoded.text.len()..]);
  }

  #[test_case("ab", "ba", vec![97, 98, 96, 98, 97], 98)]
  #[test_case("", "", vec![1], 1 ; "only the separator")]
  #[test_case("", "c", vec![98, 99], 99)]
  fn raw(a: &str, b: &str, expected: Vec<usize>, alphabet: usize) {
    let encoded = encode(&ordinals(a), &ordinals(b), Alphabet::Raw).unwrap();
    assert_eq!(expected, encoded.text.symbols());
    assert_eq!(alphabet, encoded.alphabet);
  }

  #[test_case(&[5, 1], &[7] ; "ordinal one")]
  #[test_case(&[], &[0, 3] ; "ordinal zero")]
  fn raw_without_separator(a: &[u32], b: &[u32]) {
    let min = *a.iter().chain(b).min().unwrap();
    assert_eq!(Err(LcsError::NoSeparator { min }), encode(a, b, Alphabet::Raw));
  }

  #[test_case(&[0, 4_000_000_000], &[u32::MAX, 4_000_000_000], vec![2, 3, 1, 4, 3], 4 ; "far apart")]
  #[test_case(&[u32::MAX], &[u32::MAX - 1, 0], vec![4, 1, 3, 2], 4 ; "both ends")]
  #[test_case(&[7, 1_000_000, 7], &[], vec![2, 3, 2, 1], 3 ; "range wider than the input")]
  fn compact_wide_ordinals(a: &[u32], b: &[u32], expected: Vec<usize>, alphabet: usize) {
    let encoded = encode(a, b, Alphabet::Compact).unwrap();
    assert_eq!(expected, encoded.text.symbols());
    assert_eq!(alphabet, encoded.alphabet);
  }

  #[test]
  fn table_and_sorting_rank_alike() {
    let ordinals = [9, 4, 4, 12, 9, 5];
    assert_eq!((vec![4, 2, 2, 5, 4, 3], 5), rank_by_table(&ordinals, 4, 12));
    assert_eq!((vec![4, 2, 2, 5, 4, 3], 5), rank_by_sorting(&ordinals));
  }

  #[test]
  fn compact_accepts_small_ordinals() {
    let encoded = encode(&[0, 1], &[1, 0], Alphabet::Compact).unwrap();
    assert_eq!(&[2, 3, 1, 3, 2], encoded.text.symbols());
  }
}
