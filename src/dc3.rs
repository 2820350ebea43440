//! Suffix array construction with the DC3 (skew) algorithm of Kärkkäinen and Sanders.
//!
//! Positions are split by their residue modulo 3. The sample positions (`i % 3 != 0`) are
//! sorted first, recursively on a text of triple names if needed; the remaining positions are
//! then sorted with one radix pass and merged with the sample in linear time.

use log::trace;

use crate::common::{PaddedSequence, leq_pair, leq_triple, radix_pass};

/// Returns the suffix array of `text`: the positions `0..text.len()` ordered by the suffix
/// starting there.
///
/// All symbols of `text` must lie in `1..=alphabet`. Runtime O(n + alphabet).
pub fn suffix_array(text: &PaddedSequence, alphabet: usize) -> Vec<usize> {
  let n = text.len();
  if n == 0 {
    return vec![];
  }
  debug_assert!(text.symbols().iter().all(|&c| 1 <= c && c <= alphabet));

  let t = text.padded();
  let n0 = n.div_ceil(3);
  let n1 = (n + 1) / 3;
  let n2 = n / 3;
  let n02 = n0 + n2;

  // sample positions; for n % 3 == 1 this includes the empty dummy suffix at position n
  let sample: Vec<usize> = (0..n + (n0 - n1)).filter(|i| i % 3 != 0).collect();
  debug_assert_eq!(n02, sample.len());

  // sort by the leading triple, least significant symbol first
  let sorted = radix_pass(t, &sample, 2, alphabet);
  let sorted = radix_pass(t, &sorted, 1, alphabet);
  let mut sample_sa = radix_pass(t, &sorted, 0, alphabet);

  // name the triples: equal triples share a name, names start at 1
  // positions 3k+1 go to slot k, positions 3k+2 go to slot n0+k
  let mut names = PaddedSequence::zeroed(n02);
  let mut name = 0;
  let mut last = None;
  for &p in &sample_sa {
    let triple = (t[p], t[p + 1], t[p + 2]);
    if last != Some(triple) {
      name += 1;
      last = Some(triple);
    }
    names[slot(p, n0)] = name;
  }
  trace!("dc3 level: n = {n}, alphabet = {alphabet}, {name} names for {n02} samples");

  // `names` becomes the 1-based rank of each sample suffix
  if name < n02 {
    sample_sa = suffix_array(&names, name);
    for (rank, &s) in sample_sa.iter().enumerate() {
      names[s] = rank + 1;
    }
  } else {
    for (s, &rank) in names.symbols().iter().enumerate() {
      sample_sa[rank - 1] = s;
    }
  }
  let rank = names.padded();

  // the order of position 3k follows from (t[3k], rank of 3k+1)
  let non_sample: Vec<usize> = sample_sa.iter().filter(|&&s| s < n0).map(|&s| 3 * s).collect();
  let non_sample_sa = radix_pass(t, &non_sample, 0, alphabet);

  // merge; the dummy (if any) is the smallest sample suffix and is skipped
  let mut sa = Vec::with_capacity(n);
  let mut u = n0 - n1;
  let mut v = 0;
  while u < n02 && v < n0 {
    let s = sample_sa[u];
    let i = position(s, n0);
    let j = non_sample_sa[v];
    let sample_first = if s < n0 {
      leq_pair(t[i], rank[s + n0], t[j], rank[j / 3])
    } else {
      leq_triple(t[i], t[i + 1], rank[s - n0 + 1], t[j], t[j + 1], rank[j / 3 + n0])
    };
    if sample_first {
      sa.push(i);
      u += 1;
    } else {
      sa.push(j);
      v += 1;
    }
  }
  sa.extend(sample_sa[u..].iter().map(|&s| position(s, n0)));
  sa.extend_from_slice(&non_sample_sa[v..]);

  debug_assert_eq!(n, sa.len());
  return sa;
}

// index of sample position `p` in the name array
#[inline]
fn slot(p: usize, n0: usize) -> usize {
  if p % 3 == 1 { p / 3 } else { p / 3 + n0 }
}

// inverse of `slot`
#[inline]
fn position(s: usize, n0: usize) -> usize {
  if s < n0 { 3 * s + 1 } else { 3 * (s - n0) + 2 }
}

#[cfg(test)]
mod tests {
  use super::*;
  use itertools::Itertools;
  use rand::{Rng, SeedableRng, rngs::StdRng};
  use test_case::test_case;

  fn padded(s: &str) -> (PaddedSequence, usize) {
    let text = PaddedSequence::from_symbols(s.bytes().map(usize::from));
    (text, 255)
  }

  // sa must be a permutation whose suffixes are in non-decreasing order
  fn assert_valid(symbols: &[usize], sa: &[usize]) {
    assert_eq!((0..symbols.len()).collect_vec(), sa.iter().copied().sorted().collect_vec());
    for (&x, &y) in sa.iter().tuple_windows() {
      assert!(symbols[x..] < symbols[y..], "suffix {x} is not before suffix {y}");
    }
  }

  #[test_case("banana", vec![5, 3, 1, 0, 4, 2])]
  #[test_case("mississippi", vec![10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2])]
  #[test_case("yabbadabbado", vec![1, 6, 4, 9, 3, 8, 2, 7, 5, 10, 11, 0])]
  #[test_case("a", vec![0])]
  #[test_case("ba", vec![1, 0])]
  #[test_case("", vec![])]
  fn known(s: &str, expected: Vec<usize>) {
    let (text, alphabet) = padded(s);
    assert_eq!(expected, suffix_array(&text, alphabet));
  }

  #[test_case(1)]
  #[test_case(2)]
  #[test_case(3)]
  #[test_case(4)]
  #[test_case(5)]
  #[test_case(100)]
  #[test_case(1000)]
  fn unary(n: usize) {
    // every level recurses since all triples are equal
    let text = PaddedSequence::from_symbols(std::iter::repeat_n(1, n));
    assert_eq!((0..n).rev().collect_vec(), suffix_array(&text, 1));
  }

  #[test]
  fn random_texts() {
    for seed in 0..300 {
      let mut rng = StdRng::seed_from_u64(seed);
      let len = rng.gen_range(0..200);
      let alphabet = rng.gen_range(1..5);
      let symbols = (0..len).map(|_| rng.gen_range(1..=alphabet)).collect_vec();
      let text = PaddedSequence::from_symbols(symbols.iter().copied());
      assert_valid(&symbols, &suffix_array(&text, alphabet));
    }
  }

  #[test]
  fn periodic_text() {
    let symbols = "abcab".repeat(200).bytes().map(usize::from).collect_vec();
    let text = PaddedSequence::from_symbols(symbols.iter().copied());
    assert_valid(&symbols, &suffix_array(&text, 255));
  }
}
