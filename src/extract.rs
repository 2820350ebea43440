/// Which input a position of `A ++ [separator] ++ B` comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
  First,
  Separator,
  Second,
}

impl Origin {
  /// `first_len` is the position of the separator
  pub fn of(p: usize, first_len: usize) -> Self {
    return match p.cmp(&first_len) {
      std::cmp::Ordering::Less => Origin::First,
      std::cmp::Ordering::Equal => Origin::Separator,
      std::cmp::Ordering::Greater => Origin::Second,
    };
  }
}

/// Longest common prefix among suffix-array neighbours that start in different inputs,
/// which is the length of the longest common substring of A (`first_len` symbols) and
/// B (`second_len` symbols). Returns 0 if no such pair exists.
pub fn longest_cross_lcp(sa: &[usize], lcp: &[usize], first_len: usize, second_len: usize) -> usize {
  let total = first_len + second_len + 1;
  debug_assert_eq!(total, sa.len());
  debug_assert_eq!(total, lcp.len());

  // rank 0 is the separator, which shares no prefix with anything
  let mut best = 0;
  for r in 1..total.saturating_sub(1) {
    let here = Origin::of(sa[r], first_len);
    let next = Origin::of(sa[r + 1], first_len);
    if here == next {
      continue;
    }
    best = best.max(lcp[r]);
  }
  best
}
