// Kasai et al., "Linear-Time Longest-Common-Prefix Computation in Suffix Arrays"

/// Returns the LCP array of `text` for its suffix array `sa`.
///
/// `lcp[r]` is the length of the longest common prefix of the suffixes at `sa[r]` and
/// `sa[r + 1]`; the last entry has no successor and stays 0.
/// Runtime O(n): the running match length drops by at most one per text position.
pub fn lcp_array<A>(text: &[A], sa: &[usize]) -> Vec<usize>
where A: Eq
{
  let n = text.len();
  debug_assert_eq!(n, sa.len());

  let mut rank = vec![0; n];
  for (r, &p) in sa.iter().enumerate() {
    rank[p] = r;
  }

  let mut lcp = vec![0; n];
  let mut k = 0;
  for i in 0..n {
    if rank[i] + 1 == n {
      k = 0;
      continue;
    }
    let j = sa[rank[i] + 1];
    while i + k < n && j + k < n && text[i + k] == text[j + k] {
      k += 1;
    }
    lcp[rank[i]] = k;
    k = k.saturating_sub(1);
  }
  lcp
}
