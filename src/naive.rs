use crate::*;

/// Quadratic dynamic programming over all pairs of end positions.
///
/// Runtime O(|a|·|b|), memory O(|b|). Serves as the reference for [`SuffixArrayLcs`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveLcs;

impl LongestCommonSubstring for NaiveLcs {
  fn lcs_length<S: Ordinal>(&self, a: &[S], b: &[S]) -> Result<usize, LcsError> {
    // prev[j + 1] is the common suffix length of the previous prefix of a and b[..=j]
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    let mut best = 0;

    for x in a {
      for (j, y) in b.iter().enumerate() {
        cur[j + 1] = if x.ordinal() == y.ordinal() { prev[j] + 1 } else { 0 };
        best = best.max(cur[j + 1]);
      }
      std::mem::swap(&mut prev, &mut cur);
    }
    Ok(best)
  }
}
