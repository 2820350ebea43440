use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LcsError {
  /// The raw alphabet has no free ordinal between the zero sentinel and the smallest symbol.
  #[error("no separator below the smallest ordinal {min}: raw alphabets need every ordinal >= 2")]
  NoSeparator { min: u32 },
  #[error("combined length of {first} and {second} symbols does not fit the index type")]
  LengthOverflow { first: usize, second: usize },
}
