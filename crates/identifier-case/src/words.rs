//! Splitting a string into words.

use crate::scan::Scanner;

/// Where to split words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
  /// Only at runs of characters that aren't ASCII letters or digits.
  Separators,
  /// At separators, and also where the case changes: `aB` splits as `a|B`, and `ABc` as `A|Bc`.
  SeparatorsAndCase,
}

/// Returns an iterator over the words in `s`.
///
/// A word is a non-empty run of ASCII letters and digits, in its original case. Everything else,
/// including every non-ASCII character, separates words.
///
/// ```
/// # use identifier_case::{words, Split};
/// let ws: Vec<_> = words("  XMLHttp_request2 ", Split::Separators).collect();
/// assert_eq!(ws, ["XMLHttp", "request2"]);
/// let ws: Vec<_> = words("  XMLHttp_request2 ", Split::SeparatorsAndCase).collect();
/// assert_eq!(ws, ["XML", "Http", "request2"]);
/// ```
#[must_use]
pub fn words(s: &str, split: Split) -> Words<'_> {
  Words { st: Scanner::new(s), split }
}

/// An iterator over words. Returned by [`words`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
  st: Scanner<'a>,
  split: Split,
}

impl Words<'_> {
  fn at_case_boundary(&self) -> bool {
    let (Some(prev), Some(cur)) = (self.st.prev(), self.st.cur()) else { return false };
    if !cur.is_ascii_uppercase() {
      return false;
    }
    if prev.is_ascii_lowercase() || prev.is_ascii_digit() {
      return true;
    }
    prev.is_ascii_uppercase() && self.st.peek().is_some_and(|b| b.is_ascii_lowercase())
  }
}

impl<'a> Iterator for Words<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<Self::Item> {
    self.st.bump_while(|b| !b.is_ascii_alphanumeric());
    self.st.cur()?;
    let m = self.st.mark();
    self.st.bump();
    while let Some(b) = self.st.cur() {
      if !b.is_ascii_alphanumeric() {
        break;
      }
      if self.split == Split::SeparatorsAndCase && self.at_case_boundary() {
        break;
      }
      self.st.bump();
    }
    Some(self.st.since(m))
  }
}
