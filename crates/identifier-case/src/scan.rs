//! Scan a string by each byte.

use drop_bomb::DebugDropBomb;

/// The state for scanning a string.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
  s: &'a str,
  idx: usize,
}

impl<'a> Scanner<'a> {
  pub(crate) fn new(s: &'a str) -> Scanner<'a> {
    Scanner { s, idx: 0 }
  }

  fn at(&self, idx: usize) -> Option<u8> {
    self.s.as_bytes().get(idx).copied()
  }

  /// Returns the current byte.
  pub(crate) fn cur(&self) -> Option<u8> {
    self.at(self.idx)
  }

  /// Returns the byte before the current one.
  pub(crate) fn prev(&self) -> Option<u8> {
    self.at(self.idx.checked_sub(1)?)
  }

  /// Returns the byte after the current one.
  pub(crate) fn peek(&self) -> Option<u8> {
    self.at(self.idx + 1)
  }

  pub(crate) fn bump(&mut self) {
    self.idx += 1;
  }

  /// Advances the index while `cond` holds true.
  pub(crate) fn bump_while<F>(&mut self, mut cond: F)
  where
    F: FnMut(u8) -> bool,
  {
    while let Some(b) = self.cur() {
      if cond(b) {
        self.bump();
      } else {
        break;
      }
    }
  }

  /// Returns a marker that must be passed to [`Self::since`] later.
  pub(crate) fn mark(&self) -> Marker {
    Marker { bomb: DebugDropBomb::new("must be passed to `Scanner::since`"), idx: self.idx }
  }

  /// Returns the slice since the marker.
  ///
  /// Both ends must be at an ASCII byte or the end of the string, so the slice is always on char
  /// boundaries.
  pub(crate) fn since(&self, mut m: Marker) -> &'a str {
    m.bomb.defuse();
    &self.s[m.idx..self.idx]
  }
}

/// A marker for the current position.
#[derive(Debug)]
pub(crate) struct Marker {
  bomb: DebugDropBomb,
  idx: usize,
}
