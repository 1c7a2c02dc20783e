//! Loosely-typed input values, and the coercions used to turn them into text or numbers.
//!
//! Callers that accept "anything" (a missing value, a flag, a number, or some text) take a
//! [`Value`] and coerce it the way they need to.

mod number;
mod sum;


use std::borrow::Cow;

pub use number::NumberError;
pub use sum::{add_numbers, Sum};

/// A loosely-typed input value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
  /// No value at all.
  Missing,
  /// A boolean.
  Bool(bool),
  /// A number.
  Num(f64),
  /// Some text.
  Str(&'a str),
}

impl<'a> Value<'a> {
  /// Returns the text for this, or `None` if this is [`Value::Missing`].
  ///
  /// ```
  /// # use loose_value::Value;
  /// assert_eq!(Value::Str("hi").to_text().as_deref(), Some("hi"));
  /// assert_eq!(Value::Num(1.5).to_text().as_deref(), Some("1.5"));
  /// assert_eq!(Value::Num(f64::INFINITY).to_text().as_deref(), Some("Infinity"));
  /// assert_eq!(Value::Bool(true).to_text().as_deref(), Some("true"));
  /// assert_eq!(Value::Missing.to_text(), None);
  /// ```
  #[must_use]
  pub fn to_text(&self) -> Option<Cow<'a, str>> {
    let ret = match *self {
      Value::Missing => return None,
      Value::Bool(b) => Cow::Borrowed(if b { "true" } else { "false" }),
      Value::Num(x) => Cow::Owned(number::to_text(x)),
      Value::Str(s) => Cow::Borrowed(s),
    };
    Some(ret)
  }

  /// Returns whether this counts as false when used as a condition.
  #[must_use]
  pub fn is_falsy(&self) -> bool {
    match *self {
      Value::Missing => true,
      Value::Bool(b) => !b,
      Value::Num(x) => x == 0.0 || x.is_nan(),
      Value::Str(s) => s.is_empty(),
    }
  }

  /// Returns whether this is missing, or is text with nothing but whitespace.
  #[must_use]
  pub fn is_blank(&self) -> bool {
    match *self {
      Value::Missing => true,
      Value::Bool(_) | Value::Num(_) => false,
      Value::Str(s) => trim(s).is_empty(),
    }
  }

  /// Coerces this to a number.
  ///
  /// Text is trimmed, then read as `Infinity` (optionally signed), a `0x`/`0o`/`0b` integer, or a
  /// decimal literal. A NaN is never returned.
  ///
  /// # Errors
  ///
  /// If this is blank, or can't be read as a number.
  pub fn to_number(&self) -> Result<f64, NumberError> {
    match *self {
      Value::Missing => Err(NumberError::Blank),
      Value::Bool(b) => Ok(if b { 1.0 } else { 0.0 }),
      Value::Num(x) => {
        if x.is_nan() {
          Err(NumberError::NotANumber)
        } else {
          Ok(x)
        }
      }
      Value::Str(s) => number::parse(s),
    }
  }
}

impl<'a> From<&'a str> for Value<'a> {
  fn from(s: &'a str) -> Self {
    Value::Str(s)
  }
}

impl<'a> From<&'a String> for Value<'a> {
  fn from(s: &'a String) -> Self {
    Value::Str(s.as_str())
  }
}

impl From<bool> for Value<'_> {
  fn from(b: bool) -> Self {
    Value::Bool(b)
  }
}

impl From<f64> for Value<'_> {
  fn from(x: f64) -> Self {
    Value::Num(x)
  }
}

impl From<i32> for Value<'_> {
  fn from(n: i32) -> Self {
    Value::Num(n.into())
  }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
  T: Into<Value<'a>>,
{
  fn from(opt: Option<T>) -> Self {
    match opt {
      Some(x) => x.into(),
      None => Value::Missing,
    }
  }
}

/// Returns whether `c` is whitespace for the purposes of trimming and separating words.
///
/// This is Unicode `White_Space`, minus U+0085 NEXT LINE, plus U+FEFF BYTE ORDER MARK.
#[must_use]
pub fn is_space(c: char) -> bool {
  match c {
    '\u{85}' => false,
    '\u{feff}' => true,
    _ => c.is_whitespace(),
  }
}

/// Trims [`is_space`] characters from both ends of `s`.
#[must_use]
pub fn trim(s: &str) -> &str {
  s.trim_matches(is_space)
}
