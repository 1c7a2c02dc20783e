//! Adding two loose values.

use crate::{NumberError, Value};

/// The result of [`add_numbers`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sum {
  /// At least one operand was missing or blank.
  Blank,
  /// At least one operand couldn't be read as a number.
  Invalid,
  /// Both operands were numbers, and this is their sum.
  Value(f64),
}

impl Sum {
  /// Returns the sum, if there was one.
  #[must_use]
  pub fn value(self) -> Option<f64> {
    match self {
      Sum::Value(x) => Some(x),
      Sum::Blank | Sum::Invalid => None,
    }
  }

  /// Returns `None` for a blank operand, NaN for an invalid one, and the sum otherwise.
  #[must_use]
  pub fn or_nan(self) -> Option<f64> {
    match self {
      Sum::Blank => None,
      Sum::Invalid => Some(f64::NAN),
      Sum::Value(x) => Some(x),
    }
  }
}

/// Adds `a` and `b` if both can be read as numbers.
///
/// Blankness is checked for both operands before either is read as a number, so a blank operand
/// wins over an invalid one.
///
/// ```
/// # use loose_value::{add_numbers, Sum};
/// assert_eq!(add_numbers(2.into(), 3.into()), Sum::Value(5.0));
/// assert_eq!(add_numbers("4".into(), "1.5".into()), Sum::Value(5.5));
/// assert_eq!(add_numbers("a".into(), 1.into()), Sum::Invalid);
/// assert_eq!(add_numbers("".into(), 1.into()), Sum::Blank);
/// ```
#[must_use]
pub fn add_numbers(a: Value<'_>, b: Value<'_>) -> Sum {
  if a.is_blank() || b.is_blank() {
    log::debug!("blank operand: {a:?} + {b:?}");
    return Sum::Blank;
  }
  match (a.to_number(), b.to_number()) {
    (Ok(x), Ok(y)) => Sum::Value(x + y),
    (Err(NumberError::Blank), _) | (_, Err(NumberError::Blank)) => Sum::Blank,
    (Err(e), _) | (_, Err(e)) => {
      log::debug!("{e}: {a:?} + {b:?}");
      Sum::Invalid
    }
  }
}
