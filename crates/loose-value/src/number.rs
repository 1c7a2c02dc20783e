//! Reading and writing numbers as text.

use std::fmt;

/// An error when a [`Value`](crate::Value) could not be coerced to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
  /// There was nothing to read: the value was missing, or only whitespace.
  Blank,
  /// There was something, but it wasn't a number.
  NotANumber,
}

impl fmt::Display for NumberError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      NumberError::Blank => f.write_str("blank value"),
      NumberError::NotANumber => f.write_str("not a number"),
    }
  }
}

impl std::error::Error for NumberError {}

pub(crate) fn parse(s: &str) -> Result<f64, NumberError> {
  let s = crate::trim(s);
  if s.is_empty() {
    return Err(NumberError::Blank);
  }
  match s {
    "Infinity" | "+Infinity" => return Ok(f64::INFINITY),
    "-Infinity" => return Ok(f64::NEG_INFINITY),
    _ => {}
  }
  if let Some(radix) = radix_prefix(s) {
    return parse_radix(&s[2..], radix);
  }
  // keeps out what `f64::from_str` takes but we don't, like `inf` and `NaN`.
  if !s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) {
    return Err(NumberError::NotANumber);
  }
  s.parse::<f64>().map_err(|_| NumberError::NotANumber)
}

fn radix_prefix(s: &str) -> Option<u32> {
  let ret = match s.as_bytes().get(..2)? {
    b"0x" | b"0X" => 16,
    b"0o" | b"0O" => 8,
    b"0b" | b"0B" => 2,
    _ => return None,
  };
  Some(ret)
}

fn parse_radix(digits: &str, radix: u32) -> Result<f64, NumberError> {
  if digits.is_empty() {
    return Err(NumberError::NotANumber);
  }
  digits.chars().try_fold(0.0, |acc, c| {
    let d = c.to_digit(radix).ok_or(NumberError::NotANumber)?;
    Ok(acc * f64::from(radix) + f64::from(d))
  })
}

/// Writes `x` with the shortest digits that read back as `x`. Very large and very small
/// magnitudes use exponent form, and the exponent always has a sign.
pub(crate) fn to_text(x: f64) -> String {
  if x.is_nan() {
    return "NaN".to_owned();
  }
  if x.is_infinite() {
    let ret = if x > 0.0 { "Infinity" } else { "-Infinity" };
    return ret.to_owned();
  }
  // also handles -0.
  if x == 0.0 {
    return "0".to_owned();
  }
  let abs = x.abs();
  if (1e-6..1e21).contains(&abs) {
    return x.to_string();
  }
  let ret = format!("{x:e}");
  if ret.contains("e-") {
    ret
  } else {
    ret.replacen('e', "e+", 1)
  }
}
