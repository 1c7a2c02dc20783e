//! Case conversion for loosely-typed values.
//!
//! Each function here accepts any [`Value`] and always returns a string.

use loose_value::Value;

/// Like [`crate::to_camel_case`], but returns an empty string for anything other than text.
///
/// ```
/// # use identifier_case::value::to_camel_case;
/// assert_eq!(to_camel_case("first name".into()), "firstName");
/// assert_eq!(to_camel_case(12.into()), "");
/// ```
#[must_use]
pub fn to_camel_case(v: Value<'_>) -> String {
  match v {
    Value::Str(s) => crate::to_camel_case(s),
    Value::Missing | Value::Bool(_) | Value::Num(_) => String::new(),
  }
}

/// Like [`crate::kebab_case`], but returns an empty string for falsy values, and converts the
/// text of any other value.
#[must_use]
pub fn kebab_case(v: Value<'_>) -> String {
  if v.is_falsy() {
    return String::new();
  }
  match v.to_text() {
    Some(s) => crate::kebab_case(&s),
    None => String::new(),
  }
}

/// Like [`crate::to_dot_case`], but returns an empty string for a missing value, and converts the
/// text of any other value.
///
/// ```
/// # use identifier_case::value::to_dot_case;
/// # use loose_value::Value;
/// assert_eq!(to_dot_case(Value::Missing), "");
/// assert_eq!(to_dot_case(true.into()), "true");
/// ```
#[must_use]
pub fn to_dot_case(v: Value<'_>) -> String {
  match v.to_text() {
    Some(s) => crate::to_dot_case(&s),
    None => String::new(),
  }
}
