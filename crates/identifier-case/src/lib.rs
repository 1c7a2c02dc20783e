//! Utilities for converting identifiers and phrases between cases.
//!
//! Words are found with ASCII rules only: a non-ASCII character never belongs to a word. The
//! exception is [`kebab_case`], which first folds accented letters to their ASCII base letters.

mod scan;
mod words;

pub mod value;

#[cfg(test)]
mod tests;

use unicode_normalization::UnicodeNormalization as _;

pub use words::{words, Split, Words};

/// Converts to `camelCase`, splitting words only at separators.
///
/// If `s` has no separators at all, it is taken to already be in some case, and only its first
/// letter is lowercased.
///
/// ```
/// # use identifier_case::to_camel_case;
/// assert_eq!(to_camel_case("hello world"), "helloWorld");
/// assert_eq!(to_camel_case("  user_id  "), "userId");
/// assert_eq!(to_camel_case("FOO_BAR-baz"), "fooBarBaz");
/// assert_eq!(to_camel_case("json 2 xml"), "json2Xml");
/// assert_eq!(to_camel_case("FooBar"), "fooBar");
/// ```
#[must_use]
pub fn to_camel_case(s: &str) -> String {
  let mut ws = words(s, Split::Separators);
  let Some(first) = ws.next() else {
    if !s.is_empty() {
      log::trace!("no words in {s:?}");
    }
    return String::new();
  };
  if first.len() == s.len() {
    let (head, tail) = first.split_at(1);
    return head.to_ascii_lowercase() + tail;
  }
  let mut ret = first.to_ascii_lowercase();
  for w in ws {
    let (head, tail) = w.split_at(1);
    ret.push_str(&head.to_ascii_uppercase());
    ret.push_str(&tail.to_ascii_lowercase());
  }
  ret
}

/// Converts to `kebab-case`.
///
/// Accents are removed, and everything is lowercased. Whitespace, `_`, and `-` separate words.
/// Other characters are dropped without separating anything, and case changes don't separate
/// words either.
///
/// ```
/// # use identifier_case::kebab_case;
/// assert_eq!(kebab_case("Hello, World! This is kebab_case."), "hello-world-this-is-kebab-case");
/// assert_eq!(kebab_case("Crème Brûlée"), "creme-brulee");
/// assert_eq!(kebab_case("helloWorld"), "helloworld");
/// ```
#[must_use]
pub fn kebab_case(s: &str) -> String {
  let mut ret = String::with_capacity(s.len());
  let mut pending_hyphen = false;
  let folded = s.nfkd().filter(|&c| !is_combining_diacritic(c)).flat_map(char::to_lowercase);
  for c in folded {
    if c == '-' || c == '_' || loose_value::is_space(c) {
      pending_hyphen = !ret.is_empty();
    } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
      if pending_hyphen {
        ret.push('-');
        pending_hyphen = false;
      }
      ret.push(c);
    }
  }
  if ret.is_empty() && !s.is_empty() {
    log::trace!("no words in {s:?}");
  }
  ret
}

/// Converts to `dot.case`, splitting words at separators and case changes.
///
/// ```
/// # use identifier_case::to_dot_case;
/// assert_eq!(to_dot_case("HelloWorld"), "hello.world");
/// assert_eq!(to_dot_case("some_text-toConvert"), "some.text.to.convert");
/// assert_eq!(to_dot_case(" already . dot.CASE "), "already.dot.case");
/// assert_eq!(to_dot_case("XMLHttpRequest"), "xml.http.request");
/// ```
#[must_use]
pub fn to_dot_case(s: &str) -> String {
  let mut ret = String::with_capacity(s.len());
  for w in words(s, Split::SeparatorsAndCase) {
    if !ret.is_empty() {
      ret.push('.');
    }
    ret.extend(w.chars().map(|c| c.to_ascii_lowercase()));
  }
  if ret.is_empty() && !s.is_empty() {
    log::trace!("no words in {s:?}");
  }
  ret
}

/// The Combining Diacritical Marks block.
fn is_combining_diacritic(c: char) -> bool {
  ('\u{300}'..='\u{36f}').contains(&c)
}
