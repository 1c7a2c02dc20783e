use crate::{kebab_case, to_camel_case, to_dot_case, value, words, Split};
use loose_value::Value;

fn check(f: fn(&str) -> String, tests: &[(&str, &str)]) {
  for &(input, want) in tests {
    assert_eq!(f(input), want, "input: {input:?}");
  }
}

fn check_words(s: &str, split: Split, want: &[&str]) {
  let got: Vec<_> = words(s, split).collect();
  assert_eq!(got, want);
}

#[test]
fn words_separators() {
  check_words("", Split::Separators, &[]);
  check_words(" -_ .", Split::Separators, &[]);
  check_words("  a  b ", Split::Separators, &["a", "b"]);
  check_words("fooBar--baz9", Split::Separators, &["fooBar", "baz9"]);
  check_words("naïve café", Split::Separators, &["na", "ve", "caf"]);
}

#[test]
fn words_case() {
  check_words("fooBar", Split::SeparatorsAndCase, &["foo", "Bar"]);
  check_words("v2Release", Split::SeparatorsAndCase, &["v2", "Release"]);
  check_words("ABCdef", Split::SeparatorsAndCase, &["AB", "Cdef"]);
  check_words("ABC", Split::SeparatorsAndCase, &["ABC"]);
  check_words("getHTTPResponseCode", Split::SeparatorsAndCase, &["get", "HTTP", "Response", "Code"]);
  check_words("2D", Split::SeparatorsAndCase, &["2", "D"]);
  // the boundary rules look only at neighbors inside a word.
  check_words("a_B", Split::SeparatorsAndCase, &["a", "B"]);
}

#[test]
fn camel() {
  check(
    to_camel_case,
    &[
      ("hello world", "helloWorld"),
      ("  user_id  ", "userId"),
      ("FOO_BAR-baz", "fooBarBaz"),
      ("json 2 xml", "json2Xml"),
      ("first name", "firstName"),
      ("SCREEN_NAME", "screenName"),
      ("mobile-number", "mobileNumber"),
      ("a1b 2c", "a1b2c"),
    ],
  );
}

#[test]
fn camel_unseparated() {
  check(to_camel_case, &[("fooBar", "fooBar"), ("FooBar", "fooBar"), ("FOO", "fOO"), ("x", "x")]);
  // one separator anywhere means every word is recased.
  check(to_camel_case, &[("fooBar ", "foobar"), ("fooBar baz", "foobarBaz")]);
}

#[test]
fn kebab() {
  check(
    kebab_case,
    &[
      ("Hello, World! This is kebab_case.", "hello-world-this-is-kebab-case"),
      ("Hello, World! This is — kebab_case.", "hello-world-this-is-kebab-case"),
      ("  --leading and trailing__  ", "leading-and-trailing"),
      ("a.b", "ab"),
      ("helloWorld", "helloworld"),
      ("Ünïcödé Façade", "unicode-facade"),
      ("ﬁle ２", "file-2"),
      ("tab\tand\u{a0}nbsp", "tab-and-nbsp"),
    ],
  );
}

#[test]
fn dot() {
  check(
    to_dot_case,
    &[
      ("HelloWorld", "hello.world"),
      ("some_text-toConvert", "some.text.to.convert"),
      (" already . dot.CASE ", "already.dot.case"),
      ("XMLHttpRequest", "xml.http.request"),
      ("v2Release", "v2.release"),
      ("a__b--c", "a.b.c"),
      ("price: $5/unit", "price.5.unit"),
    ],
  );
}

#[test]
fn no_words() {
  for s in ["", "   ", "-_-", "!?.", "é ü"] {
    assert_eq!(to_camel_case(s), "", "{s:?}");
    assert_eq!(to_dot_case(s), "", "{s:?}");
  }
  for s in ["", "   ", "-_-", "!?.", "日本"] {
    assert_eq!(kebab_case(s), "", "{s:?}");
  }
}

#[test]
fn idempotent() {
  let inputs =
    ["Hello, World! This is kebab_case.", "XMLHttpRequest", " already . dot.CASE ", "v2Release", ""];
  for s in inputs {
    let kebab = kebab_case(s);
    assert_eq!(kebab_case(&kebab), kebab);
    let dot = to_dot_case(s);
    assert_eq!(to_dot_case(&dot), dot);
  }
}

#[test]
fn values() {
  assert_eq!(value::to_camel_case("user_id".into()), "userId");
  assert_eq!(value::to_camel_case(Value::Missing), "");
  assert_eq!(value::to_camel_case(true.into()), "");

  assert_eq!(value::kebab_case("Some Text".into()), "some-text");
  assert_eq!(value::kebab_case(0.into()), "");
  assert_eq!(value::kebab_case(false.into()), "");
  assert_eq!(value::kebab_case(Value::Missing), "");
  assert_eq!(value::kebab_case(1.5.into()), "15");
  assert_eq!(value::kebab_case(f64::NEG_INFINITY.into()), "infinity");

  assert_eq!(value::to_dot_case(Value::Missing), "");
  assert_eq!(value::to_dot_case(None::<&str>.into()), "");
  assert_eq!(value::to_dot_case(0.into()), "0");
  assert_eq!(value::to_dot_case(1e21.into()), "1e.21");
  assert_eq!(value::to_dot_case(Some("fooBar").into()), "foo.bar");
}
