const ALPHABET_LEN: u32 = 26;

/// Maps a small number to a short identifier, used for mangled export
/// bindings: `0..=25` become `a..=z`, `26..=51` become `A..=Z`, everything
/// past that falls back to an underscore-prefixed number.
#[allow(clippy::cast_possible_truncation)]
pub fn number_to_identifier(n: u32) -> String {
  if n < ALPHABET_LEN {
    return char::from(b'a' + n as u8).to_string();
  }
  let n = n - ALPHABET_LEN;
  if n < ALPHABET_LEN {
    return char::from(b'A' + n as u8).to_string();
  }
  format!("_{n}")
}

#[test]
fn test_number_to_identifier() {
  assert_eq!(number_to_identifier(0), "a");
  assert_eq!(number_to_identifier(1), "b");
  assert_eq!(number_to_identifier(25), "z");
  assert_eq!(number_to_identifier(26), "A");
  assert_eq!(number_to_identifier(51), "Z");
  assert_eq!(number_to_identifier(52), "_26");
}
