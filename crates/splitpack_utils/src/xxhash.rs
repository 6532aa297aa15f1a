use xxhash_rust::xxh3::{xxh3_128, Xxh3};

pub fn xxhash_base16(input: &[u8]) -> String {
  let hash = xxh3_128(input);
  format!("{hash:032x}")
}

/// Finishes a streaming hasher into the same base16 form as [`xxhash_base16`].
pub fn digest_base16(hasher: &Xxh3) -> String {
  let hash = hasher.digest128();
  format!("{hash:032x}")
}

#[test]
fn test_streaming_matches_one_shot() {
  let mut hasher = Xxh3::default();
  hasher.update(b"hello");
  assert_eq!(digest_base16(&hasher), xxhash_base16(b"hello"));
  assert_eq!(xxhash_base16(b"hello").len(), 32);
}
