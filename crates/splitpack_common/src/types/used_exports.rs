use arcstr::ArcStr;
use serde::{Serialize, Serializer};

/// Tree-shaking outcome for one module, stored here and queried by code
/// generation. Serializes to the same shapes the manifest hashing expects:
/// `null`, `true`, `false` or a sorted list of names.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UsedExports {
  #[default]
  Unknown,
  All,
  None,
  Specific(Vec<ArcStr>),
}

impl UsedExports {
  pub fn contains(&self, export_name: &str) -> bool {
    match self {
      Self::Specific(names) => names.iter().any(|name| name == export_name),
      Self::All => true,
      Self::Unknown | Self::None => false,
    }
  }
}

impl Serialize for UsedExports {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    match self {
      Self::Unknown => serializer.serialize_none(),
      Self::All => serializer.serialize_bool(true),
      Self::None => serializer.serialize_bool(false),
      Self::Specific(names) => serializer.collect_seq(names.iter().map(ArcStr::as_str)),
    }
  }
}

#[test]
fn test_serialized_shapes() {
  assert_eq!(serde_json::to_string(&UsedExports::Unknown).unwrap(), "null");
  assert_eq!(serde_json::to_string(&UsedExports::All).unwrap(), "true");
  assert_eq!(serde_json::to_string(&UsedExports::None).unwrap(), "false");
  let specific = UsedExports::Specific(vec!["a".into(), "b".into()]);
  assert_eq!(serde_json::to_string(&specific).unwrap(), r#"["a","b"]"#);
}
