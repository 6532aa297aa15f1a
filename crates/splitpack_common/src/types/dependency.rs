use arcstr::ArcStr;

use crate::ImportKind;

/// The dependency edge that pulled a module into the graph. Resolution and
/// code meaning live outside the core; the graph only needs identity (via
/// [`crate::DepIdx`]) and the optionality flag.
#[derive(Debug, Clone)]
pub struct Dependency {
  pub kind: ImportKind,
  pub request: ArcStr,
  /// An optional dependency tolerates its target being absent; a module is
  /// optional iff every reason referencing it is.
  pub optional: bool,
}

impl Dependency {
  pub fn new(kind: ImportKind, request: impl Into<ArcStr>) -> Self {
    Self { kind, request: request.into(), optional: false }
  }

  pub fn optional(kind: ImportKind, request: impl Into<ArcStr>) -> Self {
    Self { kind, request: request.into(), optional: true }
  }
}
