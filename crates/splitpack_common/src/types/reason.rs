use arcstr::ArcStr;

use crate::{DepIdx, ModuleIdx};

/// Why a module is part of the graph: which originating module and dependency
/// edge pulled it in. Entry modules carry a reason with no origin.
#[derive(Debug, Clone)]
pub struct InclusionReason {
  pub origin: Option<ModuleIdx>,
  pub dep: DepIdx,
  pub explanation: ArcStr,
}

impl InclusionReason {
  pub fn new(origin: Option<ModuleIdx>, dep: DepIdx, explanation: impl Into<ArcStr>) -> Self {
    Self { origin, dep, explanation: explanation.into() }
  }

  /// Removal matches on the `(origin, dep)` pair only.
  pub fn matches(&self, origin: Option<ModuleIdx>, dep: DepIdx) -> bool {
    self.origin == origin && self.dep == dep
  }
}
