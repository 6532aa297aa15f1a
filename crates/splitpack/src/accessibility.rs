use splitpack_common::{ChunkGroup, ChunkIdx, GroupIdx, ModuleIdx};
use splitpack_utils::indexmap::FxIndexSet;

use crate::ChunkGraph;

impl<G: ChunkGroup> ChunkGraph<G> {
  /// True iff the module is accessible in every chunk group the chunk
  /// belongs to.
  pub fn is_accessible_in_chunk(
    &self,
    module: ModuleIdx,
    chunk: ChunkIdx,
    ignore_chunk: Option<ChunkIdx>,
  ) -> bool {
    self
      .chunks[chunk]
      .groups()
      .all(|group| self.is_accessible_in_chunk_group(module, group, ignore_chunk))
  }

  /// Breadth-first walk over the group and its ancestors, visiting each
  /// group at most once. A group is satisfied when one of its chunks (other
  /// than `ignore_chunk`, excluded at every hop) contains the module;
  /// an unsatisfied initial group fails the whole check, an unsatisfied
  /// non-initial group defers to *all* of its parents.
  pub fn is_accessible_in_chunk_group(
    &self,
    module: ModuleIdx,
    group: GroupIdx,
    ignore_chunk: Option<ChunkIdx>,
  ) -> bool {
    let mut queue: FxIndexSet<GroupIdx> = FxIndexSet::default();
    queue.insert(group);
    let mut cursor = 0;
    while cursor < queue.len() {
      let current = queue[cursor];
      cursor += 1;
      let satisfied = self.groups[current]
        .chunks()
        .any(|chunk| Some(chunk) != ignore_chunk && self.chunks[chunk].contains_module(module));
      if satisfied {
        continue;
      }
      if self.groups[current].is_initial() {
        // Accessibility cannot route around an entry point.
        return false;
      }
      queue.extend(self.groups[current].parents());
    }
    true
  }

  /// True iff at least one inclusion-reason origin genuinely depends on
  /// `chunk`'s presence: some chunk of the origin would leave this module
  /// inaccessible were `chunk` removed.
  pub fn has_reason_for_chunk(&self, module: ModuleIdx, chunk: ChunkIdx) -> bool {
    self.modules[module].reasons.iter().any(|reason| {
      let Some(origin) = reason.origin else {
        return false;
      };
      self
        .modules[origin]
        .chunks()
        .any(|origin_chunk| !self.is_accessible_in_chunk(module, origin_chunk, Some(chunk)))
    })
  }

  /// A module is optional iff it has at least one reason and every reason's
  /// originating dependency is itself optional. A module with zero reasons
  /// is unreachable, not optional.
  pub fn is_module_optional(&self, module: ModuleIdx) -> bool {
    let reasons = &self.modules[module].reasons;
    !reasons.is_empty() && reasons.iter().all(|reason| self.dependencies[reason.dep].optional)
  }
}
