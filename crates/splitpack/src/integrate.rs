use splitpack_common::{ChunkGroup, ChunkIdx, GroupIdx, ModuleIdx};
use splitpack_utils::indexmap::FxIndexSet;

use crate::ChunkGraph;

impl<G: ChunkGroup> ChunkGraph<G> {
  /// Availability of chunk `a` along every initial ancestor chain of chunk
  /// `b`: a branch stops as soon as it hits a group `a` is a member of, and
  /// the whole check fails when it reaches an initial group without `a`.
  pub fn is_chunk_available(&self, a: ChunkIdx, b: ChunkIdx) -> bool {
    let mut queue: FxIndexSet<GroupIdx> = self.chunks[b].groups().collect();
    let mut cursor = 0;
    while cursor < queue.len() {
      let group = queue[cursor];
      cursor += 1;
      if self.chunks[a].is_in_group(group) {
        continue;
      }
      if self.groups[group].is_initial() {
        return false;
      }
      queue.extend(self.groups[group].parents());
    }
    true
  }

  /// Feasibility predicate for [`ChunkGraph::integrate_chunks`]. When
  /// exactly one of the two chunks is initial, the initial one must be
  /// available along every initial ancestor chain of the other — merging
  /// would otherwise break entry-point isolation. A chunk with a designated
  /// entry module never integrates: an output unit has at most one entry.
  pub fn can_chunks_be_integrated(&self, a: ChunkIdx, b: ChunkIdx) -> bool {
    let a_initial = self.is_initial_chunk(a);
    let b_initial = self.is_initial_chunk(b);
    if a_initial != b_initial {
      let available = if a_initial {
        self.is_chunk_available(a, b)
      } else {
        self.is_chunk_available(b, a)
      };
      if !available {
        return false;
      }
    }
    !self.chunks[a].has_entry_module() && !self.chunks[b].has_entry_module()
  }

  /// Merges `other` into `chunk`: every module moves over, every group that
  /// owned `other` is repointed in place, and `other` ends up empty of both.
  /// Returns `false` without mutating anything when the merge is refused.
  pub fn integrate_chunks(&mut self, chunk: ChunkIdx, other: ChunkIdx) -> bool {
    if !self.can_chunks_be_integrated(chunk, other) {
      return false;
    }

    let other_name = self.chunks[other].name.clone();
    self.chunks[chunk].pick_integrated_name(other_name.as_ref());

    let modules: Vec<ModuleIdx> = self.chunks[other].modules().collect();
    for module in modules {
      self.move_module(module, other, chunk);
    }

    let groups: Vec<GroupIdx> = self.chunks[other].groups().collect();
    for group in groups {
      self.groups[group].replace_chunk(other, chunk);
      self.chunks[chunk].add_group(group);
    }
    self.chunks[other].groups.clear();

    tracing::debug!("integrated chunk {other:?} into {chunk:?}");
    true
  }

  /// Inserts `new_chunk` as a sibling of `chunk` within every owning group
  /// and registers those groups as owners of `new_chunk`. Modules are not
  /// moved; callers relocate them separately.
  pub fn split_chunk(&mut self, chunk: ChunkIdx, new_chunk: ChunkIdx) {
    let groups: Vec<GroupIdx> = self.chunks[chunk].groups().collect();
    for group in groups {
      self.groups[group].insert_chunk(new_chunk, chunk);
      self.chunks[new_chunk].add_group(group);
    }
    tracing::debug!("split chunk {chunk:?}, inserted sibling {new_chunk:?}");
  }
}
