use arcstr::ArcStr;
use splitpack_utils::sortable_set::SortableSet;

use crate::types::debug_id::next_debug_id;
use crate::{ChunkIdx, GroupIdx, ModuleIdx};

/// One output unit: a deduplicated set of member modules plus the chunk
/// groups that own it. Member/chunk symmetry is maintained exclusively by the
/// graph façade; the collection mutators here are raw half-edges.
#[derive(Debug)]
pub struct Chunk {
  /// Deterministic tie-break before external ids exist, never identity.
  pub debug_id: u32,
  pub idx: ChunkIdx,
  pub name: Option<ArcStr>,
  /// Externally assigned ids once the compilation is sealed.
  pub id: Option<u32>,
  pub ids: Option<Vec<u32>>,
  /// The module whose evaluation triggers this chunk, if any. A chunk with
  /// an entry module refuses integration.
  pub entry_module: Option<ModuleIdx>,
  pub files: Vec<ArcStr>,
  pub hash: Option<ArcStr>,
  pub rendered_hash: Option<ArcStr>,
  pub modules: SortableSet<ModuleIdx>,
  pub groups: SortableSet<GroupIdx>,
}

impl Chunk {
  pub fn new(idx: ChunkIdx, name: Option<ArcStr>) -> Self {
    Self {
      debug_id: next_debug_id(),
      idx,
      name,
      id: None,
      ids: None,
      entry_module: None,
      files: Vec::new(),
      hash: None,
      rendered_hash: None,
      modules: SortableSet::default(),
      groups: SortableSet::default(),
    }
  }

  /// Raw half-edge; only the graph façade may call this.
  pub fn add_module(&mut self, module: ModuleIdx) -> bool {
    self.modules.add(module)
  }

  /// Raw half-edge; only the graph façade may call this.
  pub fn remove_module(&mut self, module: ModuleIdx) -> bool {
    self.modules.remove(&module)
  }

  pub fn contains_module(&self, module: ModuleIdx) -> bool {
    self.modules.contains(&module)
  }

  pub fn get_number_of_modules(&self) -> usize {
    self.modules.len()
  }

  pub fn modules(&self) -> impl Iterator<Item = ModuleIdx> + '_ {
    self.modules.iter().copied()
  }

  pub fn add_group(&mut self, group: GroupIdx) -> bool {
    self.groups.add(group)
  }

  pub fn remove_group(&mut self, group: GroupIdx) -> bool {
    self.groups.remove(&group)
  }

  pub fn is_in_group(&self, group: GroupIdx) -> bool {
    self.groups.contains(&group)
  }

  pub fn get_number_of_groups(&self) -> usize {
    self.groups.len()
  }

  pub fn groups(&self) -> impl Iterator<Item = GroupIdx> + '_ {
    self.groups.iter().copied()
  }

  pub fn has_entry_module(&self) -> bool {
    self.entry_module.is_some()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  /// Name reconciliation on merge: both named keeps the shorter name, equal
  /// length keeps the lexicographically smaller one.
  pub fn pick_integrated_name(&mut self, other_name: Option<&ArcStr>) {
    match (&self.name, other_name) {
      (Some(own), Some(other)) => {
        let other_wins =
          other.len() < own.len() || (other.len() == own.len() && other < own);
        if other_wins {
          self.name = Some(other.clone());
        }
      }
      (None, Some(other)) => self.name = Some(other.clone()),
      _ => {}
    }
  }
}
