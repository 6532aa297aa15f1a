use arcstr::ArcStr;
use rustc_hash::FxHashMap;
use splitpack_common::{Chunk, ChunkGroup, ChunkIdx, GroupIdx, Module};
use splitpack_utils::indexmap::FxIndexSet;

use crate::ChunkGraph;

/// Sparse id-keyed lookup tables for chunks reachable below a chunk, as
/// embedded into runtime loading code. Only chunks that actually carry the
/// attribute get an entry.
#[derive(Debug, Default)]
pub struct ChunkMaps {
  pub hash: FxHashMap<u32, ArcStr>,
  pub name: FxHashMap<u32, ArcStr>,
}

/// Per-chunk module manifests for reachable chunks, keyed by chunk id.
#[derive(Debug, Default)]
pub struct ChunkModuleMaps {
  pub id: FxHashMap<u32, Vec<u32>>,
  pub hash: FxHashMap<u32, ArcStr>,
}

impl<G: ChunkGroup> ChunkGraph<G> {
  /// Chunks loadable below `from`: breadth-first over the group DAG starting
  /// at the owning groups, following children. The start chunk itself is
  /// excluded; chunks of initial groups are included only on request since
  /// they are already present at program start.
  fn collect_reachable_chunks(&self, from: ChunkIdx, include_initial: bool) -> Vec<ChunkIdx> {
    let mut queue: FxIndexSet<GroupIdx> = self.chunks[from].groups().collect();
    let mut chunks: FxIndexSet<ChunkIdx> = FxIndexSet::default();
    let mut cursor = 0;
    while cursor < queue.len() {
      let group = queue[cursor];
      cursor += 1;
      if include_initial || !self.groups[group].is_initial() {
        chunks.extend(self.groups[group].chunks().filter(|&chunk| chunk != from));
      }
      queue.extend(self.groups[group].children());
    }
    chunks.into_iter().collect()
  }

  /// Hash and name maps over every chunk reachable below `from`. With
  /// `real_hash` the full hash is used instead of the rendered prefix.
  pub fn get_chunk_maps(&self, from: ChunkIdx, include_initial: bool, real_hash: bool) -> ChunkMaps {
    let mut maps = ChunkMaps::default();
    for chunk in self.collect_reachable_chunks(from, include_initial) {
      let c = &self.chunks[chunk];
      let Some(id) = c.id else {
        continue;
      };
      let hash = if real_hash { &c.hash } else { &c.rendered_hash };
      if let Some(hash) = hash {
        maps.hash.insert(id, hash.clone());
      }
      if let Some(name) = &c.name {
        maps.name.insert(id, name.clone());
      }
    }
    maps
  }

  /// Module id lists and rendered module hashes for the reachable chunks,
  /// restricted to modules accepted by `filter`. Id lists are sorted
  /// ascending so emitted manifests are deterministic.
  pub fn get_chunk_module_maps(
    &self,
    from: ChunkIdx,
    include_initial: bool,
    filter: impl Fn(&Module) -> bool,
  ) -> ChunkModuleMaps {
    let mut maps = ChunkModuleMaps::default();
    for chunk in self.collect_reachable_chunks(from, include_initial) {
      let c = &self.chunks[chunk];
      let Some(chunk_id) = c.id else {
        continue;
      };
      for module in c.modules().map(|m| &self.modules[m]) {
        if !filter(module) {
          continue;
        }
        let Some(module_id) = module.numeric_id else {
          continue;
        };
        maps.id.entry(chunk_id).or_default().push(module_id);
        if let Some(hash) = &module.rendered_hash {
          maps.hash.insert(module_id, hash.clone());
        }
      }
    }
    for ids in maps.id.values_mut() {
      ids.sort_unstable();
    }
    maps
  }

  /// True iff some chunk at or below `from` accepted by `chunk_filter`
  /// contains a module accepted by `filter`. Unlike the map builders this
  /// walk includes the chunks of the starting groups.
  pub fn has_module_in_graph(
    &self,
    from: ChunkIdx,
    filter: impl Fn(&Module) -> bool,
    chunk_filter: impl Fn(&Chunk) -> bool,
  ) -> bool {
    let mut queue: FxIndexSet<GroupIdx> = self.chunks[from].groups().collect();
    let mut processed: FxIndexSet<ChunkIdx> = FxIndexSet::default();
    let mut cursor = 0;
    while cursor < queue.len() {
      let group = queue[cursor];
      cursor += 1;
      for chunk in self.groups[group].chunks() {
        if !processed.insert(chunk) {
          continue;
        }
        let c = &self.chunks[chunk];
        if chunk_filter(c) && c.modules().any(|m| filter(&self.modules[m])) {
          return true;
        }
      }
      queue.extend(self.groups[group].children());
    }
    false
  }
}
