use std::cmp::Ordering;

use arcstr::ArcStr;
use oxc_index::IndexVec;
use splitpack_common::{
  Chunk, ChunkGroup, ChunkIdx, DepIdx, Dependency, GroupIdx, Module, ModuleId, ModuleIdx,
  ModuleType,
};

/// The compilation graph: arenas for every node kind plus the mutation
/// façade. Relationships are stored as index sets on both sides; every edge
/// mutation goes through here so the two sides can never drift apart.
#[derive(Debug)]
pub struct ChunkGraph<G> {
  pub modules: IndexVec<ModuleIdx, Module>,
  pub chunks: IndexVec<ChunkIdx, Chunk>,
  pub groups: IndexVec<GroupIdx, G>,
  pub dependencies: IndexVec<DepIdx, Dependency>,
}

impl<G> Default for ChunkGraph<G> {
  fn default() -> Self {
    Self {
      modules: IndexVec::default(),
      chunks: IndexVec::default(),
      groups: IndexVec::default(),
      dependencies: IndexVec::default(),
    }
  }
}

impl<G> ChunkGraph<G> {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add_module(&mut self, id: impl Into<ModuleId>, module_type: ModuleType) -> ModuleIdx {
    let idx = ModuleIdx::from_usize(self.modules.len());
    self.modules.push(Module::new(idx, id, module_type))
  }

  pub fn add_chunk(&mut self, name: Option<ArcStr>) -> ChunkIdx {
    let idx = ChunkIdx::from_usize(self.chunks.len());
    self.chunks.push(Chunk::new(idx, name))
  }

  pub fn add_group(&mut self, group: G) -> GroupIdx {
    self.groups.push(group)
  }

  pub fn add_dependency(&mut self, dependency: Dependency) -> DepIdx {
    self.dependencies.push(dependency)
  }

  /// The sole sanctioned way to create a module–chunk edge.
  pub fn connect_chunk_and_module(&mut self, chunk: ChunkIdx, module: ModuleIdx) {
    self.modules[module].add_chunk(chunk);
    self.chunks[chunk].add_module(module);
  }

  /// The sole sanctioned way to destroy a module–chunk edge.
  pub fn disconnect_chunk_and_module(&mut self, chunk: ChunkIdx, module: ModuleIdx) {
    self.modules[module].remove_chunk(chunk);
    self.chunks[chunk].remove_module(module);
  }

  /// Atomic re-parent: both ends of both edges stay symmetric.
  pub fn move_module(&mut self, module: ModuleIdx, from: ChunkIdx, to: ChunkIdx) {
    self.disconnect_chunk_and_module(from, module);
    self.connect_chunk_and_module(to, module);
    tracing::trace!(
      "moved module {} from chunk {from:?} to chunk {to:?}",
      self.modules[module].id.as_ref()
    );
  }

  /// Replaces a chunk's member set wholesale, keeping symmetry.
  pub fn set_chunk_modules(&mut self, chunk: ChunkIdx, modules: Vec<ModuleIdx>) {
    let previous: Vec<ModuleIdx> = self.chunks[chunk].modules().collect();
    for module in previous {
      self.disconnect_chunk_and_module(chunk, module);
    }
    for module in modules {
      self.connect_chunk_and_module(chunk, module);
    }
  }

  /// Resets a module's per-compilation state including the chunk back-edges.
  pub fn disconnect_module(&mut self, module: ModuleIdx) {
    let chunks: Vec<ChunkIdx> = self.modules[module].chunks().collect();
    for chunk in chunks {
      self.chunks[chunk].remove_module(module);
    }
    self.modules[module].disconnect();
  }

  /// Like [`ChunkGraph::disconnect_module`], but returns the module to
  /// pre-build state.
  pub fn unbuild_module(&mut self, module: ModuleIdx) {
    let chunks: Vec<ChunkIdx> = self.modules[module].chunks().collect();
    for chunk in chunks {
      self.chunks[chunk].remove_module(module);
    }
    self.modules[module].unbuild();
  }

  /// True iff some owning chunk designates this module as its entry module.
  pub fn is_entry_module(&self, module: ModuleIdx) -> bool {
    self.modules[module].chunks().any(|chunk| self.chunks[chunk].entry_module == Some(module))
  }

  /// Assigns the external short id used once the graph is sealed.
  pub fn set_module_id(&mut self, module: ModuleIdx, id: u32) {
    self.modules[module].numeric_id = Some(id);
  }

  /// Assigns the external chunk ids; the first one doubles as the primary id.
  pub fn set_chunk_ids(&mut self, chunk: ChunkIdx, ids: Vec<u32>) {
    let c = &mut self.chunks[chunk];
    c.id = ids.first().copied();
    c.ids = Some(ids);
  }

  /// Canonicalizes every iteration order in the graph: module-side items by
  /// index, chunk groups by index, chunk member sets by module identifier.
  /// Must run before hashing so output is deterministic.
  pub fn sort_items(&mut self) {
    for module in self.modules.iter_mut() {
      module.sort_items(true);
    }
    let modules = &self.modules;
    for chunk in self.chunks.iter_mut() {
      chunk.groups.sort();
      chunk.modules.sort_with(|&a, &b| modules[a].id.cmp(&modules[b].id));
    }
  }

  /// Total order for deterministic output: more modules sorts first, ties
  /// are broken pairwise over identifier-sorted member lists where the
  /// larger identifier at the earliest difference sorts first.
  pub fn compare_chunks(&self, a: ChunkIdx, b: ChunkIdx) -> Ordering {
    let chunk_a = &self.chunks[a];
    let chunk_b = &self.chunks[b];
    let by_len = chunk_b.get_number_of_modules().cmp(&chunk_a.get_number_of_modules());
    if by_len != Ordering::Equal {
      return by_len;
    }
    let mut ids_a: Vec<&ModuleId> = chunk_a.modules().map(|m| &self.modules[m].id).collect();
    let mut ids_b: Vec<&ModuleId> = chunk_b.modules().map(|m| &self.modules[m].id).collect();
    ids_a.sort_unstable();
    ids_b.sort_unstable();
    for (id_a, id_b) in ids_a.iter().zip(&ids_b) {
      let ord = id_b.cmp(id_a);
      if ord != Ordering::Equal {
        return ord;
      }
    }
    Ordering::Equal
  }
}

impl<G: ChunkGroup> ChunkGraph<G> {
  /// Façade wiring for Chunk↔Group edges during graph construction.
  pub fn connect_chunk_and_group(&mut self, chunk: ChunkIdx, group: GroupIdx) {
    self.chunks[chunk].add_group(group);
    self.groups[group].push_chunk(chunk);
  }

  /// Façade wiring for the group DAG.
  pub fn connect_group_parent_and_child(&mut self, parent: GroupIdx, child: GroupIdx) {
    self.groups[parent].add_child(child);
    self.groups[child].add_parent(parent);
  }

  /// Detaches a chunk from every member module and every owning group.
  pub fn remove_chunk(&mut self, chunk: ChunkIdx) {
    let modules: Vec<ModuleIdx> = self.chunks[chunk].modules().collect();
    for module in modules {
      self.modules[module].remove_chunk(chunk);
    }
    let groups: Vec<GroupIdx> = self.chunks[chunk].groups().collect();
    for group in &groups {
      self.groups[*group].remove_chunk(chunk);
    }
    let c = &mut self.chunks[chunk];
    c.modules.clear();
    c.groups.clear();
    tracing::debug!("removed chunk {chunk:?}");
  }

  /// True iff the chunk belongs to at least one initial group.
  pub fn is_initial_chunk(&self, chunk: ChunkIdx) -> bool {
    self.chunks[chunk].groups().any(|group| self.groups[group].is_initial())
  }

  /// True iff the chunk is the designated runtime chunk of its owning
  /// groups. Runtime status is a property of the groups collectively, so
  /// only the first owning group needs to be examined.
  pub fn has_chunk_runtime(&self, chunk: ChunkIdx) -> bool {
    match self.chunks[chunk].groups().next() {
      Some(group) => {
        self.groups[group].is_initial() && self.groups[group].runtime_chunk() == Some(chunk)
      }
      None => false,
    }
  }
}
