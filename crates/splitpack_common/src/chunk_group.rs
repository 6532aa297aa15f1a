use crate::{ChunkIdx, GroupIdx};

/// Contract of the chunk-group collaborator: a DAG node above chunks
/// representing an entry point or code-split boundary. The graph core only
/// consumes this interface and never assumes a concrete representation; the
/// parent/child relation is expected to be acyclic and "initial" groups are
/// exactly the ones reachable synchronously from program start.
///
/// The `push_chunk`/`add_parent`/`add_child` hooks exist for the mutation
/// façade, which wires Chunk↔Group and Group↔Group edges while the build
/// pipeline constructs the graph.
pub trait ChunkGroup {
  /// True for entry-point groups reachable without an async boundary.
  fn is_initial(&self) -> bool;

  fn chunks(&self) -> impl Iterator<Item = ChunkIdx> + '_;

  fn parents(&self) -> impl Iterator<Item = GroupIdx> + '_;

  fn children(&self) -> impl Iterator<Item = GroupIdx> + '_;

  fn runtime_chunk(&self) -> Option<ChunkIdx>;

  /// Appends a chunk; returns `false` if it was already a member.
  fn push_chunk(&mut self, chunk: ChunkIdx) -> bool;

  /// Swaps `old` for `new` in place, keeping the position. When `new` is
  /// already a member, `old` is only removed.
  fn replace_chunk(&mut self, old: ChunkIdx, new: ChunkIdx) -> bool;

  /// Inserts `chunk` as a sibling directly before `before`.
  fn insert_chunk(&mut self, chunk: ChunkIdx, before: ChunkIdx);

  fn remove_chunk(&mut self, chunk: ChunkIdx) -> bool;

  fn add_parent(&mut self, parent: GroupIdx) -> bool;

  fn add_child(&mut self, child: GroupIdx) -> bool;
}
