use splitpack_common::{ChunkGroup, ChunkIdx};

use crate::ChunkGraph;

pub const DEFAULT_CHUNK_OVERHEAD: f64 = 10_000.0;
pub const DEFAULT_ENTRY_CHUNK_MULTIPLICATOR: f64 = 10.0;

/// Knobs of the cost model the optimization policy queries. Raw module bytes
/// are a poor proxy for the real cost of an extra output unit, so every chunk
/// pays a fixed overhead and initial chunks are weighted to bias the
/// optimizer against growing entry bundles.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChunkSizeOptions {
  pub chunk_overhead: Option<f64>,
  pub entry_chunk_multiplicator: Option<f64>,
}

impl<G: ChunkGroup> ChunkGraph<G> {
  /// Sum of the member modules' reported sizes, memoized on the member set
  /// (order-insensitive, so reads never pay for a sort).
  pub fn chunk_modules_size(&mut self, chunk: ChunkIdx) -> f64 {
    let modules = &self.modules;
    self.chunks[chunk]
      .modules
      .get_from_unordered_cache("modules-size", |members| {
        members.iter().map(|&module| modules[module].size).sum()
      })
  }

  pub fn add_multiplier_and_overhead(
    &self,
    chunk: ChunkIdx,
    size: f64,
    options: &ChunkSizeOptions,
  ) -> f64 {
    let overhead = options.chunk_overhead.unwrap_or(DEFAULT_CHUNK_OVERHEAD);
    let multiplicator = if self.is_initial_chunk(chunk) {
      options.entry_chunk_multiplicator.unwrap_or(DEFAULT_ENTRY_CHUNK_MULTIPLICATOR)
    } else {
      1.0
    };
    size * multiplicator + overhead
  }

  pub fn chunk_size(&mut self, chunk: ChunkIdx, options: &ChunkSizeOptions) -> f64 {
    let modules_size = self.chunk_modules_size(chunk);
    self.add_multiplier_and_overhead(chunk, modules_size, options)
  }

  /// Previews the cost of [`ChunkGraph::integrate_chunks`] without mutating:
  /// this chunk's modules plus only the other's modules not already present.
  /// `None` when the merge would be refused.
  pub fn integrated_size(
    &mut self,
    chunk: ChunkIdx,
    other: ChunkIdx,
    options: &ChunkSizeOptions,
  ) -> Option<f64> {
    if !self.can_chunks_be_integrated(chunk, other) {
      return None;
    }
    let mut size = self.chunk_modules_size(chunk);
    for module in self.chunks[other].modules() {
      if !self.chunks[chunk].contains_module(module) {
        size += self.modules[module].size;
      }
    }
    Some(self.add_multiplier_and_overhead(chunk, size, options))
  }
}
