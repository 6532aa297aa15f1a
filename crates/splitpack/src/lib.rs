mod accessibility;
mod graph;
mod hashing;
mod integrate;
mod manifest;
mod size;

pub use crate::{
  graph::ChunkGraph,
  hashing::RENDERED_HASH_LEN,
  manifest::{ChunkMaps, ChunkModuleMaps},
  size::{ChunkSizeOptions, DEFAULT_CHUNK_OVERHEAD, DEFAULT_ENTRY_CHUNK_MULTIPLICATOR},
};
pub use splitpack_common::*;
