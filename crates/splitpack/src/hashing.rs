use std::hash::Hasher;

use itertools::Itertools;
use splitpack_common::{ChunkIdx, ModuleIdx};
use splitpack_utils::xxhash::digest_base16;
use xxhash_rust::xxh3::Xxh3;

use crate::ChunkGraph;

/// Length of the shortened hash embedded in emitted file names.
pub const RENDERED_HASH_LEN: usize = 20;

impl<G> ChunkGraph<G> {
  /// Feeds assigned id, comma-joined ids and name into the accumulator,
  /// then every member module's own hash in the container's current sort
  /// order — the order must be fixed (`sort_items`) before hashing.
  pub fn update_chunk_hash(&self, chunk: ChunkIdx, hasher: &mut impl Hasher) {
    let c = &self.chunks[chunk];
    match c.id {
      Some(id) => hasher.write(id.to_string().as_bytes()),
      None => hasher.write(b"null"),
    }
    hasher.write(b" ");
    if let Some(ids) = &c.ids {
      hasher.write(ids.iter().join(",").as_bytes());
    }
    match &c.name {
      Some(name) => hasher.write(name.as_bytes()),
      None => hasher.write(b""),
    }
    hasher.write(b" ");
    for module in c.modules() {
      if let Some(hash) = &self.modules[module].hash {
        hasher.write(hash.as_bytes());
      }
    }
  }

  /// Computes and stores the content hash and its rendered prefix for one
  /// module. Set once per sealed compilation, cleared on disconnect.
  pub fn set_module_hash(&mut self, module: ModuleIdx) {
    let mut hasher = Xxh3::default();
    self.modules[module].update_hash(&mut hasher);
    let digest = digest_base16(&hasher);
    let m = &mut self.modules[module];
    m.rendered_hash = Some(digest[..RENDERED_HASH_LEN].into());
    m.hash = Some(digest.into());
  }

  /// Computes and stores the chunk hash pair. Member module hashes must be
  /// in place first.
  pub fn set_chunk_hash(&mut self, chunk: ChunkIdx) {
    let mut hasher = Xxh3::default();
    self.update_chunk_hash(chunk, &mut hasher);
    let digest = digest_base16(&hasher);
    let c = &mut self.chunks[chunk];
    c.rendered_hash = Some(digest[..RENDERED_HASH_LEN].into());
    c.hash = Some(digest.into());
  }
}
