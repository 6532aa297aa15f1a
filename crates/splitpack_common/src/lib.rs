mod chunk;
mod chunk_group;
mod module;
mod types;

pub use crate::{
  chunk::Chunk,
  chunk_group::ChunkGroup,
  module::Module,
  types::{
    build_meta::{BuildMeta, ExportsType, ProvidedExports},
    debug_id::{next_debug_id, DEBUG_ID_START},
    dependency::Dependency,
    import_kind::ImportKind,
    module_id::ModuleId,
    module_type::ModuleType,
    raw_idx::{ChunkIdx, DepIdx, GroupIdx, ModuleIdx, RawIdx},
    reason::InclusionReason,
    used_exports::UsedExports,
  },
};
