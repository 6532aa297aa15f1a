use std::hash::Hasher;

use arcstr::ArcStr;
use splitpack_error::BuildError;
use splitpack_utils::{ident::number_to_identifier, sortable_set::SortableSet};

use crate::{
  BuildMeta, ChunkIdx, DepIdx, ExportsType, InclusionReason, ModuleId, ModuleIdx, ModuleType,
  ProvidedExports, UsedExports,
};
use crate::types::debug_id::next_debug_id;

/// One compiled unit in the graph. Created by the external module factory;
/// its chunk membership is wired exclusively through the graph façade.
#[derive(Debug)]
pub struct Module {
  /// Deterministic tie-break before external ids exist, never identity.
  pub debug_id: u32,
  pub idx: ModuleIdx,
  pub id: ModuleId,
  pub module_type: ModuleType,
  /// Reported by the factory, consumed by the chunk size model.
  pub size: f64,
  pub built: bool,
  // Plain structured payloads populated by the build pipeline; opaque here.
  pub context: Option<ArcStr>,
  pub resolve_options: Option<serde_json::Value>,
  pub factory_meta: Option<serde_json::Value>,
  pub build_info: Option<serde_json::Value>,
  pub build_meta: BuildMeta,
  pub warnings: BuildError,
  pub errors: BuildError,
  /// Externally assigned short id once the compilation is sealed.
  pub numeric_id: Option<u32>,
  pub hash: Option<ArcStr>,
  pub rendered_hash: Option<ArcStr>,
  pub index: Option<u32>,
  pub index2: Option<u32>,
  pub depth: Option<u32>,
  /// Tri-state usage verdict of the external tree-shaking pass.
  pub used: Option<bool>,
  pub used_exports: UsedExports,
  /// Insertion order matters for determinism until `sort_items` runs.
  pub reasons: Vec<InclusionReason>,
  pub chunks: SortableSet<ChunkIdx>,
}

impl Module {
  pub fn new(idx: ModuleIdx, id: impl Into<ModuleId>, module_type: ModuleType) -> Self {
    Self {
      debug_id: next_debug_id(),
      idx,
      id: id.into(),
      module_type,
      size: 0.0,
      built: false,
      context: None,
      resolve_options: None,
      factory_meta: None,
      build_info: None,
      build_meta: BuildMeta::default(),
      warnings: BuildError::default(),
      errors: BuildError::default(),
      numeric_id: None,
      hash: None,
      rendered_hash: None,
      index: None,
      index2: None,
      depth: None,
      used: None,
      used_exports: UsedExports::default(),
      reasons: Vec::new(),
      chunks: SortableSet::default(),
    }
  }

  /// Raw half-edge; only the graph façade may call this.
  pub fn add_chunk(&mut self, chunk: ChunkIdx) -> bool {
    self.chunks.add(chunk)
  }

  /// Raw half-edge; only the graph façade may call this.
  pub fn remove_chunk(&mut self, chunk: ChunkIdx) -> bool {
    self.chunks.remove(&chunk)
  }

  pub fn is_in_chunk(&self, chunk: ChunkIdx) -> bool {
    self.chunks.contains(&chunk)
  }

  pub fn get_number_of_chunks(&self) -> usize {
    self.chunks.len()
  }

  pub fn chunks(&self) -> impl Iterator<Item = ChunkIdx> + '_ {
    self.chunks.iter().copied()
  }

  pub fn add_reason(&mut self, origin: Option<ModuleIdx>, dep: DepIdx, explanation: impl Into<ArcStr>) {
    self.reasons.push(InclusionReason::new(origin, dep, explanation));
  }

  /// Removes the first reason matching the `(origin, dep)` pair.
  pub fn remove_reason(&mut self, origin: Option<ModuleIdx>, dep: DepIdx) -> bool {
    match self.reasons.iter().position(|reason| reason.matches(origin, dep)) {
      Some(pos) => {
        self.reasons.remove(pos);
        true
      }
      None => false,
    }
  }

  /// Whether the module as a whole survived tree shaking. Unknown counts as
  /// used.
  pub fn is_module_used(&self) -> bool {
    self.used != Some(false)
  }

  /// Tri-state provision query; `None` when the provided set is unknown.
  pub fn is_provided(&self, export_name: &str) -> Option<bool> {
    self.build_meta.is_provided(export_name)
  }

  /// Resolves the binding an export is reachable under, or `None` when the
  /// export was shaken off.
  ///
  /// When the export is both provided and used and the export style allows
  /// positional mangling (`Namespace`, or `Named` without a literal `default`
  /// in the used set), this returns the short positional identifier derived
  /// from the export's position in the provided list — the hook code
  /// generation uses for minified export bindings.
  pub fn is_used(&self, export_name: &str) -> Option<ArcStr> {
    if self.used.is_none() || self.used_exports == UsedExports::Unknown {
      // No tree-shaking info; everything keeps its original name.
      return Some(export_name.into());
    }
    if self.used == Some(false) {
      return None;
    }
    match &self.used_exports {
      UsedExports::None => None,
      UsedExports::Unknown | UsedExports::All => Some(export_name.into()),
      UsedExports::Specific(used_names) => {
        if !used_names.iter().any(|name| name == export_name) {
          return None;
        }
        if self.is_provided(export_name) == Some(true) && self.can_mangle(used_names) {
          if let ProvidedExports::Specific(provided) = &self.build_meta.provided_exports {
            if let Some(pos) = provided.iter().position(|name| name == export_name) {
              let pos = u32::try_from(pos).unwrap_or(u32::MAX);
              return Some(number_to_identifier(pos).into());
            }
          }
        }
        Some(export_name.into())
      }
    }
  }

  fn can_mangle(&self, used_names: &[ArcStr]) -> bool {
    match self.build_meta.exports_type {
      Some(ExportsType::Namespace) => true,
      Some(ExportsType::Named) => !used_names.iter().any(|name| name == "default"),
      None => false,
    }
  }

  /// Feeds the assigned id and the serialized used-exports record into a
  /// running hash accumulator. Called once per sealed compilation.
  pub fn update_hash(&self, hasher: &mut impl Hasher) {
    match self.numeric_id {
      Some(id) => hasher.write(id.to_string().as_bytes()),
      None => hasher.write(b"null"),
    }
    let used_exports =
      serde_json::to_string(&self.used_exports).expect("used exports should serialize to json");
    hasher.write(used_exports.as_bytes());
  }

  /// Canonicalizes iteration order: chunks by index (if requested), reasons
  /// by originating module (entry reasons first), an explicit used-exports
  /// list lexicographically.
  pub fn sort_items(&mut self, sort_chunks: bool) {
    if sort_chunks {
      self.chunks.sort();
    }
    self.reasons.sort_by_key(|reason| reason.origin);
    if let UsedExports::Specific(names) = &mut self.used_exports {
      names.sort_unstable();
    }
  }

  /// Resets all per-compilation graph state while preserving identity and
  /// build output. Used when a compilation is rebuilt from a previous one.
  /// Back-edges in chunks are the façade's responsibility.
  pub fn disconnect(&mut self) {
    self.hash = None;
    self.rendered_hash = None;
    self.numeric_id = None;
    self.index = None;
    self.index2 = None;
    self.depth = None;
    self.used = None;
    self.used_exports = UsedExports::default();
    self.reasons.clear();
    self.chunks.clear();
  }

  /// Returns the node to pre-build state: also drops build output and
  /// diagnostics, then disconnects.
  pub fn unbuild(&mut self) {
    self.built = false;
    self.build_meta = BuildMeta::default();
    self.build_info = None;
    self.warnings.clear();
    self.errors.clear();
    self.disconnect();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn module() -> Module {
    Module::new(ModuleIdx::from_raw(0), "src/a.js", ModuleType::Js)
  }

  #[test]
  fn used_export_is_mangled_by_provided_position() {
    let mut m = module();
    m.used = Some(true);
    m.build_meta.exports_type = Some(ExportsType::Namespace);
    m.build_meta.provided_exports = ProvidedExports::Specific(vec!["alpha".into(), "beta".into()]);
    m.used_exports = UsedExports::Specific(vec!["beta".into()]);

    // `beta` sits at provided position 1, so it mangles to "b".
    assert_eq!(m.is_used("beta").as_deref(), Some("b"));
    assert_eq!(m.is_used("alpha"), None);
  }

  #[test]
  fn named_exports_with_default_keep_their_names() {
    let mut m = module();
    m.used = Some(true);
    m.build_meta.exports_type = Some(ExportsType::Named);
    m.build_meta.provided_exports =
      ProvidedExports::Specific(vec!["default".into(), "other".into()]);
    m.used_exports = UsedExports::Specific(vec!["default".into(), "other".into()]);

    assert_eq!(m.is_used("other").as_deref(), Some("other"));
  }

  #[test]
  fn unknown_usage_keeps_every_name() {
    let m = module();
    assert_eq!(m.is_used("anything").as_deref(), Some("anything"));
    assert!(m.is_module_used());
  }

  #[test]
  fn unused_module_exposes_nothing() {
    let mut m = module();
    m.used = Some(false);
    m.used_exports = UsedExports::All;
    assert_eq!(m.is_used("a"), None);
    assert!(!m.is_module_used());
  }

  #[test]
  fn remove_reason_takes_first_match_only() {
    let mut m = module();
    let origin = Some(ModuleIdx::from_raw(7));
    let dep = DepIdx::from_raw(0);
    m.add_reason(origin, dep, "import a");
    m.add_reason(origin, dep, "import a again");
    assert!(m.remove_reason(origin, dep));
    assert_eq!(m.reasons.len(), 1);
    assert_eq!(m.reasons[0].explanation, "import a again");
    assert!(!m.remove_reason(None, dep));
  }

  #[test]
  fn sort_items_puts_entry_reasons_first() {
    let mut m = module();
    let dep = DepIdx::from_raw(0);
    m.add_reason(Some(ModuleIdx::from_raw(2)), dep, "import");
    m.add_reason(None, dep, "entry");
    m.add_reason(Some(ModuleIdx::from_raw(1)), dep, "import");
    m.sort_items(true);
    assert_eq!(m.reasons[0].origin, None);
    assert_eq!(m.reasons[1].origin, Some(ModuleIdx::from_raw(1)));
  }

  #[test]
  fn disconnect_preserves_build_output() {
    let mut m = module();
    m.built = true;
    m.hash = Some("deadbeef".into());
    m.numeric_id = Some(3);
    m.add_chunk(ChunkIdx::from_raw(0));
    m.add_reason(None, DepIdx::from_raw(0), "entry");
    m.disconnect();
    assert!(m.built);
    assert_eq!(m.hash, None);
    assert_eq!(m.numeric_id, None);
    assert_eq!(m.get_number_of_chunks(), 0);
    assert!(m.reasons.is_empty());

    m.unbuild();
    assert!(!m.built);
  }
}
