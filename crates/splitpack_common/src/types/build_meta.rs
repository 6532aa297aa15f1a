use arcstr::ArcStr;

/// Export style of a module's compiled output, as reported by the build
/// pipeline. Gates whether used exports may be mangled to positional names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportsType {
  Namespace,
  Named,
}

/// Which named exports a module offers. `Unknown` and `True` (provides
/// something, set unknown) both leave provision queries undecided.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProvidedExports {
  #[default]
  Unknown,
  True,
  Specific(Vec<ArcStr>),
}

/// Compiled characteristics of a module, populated by the external build
/// pipeline. The graph core only reads `exports_type` and
/// `provided_exports`; everything else is opaque payload.
#[derive(Debug, Clone, Default)]
pub struct BuildMeta {
  pub exports_type: Option<ExportsType>,
  pub provided_exports: ProvidedExports,
  pub side_effect_free: Option<bool>,
}

impl BuildMeta {
  /// Tri-state: `None` when the provided set is unknown.
  pub fn is_provided(&self, export_name: &str) -> Option<bool> {
    match &self.provided_exports {
      ProvidedExports::Specific(names) => Some(names.iter().any(|name| name == export_name)),
      ProvidedExports::Unknown | ProvidedExports::True => None,
    }
  }
}
