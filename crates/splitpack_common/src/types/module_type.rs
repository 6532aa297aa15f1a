use arcstr::ArcStr;

/// Construction tag handed over by the module factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleType {
  Js,
  Json,
  Css,
  Asset,
  Custom(ArcStr),
}
