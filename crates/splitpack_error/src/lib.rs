use std::fmt;
use std::ops::{Deref, DerefMut};

/// Accumulated build diagnostics. Modules carry two of these (warnings and
/// errors); the graph core only stores them, external build logic fills them.
#[derive(Debug, Default)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  pub fn msg(message: impl fmt::Display) -> Self {
    Self(vec![anyhow::anyhow!(message.to_string())])
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl fmt::Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, error) in self.0.iter().enumerate() {
      if i > 0 {
        writeln!(f)?;
      }
      write!(f, "{error}")?;
    }
    Ok(())
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;
