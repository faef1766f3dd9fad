/* src/server/core/rust/src/errors.rs */

#[derive(Debug, thiserror::Error)]
pub enum MetaTagsError {
  #[error("failed to parse meta tags config: {0}")]
  ConfigParse(#[from] toml::de::Error),

  #[error("invalid meta tags config: {0}")]
  InvalidConfig(String),

  #[error("messages for locale \"{locale}\" must be a JSON object")]
  InvalidCatalog { locale: String },

  #[error("meta tags context missing from request (route has no meta action)")]
  MissingContext,
}

impl MetaTagsError {
  pub fn invalid_config(msg: impl Into<String>) -> Self {
    Self::InvalidConfig(msg.into())
  }

  pub fn code(&self) -> &'static str {
    match self {
      Self::ConfigParse(_) | Self::InvalidConfig(_) | Self::InvalidCatalog { .. } => {
        "VALIDATION_ERROR"
      }
      Self::MissingContext => "INTERNAL_ERROR",
    }
  }

  pub fn status(&self) -> u16 {
    match self.code() {
      "VALIDATION_ERROR" => 400,
      _ => 500,
    }
  }
}
