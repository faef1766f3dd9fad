/* src/server/adapter/axum/src/lib.rs */

mod error;
mod extract;
mod locale;
mod middleware;

pub use error::AxumError;
pub use extract::Meta;
pub use middleware::MetaActionExt;

/// Re-export meta-tags core for convenience
pub use meta_tags;
