/* src/server/core/rust/src/lib.rs */

pub mod binder;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod context;
pub mod errors;
pub mod translate;

// Re-exports for ergonomic use
pub use binder::MetaTagsBinder;
pub use catalog::MessageCatalog;
pub use collection::{MetaKey, MetaTags};
pub use config::{DEFAULT_NAMESPACE, MetaTagsConfig};
pub use context::MetaContext;
pub use errors::MetaTagsError;
pub use translate::{FnTranslate, InLocale, LocaleTranslate, Translate, normalize_blank};
