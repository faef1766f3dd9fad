/* demos/sessions/server-rust/src/main.rs */

mod head;
mod pages;

use std::env;
use std::sync::Arc;

use meta_tags::{MetaTagsBinder, MetaTagsConfig};
use tracing_subscriber::EnvFilter;

fn load_config() -> Result<MetaTagsConfig, Box<dyn std::error::Error>> {
  match env::var("META_TAGS_CONFIG") {
    Ok(path) => {
      let content = std::fs::read_to_string(&path)?;
      let config = MetaTagsConfig::from_toml_str(&content)?;
      tracing::info!(%path, namespace = %config.namespace, "loaded meta tags config");
      Ok(config)
    }
    Err(_) => Ok(MetaTagsConfig::default()),
  }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
  let addr = format!("0.0.0.0:{port}");

  let binder = Arc::new(MetaTagsBinder::localized(load_config()?, pages::catalog()?)?);
  tracing::info!(locales = ?binder.locales(), "meta tags binder ready");

  let router = pages::router(&binder);
  let listener = tokio::net::TcpListener::bind(&addr).await?;
  let actual_port = listener.local_addr()?.port();
  tracing::info!("sessions demo running on http://localhost:{actual_port}");
  axum::serve(listener, router).await?;
  Ok(())
}
