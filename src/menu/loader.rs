use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::MenuConfig;
use crate::menu::error::LoadError;
use crate::menu::types::Menu;
use crate::menu::wire;

/// Fetches the menu from the configured endpoint.
#[derive(Debug, Clone)]
pub struct MenuLoader {
    client: reqwest::Client,
    url: String,
}

impl MenuLoader {
    pub fn new(config: &MenuConfig) -> Result<Self, LoadError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("menucard/", env!("CARGO_PKG_VERSION")));
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(LoadError::Client)?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues one GET and normalizes the body. No retries.
    pub async fn fetch(&self) -> Result<Menu, LoadError> {
        let started = Instant::now();
        tracing::info!(url = %self.url, "Fetching menu");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| self.request_error(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| self.request_error(source))?;
        let menu = wire::parse_menu(&body)?;

        tracing::info!(
            restaurant = %menu.restaurant_name,
            categories = menu.categories.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Menu loaded"
        );
        Ok(menu)
    }

    fn request_error(&self, source: reqwest::Error) -> LoadError {
        LoadError::Request {
            url: self.url.clone(),
            source,
        }
    }
}

/// Runs a single fetch on `handle` and hands the outcome to `deliver`.
///
/// Failures are logged and delivered as `None`. Nothing is retried, and the
/// task cannot be cancelled; if the receiver is gone `deliver` simply drops
/// the result.
pub fn spawn_load<F>(handle: &Handle, loader: MenuLoader, deliver: F) -> JoinHandle<()>
where
    F: FnOnce(Option<Menu>) + Send + 'static,
{
    handle.spawn(async move {
        let menu = match loader.fetch().await {
            Ok(menu) => Some(menu),
            Err(err) => {
                tracing::error!(error = %err, url = %loader.url(), "Error fetching menu");
                None
            }
        };
        deliver(menu);
    })
}
