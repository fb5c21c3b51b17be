//! Catalog Fetcher

use futures_util::future::try_join_all;
use serde::de::DeserializeOwned;

use super::HttpSource;
use crate::config::CatalogConfig;
use crate::error::{AppError, AppResult};
use crate::models::{DetailRecord, Item, ListPage};
use crate::render::Renderer;
use crate::surface::{Alerts, CardContainer};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load Pokemon. Please try again!";

pub struct Catalog<S> {
    source: S,
    config: CatalogConfig,
}

impl<S: HttpSource> Catalog<S> {
    pub fn new(source: S, config: CatalogConfig) -> Self {
        Self { source, config }
    }

    /// Fetch the reference list, then every detail record concurrently.
    ///
    /// All-or-nothing: the first failing detail request fails the whole
    /// call. Items come back in list order.
    pub async fn fetch_all(&self) -> AppResult<Vec<Item>> {
        let list_url = self.config.list_url();
        let page: ListPage = self.get_json(&list_url).await?;
        log::debug!("[Catalog] {} references from {}", page.results.len(), list_url);

        let details = try_join_all(
            page.results
                .iter()
                .map(|reference| self.get_json::<DetailRecord>(&reference.url)),
        )
        .await?;

        Ok(details.into_iter().map(Item::from).collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let body = self.source.get_text(url).await?;
        serde_json::from_str(&body).map_err(|source| AppError::Decode { url: url.to_string(), source })
    }
}

/// Page-load sequence: fetch, then render.
///
/// A failure is logged once and alerted once, and nothing is rendered.
/// Returns the number of cards shown.
pub async fn load_catalog<S, C, A>(catalog: &Catalog<S>, renderer: &Renderer<C>, alerts: &A) -> AppResult<usize>
where
    S: HttpSource,
    C: CardContainer,
    A: Alerts,
{
    match catalog.fetch_all().await {
        Ok(items) => {
            renderer.render(&items);
            log::info!("[Catalog] Loaded {} items", items.len());
            Ok(items.len())
        }
        Err(err) => {
            if err.is_network() {
                log::error!("[Catalog] Network error fetching catalog: {}", err);
            } else {
                log::error!("[Catalog] Error fetching catalog: {}", err);
            }
            alerts.alert(LOAD_FAILED_MESSAGE);
            Err(err)
        }
    }
}
