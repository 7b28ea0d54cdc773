use crate::core::filter::FilterState;
use crate::core::projector::{self, View};
use crate::domain::model::{Listing, Page};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;

/// 單一頁面的目錄，載入後不再修改
#[derive(Debug, Clone)]
pub struct CatalogStore {
    page: Page,
    listings: Vec<Listing>,
}

impl CatalogStore {
    pub fn new(page: Page, listings: Vec<Listing>) -> Self {
        Self { page, listings }
    }

    pub fn empty(page: Page) -> Self {
        Self::new(page, Vec::new())
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: i64) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn project(&self, filters: &FilterState) -> View<'_> {
        projector::project(self.page, &self.listings, filters)
    }
}

pub struct CatalogEngine<S: CatalogSource> {
    source: S,
}

impl<S: CatalogSource> CatalogEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn try_load(&self) -> Result<CatalogStore> {
        tracing::debug!("Loading catalog from {}", self.source.describe());
        let listings = self.source.load().await?;
        tracing::info!(
            "📦 Loaded {} {} listings from {}",
            listings.len(),
            self.source.page(),
            self.source.describe()
        );
        Ok(CatalogStore::new(self.source.page(), listings))
    }

    /// Failures are logged and leave the page with an empty catalog. No retry.
    pub async fn load(&self) -> CatalogStore {
        match self.try_load().await {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(
                    "❌ Error fetching {} catalog: {} (Category: {:?})",
                    self.source.page(),
                    e,
                    e.category()
                );
                CatalogStore::empty(self.source.page())
            }
        }
    }
}
