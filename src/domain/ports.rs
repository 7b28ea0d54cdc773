use crate::domain::model::{Listing, Page};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 目錄資料來源：靜態 fixture 或遠端查詢
#[async_trait]
pub trait CatalogSource: Send + Sync {
    fn page(&self) -> Page;
    fn describe(&self) -> String;
    async fn load(&self) -> Result<Vec<Listing>>;
}

pub trait ConfigProvider: Send + Sync {
    fn remote_url(&self) -> Option<&str>;
    fn api_key(&self) -> Option<&str>;
    fn fetch_limit(&self) -> usize;
}
