use crate::domain::model::{Listing, Page};
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::domain::rows::{ProductRow, ServiceRow};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_required_field, validate_url};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

/// 要求單筆物件回應的 Accept 標頭
pub const SINGLE_OBJECT_MEDIA_TYPE: &str = "application/vnd.pgrst.object+json";
const REST_PREFIX: &str = "rest/v1/";

/// 託管資料庫 REST 介面的唯讀客戶端
#[derive(Debug, Clone)]
pub struct RemoteClient {
    base_url: Url,
    api_key: String,
    client: Client,
}

impl RemoteClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        validate_url("remote.url", base_url)?;
        validate_non_empty_string("remote.api_key", api_key)?;

        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            client: Client::new(),
        })
    }

    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let url = config.remote_url();
        let api_key = config.api_key();
        let url = validate_required_field("remote.url", &url)?;
        let api_key = validate_required_field("remote.api_key", &api_key)?;
        Self::new(url, api_key)
    }

    pub fn table(&self, table: &str) -> RemoteQuery<'_> {
        RemoteQuery {
            client: self,
            table: table.to_string(),
            order_desc: None,
            limit: None,
        }
    }
}

/// A read-only query over every column: one descending ordering column and a row cap.
/// Filtering is never pushed to the remote side.
#[derive(Debug, Clone)]
pub struct RemoteQuery<'a> {
    client: &'a RemoteClient,
    table: String,
    order_desc: Option<String>,
    limit: Option<usize>,
}

impl<'a> RemoteQuery<'a> {
    /// 依欄位由新到舊排序
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order_desc = Some(column.to_string());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn endpoint(&self) -> Result<Url> {
        let mut url = self.client.base_url.join(REST_PREFIX)?.join(&self.table)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("select", "*");
            if let Some(column) = &self.order_desc {
                pairs.append_pair("order", &format!("{}.desc", column));
            }
            if let Some(limit) = self.limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        Ok(url)
    }

    fn request(&self) -> Result<RequestBuilder> {
        let url = self.endpoint()?;
        tracing::debug!("Making remote request to: {}", url);
        Ok(self
            .client
            .client
            .get(url)
            .header("apikey", &self.client.api_key)
            .bearer_auth(&self.client.api_key))
    }

    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Remote response status for '{}': {}", self.table, status);

        let body = response.text().await?;
        if !status.is_success() {
            return Err(CatalogError::RemoteStatus {
                table: self.table.clone(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    pub async fn fetch<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let body = self.send(self.request()?).await?;
        let rows: Vec<T> = serde_json::from_str(&body)?;
        tracing::debug!("Fetched {} rows from '{}'", rows.len(), self.table);
        Ok(rows)
    }

    /// 預期剛好一筆資料；零筆或多筆時遠端回傳錯誤狀態
    pub async fn single<T: DeserializeOwned>(&self) -> Result<T> {
        let request = self
            .request()?
            .header(reqwest::header::ACCEPT, SINGLE_OBJECT_MEDIA_TYPE);
        let body = self.send(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteTable {
    Products,
    Services,
}

impl RemoteTable {
    pub fn name(&self) -> &'static str {
        match self {
            RemoteTable::Products => "products",
            RemoteTable::Services => "services",
        }
    }

    pub fn for_page(page: Page) -> Option<Self> {
        match page {
            Page::Marketplace => Some(RemoteTable::Products),
            Page::Errands => Some(RemoteTable::Services),
            Page::Properties | Page::Food => None,
        }
    }

    pub fn page(&self) -> Page {
        match self {
            RemoteTable::Products => Page::Marketplace,
            RemoteTable::Services => Page::Errands,
        }
    }
}

/// 從遠端資料表載入目錄，筆數有上限
pub struct RemoteSource {
    client: RemoteClient,
    table: RemoteTable,
    limit: usize,
}

impl RemoteSource {
    pub fn new(client: RemoteClient, table: RemoteTable, limit: usize) -> Self {
        Self {
            client,
            table,
            limit,
        }
    }
}

#[async_trait]
impl CatalogSource for RemoteSource {
    fn page(&self) -> Page {
        self.table.page()
    }

    fn describe(&self) -> String {
        format!("remote table '{}' (limit {})", self.table.name(), self.limit)
    }

    async fn load(&self) -> Result<Vec<Listing>> {
        let query = self.client.table(self.table.name()).limit(self.limit);
        let listings = match self.table {
            RemoteTable::Products => query
                .fetch::<ProductRow>()
                .await?
                .into_iter()
                .map(Listing::from)
                .collect(),
            RemoteTable::Services => query
                .fetch::<ServiceRow>()
                .await?
                .into_iter()
                .map(Listing::from)
                .collect(),
        };
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_builds_query_string() {
        let client = RemoteClient::new("https://demo.supabase.co", "anon-key").unwrap();
        let url = client
            .table("analytics")
            .order_desc("timestamp")
            .limit(1)
            .endpoint()
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://demo.supabase.co/rest/v1/analytics?select=*&order=timestamp.desc&limit=1"
        );
    }

    #[test]
    fn test_base_url_with_path_keeps_prefix() {
        let client = RemoteClient::new("http://localhost:8080/proxy", "anon-key").unwrap();
        let url = client.table("products").endpoint().unwrap();

        assert_eq!(url.path(), "/proxy/rest/v1/products");
        assert_eq!(url.query(), Some("select=*"));
    }

    #[test]
    fn test_new_rejects_bad_settings() {
        assert!(RemoteClient::new("not a url", "key").is_err());
        assert!(RemoteClient::new("https://demo.supabase.co", "  ").is_err());
    }

    #[test]
    fn test_table_page_mapping() {
        assert_eq!(RemoteTable::for_page(Page::Marketplace), Some(RemoteTable::Products));
        assert_eq!(RemoteTable::for_page(Page::Properties), None);
        assert_eq!(RemoteTable::Services.page(), Page::Errands);
    }
}
