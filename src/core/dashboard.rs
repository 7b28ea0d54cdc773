use crate::adapters::remote::RemoteClient;
use crate::domain::model::Listing;
use crate::domain::rows::{AnalyticsRow, ProductRow, ServiceRow};
use crate::utils::error::Result;
use serde::Serialize;

pub const ANALYTICS_TABLE: &str = "analytics";
pub const PRODUCTS_TABLE: &str = "products";
pub const SERVICES_TABLE: &str = "services";
pub const RECENT_LIMIT: usize = 6;

/// 儀表板的三個資料槽，每個槽只寫入一次；查詢失敗時保持空值
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSnapshot {
    pub analytics: Option<AnalyticsRow>,
    pub products: Vec<Listing>,
    pub services: Vec<Listing>,
}

impl DashboardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.analytics.is_none() && self.products.is_empty() && self.services.is_empty()
    }
}

pub async fn fetch_latest_analytics(client: &RemoteClient) -> Result<AnalyticsRow> {
    client
        .table(ANALYTICS_TABLE)
        .order_desc("timestamp")
        .limit(1)
        .single()
        .await
}

pub async fn fetch_recent_products(client: &RemoteClient, limit: usize) -> Result<Vec<Listing>> {
    let rows: Vec<ProductRow> = client.table(PRODUCTS_TABLE).limit(limit).fetch().await?;
    Ok(rows.into_iter().map(Listing::from).collect())
}

pub async fn fetch_recent_services(client: &RemoteClient, limit: usize) -> Result<Vec<Listing>> {
    let rows: Vec<ServiceRow> = client.table(SERVICES_TABLE).limit(limit).fetch().await?;
    Ok(rows.into_iter().map(Listing::from).collect())
}

/// Runs the three queries concurrently. Each failure is logged and leaves its
/// slot empty; there is no retry and no partial merging.
pub async fn load_dashboard(client: &RemoteClient, limit: usize) -> DashboardSnapshot {
    let (analytics, products, services) = tokio::join!(
        fetch_latest_analytics(client),
        fetch_recent_products(client, limit),
        fetch_recent_services(client, limit),
    );

    let analytics = match analytics {
        Ok(row) => Some(row),
        Err(e) => {
            tracing::error!("❌ Error fetching {}: {}", ANALYTICS_TABLE, e);
            None
        }
    };
    let products = products.unwrap_or_else(|e| {
        tracing::error!("❌ Error fetching {}: {}", PRODUCTS_TABLE, e);
        Vec::new()
    });
    let services = services.unwrap_or_else(|e| {
        tracing::error!("❌ Error fetching {}: {}", SERVICES_TABLE, e);
        Vec::new()
    });

    tracing::info!(
        "📊 Dashboard loaded: analytics={}, products={}, services={}",
        analytics.is_some(),
        products.len(),
        services.len()
    );

    DashboardSnapshot {
        analytics,
        products,
        services,
    }
}
