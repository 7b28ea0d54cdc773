use crate::utils::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 商品分類，對應遠端 `product_category` 列舉
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Electronics,
    Clothing,
    Food,
    Home,
    Books,
    Other,
}

impl ProductCategory {
    pub const ALL: [ProductCategory; 6] = [
        ProductCategory::Electronics,
        ProductCategory::Clothing,
        ProductCategory::Food,
        ProductCategory::Home,
        ProductCategory::Books,
        ProductCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Electronics => "electronics",
            ProductCategory::Clothing => "clothing",
            ProductCategory::Food => "food",
            ProductCategory::Home => "home",
            ProductCategory::Books => "books",
            ProductCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Apartment,
    House,
    Commercial,
    Land,
    Office,
}

impl PropertyType {
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Commercial,
        PropertyType::Land,
        PropertyType::Office,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
            PropertyType::Commercial => "Commercial",
            PropertyType::Land => "Land",
            PropertyType::Office => "Office",
        }
    }
}

/// 服務分類，對應遠端 `service_category` 列舉
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Cleaning,
    Delivery,
    Repair,
    Moving,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::Cleaning,
        ServiceCategory::Delivery,
        ServiceCategory::Repair,
        ServiceCategory::Moving,
        ServiceCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Cleaning => "cleaning",
            ServiceCategory::Delivery => "delivery",
            ServiceCategory::Repair => "repair",
            ServiceCategory::Moving => "moving",
            ServiceCategory::Other => "other",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Billing {
    OneOff,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub whatsapp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub category: ProductCategory,
    pub rating: Option<f32>,
    pub reviews: Option<u32>,
    pub original_price: Option<f64>,
    pub stock: Option<i64>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: String,
    pub billing: Billing,
    pub description: String,
    pub contact: Contact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetails {
    pub cuisine: String,
    pub rating: f32,
    pub delivery_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetails {
    pub category: ServiceCategory,
    pub description: Option<String>,
    pub turnaround: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingKind {
    Product(ProductDetails),
    Property(PropertyDetails),
    Restaurant(RestaurantDetails),
    Service(ServiceDetails),
}

/// 列表頁上的一筆資料。共用欄位放在外層，子型別專屬欄位放在 `kind`。
///
/// 商品的 `location` 欄位存放賣家名稱；餐廳的 `price` 是外送費。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub location: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(flatten)]
    pub kind: ListingKind,
}

impl Listing {
    /// 分類篩選比對用的字串
    pub fn category_label(&self) -> &str {
        match &self.kind {
            ListingKind::Product(details) => details.category.as_str(),
            ListingKind::Property(details) => details.property_type.as_str(),
            ListingKind::Restaurant(details) => &details.cuisine,
            ListingKind::Service(details) => details.category.as_str(),
        }
    }

    pub fn contact(&self) -> Option<&Contact> {
        match &self.kind {
            ListingKind::Property(details) => Some(&details.contact),
            _ => None,
        }
    }

    pub fn rating(&self) -> Option<f32> {
        match &self.kind {
            ListingKind::Product(details) => details.rating,
            ListingKind::Restaurant(details) => Some(details.rating),
            _ => None,
        }
    }

    pub fn price_label(&self) -> String {
        match &self.kind {
            ListingKind::Property(PropertyDetails {
                billing: Billing::Monthly,
                ..
            }) => format!("{}/month", format_kes(self.price)),
            ListingKind::Restaurant(_) => format!("{} delivery", format_kes(self.price)),
            ListingKind::Service(_) => format!("From {}", format_kes(self.price)),
            _ => format_kes(self.price),
        }
    }
}

/// 擁有 id 的項目，單選狀態以 id 定位
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Listing {
    fn id(&self) -> i64 {
        self.id
    }
}

/// 叫車頁的車型選項
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideOption {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub capacity: String,
    pub fare_min: f64,
    pub fare_max: f64,
    pub eta: String,
    pub features: Vec<String>,
}

impl RideOption {
    pub fn fare_label(&self) -> String {
        format!(
            "KES {}-{}",
            group_thousands(self.fare_min),
            group_thousands(self.fare_max)
        )
    }
}

impl Identified for RideOption {
    fn id(&self) -> i64 {
        self.id
    }
}

/// 目錄所屬的頁面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Marketplace,
    Properties,
    Food,
    Errands,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Marketplace, Page::Properties, Page::Food, Page::Errands];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Marketplace => "marketplace",
            Page::Properties => "properties",
            Page::Food => "food",
            Page::Errands => "errands",
        }
    }

    /// 未選擇分類時的標題
    pub fn all_heading(&self) -> &'static str {
        match self {
            Page::Marketplace => "All Products",
            Page::Properties => "All Properties",
            Page::Food => "All Restaurants",
            Page::Errands => "All Errands",
        }
    }

    /// 分類選單中的選項（不含 "All" 哨兵值）
    pub fn category_options(&self) -> Vec<&'static str> {
        match self {
            Page::Marketplace => ProductCategory::ALL.iter().map(|c| c.as_str()).collect(),
            Page::Properties => PropertyType::ALL.iter().map(|t| t.as_str()).collect(),
            Page::Food => vec!["Kenyan", "Italian", "Indian"],
            Page::Errands => ServiceCategory::ALL.iter().map(|c| c.as_str()).collect(),
        }
    }

    /// Case-insensitive lookup of a category option, returning its canonical label.
    pub fn canonical_category(&self, raw: &str) -> Option<&'static str> {
        self.category_options()
            .into_iter()
            .find(|option| option.eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::ALL
            .into_iter()
            .find(|page| page.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownFilterValue {
                kind: "page",
                value: s.to_string(),
            })
    }
}

/// 以肯亞先令格式顯示金額，例如 `KES 85,000`
pub fn format_kes(amount: f64) -> String {
    format!("KES {}", group_thousands(amount))
}

fn group_thousands(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
