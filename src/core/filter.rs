use crate::domain::model::Listing;
use crate::utils::error::CatalogError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 代表「不篩選」的選單值
pub const ALL_SENTINELS: [&str; 5] = [
    "All",
    "All Categories",
    "All Types",
    "All Locations",
    "All Cuisines",
];

/// 下拉選單的值：哨兵值 `All` 或某個具體選項
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || ALL_SENTINELS
                .iter()
                .any(|sentinel| sentinel.eq_ignore_ascii_case(trimmed))
        {
            Choice::All
        } else {
            Choice::Only(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            Choice::All => None,
            Choice::Only(value) => Some(value),
        }
    }
}

impl From<&str> for Choice {
    fn from(raw: &str) -> Self {
        Choice::parse(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PriceBracket {
    #[default]
    Any,
    Under50K,
    From50KTo100K,
    From100KTo200K,
    From200KTo500K,
    Over500K,
}

impl PriceBracket {
    pub const ALL: [PriceBracket; 6] = [
        PriceBracket::Any,
        PriceBracket::Under50K,
        PriceBracket::From50KTo100K,
        PriceBracket::From100KTo200K,
        PriceBracket::From200KTo500K,
        PriceBracket::Over500K,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PriceBracket::Any => "Any Price",
            PriceBracket::Under50K => "Under 50K",
            PriceBracket::From50KTo100K => "50K - 100K",
            PriceBracket::From100KTo200K => "100K - 200K",
            PriceBracket::From200KTo500K => "200K - 500K",
            PriceBracket::Over500K => "500K+",
        }
    }
}

impl fmt::Display for PriceBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PriceBracket {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if wanted.is_empty() || wanted.eq_ignore_ascii_case("any") {
            return Ok(PriceBracket::Any);
        }
        PriceBracket::ALL
            .into_iter()
            .find(|bracket| {
                let label: String = bracket.label().chars().filter(|c| !c.is_whitespace()).collect();
                label.eq_ignore_ascii_case(&wanted)
            })
            .ok_or_else(|| CatalogError::UnknownFilterValue {
                kind: "price bracket",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortBy {
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    Rating,
    Newest,
}

impl SortBy {
    pub fn key(&self) -> &'static str {
        match self {
            SortBy::Featured => "featured",
            SortBy::PriceLowToHigh => "price-low",
            SortBy::PriceHighToLow => "price-high",
            SortBy::Rating => "rating",
            SortBy::Newest => "newest",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortBy {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "featured" => Ok(SortBy::Featured),
            "price-low" => Ok(SortBy::PriceLowToHigh),
            "price-high" => Ok(SortBy::PriceHighToLow),
            "rating" => Ok(SortBy::Rating),
            "newest" => Ok(SortBy::Newest),
            _ => Err(CatalogError::UnknownFilterValue {
                kind: "sort order",
                value: s.to_string(),
            }),
        }
    }
}

/// 使用者在列表頁上選擇的篩選條件。
///
/// `price` 與 `sort` 只記錄選單狀態，不影響結果：價格區間的邊界與排序規則尚未定案。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    pub search: String,
    pub category: Choice,
    pub location: Choice,
    pub price: PriceBracket,
    pub sort: SortBy,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<Choice>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<Choice>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_price(mut self, price: PriceBracket) -> Self {
        self.price = price;
        self
    }

    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = sort;
        self
    }

    /// 「清除篩選」：全部回到預設值
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn predicates(&self) -> PredicateSet<'_> {
        PredicateSet::from_state(self)
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        self.predicates().test(listing)
    }
}

/// FilterState compiled into per-listing predicates. The search needle is
/// lowercased once instead of per listing.
#[derive(Debug, Clone)]
pub struct PredicateSet<'a> {
    needle: String,
    category: Option<&'a str>,
    location: Option<&'a str>,
}

impl<'a> PredicateSet<'a> {
    pub fn from_state(state: &'a FilterState) -> Self {
        Self {
            needle: state.search.to_lowercase(),
            category: state.category.selected(),
            location: state.location.selected(),
        }
    }

    pub fn test(&self, listing: &Listing) -> bool {
        self.matches_search(listing) && self.matches_category(listing) && self.matches_location(listing)
    }

    pub fn matches_search(&self, listing: &Listing) -> bool {
        self.needle.is_empty()
            || listing.title.to_lowercase().contains(&self.needle)
            || listing.location.to_lowercase().contains(&self.needle)
    }

    pub fn matches_category(&self, listing: &Listing) -> bool {
        match self.category {
            None => true,
            Some(category) => listing.category_label() == category,
        }
    }

    /// 地區比對是區分大小寫的子字串，"Kilimani" 可以命中 "Kilimani, Nairobi"
    pub fn matches_location(&self, listing: &Listing) -> bool {
        match self.location {
            None => true,
            Some(location) => listing.location.contains(location),
        }
    }
}
