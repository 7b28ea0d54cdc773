use crate::core::contact::{ContactChannel, ContactLink};
use crate::core::filter::FilterState;
use crate::domain::model::{Listing, Page};
use serde::Serialize;

/// 目前可見的列表：目錄的子序列，保持原本順序
#[derive(Debug, Clone, Serialize)]
pub struct View<'a> {
    pub page: Page,
    pub heading: String,
    pub total: usize,
    pub results: Vec<&'a Listing>,
}

impl<'a> View<'a> {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// 空結果是正常狀態，頁面顯示「沒有結果」與清除篩選按鈕
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn ids(&self) -> Vec<i64> {
        self.results.iter().map(|listing| listing.id).collect()
    }

    /// Links for the visible listings that carry a contact, in view order.
    pub fn contact_links(&self, channel: ContactChannel) -> Vec<ContactLink> {
        self.results
            .iter()
            .filter_map(|listing| {
                listing.contact().map(|contact| ContactLink {
                    id: listing.id,
                    link: contact.link(channel),
                })
            })
            .collect()
    }
}

/// Scans the whole catalog on every call; nothing is memoized.
pub fn project<'a>(page: Page, listings: &'a [Listing], filters: &FilterState) -> View<'a> {
    let predicates = filters.predicates();
    let results: Vec<&Listing> = listings
        .iter()
        .filter(|listing| predicates.test(listing))
        .collect();

    tracing::debug!(
        "Projected {} of {} {} listings",
        results.len(),
        listings.len(),
        page
    );

    View {
        page,
        heading: heading(page, filters),
        total: listings.len(),
        results,
    }
}

pub fn heading(page: Page, filters: &FilterState) -> String {
    let mut heading = filters
        .category
        .selected()
        .unwrap_or(page.all_heading())
        .to_string();
    if let Some(location) = filters.location.selected() {
        heading.push_str(" in ");
        heading.push_str(location);
    }
    heading
}
