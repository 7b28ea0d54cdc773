pub mod catalog;
pub mod contact;
pub mod dashboard;
pub mod filter;
pub mod projector;
pub mod routes;
pub mod selection;

pub use crate::domain::model::{Listing, ListingKind, Page};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
