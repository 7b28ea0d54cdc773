pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{
    fixtures::FixtureSource,
    remote::{RemoteClient, RemoteSource, RemoteTable},
};
pub use crate::core::{
    catalog::{CatalogEngine, CatalogStore},
    filter::FilterState,
    projector::View,
    selection::SelectionState,
};
pub use utils::error::{CatalogError, Result};
