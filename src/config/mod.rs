pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::adapters::fixtures::PROPERTY_LOCATIONS;
    use crate::config::toml_config::{TomlConfig, DEFAULT_FETCH_LIMIT};
    use crate::core::contact::ContactChannel;
    use crate::core::filter::{Choice, FilterState, PriceBracket, SortBy};
    use crate::core::routes::Route;
    use crate::core::ConfigProvider;
    use crate::domain::model::Page;
    use crate::utils::error::{CatalogError, Result};
    use crate::utils::validation::{validate_positive_number, validate_url, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "quicklink")]
    #[command(about = "Browse and filter QuickLink service listings")]
    pub struct CliConfig {
        /// Listing page: marketplace, properties, food or errands. Falls back to the
        /// catalog page of --config, then properties
        #[arg(long)]
        pub page: Option<String>,

        /// Resolve the page from a site path such as /marketplace; overrides --page
        #[arg(long)]
        pub route: Option<String>,

        /// Catalog source: fixtures or remote
        #[arg(long, default_value = "fixtures")]
        pub source: String,

        /// Free-text search over title and location
        #[arg(short, long, default_value = "")]
        pub search: String,

        #[arg(long, default_value = "All")]
        pub category: String,

        #[arg(long, default_value = "All Locations")]
        pub location: String,

        #[arg(long, default_value = "Any Price")]
        pub price: String,

        /// featured, price-low, price-high, rating or newest
        #[arg(long, default_value = "featured")]
        pub sort: String,

        /// Listing ids to mark as favorites
        #[arg(long, value_delimiter = ',')]
        pub favorite: Vec<i64>,

        /// Show a phone, email or whatsapp link for listings with a contact
        #[arg(long)]
        pub contact: Option<String>,

        /// Row cap for remote fetches
        #[arg(long, default_value_t = DEFAULT_FETCH_LIMIT)]
        pub limit: usize,

        #[arg(long, env = "QUICKLINK_REMOTE_URL")]
        pub remote_url: Option<String>,

        #[arg(long, env = "QUICKLINK_API_KEY", hide_env_values = true)]
        pub api_key: Option<String>,

        /// TOML file with remote, catalog and logging sections; its remote settings
        /// override --remote-url/--api-key
        #[arg(long)]
        pub config: Option<String>,

        /// Print the view as JSON
        #[arg(long)]
        pub json: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    const DEFAULT_PAGE: Page = Page::Properties;

    impl CliConfig {
        /// --route 優先於 --page，兩者皆未指定時為房產頁
        pub fn page(&self) -> Result<Page> {
            match (&self.route, &self.page) {
                (Some(path), _) => Route::from_path(path).page().ok_or_else(|| {
                    CatalogError::UnknownFilterValue {
                        kind: "listing route",
                        value: path.clone(),
                    }
                }),
                (None, Some(page)) => page.parse(),
                (None, None) => Ok(DEFAULT_PAGE),
            }
        }

        /// 合併設定檔：命令列明確指定的值優先
        pub fn apply_file_config(&mut self, file: &TomlConfig) {
            if self.page.is_none() && self.route.is_none() {
                self.page = file.default_page().map(str::to_string);
            }
            self.verbose = self.verbose || file.verbose();
        }

        pub fn contact_channel(&self) -> Result<Option<ContactChannel>> {
            self.contact
                .as_deref()
                .map(str::parse::<ContactChannel>)
                .transpose()
        }

        pub fn is_remote(&self) -> bool {
            self.source.eq_ignore_ascii_case("remote")
        }

        /// 把命令列參數轉成頁面的篩選狀態
        pub fn filter_state(&self) -> Result<FilterState> {
            let page = self.page()?;

            let category = match Choice::parse(&self.category) {
                Choice::All => Choice::All,
                Choice::Only(raw) => {
                    let canonical = page.canonical_category(&raw).ok_or_else(|| {
                        CatalogError::UnknownFilterValue {
                            kind: "category",
                            value: raw.clone(),
                        }
                    })?;
                    Choice::Only(canonical.to_string())
                }
            };

            let location = Choice::parse(&self.location);
            if let (Page::Properties, Some(selected)) = (page, location.selected()) {
                if !PROPERTY_LOCATIONS.contains(&selected) {
                    tracing::warn!(
                        "Location '{}' is not one of the listed areas; matching as free text",
                        selected
                    );
                }
            }

            Ok(FilterState {
                search: self.search.clone(),
                category,
                location,
                price: self.price.parse::<PriceBracket>()?,
                sort: self.sort.parse::<SortBy>()?,
            })
        }
    }

    impl ConfigProvider for CliConfig {
        fn remote_url(&self) -> Option<&str> {
            self.remote_url.as_deref()
        }

        fn api_key(&self) -> Option<&str> {
            self.api_key.as_deref()
        }

        fn fetch_limit(&self) -> usize {
            self.limit
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            self.page()?;

            match self.source.to_ascii_lowercase().as_str() {
                "fixtures" | "remote" => {}
                other => {
                    return Err(CatalogError::InvalidConfigValueError {
                        field: "source".to_string(),
                        value: other.to_string(),
                        reason: "Valid sources: fixtures, remote".to_string(),
                    })
                }
            }

            validate_positive_number("limit", self.limit, 1)?;
            self.contact_channel()?;

            if self.is_remote() && self.config.is_none() {
                if let Some(url) = &self.remote_url {
                    validate_url("remote_url", url)?;
                }
            }

            self.filter_state().map(|_| ())
        }
    }

}
