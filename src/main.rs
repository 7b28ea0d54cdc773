use clap::Parser;
use quicklink_catalog::config::toml_config::TomlConfig;
use quicklink_catalog::core::contact::{ContactChannel, ContactLink};
use quicklink_catalog::core::selection::SelectionState;
use quicklink_catalog::core::ConfigProvider;
use quicklink_catalog::domain::model::{format_kes, Listing, ListingKind};
use quicklink_catalog::domain::ports::CatalogSource;
use quicklink_catalog::utils::{logger, validation::Validate};
use quicklink_catalog::{
    CatalogEngine, CatalogError, CliConfig, FilterState, FixtureSource, RemoteClient,
    RemoteSource, RemoteTable, Result, View,
};
use serde::Serialize;

#[derive(Serialize)]
struct ViewReport<'a> {
    #[serde(flatten)]
    view: &'a View<'a>,
    filters: &'a FilterState,
    favorites: &'a [i64],
    #[serde(skip_serializing_if = "Option::is_none")]
    contact_links: Option<Vec<ContactLink>>,
}

#[tokio::main]
async fn main() {
    let mut config = CliConfig::parse();

    // 載入 TOML 配置 (若有指定)
    let file_config = match config.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            logger::init_cli_logger(config.verbose);
            exit_with(e);
        }
    };

    if let Some(file_config) = &file_config {
        config.apply_file_config(file_config);
    }

    // 初始化日誌
    if file_config.as_ref().is_some_and(TomlConfig::json_logging) {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting quicklink catalog browser");
    if let Some(path) = &config.config {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config, file_config).await {
        exit_with(e);
    }
}

fn exit_with(e: CatalogError) -> ! {
    tracing::error!(
        "❌ Catalog browse failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code().max(1))
}

async fn run(config: CliConfig, file_config: Option<TomlConfig>) -> Result<()> {
    config.validate()?;

    let page = config.page()?;
    let filters = config.filter_state()?;

    if config.is_remote() {
        let table = RemoteTable::for_page(page).ok_or_else(|| {
            CatalogError::InvalidConfigValueError {
                field: "page".to_string(),
                value: page.to_string(),
                reason: "Only marketplace and errands are backed by a remote table".to_string(),
            }
        })?;

        let (client, limit) = match &file_config {
            Some(file_config) => {
                file_config.validate()?;
                (RemoteClient::from_config(file_config)?, file_config.fetch_limit())
            }
            None => (RemoteClient::from_config(&config)?, config.fetch_limit()),
        };

        let engine = CatalogEngine::new(RemoteSource::new(client, table, limit));
        browse(&engine, &config, &filters).await
    } else {
        let engine = CatalogEngine::new(FixtureSource::new(page));
        browse(&engine, &config, &filters).await
    }
}

async fn browse<S: CatalogSource>(
    engine: &CatalogEngine<S>,
    config: &CliConfig,
    filters: &FilterState,
) -> Result<()> {
    let store = engine.load().await;

    let mut favorites = SelectionState::new();
    for id in &config.favorite {
        if store.get(*id).is_none() {
            tracing::warn!("Favorite id {} is not in the {} catalog", id, store.page());
        }
        favorites.toggle(*id);
    }

    let view = store.project(filters);
    let channel = config.contact_channel()?;

    if config.json {
        let report = ViewReport {
            view: &view,
            filters,
            favorites: favorites.ids(),
            contact_links: channel.map(|channel| view.contact_links(channel)),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_view(&view, &favorites, channel);
    }

    Ok(())
}

fn print_view(view: &View<'_>, favorites: &SelectionState, channel: Option<ContactChannel>) {
    println!("{} ({} of {})", view.heading, view.len(), view.total);

    if view.is_empty() {
        println!("No listings match the current filters.");
        if view.total > 0 {
            println!("💡 Clear the filters to see all {} listings.", view.total);
        }
        return;
    }

    for listing in &view.results {
        println!("{}", listing_line(listing, favorites.contains(listing.id)));
        if let (Some(channel), Some(contact)) = (channel, listing.contact()) {
            println!("      ↳ {}", contact.link(channel));
        }
    }
}

fn listing_line(listing: &Listing, favorite: bool) -> String {
    let mut line = format!(
        "{} [{}] {} | {}",
        if favorite { "♥" } else { " " },
        listing.id,
        listing.title,
        listing.price_label()
    );
    if !listing.location.is_empty() {
        line.push_str(&format!(" | {}", listing.location));
    }
    if let Some(rating) = listing.rating() {
        line.push_str(&format!(" | ★ {:.1}", rating));
    }
    if listing.featured {
        line.push_str(" | featured");
    }
    if let ListingKind::Product(details) = &listing.kind {
        if let Some(original) = details.original_price {
            line.push_str(&format!(" (was {})", format_kes(original)));
        }
    }
    line
}
