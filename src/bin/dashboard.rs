use clap::Parser;
use quicklink_catalog::config::toml_config::TomlConfig;
use quicklink_catalog::core::dashboard::{load_dashboard, DashboardSnapshot};
use quicklink_catalog::core::ConfigProvider;
use quicklink_catalog::domain::model::format_kes;
use quicklink_catalog::utils::{logger, validation::Validate};
use quicklink_catalog::RemoteClient;

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Show the latest analytics snapshot with recent products and services")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "quicklink.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the snapshot as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(args.verbose);
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if config.json_logging() {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose || config.verbose());
    }

    tracing::info!("🚀 Starting dashboard snapshot");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 驗證配置
    let client = match config
        .validate()
        .and_then(|_| RemoteClient::from_config(&config))
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code().max(1));
        }
    };

    let snapshot = load_dashboard(&client, config.fetch_limit()).await;

    if args.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("❌ Failed to serialize snapshot: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print_snapshot(&snapshot);
    }
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    println!("Welcome back!");

    match &snapshot.analytics {
        Some(analytics) => {
            println!(
                "  Total Revenue: {}",
                format_kes(analytics.revenue.unwrap_or_default())
            );
            println!("  Orders:        {}", analytics.orders_count.unwrap_or_default());
            println!("  Rides:         {}", analytics.rides_count.unwrap_or_default());
            println!("  Users:         {}", analytics.users_count.unwrap_or_default());
            if let Some(recorded_at) = analytics.recorded_at() {
                println!("  As of:         {}", recorded_at.format("%Y-%m-%d %H:%M UTC"));
            }
        }
        None => println!("  No analytics available"),
    }

    println!("\nRecent Products");
    if snapshot.products.is_empty() {
        println!("  No products yet");
    }
    for product in &snapshot.products {
        println!(
            "  [{}] {} | {} | {}",
            product.id,
            product.title,
            product.category_label(),
            product.price_label()
        );
    }

    println!("\nRecent Services");
    if snapshot.services.is_empty() {
        println!("  No services yet");
    }
    for service in &snapshot.services {
        println!(
            "  [{}] {} | {} | {}",
            service.id,
            service.title,
            service.category_label(),
            service.price_label()
        );
    }
}
