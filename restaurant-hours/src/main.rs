use chrono::{Local, NaiveTime, Weekday};
use clap::{Parser, Subcommand, ValueEnum};
use restaurant_hours::services::csv_service::load_menu_items;
use restaurant_hours::{
    AppError, AppResult, BuilderRestaurantService, Config, CsvRestaurantService, DbService,
    MenuBackend, OpenHoursBackend, SqlRestaurantService, setup_environment,
};
use serde::Serialize;
use shared::models::RestaurantRecord;

/// Restaurant open-hours queries over CSV or SQLite
#[derive(Debug, Parser)]
#[command(name = "restaurant-hours", about = "Which restaurants are open?")]
struct Cli {
    /// Overrides DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Overrides CSV_PATH
    #[arg(long, global = true)]
    csv: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List restaurants open at a day and time (default: now)
    Open {
        /// Mon..Sun
        #[arg(long, value_parser = parse_day, requires = "time")]
        day: Option<Weekday>,

        /// HH:MM
        #[arg(long, value_parser = parse_time, requires = "day")]
        time: Option<NaiveTime>,

        #[arg(long, value_enum, default_value_t = Backend::Csv)]
        backend: Backend,
    },

    /// List restaurants with at least N menu items
    Menu {
        #[arg(long)]
        min: i64,

        #[arg(long, value_enum, default_value_t = Backend::Sql)]
        backend: Backend,
    },

    /// Seed the database from the CSV file when it is empty
    Import {
        /// Menu items CSV: restaurant_id,name,price_cents
        #[arg(long)]
        menu: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    Csv,
    Sql,
    Builder,
}

#[derive(Debug, Serialize)]
struct Output<'a> {
    backend: &'a str,
    restaurants: Vec<RestaurantRecord>,
}

fn parse_day(s: &str) -> Result<Weekday, String> {
    s.parse::<Weekday>()
        .map_err(|_| format!("invalid day '{s}', expected Mon..Sun"))
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    shared::hours::parse_time(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 1. 设置环境 (dotenv, 配置, 日志)
    let mut config = setup_environment();
    if let Some(url) = cli.database_url.clone() {
        config.database_url = url;
    }
    if let Some(path) = cli.csv.clone() {
        config.csv_path = path;
    }

    // 2. 执行命令
    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(error = %e, "Command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config) -> AppResult<()> {
    config.validate()?;
    match command {
        Command::Open { day, time, backend } => {
            let backend = open_backend(backend, config).await?;
            let restaurants = match (day, time) {
                (Some(day), Some(time)) => backend.open_restaurants(day, time).await?,
                _ => backend.open_restaurants_at(Local::now().naive_local()).await?,
            };
            print(backend.name(), restaurants)
        }
        Command::Menu { min, backend } => {
            if backend == Backend::Csv {
                return Err(AppError::validation("the CSV backend has no menu data"));
            }
            let db = connect(config).await?;
            let service: Box<dyn MenuBackend> = match backend {
                Backend::Builder => Box::new(BuilderRestaurantService::new(db)),
                _ => Box::new(SqlRestaurantService::new(db)),
            };
            print(service.name(), service.restaurants_with_menu_at_least(min).await?)
        }
        Command::Import { menu } => {
            let db = connect(config).await?;
            if db.restaurant_count().await? > 0 {
                tracing::info!(
                    database_url = %config.database_url,
                    "Database already seeded, skipping import"
                );
                return Ok(());
            }
            let csv = CsvRestaurantService::from_path(&config.csv_path)?;
            db.import_restaurants(csv.restaurants()).await?;
            if let Some(path) = menu {
                db.import_menu_items(&load_menu_items(path)?).await?;
            }
            Ok(())
        }
    }
}

async fn connect(config: &Config) -> AppResult<DbService> {
    DbService::connect(&config.database_url, config.db_max_connections).await
}

async fn open_backend(backend: Backend, config: &Config) -> AppResult<Box<dyn OpenHoursBackend>> {
    Ok(match backend {
        Backend::Csv => Box::new(CsvRestaurantService::from_path(&config.csv_path)?),
        Backend::Sql => Box::new(SqlRestaurantService::new(connect(config).await?)),
        Backend::Builder => Box::new(BuilderRestaurantService::new(connect(config).await?)),
    })
}

fn print(backend: &str, restaurants: Vec<RestaurantRecord>) -> AppResult<()> {
    let output = Output {
        backend,
        restaurants,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
