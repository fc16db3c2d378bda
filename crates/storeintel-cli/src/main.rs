mod insights;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "storeintel-cli")]
#[command(about = "Shopify store insights command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch insights for a storefront and print them as JSON
    Fetch {
        /// Storefront URL; a bare domain is treated as https
        url: String,
        /// Also store the result in the database
        #[arg(long)]
        save: bool,
    },
    /// Print the stored insights for a storefront
    Show {
        url: String,
    },
    /// List every stored storefront
    List,
}

impl Commands {
    /// Whether the command reads or writes the database.
    fn needs_database(&self) -> bool {
        match self {
            Commands::Fetch { save, .. } => *save,
            Commands::Show { .. } | Commands::List => true,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("no command given; see `storeintel-cli --help`");
        return Ok(());
    };

    dotenvy::dotenv().ok();
    let config = storeintel_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let pool = if command.needs_database() {
        Some(connect(&config).await?)
    } else {
        None
    };

    match (command, pool) {
        (Commands::Fetch { url, .. }, pool) => {
            insights::run_fetch(&config, pool.as_ref(), &url).await?;
        }
        (Commands::Show { url }, Some(pool)) => insights::run_show(&pool, &url).await?,
        (Commands::List, Some(pool)) => insights::run_list(&pool).await?,
        (Commands::Show { .. } | Commands::List, None) => {
            anyhow::bail!("command requires a database connection");
        }
    }

    Ok(())
}

async fn connect(config: &storeintel_core::AppConfig) -> anyhow::Result<sqlx::PgPool> {
    let pool_config = storeintel_db::PoolConfig::from_app_config(config);
    let pool = storeintel_db::connect_pool(config.database_url()?, pool_config).await?;
    storeintel_db::run_migrations(&pool).await?;
    Ok(pool)
}
