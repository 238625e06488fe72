pub mod models {
    pub mod pokeapi;
}

pub mod client;
pub mod config;
mod env_file;
pub mod db {
    pub mod models;
}
pub mod schema;
pub mod server;
pub mod utils;
pub mod services {
    pub mod query;
    pub mod seed;
    pub mod upsert;
}

#[cfg(test)]
mod testing;

use crate::client::PokeApiClient;
use crate::config::Config;
use crate::services::seed::{self, SeedOptions};
use clap::{Parser, Subcommand};
use diesel::prelude::*;
use diesel::PgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{error, info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(author, version, about = "Seed a Pokédex database from PokeAPI and serve it as JSON")]
struct Args {
    /// Load environment variables from this file instead of ./.env
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply pending database migrations and exit
    Migrate,
    /// Fetch Pokémon from PokeAPI and store them
    Seed {
        /// Seed national ids 1..=COUNT (overrides SEED_POKEMON_COUNT)
        #[arg(short, long)]
        count: Option<i32>,

        /// Skip moves and learnsets
        #[arg(long)]
        skip_moves: bool,

        /// Skip evolution chains
        #[arg(long)]
        skip_evolutions: bool,
    },
    /// Serve the read-only JSON API
    Serve {
        /// Listen address (overrides SERVER_BIND)
        #[arg(short, long)]
        bind: Option<String>,
    },
}

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

fn apply_database_migrations(conn: &mut PgConnection) -> Result<(), String> {
    match conn.run_pending_migrations(MIGRATIONS) {
        Ok(applied) => {
            if applied.is_empty() {
                info!("Database schema is up to date; no migrations were applied");
            } else {
                let names = applied.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
                info!("Applied {} database migration(s): {}", applied.len(), names);
            }
            Ok(())
        }
        Err(e) => Err(format!("Applying database migrations failed: {}", e)),
    }
}

fn run(command: Command) -> Result<(), String> {
    // 1) Load config
    let cfg = Config::from_env()?;
    info!(
        "Config loaded (pokeapi={}, rate_limit={}ms, flavor_version={}, seed_count={}, seed_moves={}, seed_evolutions={}, bind={}, workers={})",
        cfg.pokeapi_base_url,
        cfg.rate_limit_delay.as_millis(),
        cfg.flavor_version,
        cfg.seed_count,
        cfg.seed_moves,
        cfg.seed_evolutions,
        cfg.server_bind,
        cfg.server_workers
    );

    // 2) Connect DB and apply pending migrations
    let mut conn = PgConnection::establish(&cfg.database_url).map_err(|e| format!("DB connection failed: {}", e))?;
    info!("Connected to database");
    apply_database_migrations(&mut conn)?;

    // 3) Dispatch
    match command {
        Command::Migrate => Ok(()),
        Command::Seed {
            count,
            skip_moves,
            skip_evolutions,
        } => {
            let count = count.unwrap_or(cfg.seed_count);
            if count < 1 {
                return Err("--count must be at least 1".to_string());
            }
            let opts = SeedOptions {
                count,
                flavor_version: cfg.flavor_version.clone(),
                moves: cfg.seed_moves && !skip_moves,
                evolutions: cfg.seed_evolutions && !skip_evolutions,
            };
            let api = PokeApiClient::new(&cfg.pokeapi_base_url, cfg.rate_limit_delay);
            info!("Seeding from {}", api.base_url());
            let report = seed::run(&mut conn, &api, &opts)?;
            if report.succeeded() == 0 {
                warn!("Seed: no Pokémon were stored; check POKEAPI_BASE_URL and network access");
            }
            Ok(())
        }
        Command::Serve { bind } => {
            // The pool opens its own connections.
            drop(conn);
            let bind = bind.unwrap_or_else(|| cfg.server_bind.clone());
            let pool_size = u32::try_from(cfg.server_workers)
                .map_err(|_| format!("SERVER_WORKERS={} does not fit a pool size", cfg.server_workers))?;
            let pool = server::build_pool(&cfg.database_url, pool_size)?;
            server::serve(pool, &bind, cfg.server_workers)
        }
    }
}

fn main() {
    let args = Args::parse();
    let loaded_env = match env_file::load(args.env_file) {
        Ok(info) => info,
        Err(err) => {
            eprintln!("fatal: {}", err);
            std::process::exit(1);
        }
    };

    // Init logging after environment so RUST_LOG from .env is respected.
    let default_filter = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(default_filter)
        .format_timestamp_secs()
        .init();

    if let Some(info) = loaded_env.as_ref() {
        let origin = if info.explicit { "CLI-specified" } else { "default" };
        info!("Environment loaded from {} .env file: {}", origin, info.path.display());
    }

    info!(
        "pokedex {} (git {}) starting",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TIME_GIT_HASH")
    );
    if let Err(e) = run(args.command) {
        error!("fatal: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_parses_subcommands() {
        let args = Args::try_parse_from(["pokedex", "seed", "--count", "9", "--skip-moves"]).unwrap();
        match args.command {
            Command::Seed {
                count,
                skip_moves,
                skip_evolutions,
            } => {
                assert_eq!(count, Some(9));
                assert!(skip_moves);
                assert!(!skip_evolutions);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let args = Args::try_parse_from(["pokedex", "serve", "--env-file", "local.env", "--bind", "0.0.0.0:8080"]).unwrap();
        assert_eq!(args.env_file, Some(PathBuf::from("local.env")));
        assert!(matches!(args.command, Command::Serve { bind: Some(ref b) } if b == "0.0.0.0:8080"));

        assert!(Args::try_parse_from(["pokedex"]).is_err());
    }
}
