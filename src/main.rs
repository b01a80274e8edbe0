//! application entry point

use std::env;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use anyhow::Context;
use chrono::TimeDelta;
use clap::Parser;
use derive_more::Display;
use log::{info, warn};
use crate::cli::{Cli, Commands};
use crate::storefront::model::config::ClientConfig;

mod cli;
mod storefront;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080/api";
const DEFAULT_TOAST_MILLIS: i64 = 3000;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv = match env {
        Env::Prod | Env::Stg => Ok(()), // provided by the deployment
        Env::Dev => dotenvy::from_path(Path::new(".env.dev")),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    if let Err(e) = dotenv {
        warn!("failed to load envs from .env.dev, falling back to defaults, {}", e);
    }

    // c. config
    let args = Cli::parse();
    let api_base = args.api_base
        .or_else(|| env::var("BOOKSTORE_API_BASE").ok())
        .unwrap_or(DEFAULT_API_BASE.to_string());
    let toast_millis = toast_millis(env::var("BOOKSTORE_TOAST_MILLIS").ok())?;
    let timeout_secs = match env::var("BOOKSTORE_HTTP_TIMEOUT_SECS") {
        Ok(v) => v.parse::<u64>().context("BOOKSTORE_HTTP_TIMEOUT_SECS must be a number of seconds")?,
        Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
    };
    let config = ClientConfig::new(
        api_base,
        TimeDelta::milliseconds(toast_millis),
        Duration::from_secs(timeout_secs),
    );

    info!("storefront is starting in env={}, api={}", env, config.api_base);

    // d. run
    cli::ensure_one_shot(&args.command)?;
    let mut controller = storefront::connect(&config)?;
    match args.command {
        Commands::Shell => cli::shell(&mut controller).await?,
        command => {
            cli::execute(&mut controller, command).await;
            cli::print_document(&mut controller);
        }
    }
    Ok(())
}

/// toast lifetime, a toast has to stay up for at least a millisecond
fn toast_millis(raw: Option<String>) -> anyhow::Result<i64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TOAST_MILLIS);
    };
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|millis| *millis > 0)
        .with_context(|| format!("BOOKSTORE_TOAST_MILLIS must be a positive number of milliseconds, got {:?}", raw))
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_parses_known_names_only() {
        assert!(matches!("stg".parse::<Env>(), Ok(Env::Stg)));
        assert_eq!("qa".parse::<Env>().unwrap_err(), "Invalid Env: qa");
    }

    #[test]
    fn toast_lifetime_must_be_positive() {
        assert_eq!(toast_millis(None).unwrap(), DEFAULT_TOAST_MILLIS);
        assert_eq!(toast_millis(Some("1500".to_string())).unwrap(), 1500);
        assert!(toast_millis(Some("0".to_string())).is_err());
        let err = toast_millis(Some("-20".to_string())).unwrap_err();
        assert!(err.to_string().contains("BOOKSTORE_TOAST_MILLIS"));
        assert!(toast_millis(Some("soon".to_string())).is_err());
    }
}
