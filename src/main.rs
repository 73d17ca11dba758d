use std::{fs, path::PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use macie2_model::prelude::*;
use serde_json::{json, Value};
use strum::IntoEnumIterator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "macie2-model")]
#[command(version)]
#[command(about = "Inspect and marshal Amazon Macie 2 API requests", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every operation with its HTTP binding
    Operations,
    /// Print the HTTP request an input document produces
    Plan {
        /// Operation name, e.g. ListFindings
        operation: OperationName,
        /// JSON input document; an empty input is used when omitted
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// AWS region; `AWS_DEFAULT_REGION`, then the shared AWS configuration, when omitted
        #[arg(long, env = "AWS_REGION")]
        region: Option<String>,
        /// Endpoint override
        #[arg(long, env = "MACIE2_ENDPOINT")]
        endpoint: Option<String>,
    },
    /// Check a token against an enumeration, e.g. `decode EncryptionType aws:kms`
    Decode { enum_name: String, token: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // clap's `env` lookups only see the process environment.
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    match cli.command {
        Commands::Operations => {
            for operation in OperationName::iter() {
                let query = operation.query();
                if query.is_empty() {
                    println!("{:<40} {:<6} {}", operation, operation.method(), operation.path());
                } else {
                    println!(
                        "{:<40} {:<6} {}?{}",
                        operation,
                        operation.method(),
                        operation.path(),
                        query.join("&")
                    );
                }
            }
            Ok(())
        }
        Commands::Plan {
            operation,
            input,
            region,
            endpoint,
        } => {
            let input = read_input(input)?;
            let config = client_config(region, endpoint)?;
            let request = operation
                .plan(input, &config)
                .with_context(|| format!("Could not marshal {operation} request"))?;
            println!("{}", serde_json::to_string_pretty(&request)?);
            Ok(())
        }
        Commands::Decode { enum_name, token } => {
            let variant = decode(&enum_name, &token)?;
            println!("{enum_name}::{variant}");
            Ok(())
        }
    }
}

fn read_input(path: Option<PathBuf>) -> anyhow::Result<Value> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Could not read {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("{} is not a JSON document", path.display()))
        }
        None => Ok(json!({})),
    }
}

fn client_config(region: Option<String>, endpoint: Option<String>) -> anyhow::Result<ClientConfig> {
    if let Some(config) = env_config(region, endpoint.clone(), |key| std::env::var(key).ok())? {
        return Ok(config);
    }
    let rt = tokio::runtime::Runtime::new()?;
    let config = rt
        .block_on(ClientConfig::load(None))
        .context("Could not load shared AWS configuration")?;
    match endpoint {
        Some(endpoint) => Ok(config.with_endpoint(&endpoint)?),
        None => Ok(config),
    }
}

/// Flags first, then the environment. `None` when no region is set anywhere.
fn env_config(
    region: Option<String>,
    endpoint: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Option<ClientConfig>> {
    let overlay = |key: &str| match key {
        "AWS_REGION" => region.clone().or_else(|| lookup(key)),
        "MACIE2_ENDPOINT" => endpoint.clone().or_else(|| lookup(key)),
        _ => lookup(key),
    };
    let has_region = ["AWS_REGION", "AWS_DEFAULT_REGION"]
        .into_iter()
        .any(|key| overlay(key).is_some_and(|value| !value.is_empty()));
    if !has_region {
        return Ok(None);
    }
    let config = ClientConfig::from_lookup(overlay).context("Invalid region or endpoint")?;
    Ok(Some(config))
}

macro_rules! decoders {
    ($enum_name:expr, $token:expr, [$($ty:ident),+ $(,)?]) => {{
        $(
            if $enum_name == <$ty as WireEnum>::NAME {
                return <$ty as WireEnum>::from_wire($token)
                    .map(|variant| format!("{variant:?}"))
                    .map_err(anyhow::Error::from);
            }
        )+
        let known = [$(<$ty as WireEnum>::NAME),+];
        Err(anyhow!(
            "Unknown enumeration: {}. Known: {}",
            $enum_name,
            known.join(", ")
        ))
    }};
}

fn decode(enum_name: &str, token: &str) -> anyhow::Result<String> {
    decoders!(
        enum_name,
        token,
        [
            AdminStatus,
            AllowsUnencryptedObjectUploads,
            Currency,
            DayOfWeek,
            EffectivePermission,
            EncryptionType,
            ErrorCode,
            FindingActionType,
            FindingCategory,
            FindingPublishingFrequency,
            FindingStatisticsSortAttributeName,
            FindingType,
            FindingsFilterAction,
            GroupBy,
            JobComparator,
            JobStatus,
            JobType,
            ListJobsFilterKey,
            ListJobsSortAttributeName,
            MacieStatus,
            OperationName,
            OrderBy,
            RelationshipStatus,
            ScopeFilterKey,
            SensitiveDataItemCategory,
            SeverityDescription,
            SharedAccess,
            StorageClass,
            TagTarget,
            Unit,
            UsageStatisticsFilterKey,
            UsageStatisticsSortKey,
            UsageType,
            UserIdentityType,
        ]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn default_region_from_environment() {
        let config = env_config(None, None, vars(&[("AWS_DEFAULT_REGION", "eu-west-1")]))
            .unwrap()
            .unwrap();
        assert_eq!(config.region(), "eu-west-1");
        assert_eq!(config.endpoint_override(), None);
    }

    #[test]
    fn flags_win_over_environment() {
        let config = env_config(
            Some("ap-south-1".to_string()),
            Some("http://localhost:4566".to_string()),
            vars(&[
                ("AWS_DEFAULT_REGION", "eu-west-1"),
                ("MACIE2_ENDPOINT", "http://localhost:9000"),
            ]),
        )
        .unwrap()
        .unwrap();
        assert_eq!(config.region(), "ap-south-1");
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://localhost:4566/"
        );
    }

    #[test]
    fn no_region_defers_to_shared_config() {
        assert!(env_config(None, None, vars(&[])).unwrap().is_none());
        assert!(env_config(None, None, vars(&[("AWS_REGION", "")]))
            .unwrap()
            .is_none());
    }
}
