use sluggable_core::application::{
    commands::records::CreateRecordCommand,
    ports::{time::Clock, util::SlugGenerator},
    queries::records::GetRecordBySlugQuery,
    services::ApplicationServices,
};
use sluggable_core::config::AppConfig;
use sluggable_core::domain::record::RecordStore;
use sluggable_core::infrastructure::{
    database, repositories::SqliteRecordStore, time::SystemClock, util::DefaultSlugGenerator,
};
use anyhow::{Context, Result, bail};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage:
  sluggable_core create <source value> [--slug <slug>] [--field <name>=<value>]...
  sluggable_core get <slug>
  sluggable_core require <slug>";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Create {
        source: String,
        slug: Option<String>,
        fields: Vec<(String, String)>,
    },
    Get(String),
    Require(String),
}

fn parse_args(args: &[String]) -> Result<Command> {
    let Some((verb, rest)) = args.split_first() else {
        bail!("missing command\n{USAGE}");
    };

    match verb.as_str() {
        "create" => {
            let mut rest = rest.iter();
            let source = rest.next().context("create needs a source value")?.clone();
            let mut slug = None;
            let mut fields = Vec::new();
            while let Some(flag) = rest.next() {
                match flag.as_str() {
                    "--slug" => slug = Some(rest.next().context("--slug needs a value")?.clone()),
                    "--field" => {
                        let pair = rest.next().context("--field needs name=value")?;
                        let (name, value) = pair
                            .split_once('=')
                            .with_context(|| format!("expected name=value, got {pair:?}"))?;
                        fields.push((name.to_string(), value.to_string()));
                    }
                    other => bail!("unknown flag {other:?}\n{USAGE}"),
                }
            }
            Ok(Command::Create {
                source,
                slug,
                fields,
            })
        }
        "get" | "require" => {
            let [slug] = rest else {
                bail!("{verb} takes exactly one slug\n{USAGE}");
            };
            Ok(if verb == "get" {
                Command::Get(slug.clone())
            } else {
                Command::Require(slug.clone())
            })
        }
        other => bail!("unknown command {other:?}\n{USAGE}"),
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args)?;

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let store: Arc<dyn RecordStore> = Arc::new(SqliteRecordStore::new(pool));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(
        store,
        clock,
        slugger,
        vec![config.slug().clone()],
        config.max_attempts(),
    )?;

    let slug_config = config.slug();
    let collection = slug_config.collection().to_string();

    let output = match command {
        Command::Create {
            source,
            slug,
            fields,
        } => {
            let mut builder = CreateRecordCommand::builder()
                .collection(collection)
                .field(slug_config.source_field().as_str(), source);
            for (name, value) in fields {
                builder = builder.field(name, value);
            }
            if let Some(slug) = slug {
                builder = builder.field(slug_config.slug_field().as_str(), slug);
            }
            let command = builder.build().map_err(anyhow::Error::msg)?;
            let created = services.record_commands.create_record(command).await?;
            serde_json::to_string_pretty(&created)?
        }
        Command::Get(slug) => {
            let found = services
                .record_queries
                .find_by_slug(GetRecordBySlugQuery { collection, slug })
                .await?;
            serde_json::to_string_pretty(&found)?
        }
        Command::Require(slug) => {
            let found = services
                .record_queries
                .get_by_slug(GetRecordBySlugQuery { collection, slug })
                .await?;
            serde_json::to_string_pretty(&found)?
        }
    };

    println!("{output}");
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn parses_create_with_flags() {
        let command = parse_args(&args(&[
            "create",
            "Acme Inc.",
            "--slug",
            "acme",
            "--field",
            "city=Berlin",
        ]))
        .unwrap();
        assert_eq!(
            command,
            Command::Create {
                source: "Acme Inc.".into(),
                slug: Some("acme".into()),
                fields: vec![("city".into(), "Berlin".into())],
            }
        );
    }

    #[test]
    fn parses_lookups() {
        assert_eq!(
            parse_args(&args(&["get", "acme"])).unwrap(),
            Command::Get("acme".into())
        );
        assert_eq!(
            parse_args(&args(&["require", "acme"])).unwrap(),
            Command::Require("acme".into())
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["get"])).is_err());
        assert!(parse_args(&args(&["create"])).is_err());
        assert!(parse_args(&args(&["create", "x", "--field", "novalue"])).is_err());
        assert!(parse_args(&args(&["delete", "x"])).is_err());
    }
}
