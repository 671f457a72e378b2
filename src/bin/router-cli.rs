use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use view_router::config::{load_config, ConfigError, RouterConfig};
use view_router::http::ROUTES_PATH;
use view_router::lifecycle::build_navigator;
use view_router::observability::logging;
use view_router::routing::{Params, RouteTable};
use view_router::Navigation;

#[derive(Parser)]
#[command(name = "router-cli")]
#[command(about = "Inspect and exercise a view route table", long_about = None)]
struct Cli {
    /// Route table configuration file.
    #[arg(short, long, default_value = "router.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration and print the route table
    Check,
    /// Resolve a path (starting with '/') or a route name
    Resolve { target: String },
    /// Build the location of a named route
    Href {
        name: String,
        /// Parameters as key=value
        params: Vec<String>,
    },
    /// Run navigations in order: '/path' pushes, '-' goes back, '+' goes forward, anything else is a route name
    Navigate {
        #[arg(required = true, allow_hyphen_values = true)]
        targets: Vec<String>,
    },
    /// Fetch the route listing from a running dev server
    Routes {
        #[arg(short, long, default_value = "http://127.0.0.1:5173")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            let config = local_config(&cli.config)?;
            let table = compile(&config)?;
            print_json(&json!({
                "base_path": config.base_path,
                "routes": table_json(&table),
            }))?;
        }
        Commands::Resolve { target } => {
            let table = compile(&local_config(&cli.config)?)?;
            let route = table.resolve(&target)?;
            print_json(&json!({
                "name": route.entry.name,
                "path": route.entry.path.as_str(),
                "view": route.entry.view,
                "params": route.params,
            }))?;
        }
        Commands::Href { name, params } => {
            let table = compile(&local_config(&cli.config)?)?;
            let params = parse_params(&params)?;
            println!("{}", table.href(&name, &params)?);
        }
        Commands::Navigate { targets } => {
            navigate(&local_config(&cli.config)?, &targets).await?;
        }
        Commands::Routes { url } => {
            let res = reqwest::Client::new()
                .get(format!("{}{}", url.trim_end_matches('/'), ROUTES_PATH))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

/// Load the configuration for commands that work without a dev server.
fn local_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let config = load_config(path)?;
    logging::init("warn");
    Ok(config)
}

async fn navigate(config: &RouterConfig, targets: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let navigator = build_navigator(config)?;
    for target in targets {
        let navigation = match target.as_str() {
            "-" => navigator.back().await?,
            "+" => navigator.forward().await?,
            path if path.starts_with('/') => Some(navigator.push(path).await?),
            name => Some(navigator.navigate(name, Params::new()).await?),
        };
        match navigation {
            Some(nav) => print_json(&navigation_json(&nav))?,
            None => eprintln!("{}: nothing to move to", target),
        }
    }
    let (entries, url) = navigator.history().await;
    print_json(&json!({ "history": entries, "url": url }))?;
    Ok(())
}

fn compile(config: &RouterConfig) -> Result<RouteTable, ConfigError> {
    RouteTable::new(&config.routes).map_err(ConfigError::from)
}

fn parse_params(raw: &[String]) -> Result<Params, String> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .ok_or_else(|| format!("expected key=value, got `{}`", pair))
        })
        .collect()
}

fn table_json(table: &RouteTable) -> Value {
    table
        .entries()
        .iter()
        .map(|e| json!({ "name": e.name, "path": e.path.as_str(), "view": e.view }))
        .collect()
}

fn navigation_json(nav: &Navigation) -> Value {
    json!({
        "route": nav.route,
        "location": nav.location,
        "params": nav.params,
        "view": nav.view.module,
        "bytes": nav.view.body.len(),
    })
}

fn print_json(value: &Value) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: dev server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
