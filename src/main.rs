use clap::Parser;
use cleantok::config::Config;
use cleantok::pipeline::clean_shared_text;
use cleantok::resolver::RedirectResolver;
use log::{debug, warn};
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

/// Cleans a shared TikTok link and prints it.
#[derive(Debug, Parser)]
#[command(name = "cleantok", version)]
#[command(about = "Resolve short links and strip tracking data from shared TikTok URLs", long_about = None)]
struct Cli {
    /// Print the full report as JSON instead of the bare URL.
    #[arg(long)]
    json: bool,

    /// Skip short-link resolution (no network access).
    #[arg(long)]
    no_resolve: bool,

    /// URL or shared text; read from standard input when omitted.
    #[arg(value_name = "TEXT")]
    text: Vec<String>,
}

impl Cli {
    /// Arguments joined back into the shared text, if any were given
    fn shared_text(&self) -> Option<String> {
        (!self.text.is_empty()).then(|| self.text.join(" "))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = Config::from_env();

    // Initialize Sentry if DSN is provided
    let _guard = config.sentry_dsn.as_ref().map(|dsn| {
        debug!("Initializing Sentry with release: {}", env!("CARGO_PKG_VERSION"));
        sentry::init((
            dsn.as_str(),
            sentry::ClientOptions {
                release: Some(env!("CARGO_PKG_VERSION").into()),
                environment: Some(config.sentry_environment.clone().into()),
                ..Default::default()
            },
        ))
    });

    let text = match cli.shared_text() {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            if let Err(err) = tokio::io::stdin().read_to_string(&mut buffer).await {
                eprintln!("failed to read standard input: {}", err);
                return ExitCode::from(2);
            }
            buffer
        }
    };

    let resolver = if !cli.no_resolve {
        match RedirectResolver::from_config(&config) {
            Ok(resolver) => Some(resolver),
            Err(err) => {
                warn!("HTTP client unavailable, skipping short-link resolution: {}", err);
                None
            }
        }
    } else {
        None
    };

    let Some(link) = clean_shared_text(resolver.as_ref(), &text).await else {
        eprintln!("no URL given");
        return ExitCode::from(2);
    };

    if cli.json {
        match serde_json::to_string_pretty(&link) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                warn!("Could not serialize report: {}", err);
                println!("{}", link.cleaned);
            }
        }
    } else {
        println!("{}", link.cleaned);
    }

    ExitCode::SUCCESS
}
