use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use routescout::application::report::render_table;
use routescout::application::scan::ScanRequest;
use routescout::cli::commands::{Cli, Commands};
use routescout::domain::error::DomainError;
use routescout::domain::values::scoring::ScoringProfile;
use routescout::infrastructure::api::client::ApiClient;
use routescout::RouteScout;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run_command(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "routescout=debug,info"
    } else {
        "routescout=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

async fn run_command(cmd: Commands) -> Result<(), DomainError> {
    match cmd {
        Commands::Scan {
            hq_code,
            min_openness,
            max_distance,
            profile,
            base_url,
            timeout_secs,
            json,
        } => {
            let profile = ScoringProfile::from_name_or_default(&profile);
            let scout = match base_url {
                Some(url) => {
                    RouteScout::with_source(Arc::new(ApiClient::with_base_url(url)), profile)
                }
                None => RouteScout::new(profile),
            };

            let request = ScanRequest {
                hq_code,
                min_openness,
                max_distance_km: max_distance,
            };

            // The scan is one future; the timeout drops it whole, which
            // cancels every outstanding fetch.
            let report = match timeout_secs {
                Some(secs) => {
                    tokio::time::timeout(Duration::from_secs(secs), scout.scan(request))
                        .await
                        .map_err(|_| {
                            DomainError::Upstream(format!("scan timed out after {secs}s"))
                        })??
                }
                None => scout.scan(request).await?,
            };

            if json {
                let rendered = serde_json::to_string_pretty(&report)
                    .map_err(|e| DomainError::Internal(e.to_string()))?;
                println!("{rendered}");
            } else {
                println!("{}", render_table(&report));
            }
        }
        Commands::Profiles => {
            for profile in ScoringProfile::ALL {
                let params = serde_json::to_string(&profile.params())
                    .map_err(|e| DomainError::Internal(e.to_string()))?;
                println!("{profile}: {params}");
            }
        }
    }
    Ok(())
}
