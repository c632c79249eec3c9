use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use billflow::bills::BillsList;
use billflow::cli::{Cli, Commands};
use billflow::config::Config;
use billflow::diagnostics::TracingDiagnostics;
use billflow::models::BillFormValues;
use billflow::new_bill::{NewBillForm, SelectedFile};
use billflow::session::User;
use billflow::store::{BillStore, RemoteStore, SqliteStore};
use billflow::ui::{Alert, Navigator, ProofViewer, Route};

struct CliNavigator;

impl Navigator for CliNavigator {
    fn navigate(&self, route: Route) {
        info!("navigating to {}", route.path());
    }
}

struct CliViewer;

impl ProofViewer for CliViewer {
    fn show(&self, file_url: &str) {
        println!("{}", file_url);
    }
}

struct CliAlert;

impl Alert for CliAlert {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }
}

async fn open_store(config: &Config, database: &str) -> Result<Arc<dyn BillStore>> {
    match &config.api_base_url {
        Some(base_url) => Ok(Arc::new(RemoteStore::new(
            base_url,
            config.api_token.clone(),
            &config.http,
        )?)),
        None => Ok(Arc::new(
            SqliteStore::new(database, &config.receipts_dir).await?,
        )),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "billflow=info");
    }

    // Initialize logging to both console and file
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let file_appender = tracing_appender::rolling::never(".", "billflow.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;
    config.validate()?;

    match &cli.command {
        Commands::List { database } => {
            let store = open_store(&config, database).await?;
            let list = BillsList::new(
                Some(store),
                Arc::new(CliNavigator),
                Arc::new(CliViewer),
                Arc::new(TracingDiagnostics),
            );

            match list.fetch_all().await {
                Ok(Some(bills)) => {
                    println!("Found {} bills:", bills.len());
                    for bill in bills {
                        println!(
                            "{} - {} - {} - {}",
                            bill.date,
                            bill.name.as_deref().unwrap_or("-"),
                            bill.amount
                                .map(|a| a.to_string())
                                .unwrap_or_else(|| "-".to_string()),
                            bill.status
                        );
                    }
                }
                Ok(None) => println!("No store configured"),
                Err(e) => error!("Listing failed: {}", e),
            }
        }

        Commands::Submit {
            receipt,
            email,
            bill_type,
            name,
            amount,
            date,
            vat,
            pct,
            commentary,
            database,
        } => {
            let store = open_store(&config, database).await?;
            let mut form = NewBillForm::new(
                store,
                Arc::new(CliNavigator),
                Arc::new(CliAlert),
                Arc::new(TracingDiagnostics),
                User::new(email.clone()),
            );

            let file_name = receipt
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("receipt")
                .to_string();
            let content = std::fs::read(receipt)?;
            info!("Uploading receipt: {}", file_name);
            form.on_file_selected(Some(SelectedFile {
                name: file_name,
                content,
            }))
            .await;

            if form.bill_id().is_none() {
                anyhow::bail!("receipt upload failed or file type was rejected");
            }

            form.on_submit(BillFormValues {
                bill_type: bill_type.clone(),
                name: name.clone(),
                amount: *amount,
                date: date.to_string(),
                vat: vat.clone(),
                pct: *pct,
                commentary: commentary.clone(),
            })
            .await;
            info!("Submitted bill '{}' for {}", name, email);
        }
    }

    Ok(())
}
