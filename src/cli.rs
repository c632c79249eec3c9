use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "billflow")]
#[command(about = "Employee expense bill workflow: list stored bills and submit new ones")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored bills, formatted for display
    List {
        /// Database file path (local store)
        #[arg(short, long, default_value = "./billflow.db")]
        database: String,
    },

    /// Upload a receipt and submit a new bill
    Submit {
        /// Path to the receipt image (png, jpg or jpeg)
        #[arg(short, long)]
        receipt: PathBuf,

        /// Submitting user's email
        #[arg(short, long)]
        email: String,

        /// Expense type
        #[arg(long, default_value = "Transports")]
        bill_type: String,

        /// Expense name
        #[arg(short, long)]
        name: String,

        /// Amount
        #[arg(short, long)]
        amount: f64,

        /// Expense date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// VAT amount
        #[arg(long, default_value = "")]
        vat: String,

        /// VAT percentage
        #[arg(long, default_value = "20")]
        pct: u32,

        /// Free-form commentary
        #[arg(long, default_value = "")]
        commentary: String,

        /// Database file path (local store)
        #[arg(short, long, default_value = "./billflow.db")]
        database: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_submit_parses_date() {
        let cli = Cli::parse_from([
            "billflow", "submit", "--receipt", "facture.jpg", "--email", "a@a", "--name",
            "Vol Paris Londres", "--amount", "348", "--date", "2021-11-22",
        ]);
        match cli.command {
            Commands::Submit { date, amount, pct, .. } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2021, 11, 22).unwrap());
                assert_eq!(amount, 348.0);
                assert_eq!(pct, 20);
            }
            _ => panic!("expected submit command"),
        }
    }
}
