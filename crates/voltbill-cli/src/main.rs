mod cmd_bill;
mod cmd_form;
mod cmd_rates;
mod logging;
mod prompt;
#[cfg(feature = "tui")]
mod tui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use voltbill_core::{CustomerClass, Settings};

#[derive(Parser)]
#[command(name = "voltbill", version, about = "Tiered electricity bill calculator")]
struct Cli {
    /// Directory receipts are saved into (default: $VOLTBILL_OUT_DIR or the current directory)
    #[arg(long, global = true)]
    out_dir: Option<PathBuf>,
    /// Append logs to this file instead of stderr (filter via VOLTBILL_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive bill form (default)
    Form {
        /// Use line-by-line prompts instead of the full-screen form
        #[arg(long)]
        plain: bool,
    },
    /// Generate one bill from arguments and print the receipt
    Bill {
        /// Customer name
        #[arg(long)]
        name: String,
        /// Customer ID (also names the saved file)
        #[arg(long)]
        id: String,
        /// Units consumed
        #[arg(long, allow_hyphen_values = true)]
        units: String,
        /// Customer type: domestic, commercial, or industrial
        #[arg(long, default_value = "domestic")]
        class: CustomerClass,
        /// Save the receipt to ElectricityBill_<id>.txt
        #[arg(long)]
        save: bool,
        /// Output the customer and bill as JSON instead of the receipt
        #[arg(long)]
        json: bool,
    },
    /// Show the tariff table
    Rates {
        /// Also show the per-tier breakdown for this many units
        #[arg(long)]
        units: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cmd = cli.cmd.unwrap_or(Command::Form { plain: false });

    let owns_terminal = matches!(cmd, Command::Form { plain: false }) && cfg!(feature = "tui");
    logging::init(logging::LogTarget::select(
        cli.log_file.as_deref(),
        owns_terminal,
    ))?;

    let mut settings = Settings::from_env();
    if let Some(dir) = cli.out_dir {
        settings = settings.with_out_dir(dir);
    }

    match cmd {
        Command::Form { plain } => cmd_form::execute(settings, plain),
        Command::Bill {
            name,
            id,
            units,
            class,
            save,
            json,
        } => cmd_bill::execute(&cmd_bill::BillParams {
            settings: &settings,
            name: &name,
            id: &id,
            units: &units,
            class,
            save,
            json,
        }),
        Command::Rates { units, json } => cmd_rates::execute(units, json),
    }
}
