mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "holerite",
    version,
    about = "Salary-evolution extraction from Brazilian payslip PDFs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the salary-evolution table from a payslip PDF
    Extract {
        /// Path to the payslip PDF
        input_file: PathBuf,

        /// Output format: table (default), csv, or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the output to a file instead of stdout
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Reuse the previous page's period when a page has no recognizable date
        #[arg(long)]
        carry_forward: bool,

        /// Drop line items whose value is not strictly positive
        #[arg(long)]
        require_positive: bool,

        /// Export missing cells as 0 instead of "-"
        #[arg(long)]
        zero_fill: bool,
    },
    /// Show per-page period detection and field counts without exporting
    Scan {
        /// Path to the payslip PDF
        input_file: PathBuf,

        /// Reuse the previous page's period when a page has no recognizable date
        #[arg(long)]
        carry_forward: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            carry_forward,
            require_positive,
            zero_fill,
        } => commands::extract::run(
            input_file,
            &output,
            out,
            carry_forward,
            require_positive,
            zero_fill,
        ),
        Commands::Scan {
            input_file,
            carry_forward,
        } => commands::scan::run(input_file, carry_forward),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
