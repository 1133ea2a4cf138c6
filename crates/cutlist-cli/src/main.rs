mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cutlist",
    version,
    about = "Convert PolyBoard cutting-list PDFs into supplier order spreadsheets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a PolyBoard PDF into an order spreadsheet (.xlsx)
    Export {
        /// Path to the PolyBoard PDF
        input_file: PathBuf,

        /// Spreadsheet to write (default: next to the PDF, .xlsx extension)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Supplier template to fill (default: plantilla/PLANILLA PEDIDOS ONLINE.xlsx if present)
        #[arg(short, long, value_name = "FILE", conflicts_with = "no_template")]
        template: Option<PathBuf>,

        /// Write a plain sheet with a header row even if the default template exists
        #[arg(long)]
        no_template: bool,

        /// JSON file describing where rows go inside the template
        #[arg(long, value_name = "FILE")]
        layout: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Parse a PolyBoard PDF and show the extracted rows (without writing a spreadsheet)
    Parse {
        /// Path to the PolyBoard PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write parsed output to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Print the default template layout as JSON (a starting point for --layout)
    Layout,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export {
            input_file,
            out,
            template,
            no_template,
            layout,
            output,
        } => commands::export::run(commands::export::ExportArgs {
            input_file,
            out,
            template,
            no_template,
            layout,
            output_format: output,
        }),
        Commands::Parse {
            input_file,
            output,
            out,
        } => commands::parse::run(input_file, &output, out),
        Commands::Layout => commands::layout::print_default(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
