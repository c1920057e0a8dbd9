//! sdtx CLI - extract content-control metadata from Word documents

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use sdtx::export::{export_json, export_text};
use sdtx::{ExportFormat, load_document};

#[derive(Parser)]
#[command(name = "sdtx")]
#[command(version)]
#[command(about = "Extract content-control metadata trees from .docx files", long_about = None)]
struct Cli {
    /// Input Word document (.doc or .docx)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    export: ExportFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let result = load_document(&cli.file).await?;

    match cli.export {
        ExportFormat::Text => print!("{}", export_text(&result)),
        ExportFormat::Json => println!("{}", export_json(&result)?),
    }

    Ok(())
}
