//! twip - Word table to HTML converter

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;

use twip::{ParagraphWriter, Table, TableHtmlConfig, TableHtmlWriter, TextBlocks};

#[derive(Parser)]
#[command(name = "twip")]
#[command(version, about = "Convert Word tables (JSON) to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    twip table.json                 Print the HTML fragment
    twip table.json -o table.html   Write the HTML fragment to a file
    twip -i table.json              Show table statistics")]
struct Cli {
    /// Input table (JSON)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<String>,

    /// Show table statistics without converting
    #[arg(short, long)]
    info: bool,

    /// Emit <td> instead of <th> for header rows
    #[arg(long)]
    plain_header_cells: bool,

    /// Omit the bgcolor/color cell attributes
    #[arg(long)]
    no_legacy_colors: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = if cli.info {
        show_info(&cli.input)
    } else {
        convert(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn show_info(path: &str) -> twip::Result<()> {
    let table: Table<TextBlocks> = Table::from_json_file(path)?;

    let cells: usize = table.rows.iter().map(|r| r.cells.len()).sum();
    let headers = table.rows.iter().filter(|r| r.is_header()).count();
    let merged = table
        .rows
        .iter()
        .flat_map(|r| &r.cells)
        .filter(|c| c.style.is_merge_restart())
        .count();

    println!("File: {path}");
    match &table.style {
        Some(twip::TableStyleSource::ClassName(name)) => println!("Style: {name}"),
        Some(twip::TableStyleSource::Structured(_)) => println!("Style: inline"),
        None => println!("Style: none"),
    }
    println!("Rows: {} ({} header)", table.rows.len(), headers);
    println!("Cells: {cells}");
    println!("Vertical merges: {merged}");

    Ok(())
}

fn convert(cli: &Cli) -> twip::Result<()> {
    let table: Table<TextBlocks> = Table::from_json_file(&cli.input)?;

    let config = TableHtmlConfig {
        header_cells: !cli.plain_header_cells,
        legacy_color_attributes: !cli.no_legacy_colors,
    };
    let writer = TableHtmlWriter::new(&ParagraphWriter).with_config(config);

    match &cli.output {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            writer.export(&table, &mut file)?;
            file.flush()?;
            if !cli.quiet {
                eprintln!("Wrote {} rows to {path}", table.rows.len());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            writer.export(&table, &mut lock)?;
        }
    }

    Ok(())
}
