//! docxdraw CLI - inspect drawings and hyperlinks in WordprocessingML parts
//!
//! Reads an extracted part such as `word/document.xml` and reports the
//! drawings and hyperlinks it contains.

use clap::{Parser, Subcommand};
use colored::*;
use docxdraw::docx::scan_document_with_options;
use docxdraw::render::{to_json, JsonFormat};
use docxdraw::units::{emu_to_inches, A4_MAX_DISPLAY_WIDTH};
use docxdraw::{DecodeOptions, EncodeOptions, Frame};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Drawing and hyperlink inspection for Word document parts
#[derive(Parser)]
#[command(
    name = "docxdraw",
    author = "iyulab",
    version,
    about = "Inspect drawings and hyperlinks in WordprocessingML",
    long_about = "docxdraw - Typed decoding of WordprocessingML drawings and hyperlinks.\n\n\
                  Operates on extracted document parts (word/document.xml, headers, footers)."
)]
struct Cli {
    /// Maximum element nesting depth
    #[arg(long, global = true, default_value_t = docxdraw::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every drawing and hyperlink as JSON
    Scan {
        /// Input part path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Decode the first drawing and write it back as markup
    Roundtrip {
        /// Input part path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Indent nested elements by this many spaces
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Summarize drawings and hyperlinks
    Info {
        /// Input part path
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = DecodeOptions::new().with_max_depth(cli.max_depth);

    match cli.command {
        Commands::Scan {
            input,
            output,
            compact,
        } => {
            let xml = fs::read_to_string(&input)?;
            let scan = scan_document_with_options(&xml, &options)?;

            let format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            let json = to_json(&scan, format)?;
            write_output(output.as_ref(), &json)?;

            if let Some(path) = output {
                println!(
                    "{} Scanned {} drawings, {} hyperlinks: {}",
                    "✓".green().bold(),
                    scan.drawings.len(),
                    scan.hyperlinks.len(),
                    path.display()
                );
            }
        }

        Commands::Roundtrip {
            input,
            output,
            indent,
        } => {
            let xml = fs::read_to_string(&input)?;
            let scan = scan_document_with_options(&xml, &options)?;

            let Some(drawing) = scan.drawings.first() else {
                println!("{} No drawings found in part", "!".yellow().bold());
                return Ok(());
            };

            let mut encode = EncodeOptions::new();
            if let Some(width) = indent {
                encode = encode.with_indent(width);
            }
            let markup = docxdraw::to_string_with_options(drawing, &encode)?;
            write_output(output.as_ref(), &markup)?;
        }

        Commands::Info { input } => {
            let xml = fs::read_to_string(&input)?;
            let scan = scan_document_with_options(&xml, &options)?;

            println!("{}", "Part Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            println!("{}: {}", "Drawings".bold(), scan.drawings.len());
            println!("{}: {}", "Hyperlinks".bold(), scan.hyperlinks.len());

            if !scan.drawings.is_empty() {
                println!("\n{}", "Drawings".cyan().bold());
                println!("{}", "─".repeat(40));
            }
            for (index, drawing) in scan.drawings.iter().enumerate() {
                let kind = match &drawing.frame {
                    Some(Frame::Inline(_)) => "inline",
                    Some(Frame::Anchor(_)) => "anchor",
                    None => "empty",
                };
                let name = drawing
                    .doc_properties()
                    .and_then(|p| p.name.as_deref())
                    .unwrap_or("-");
                let size = drawing
                    .extent()
                    .map(|e| {
                        format!(
                            "{:.2}in x {:.2}in",
                            emu_to_inches(e.cx),
                            emu_to_inches(e.cy)
                        )
                    })
                    .unwrap_or_else(|| "-".to_string());
                let oversized = drawing
                    .extent()
                    .is_some_and(|e| e.cx > A4_MAX_DISPLAY_WIDTH);

                print!("{:>3}. {} {} {}", index + 1, kind.bold(), name, size);
                if oversized {
                    print!(" {}", "(wider than A4)".yellow());
                }
                let images = drawing.image_references();
                if !images.is_empty() {
                    print!(" [{}]", images.join(", "));
                }
                println!();
            }

            if !scan.hyperlinks.is_empty() {
                println!("\n{}", "Hyperlinks".cyan().bold());
                println!("{}", "─".repeat(40));
            }
            for link in &scan.hyperlinks {
                let target = link
                    .id
                    .as_deref()
                    .or(link.anchor.as_deref())
                    .unwrap_or("-");
                println!("  {} {}", target.bold(), link.run.text());
            }
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn print_version() {
    println!("{} {}", "docxdraw".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Typed decoding of WordprocessingML drawings and hyperlinks");
}

fn write_output(path: Option<&PathBuf>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scan_arguments() {
        let cli = Cli::parse_from(["docxdraw", "scan", "document.xml", "--compact"]);
        assert_eq!(cli.max_depth, docxdraw::options::DEFAULT_MAX_DEPTH);
        assert!(matches!(cli.command, Commands::Scan { compact: true, .. }));
    }
}
