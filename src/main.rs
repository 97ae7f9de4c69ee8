//! pageproof – command-line proof-sheet generator.
//!
//! Usage:
//!   pageproof [--output book.pdf] [--pages 200] [--font path/to/font.ttf]
//!
//! Writes a multi-page test PDF where each page carries its page number
//! upright and rotated, plus a centered marker glyph.

use std::{env, error::Error as _, path::PathBuf, process};

use pageproof::{generate, GeneratorConfig};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = GeneratorConfig::default();

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--output" | "-o" => match iter.next() {
                Some(v) => config.output_path = PathBuf::from(v),
                None => {
                    eprintln!("--output requires a path");
                    process::exit(1);
                }
            },
            "--pages" | "-p" => match iter.next().map(|v| v.parse::<u32>()) {
                Some(Ok(n)) => config.page_count = n,
                Some(Err(_)) => {
                    eprintln!("--pages requires an integer");
                    process::exit(1);
                }
                None => {
                    eprintln!("--pages requires a value");
                    process::exit(1);
                }
            },
            "--font" | "-f" => match iter.next() {
                Some(v) => config.font_path = PathBuf::from(v),
                None => {
                    eprintln!("--font requires a path");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other => {
                eprintln!("Unexpected argument: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
        }
    }

    match generate(&config) {
        Ok(summary) => {
            eprintln!(
                "Wrote '{}' ({} bytes, {} page{})",
                config.output_path.display(),
                summary.bytes_written,
                summary.pages,
                if summary.pages == 1 { "" } else { "s" }
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(source) = e.source() {
                eprintln!("  caused by: {source}");
            }
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("pageproof – printing-pipeline proof-sheet generator");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} [--output book.pdf] [--pages 200] [--font path/to/font.ttf]");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --output, -o   Destination PDF (default: book.pdf)");
    eprintln!("  --pages,  -p   Number of pages to generate (default: 200)");
    eprintln!("  --font,   -f   Font used for all text (default: fonts/LiberationSans-Regular.ttf)");
    eprintln!("  --help,   -h   Print this message");
}
