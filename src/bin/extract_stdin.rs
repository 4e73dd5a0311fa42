//! Reads an HTML page from stdin (or a file) and prints the extraction
//! result as JSON on stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use article_sieve::{extract_bytes_with_options, Options};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "extract_stdin")]
#[command(about = "Extract article content, article list and pagination from an HTML page")]
struct Args {
    /// HTML file to read instead of stdin
    #[arg(long = "file")]
    file: Option<PathBuf>,

    /// Page URL used to resolve relative links in the content
    #[arg(long = "base-url")]
    base_url: Option<String>,

    /// Fall back to <body> when no content container is found
    #[arg(long = "force")]
    force: bool,

    /// Charset label overriding the page's own declaration (e.g. gbk)
    #[arg(long = "charset")]
    charset: Option<String>,

    /// Skip article list and pagination discovery
    #[arg(long = "no-listing")]
    no_listing: bool,

    /// Truncate the plain-text content to this many characters
    #[arg(long = "text-limit")]
    text_limit: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long = "pretty")]
    pretty: bool,
}

fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let html = match read_input(args.file.as_ref()) {
        Ok(html) => html,
        Err(err) => {
            eprintln!("Failed to read input: {err}");
            return ExitCode::FAILURE;
        }
    };

    let options = Options {
        force_body: args.force,
        base_url: args.base_url,
        charset: args.charset,
        text_limit: args.text_limit,
        include_listing: !args.no_listing,
        ..Options::default()
    };

    let result = match extract_bytes_with_options(&html, &options) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("Extraction failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    for warning in &result.warnings {
        log::warn!("{warning}");
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)
    } else {
        serde_json::to_string(&result)
    };

    match json {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Failed to serialize result: {err}");
            ExitCode::FAILURE
        }
    }
}
