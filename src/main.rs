//! Symbol Resources CLI
//!
//! Usage:
//!   symbol-resources [OPTIONS] <COMMAND> [FILE]
//!
//! Commands:
//!   extract      List the external resources referenced by the symbols
//!   absolutize   Rewrite relative resource references into absolute URLs
//!   marker       Render path markers as SVG data URIs
//!   styles       Show the SVG styles derived from each symbol
//!
//! Options:
//!   -c, --config <FILE>      Context file (TOML format)
//!   -b, --base-url <URL>     Document location relative URLs resolve against
//!   --legacy-line-cap        Emit the legacy engine's "flat" line cap
//!   -v, --verbose            Increase log verbosity
//!   -h, --help               Print help

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};

use symbol_resources::renderer::svg::decode_data_uri;
use symbol_resources::{
    convert_resource_url, get_external_resources, get_marker_path_base64,
    translate_to_svg_styles, ResourceContext, Symbol, SymbolError, SymbolInput,
};

#[derive(Parser)]
#[command(name = "symbol-resources")]
#[command(about = "Resolve the external resources referenced by map symbols")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Context file describing the host environment (TOML format)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Document location relative URLs are resolved against
    #[arg(short, long, global = true)]
    base_url: Option<String>,

    /// Emit the legacy engine's "flat" line cap instead of "butt"
    #[arg(long, global = true)]
    legacy_line_cap: bool,

    #[command(flatten)]
    verbosity: Verbosity,
}

#[derive(Subcommand)]
enum Command {
    /// List the external resources referenced by the symbols
    Extract {
        /// Symbol JSON file (reads from stdin if not provided)
        input: Option<PathBuf>,

        /// Resolve relative references before listing them
        #[arg(short, long)]
        absolute: bool,
    },

    /// Rewrite relative resource references into absolute URLs
    Absolutize {
        /// Symbol JSON file (reads from stdin if not provided)
        input: Option<PathBuf>,
    },

    /// Render path markers as SVG data URIs
    Marker {
        /// Symbol JSON file (reads from stdin if not provided)
        input: Option<PathBuf>,

        /// Print the SVG markup instead of the data URI
        #[arg(short, long)]
        decode: bool,
    },

    /// Show the SVG styles derived from each symbol
    Styles {
        /// Symbol JSON file (reads from stdin if not provided)
        input: Option<PathBuf>,
    },
}

/// Configures the verbosity of the logger.
#[derive(Clone, Copy, Debug, Args)]
struct Verbosity {
    /// `-v` is Debug, `-vv` is Trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

impl Verbosity {
    fn setup(self) {
        if let Err(e) = simple_logger::init_with_level(self.log_level()) {
            eprintln!("Error setting up logging: {}", e);
        }
    }

    fn log_level(self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    cli.verbosity.setup();

    let ctx = load_context(&cli);

    match &cli.command {
        Command::Extract { input, absolute } => {
            let symbols = read_symbols(input.as_deref());
            let resources = get_external_resources(&symbols, *absolute, &ctx).unwrap_or_default();
            print_json(&resources);
        }
        Command::Absolutize { input } => {
            if ctx.is_headless {
                log::warn!("no base URL configured; references are left unchanged");
            }
            let symbols: Vec<Symbol> = read_symbols(input.as_deref())
                .iter()
                .map(|symbol| convert_resource_url(symbol, &ctx))
                .collect();
            print_json(&symbols);
        }
        Command::Marker { input, decode } => {
            for symbol in read_symbols(input.as_deref()) {
                let Some(uri) = get_marker_path_base64(&symbol, &ctx) else {
                    log::info!("symbol has no renderable markerPath");
                    continue;
                };
                if *decode {
                    println!("{}", decode_data_uri(&uri).unwrap_or(uri));
                } else {
                    println!("{}", uri);
                }
            }
        }
        Command::Styles { input } => {
            let styles: Vec<_> = read_symbols(input.as_deref())
                .iter()
                .map(|symbol| translate_to_svg_styles(symbol, &ctx))
                .collect();
            print_json(&styles);
        }
    }
}

/// Build the context from the config file, then apply flag overrides
fn load_context(cli: &Cli) -> ResourceContext {
    let mut ctx = match &cli.config {
        Some(path) => match ResourceContext::from_file(path) {
            Ok(ctx) => ctx,
            Err(e) => {
                eprintln!("Error loading context '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => ResourceContext::default(),
    };

    if let Some(base_url) = &cli.base_url {
        ctx = ctx.with_base_url(base_url.clone());
    }
    if cli.legacy_line_cap {
        ctx = ctx.with_legacy_line_cap_quirk(true);
    }

    log::debug!("using context {:?}", ctx);
    ctx
}

/// Read symbols from a file or stdin, exiting with a report on failure
fn read_symbols(input: Option<&Path>) -> Vec<Symbol> {
    let (source, filename) = match input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", SymbolError::from(e));
                std::process::exit(1);
            }
            (buffer, "<stdin>".to_string())
        }
    };

    match SymbolInput::from_json(&source) {
        Ok(symbols) => symbols.into_symbols(),
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
