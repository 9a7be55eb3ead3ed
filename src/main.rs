//! cv-press CLI
//!
//! Usage:
//!   cv-press [OPTIONS] [FILE]
//!
//! Options:
//!   -l, --locale <LOCALE>      Section titles and labels language [en, fr]
//!   -s, --stylesheet <FILE>    Stylesheet file for theme colors (TOML format)
//!   -o, --output <FILE>        Write the PDF to this exact path
//!       --output-dir <DIR>     Directory for the generated file name
//!       --layout               Print the draw-command listing instead of a PDF
//!   -d, --debug                Debug logging and layout dump on stderr
//!   -h, --help                 Print help

use std::fs;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;

use cv_press::{layout_document, render_to_dir, render_with_config, CvData, Locale, RenderConfig, Stylesheet};

#[derive(Parser)]
#[command(name = "cv-press")]
#[command(about = "Render CV data (JSON) to a paginated A4 PDF")]
struct Cli {
    /// Input JSON file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Language of section titles and contact labels
    #[arg(short, long, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Stylesheet file for theme colors (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Write the PDF to this path instead of a generated file name
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory the generated file is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Print the computed draw commands instead of writing a PDF
    #[arg(long)]
    layout: bool,

    /// Debug logging and layout dump on stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    // Read input
    let loaded = match &cli.input {
        Some(path) => CvData::from_file(path),
        None => CvData::from_reader(io::stdin().lock()),
    };
    let cv = match loaded {
        Ok(cv) => cv,
        Err(e) => {
            let source = cli
                .input
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdin".to_string());
            eprintln!("Error reading CV data from {}: {}", source, e);
            std::process::exit(1);
        }
    };

    let config = RenderConfig::new()
        .with_stylesheet(stylesheet)
        .with_locale(cli.locale)
        .with_debug(cli.debug);

    if cli.layout {
        println!("{}", layout_document(&cv, &config).listing());
        return;
    }

    let written = match &cli.output {
        Some(path) => render_with_config(&cv, &config).and_then(|doc| {
            fs::write(path, &doc.bytes)?;
            log::info!("wrote {} page(s) to {}", doc.page_count, path.display());
            Ok(path.clone())
        }),
        None => render_to_dir(&cv, &config, &cli.output_dir),
    };

    match written {
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"cv-press - Render CV data to a paginated A4 PDF

USAGE:
    cv-press [OPTIONS] [FILE]
    cat cv.json | cv-press

OPTIONS:
    -l, --locale       en or fr (section titles and labels)
    -s, --stylesheet   Custom theme colors (TOML file)
    -o, --output       Output path (default: CV_<name>_<timestamp>.pdf)
    --output-dir       Directory for the generated file name
    --layout           Print draw commands instead of writing a PDF
    -d, --debug        Debug logging and layout dump
    -h, --help         Print help

QUICK START:
    echo '{{"personal": {{"name": "Ada Lovelace"}}, "skills": "- Rust"}}' | cv-press"#
    );
}
