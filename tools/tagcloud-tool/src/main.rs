mod config;
mod prompt;

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use config::{Config, Overrides, Settings};
use prompt::Prompter;
use tagcloud_common::cloud::word_counts;
use tagcloud_common::ranking::{rank_all, validate_count};
use tagcloud_common::render::{render_json, write_html};
use tagcloud_common::TagCloud;

const EMPTY_DOCUMENT: &str = "The input file was empty, so no tag cloud could be generated.";

#[derive(Parser)]
#[command(name = "tagcloud")]
#[command(about = "Generate an HTML tag cloud of the most frequent words in a text file")]
struct Cli {
    /// Config file (default: ~/.config/tagcloud/config.toml when present)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Separator characters, overriding the config file
    #[arg(long, global = true)]
    separators: Option<String>,

    /// Strip BOM and NFC-normalize the text before counting
    #[arg(long, global = true, overrides_with = "no_normalize")]
    normalize: bool,

    /// Count the text as-is, even when the config file enables normalization
    #[arg(long, global = true, overrides_with = "normalize")]
    no_normalize: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tag cloud page; missing arguments are asked for interactively
    Generate {
        /// Input text file
        #[arg(long, short)]
        input: Option<String>,
        /// Number of words in the cloud
        #[arg(long, short = 'n')]
        count: Option<usize>,
        /// Output file
        #[arg(long, short)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// Print the most frequent words with their counts
    Stats {
        /// Input text file
        #[arg(long, short)]
        input: Option<String>,
        /// How many words to list
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Json,
}

/// Collapse the `--normalize`/`--no-normalize` pair; `None` leaves the config value in force.
fn normalize_flag(normalize: bool, no_normalize: bool) -> Option<bool> {
    match (normalize, no_normalize) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Format {
    fn output_prompt(self) -> &'static str {
        match self {
            Format::Html => "Enter the name of an output HTML file: ",
            Format::Json => "Enter the name of an output JSON file: ",
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn read_document(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    tracing::info!("reading {}", path);
    fs::read_to_string(path).map_err(|e| format!("could not read {}: {}", path, e).into())
}

fn generate<R: io::BufRead, W: Write>(
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
    input: Option<String>,
    count: Option<usize>,
    output: Option<String>,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = match input {
        Some(i) => i,
        None => prompter.ask_non_empty("Enter the name of an input text file: ")?,
    };
    let text = read_document(&input)?;

    let freq = word_counts(&text, &settings.options);
    if freq.is_empty() {
        println!("{}", EMPTY_DOCUMENT);
        return Ok(());
    }

    let n = match count {
        Some(n) => validate_count(n, freq.len())?,
        None => prompter.ask_count(freq.len())?,
    };
    let output = match output {
        Some(o) => o,
        None => prompter.ask_non_empty(format.output_prompt())?,
    };

    let cloud = TagCloud::from_counts(&input, &freq, n, settings.options.scale)?;
    let mut out = BufWriter::new(
        fs::File::create(&output).map_err(|e| format!("could not create {}: {}", output, e))?,
    );
    match format {
        Format::Html => write_html(&cloud, settings.stylesheets.as_slice(), &mut out)?,
        Format::Json => {
            out.write_all(render_json(&cloud)?.as_bytes())?;
            out.write_all(b"\n")?;
            out.flush()?;
        }
    }
    println!("Tag cloud of {} words written to: {}", n, output);
    Ok(())
}

fn stats<R: io::BufRead, W: Write>(
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
    input: Option<String>,
    top: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = match input {
        Some(i) => i,
        None => prompter.ask_non_empty("Enter the name of an input text file: ")?,
    };
    let text = read_document(&input)?;

    let freq = word_counts(&text, &settings.options);
    if freq.is_empty() {
        println!("{}", EMPTY_DOCUMENT);
        return Ok(());
    }

    println!(
        "{}: {} words, {} unique",
        input,
        freq.total_words(),
        freq.len()
    );
    for entry in rank_all(&freq).into_iter().take(top) {
        println!("{:<20} {}", entry.word, entry.count);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let settings = Config::load(cli.config.as_deref())?.resolve(Overrides {
        separators: cli.separators,
        normalize: normalize_flag(cli.normalize, cli.no_normalize),
    })?;

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match cli.command {
        Commands::Generate {
            input,
            count,
            output,
            format,
        } => generate(&settings, &mut prompter, input, count, output, format),
        Commands::Stats { input, top } => stats(&settings, &mut prompter, input, top),
    }
}
