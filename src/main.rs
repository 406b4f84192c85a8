mod ui;

use anyhow::Result;
use clap::Parser;
use passlist::analyze_password;
use passlist::generator::{expand_years, generate_with_stats, GeneratorConfig, MAX_COMBINED_WORDS};
use passlist::wordlist::{save_wordlist, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "passlist",
    version,
    author,
    about = "Password strength analyzer and custom wordlist generator"
)]
struct Cli {
    /// Password to analyze
    #[arg(short, long)]
    password: Option<String>,

    /// Read the password to analyze from a hidden prompt
    #[arg(long, conflicts_with = "password")]
    ask_password: bool,

    /// Name(s)
    #[arg(long, num_args = 0..)]
    name: Vec<String>,

    /// Pet name(s)
    #[arg(long, num_args = 0..)]
    pet: Vec<String>,

    /// Favorite things
    #[arg(long, num_args = 0..)]
    favorite: Vec<String>,

    /// Dates of birth or other dates
    #[arg(long, num_args = 0..)]
    dob: Vec<String>,

    /// Extra words
    #[arg(long, num_args = 0..)]
    extra: Vec<String>,

    /// Years to append (two years form a range, otherwise a list)
    #[arg(long, num_args = 1..)]
    years: Vec<String>,

    /// Output filename
    #[arg(long, default_value = "wordlist.txt")]
    out: PathBuf,

    /// Compress output as .gz
    #[arg(long)]
    gzip: bool,

    /// Maximum number of words to keep
    #[arg(long, default_value_t = MAX_COMBINED_WORDS, value_parser = parse_max_words)]
    maxwords: usize,

    /// Skip password analysis
    #[arg(long)]
    generate_only: bool,

    /// Add reversed variants
    #[arg(long)]
    add_reversed: bool,

    /// Add repeated variants (e.g. name+name)
    #[arg(long)]
    add_repeats: bool,

    /// Never prompt; use command-line inputs only
    #[arg(long)]
    batch: bool,

    /// Print only the score and the output path
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_max_words(s: &str) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|_| format!("'{}' is not a number", s))?;
    if value == 0 {
        return Err("must be at least 1".to_string());
    }
    Ok(value)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = ui::DisplayOptions {
        unicode_support: ui::detect_unicode_support(),
        color_support: ui::detect_color_support(),
        quiet: cli.quiet,
    };

    let password = match (&cli.password, cli.ask_password) {
        (Some(password), _) => Some(ui::validate_password(password)?),
        (None, true) => Some(ui::prompt_password()?),
        (None, false) => None,
    };

    let mut parts = Vec::new();
    for (values, input_name) in [
        (&cli.name, "Name"),
        (&cli.pet, "Pet name"),
        (&cli.favorite, "Favorite"),
        (&cli.dob, "Date"),
        (&cli.extra, "Extra word"),
    ] {
        parts.extend(ui::normalize_all(values, input_name)?);
    }

    let mut years = expand_years(&cli.years);

    if !cli.batch {
        let (collected, interactive_years) = ui::interactive_collect(parts)?;
        parts = collected;
        if !interactive_years.is_empty() {
            years = interactive_years;
        }
    }

    log::info!("Collected {} parts and {} years", parts.len(), years.len());

    if let Some(password) = password.as_ref().filter(|_| !cli.generate_only) {
        println!();
        let report = analyze_password(password, &parts);
        ui::display_report(password.chars().count(), &report, &options);
    }

    if parts.is_empty() {
        println!("\nNo parts provided. Rerun with command-line inputs or answer the prompts.");
        return Ok(());
    }

    let config = GeneratorConfig {
        years,
        max_words: cli.maxwords,
        add_reversed: cli.add_reversed,
        add_repeats: cli.add_repeats,
    };
    let format = if cli.gzip {
        OutputFormat::Gzip
    } else {
        OutputFormat::Plain
    };

    let ((stats, path), elapsed) =
        ui::show_progress("Generating wordlist...", options.unicode_support, || {
            let (words, stats) = generate_with_stats(&parts, &config);
            let path = save_wordlist(&words, &cli.out, format)?;
            Ok((stats, path))
        })?;

    ui::display_summary(&stats, config.max_words, &path, elapsed, &options);

    Ok(())
}
