use anyhow::{Context, Result};
use console::{Style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use passlist::analyzer::{meter, StrengthLevel, StrengthReport, MAX_SCORE};
use passlist::generator::{expand_years, split_fields, GenerationStats};
use rpassword::read_password;
use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

pub const MAX_FIELD_BYTES: usize = 64 * 1024;
pub const MIN_SAFE_PASSWORD_LENGTH: usize = 12;

const METER_WIDTH: usize = 20;

pub struct DisplayOptions {
    pub unicode_support: bool,
    pub color_support: bool,
    pub quiet: bool,
}

pub fn detect_unicode_support() -> bool {
    supports_unicode::on(supports_unicode::Stream::Stdout)
}

pub fn detect_color_support() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

pub fn get_status_symbols(unicode_support: bool) -> (&'static str, &'static str) {
    if unicode_support {
        ("✓", "!")
    } else {
        ("+", "!")
    }
}

fn branch(unicode_support: bool, last: bool) -> &'static str {
    match (unicode_support, last) {
        (true, false) => "├─",
        (true, true) => "└─",
        (false, false) => "|-",
        (false, true) => "`-",
    }
}

fn level_style(level: StrengthLevel, color_support: bool) -> Style {
    if !color_support {
        return Style::new();
    }
    match level {
        StrengthLevel::VeryWeak | StrengthLevel::Weak => Style::new().red(),
        StrengthLevel::Fair => Style::new().yellow(),
        StrengthLevel::Good | StrengthLevel::Strong => Style::new().green(),
    }
}

fn status_style(secure: bool, color_support: bool) -> Style {
    if !color_support {
        Style::new()
    } else if secure {
        Style::new().green()
    } else {
        Style::new().yellow()
    }
}

fn plural(count: usize, singular: &'static str, plural: &'static str) -> &'static str {
    if count == 1 { singular } else { plural }
}

fn validate_control_characters(s: &str, input_name: &str) -> Result<String> {
    let control_chars: Vec<(usize, char)> = s
        .chars()
        .enumerate()
        .filter(|(_, c)| c.is_control())
        .collect();

    if !control_chars.is_empty() {
        let term = Term::stderr();

        let warning_msg = format!(
            "WARNING: {} contains {} control character(s) at position(s): {}",
            input_name,
            control_chars.len(),
            control_chars
                .iter()
                .map(|(pos, _)| pos.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        term.write_line(&warning_msg)?;
        term.write_str("Continue anyway? [y/N]: ")?;
        term.flush()?;

        let mut response = String::new();
        io::stdin().read_line(&mut response)?;
        let response = response.trim().to_lowercase();

        term.clear_last_lines(2)?;

        if response != "y" && response != "yes" {
            anyhow::bail!("Aborted: {} contains control characters", input_name);
        }
    }

    Ok(s.to_string())
}

pub fn normalize_and_validate(s: &str, input_name: &str) -> Result<String> {
    let trimmed = s.trim();
    let normalized: String = trimmed.nfc().collect();
    validate_control_characters(&normalized, input_name)
}

pub fn normalize_all(values: &[String], input_name: &str) -> Result<Vec<String>> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        let normalized = normalize_and_validate(value, input_name)?;
        if !normalized.is_empty() {
            out.push(normalized);
        }
    }
    Ok(out)
}

fn prompt_line(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .with_context(|| format!("Failed to read {}", label.trim_end_matches([':', ' '])))?;

    if input.len() > MAX_FIELD_BYTES {
        anyhow::bail!(
            "Input too long ({} bytes, maximum is {})",
            input.len(),
            MAX_FIELD_BYTES
        );
    }

    Ok(input)
}

pub fn prompt_password() -> Result<Zeroizing<String>> {
    print!("Password: ");
    io::stdout().flush()?;

    let password = Zeroizing::new(read_password().context("Failed to read password")?);

    validate_password(&password)
}

pub fn validate_password(password: &str) -> Result<Zeroizing<String>> {
    if password.is_empty() {
        anyhow::bail!("Password cannot be empty");
    }

    Ok(Zeroizing::new(validate_control_characters(password, "Password")?))
}

fn prompt_field(label: &str, input_name: &str) -> Result<Vec<String>> {
    let raw = prompt_line(label)?;
    let normalized = normalize_and_validate(&raw, input_name)?;
    Ok(split_fields(&normalized))
}

pub fn interactive_collect(existing: Vec<String>) -> Result<(Vec<String>, Vec<i32>)> {
    println!("\n--- Wordlist input (press Enter to skip) ---");

    let mut parts = existing;

    if !parts.is_empty() {
        println!("Inputs from command line: {}", parts.join(", "));
        let answer = prompt_line("Add more data interactively? [Y/n]: ")?;
        if answer.trim().eq_ignore_ascii_case("n") {
            let extra = prompt_line("Additional comma-separated words: ")?;
            let extra = normalize_and_validate(&extra, "Additional words")?;
            parts.extend(
                extra
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string),
            );
            return Ok((parts, Vec::new()));
        }
    }

    for (label, input_name) in [
        ("Name(s): ", "Names"),
        ("Pet name(s): ", "Pet names"),
        ("Favorite things: ", "Favorite things"),
        ("DOB / dates (YYYYMMDD or YYYY): ", "Dates"),
        ("Extra words: ", "Extra words"),
    ] {
        parts.extend(prompt_field(label, input_name)?);
    }

    let years_raw = prompt_field("Years (e.g. '1990 2025' or '2018,2019'): ", "Years")?;
    let years = expand_years(&years_raw);

    Ok((parts, years))
}

pub fn show_progress<F, T>(message: &'static str, unicode_support: bool, f: F) -> Result<(T, Duration)>
where
    F: FnOnce() -> Result<T>,
{
    println!();

    let term = Term::stdout();
    term.hide_cursor().ok();

    let pb = ProgressBar::new_spinner();

    if unicode_support {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠋"]),
        );
    } else {
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("-\\|/-"),
        );
    }

    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));

    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();

    pb.finish_and_clear();
    term.show_cursor().ok();

    result.map(|r| (r, elapsed))
}

pub fn render_meter(score: u8, unicode_support: bool) -> String {
    let filled = meter(score, METER_WIDTH);
    let (full, empty) = if unicode_support { ("█", "░") } else { ("#", ".") };
    format!("{}{}", full.repeat(filled), empty.repeat(METER_WIDTH - filled))
}

pub fn display_report(password_len: usize, report: &StrengthReport, options: &DisplayOptions) {
    let level = report.level();
    let style = level_style(level, options.color_support);
    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let status = if level.is_acceptable() { check_ok } else { check_warn };

    if options.quiet {
        println!("Score: {}/{} ({})", report.score, MAX_SCORE, level.label());
        return;
    }

    let u = options.unicode_support;
    let length_secure = password_len >= MIN_SAFE_PASSWORD_LENGTH;
    let length_style = status_style(length_secure, options.color_support);

    println!("Analysis:");
    println!(
        "  {} Length     {} {} {}",
        branch(u, false),
        length_style.apply_to(format!("[{}]", if length_secure { check_ok } else { check_warn })),
        length_style.apply_to(password_len),
        plural(password_len, "char", "chars")
    );
    println!(
        "  {} Score      {} {}/{} ({})",
        branch(u, false),
        style.apply_to(format!("[{}]", status)),
        style.apply_to(report.score),
        MAX_SCORE,
        style.apply_to(level.label())
    );
    println!(
        "  {} Meter      {}",
        branch(u, false),
        style.apply_to(render_meter(report.score, u))
    );
    println!(
        "  {} Guesses    10^{:.1}",
        branch(u, true),
        report.guesses_log10
    );
    println!();

    if !report.crack_times.is_empty() {
        println!("Crack times:");
        for (i, time) in report.crack_times.iter().enumerate() {
            let last = i == report.crack_times.len() - 1;
            println!("  {} {:<38} {}", branch(u, last), time.scenario, time.display);
        }
        println!();
    }

    if report.warning.is_some() || !report.suggestions.is_empty() {
        println!("Feedback:");
        let total = usize::from(report.warning.is_some()) + report.suggestions.len();
        let mut n = 0;

        if let Some(warning) = &report.warning {
            n += 1;
            println!(
                "  {} Warning    {}",
                branch(u, n == total),
                status_style(false, options.color_support).apply_to(warning)
            );
        }
        for suggestion in &report.suggestions {
            n += 1;
            println!("  {} Suggestion {}", branch(u, n == total), suggestion);
        }
        println!();
    }

    println!(
        "{} Strength: {}",
        style.apply_to(format!("[{}]", status)),
        style.apply_to(level.label())
    );
}

pub fn display_summary(
    stats: &GenerationStats,
    max_words: usize,
    path: &Path,
    elapsed: Duration,
    options: &DisplayOptions,
) {
    if options.quiet {
        println!("{}", path.display());
        return;
    }

    let (check_ok, check_warn) = get_status_symbols(options.unicode_support);
    let u = options.unicode_support;
    let complete = stats.kept == stats.candidates;
    let kept_style = status_style(complete, options.color_support);

    println!("\nWordlist:");
    println!(
        "  {} Parts      {} {}",
        branch(u, false),
        stats.parts,
        plural(stats.parts, "part", "parts")
    );
    println!(
        "  {} Combos     {} {}",
        branch(u, false),
        stats.combinations,
        plural(stats.combinations, "combination", "combinations")
    );
    println!("  {} Candidates {}", branch(u, false), stats.candidates);
    println!(
        "  {} Kept       {} {} (max {})",
        branch(u, false),
        kept_style.apply_to(format!("[{}]", if complete { check_ok } else { check_warn })),
        kept_style.apply_to(stats.kept),
        max_words
    );
    println!("  {} File       {}", branch(u, false), path.display());
    println!("  {} Time       {:.1}s", branch(u, true), elapsed.as_secs_f64());

    println!(
        "\n{} Saved {} {} to {}",
        status_style(true, options.color_support).apply_to(format!("[{}]", check_ok)),
        stats.kept,
        plural(stats.kept, "word", "words"),
        path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_status_symbols_unicode() {
        let (ok, warn) = get_status_symbols(true);
        assert_eq!(ok, "✓");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_get_status_symbols_ascii() {
        let (ok, warn) = get_status_symbols(false);
        assert_eq!(ok, "+");
        assert_eq!(warn, "!");
    }

    #[test]
    fn test_branch_glyphs() {
        assert_eq!(branch(true, false), "├─");
        assert_eq!(branch(true, true), "└─");
        assert_eq!(branch(false, false), "|-");
        assert_eq!(branch(false, true), "`-");
    }

    #[test]
    fn test_render_meter_ascii() {
        assert_eq!(render_meter(0, false), "####................");
        assert_eq!(render_meter(4, false), "####################");
    }

    #[test]
    fn test_render_meter_unicode_width() {
        let bar = render_meter(2, true);
        assert_eq!(bar.chars().count(), METER_WIDTH);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 12);
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "word", "words"), "word");
        assert_eq!(plural(0, "word", "words"), "words");
        assert_eq!(plural(2, "word", "words"), "words");
    }

    #[test]
    fn test_normalize_nfc() {
        let nfc = "café";
        let nfd = "cafe\u{0301}";

        assert_ne!(nfc.as_bytes(), nfd.as_bytes());

        let normalized_nfc = normalize_and_validate(nfc, "test").unwrap();
        let normalized_nfd = normalize_and_validate(nfd, "test").unwrap();

        assert_eq!(normalized_nfc, normalized_nfd);
    }

    #[test]
    fn test_trim_whitespace() {
        let cases = vec![
            ("  rex  ", "rex"),
            ("\tluna\t", "luna"),
            ("\nalice\n", "alice"),
            ("  new york  ", "new york"),
        ];

        for (input, expected) in cases {
            let normalized = normalize_and_validate(input, "test").unwrap();
            assert_eq!(normalized, expected);
        }
    }

    #[test]
    fn test_normalize_all_drops_blank() {
        let values = vec!["  alice ".to_string(), "   ".to_string(), "Rene\u{0301}".to_string()];
        let normalized = normalize_all(&values, "test").unwrap();
        assert_eq!(normalized, vec!["alice".to_string(), "René".to_string()]);
    }

    #[test]
    fn test_validate_password_kept_as_entered() {
        assert_eq!(&*validate_password("  pass  ").unwrap(), "  pass  ");
        assert_eq!(&*validate_password("cafe\u{0301}").unwrap(), "cafe\u{0301}");

        let long = "x".repeat(4096);
        assert_eq!(&*validate_password(&long).unwrap(), &long);
    }

    #[test]
    fn test_validate_password_rejects_empty() {
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_level_style_without_color() {
        let style = level_style(StrengthLevel::VeryWeak, false);
        assert_eq!(style.apply_to("x").to_string(), "x");
    }
}
