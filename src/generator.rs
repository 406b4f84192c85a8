use crate::mutate::{
    case_variants, leet_variants, repeated, reversed, COMMON_PREFIXES, COMMON_SUFFIXES,
    MAX_LEET_VARIANTS_PER_WORD,
};
use log::{debug, warn};
use std::collections::BTreeSet;

pub const MAX_COMBINED_WORDS: usize = 20_000;
pub const MAX_COMBO_PARTS: usize = 3;

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub years: Vec<i32>,
    pub max_words: usize,
    pub add_reversed: bool,
    pub add_repeats: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            years: Vec::new(),
            max_words: MAX_COMBINED_WORDS,
            add_reversed: false,
            add_repeats: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub parts: usize,
    pub combinations: usize,
    pub candidates: usize,
    pub kept: usize,
}

pub fn expand_years<S: AsRef<str>>(inputs: &[S]) -> Vec<i32> {
    let parsed: Result<Vec<i32>, _> = inputs.iter().map(|y| y.as_ref().trim().parse::<i32>()).collect();

    let years = match parsed {
        Ok(years) => years,
        Err(e) => {
            warn!("Ignoring years, could not parse input: {}", e);
            return Vec::new();
        }
    };

    if let &[a, b] = years.as_slice() {
        if (i64::from(b) - i64::from(a)).abs() > 1 {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            return (start..=end).collect();
        }
    }

    years
}

pub fn split_fields(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn tokenize<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    let joined = parts.iter().map(|p| p.as_ref()).collect::<Vec<&str>>().join(" ");

    joined
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

fn for_each_permutation<F: FnMut(&[usize])>(n: usize, r: usize, f: &mut F) {
    fn extend<F: FnMut(&[usize])>(
        n: usize,
        r: usize,
        current: &mut Vec<usize>,
        used: &mut [bool],
        f: &mut F,
    ) {
        if current.len() == r {
            f(current.as_slice());
            return;
        }
        for i in 0..n {
            if used[i] {
                continue;
            }
            used[i] = true;
            current.push(i);
            extend(n, r, current, used, f);
            current.pop();
            used[i] = false;
        }
    }

    if r <= n {
        extend(n, r, &mut Vec::with_capacity(r), &mut vec![false; n], f);
    }
}

fn mutate_base(base: &str, config: &GeneratorConfig, words: &mut BTreeSet<String>) {
    for variant in case_variants(base) {
        words.extend(leet_variants(&variant, MAX_LEET_VARIANTS_PER_WORD));

        for suffix in COMMON_SUFFIXES {
            words.insert(format!("{}{}", variant, suffix));
        }
        for prefix in COMMON_PREFIXES {
            words.insert(format!("{}{}", prefix, variant));
        }
        for year in &config.years {
            words.insert(format!("{}{}", variant, year));
        }

        words.insert(variant);
    }

    if config.add_reversed {
        words.insert(reversed(base));
    }
    if config.add_repeats {
        words.insert(repeated(base));
    }
}

pub fn generate_with_stats<S: AsRef<str>>(
    parts: &[S],
    config: &GeneratorConfig,
) -> (Vec<String>, GenerationStats) {
    let parts: Vec<&str> = parts
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect();

    let mut stats = GenerationStats {
        parts: parts.len(),
        ..GenerationStats::default()
    };

    if parts.is_empty() {
        return (Vec::new(), stats);
    }

    let mut words = BTreeSet::new();

    for r in 1..=MAX_COMBO_PARTS.min(parts.len()) {
        for_each_permutation(parts.len(), r, &mut |combo| {
            let base: String = combo.iter().map(|&i| parts[i]).collect();
            mutate_base(&base, config, &mut words);
            stats.combinations += 1;
        });
    }

    for token in tokenize(&parts) {
        words.extend(case_variants(&token));
    }

    stats.candidates = words.len();
    let kept: Vec<String> = words.into_iter().take(config.max_words).collect();
    stats.kept = kept.len();

    debug!(
        "Generated {} candidates from {} parts ({} combinations), kept {}",
        stats.candidates, stats.parts, stats.combinations, stats.kept
    );

    (kept, stats)
}

pub fn generate_from_parts<S: AsRef<str>>(parts: &[S], config: &GeneratorConfig) -> Vec<String> {
    generate_with_stats(parts, config).0
}
