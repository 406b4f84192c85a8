use std::collections::BTreeSet;

pub const COMMON_SUFFIXES: &[&str] = &[
    "", "1", "12", "123", "1234", "12345", "!", "@", "#", "$", "2022", "2023", "2024", "2025",
];

pub const COMMON_PREFIXES: &[&str] = &["", "!", "@", "#"];

pub const MAX_LEET_VARIANTS_PER_WORD: usize = 40;

pub fn leet_substitutions(ch: char) -> &'static [char] {
    match ch {
        'a' | 'A' => &['4', '@'],
        'e' | 'E' => &['3'],
        'i' | 'I' => &['1', '!'],
        'o' | 'O' => &['0'],
        's' | 'S' => &['5', '$'],
        't' | 'T' => &['7'],
        'l' | 'L' => &['1'],
        _ => &[],
    }
}

fn primary_substitution(ch: char) -> Option<char> {
    leet_substitutions(ch).first().copied()
}

fn substitute(chars: &[char], selected: &[usize]) -> String {
    let mut out = chars.to_vec();
    for &idx in selected {
        if let Some(sub) = primary_substitution(chars[idx]) {
            out[idx] = sub;
        }
    }
    out.into_iter().collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

pub fn case_variants(word: &str) -> Vec<String> {
    let variants: BTreeSet<String> = [
        word.to_string(),
        word.to_lowercase(),
        word.to_uppercase(),
        capitalize(word),
    ]
    .into_iter()
    .collect();

    variants.into_iter().collect()
}

pub fn leet_variants(word: &str, max_variants: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, ch)| primary_substitution(**ch).is_some())
        .map(|(i, _)| i)
        .collect();

    let mut variants = BTreeSet::new();
    variants.insert(word.to_string());

    for (n, &first) in positions.iter().enumerate() {
        variants.insert(substitute(&chars, &[first]));
        for &second in &positions[n + 1..] {
            variants.insert(substitute(&chars, &[first, second]));
        }
    }

    variants.insert(substitute(&chars, &positions));

    variants.into_iter().take(max_variants).collect()
}

pub fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}

pub fn repeated(word: &str) -> String {
    word.repeat(2)
}
