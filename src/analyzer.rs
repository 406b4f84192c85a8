use log::{debug, warn};
use zxcvbn::zxcvbn;

pub const MAX_SCORE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Self::VeryWeak,
            1 => Self::Weak,
            2 => Self::Fair,
            3 => Self::Good,
            _ => Self::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Good => "Good",
            Self::Strong => "Strong",
        }
    }

    pub fn is_acceptable(&self) -> bool {
        *self >= Self::Good
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrackTime {
    pub scenario: &'static str,
    pub display: String,
}

#[derive(Debug, Clone)]
pub struct StrengthReport {
    pub score: u8,
    pub guesses_log10: f64,
    pub crack_times: Vec<CrackTime>,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl StrengthReport {
    fn fallback() -> Self {
        Self {
            score: 0,
            guesses_log10: 0.0,
            crack_times: Vec::new(),
            warning: Some("strength estimation failed".to_string()),
            suggestions: Vec::new(),
        }
    }

    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }
}

pub fn analyze_password<S: AsRef<str>>(password: &str, user_inputs: &[S]) -> StrengthReport {
    let inputs: Vec<&str> = user_inputs.iter().map(|s| s.as_ref()).collect();

    let entropy = match zxcvbn(password, &inputs) {
        Ok(entropy) => entropy,
        Err(e) => {
            warn!("Password strength estimation failed: {}", e);
            return StrengthReport::fallback();
        }
    };

    let times = entropy.crack_times();
    let crack_times = vec![
        CrackTime {
            scenario: "online_throttling_100_per_hour",
            display: times.online_throttling_100_per_hour().to_string(),
        },
        CrackTime {
            scenario: "online_no_throttling_10_per_second",
            display: times.online_no_throttling_10_per_second().to_string(),
        },
        CrackTime {
            scenario: "offline_slow_hashing_1e4_per_second",
            display: times.offline_slow_hashing_1e4_per_second().to_string(),
        },
        CrackTime {
            scenario: "offline_fast_hashing_1e10_per_second",
            display: times.offline_fast_hashing_1e10_per_second().to_string(),
        },
    ];

    let (warning, suggestions) = match entropy.feedback() {
        Some(feedback) => (
            feedback.warning().map(|w| w.to_string()),
            feedback.suggestions().iter().map(|s| s.to_string()).collect(),
        ),
        None => (None, Vec::new()),
    };

    let score = entropy.score().min(MAX_SCORE);
    debug!(
        "Scored password: score={}, guesses_log10={:.2}, {} context inputs",
        score,
        entropy.guesses_log10(),
        inputs.len()
    );

    StrengthReport {
        score,
        guesses_log10: entropy.guesses_log10(),
        crack_times,
        warning,
        suggestions,
    }
}

pub fn meter(score: u8, width: usize) -> usize {
    (usize::from(score.min(MAX_SCORE)) + 1) * width / 5
}
