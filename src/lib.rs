pub mod analyzer;
pub mod generator;
pub mod mutate;
pub mod wordlist;

pub use analyzer::{analyze_password, StrengthLevel, StrengthReport};
pub use generator::{expand_years, generate_from_parts, generate_with_stats, GeneratorConfig};
pub use wordlist::{save_wordlist, OutputFormat};
