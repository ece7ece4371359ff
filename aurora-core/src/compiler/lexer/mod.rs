pub mod builder;
pub mod rules;
pub mod token_kind;

pub use builder::{build_scanner, tokenize, tokenize_filtered, tokenize_with_config};
pub use rules::{standard_rules, AURORA_RULES};
pub use token_kind::AuroraTag;
