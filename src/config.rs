// src/config.rs

use std::env;
use std::str::FromStr;
use dotenvy::dotenv;

use crate::models::quiz::QuizSettings;

/// Questions per quiz when `QUIZ_QUESTION_COUNT` is not set.
pub const DEFAULT_QUESTION_COUNT: usize = 6;

/// Options per question (correct answer + distractors) when `QUIZ_OPTION_COUNT` is not set.
pub const DEFAULT_OPTION_COUNT: usize = 3;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://countryquiz.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub log_dir: String,
    /// CSV imported on startup when the fact table is empty.
    pub facts_csv: Option<String>,
    pub question_count: usize,
    pub option_count: usize,
    pub rng_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source; unset keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let rust_log = lookup("RUST_LOG")
            .unwrap_or_else(|| "info".to_string());

        let log_dir = lookup("LOG_DIR")
            .unwrap_or_else(|| "logs".to_string());

        let facts_csv = lookup("FACTS_CSV").filter(|p| !p.trim().is_empty());

        Self {
            database_url,
            rust_log,
            log_dir,
            facts_csv,
            question_count: parse_var(&lookup, "QUIZ_QUESTION_COUNT")
                .unwrap_or(DEFAULT_QUESTION_COUNT),
            option_count: parse_var(&lookup, "QUIZ_OPTION_COUNT").unwrap_or(DEFAULT_OPTION_COUNT),
            rng_seed: parse_var(&lookup, "QUIZ_SEED"),
        }
    }

    pub fn settings(&self) -> QuizSettings {
        QuizSettings {
            question_count: self.question_count,
            option_count: self.option_count,
            rng_seed: self.rng_seed,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            facts_csv: None,
            question_count: DEFAULT_QUESTION_COUNT,
            option_count: DEFAULT_OPTION_COUNT,
            rng_seed: None,
        }
    }
}

/// Reads and parses a variable, ignoring unset or malformed values.
fn parse_var<T: FromStr>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_settings() {
        let settings = Config::default().settings();
        assert_eq!(settings.question_count, 6);
        assert_eq!(settings.option_count, 3);
        assert_eq!(settings.rng_seed, None);
    }

    #[test]
    fn test_parse_var_ignores_garbage() {
        let lookup = lookup_from(&[("BAD", "six"), ("GOOD", " 12 ")]);
        assert_eq!(parse_var::<usize>(&lookup, "BAD"), None);
        assert_eq!(parse_var::<usize>(&lookup, "GOOD"), Some(12));
        assert_eq!(parse_var::<usize>(&lookup, "UNSET"), None);
    }

    #[test]
    fn test_from_lookup_reads_quiz_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("QUIZ_QUESTION_COUNT", "10"),
            ("QUIZ_OPTION_COUNT", "four"),
            ("QUIZ_SEED", "42"),
            ("FACTS_CSV", "  "),
        ]));

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.facts_csv, None);
        assert_eq!(config.question_count, 10);
        assert_eq!(config.option_count, DEFAULT_OPTION_COUNT);
        assert_eq!(config.rng_seed, Some(42));
    }
}
