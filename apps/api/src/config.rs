use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_CORS_PORTS: &str = "5173,5174,5175,3000,5004";

/// What the roadmap endpoint does when the model call or its output is unusable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Answer with the deterministic template roadmap.
    #[default]
    Fallback,
    /// Answer with a 500 error envelope describing the upstream failure.
    Envelope,
}

impl FromStr for FailurePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" => Ok(FailurePolicy::Fallback),
            "envelope" => Ok(FailurePolicy::Envelope),
            other => bail!("unknown failure policy '{other}' (expected 'fallback' or 'envelope')"),
        }
    }
}

/// Gemini connection and generation settings.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub failure_policy: FailurePolicy,
    pub cors_allowed_ports: Vec<u16>,
    pub mentors_file: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini: GeminiConfig {
                api_key: require_env("GEMINI_API_KEY")?,
                api_base: optional_env("GEMINI_API_BASE")
                    .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
                model: optional_env("GEMINI_MODEL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                timeout_secs: parse_env("GEMINI_TIMEOUT_SECS", 30)?,
                temperature: parse_env("GEMINI_TEMPERATURE", 0.7)?,
                max_output_tokens: parse_env("GEMINI_MAX_OUTPUT_TOKENS", 2048)?,
            },
            failure_policy: parse_env("ROADMAP_FAILURE_POLICY", FailurePolicy::default())?,
            cors_allowed_ports: parse_ports(
                &optional_env("CORS_ALLOWED_PORTS").unwrap_or_else(|| DEFAULT_CORS_PORTS.to_string()),
            )?,
            mentors_file: optional_env("MENTORS_FILE").map(PathBuf::from),
            port: parse_env("PORT", 8080)?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{key} is invalid ('{raw}'): {e}")),
        None => Ok(default),
    }
}

/// Parses a comma-separated port list such as `"5173, 3000"`.
pub fn parse_ports(raw: &str) -> Result<Vec<u16>> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| {
            p.parse::<u16>()
                .with_context(|| format!("CORS_ALLOWED_PORTS entry '{p}' is not a valid port"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ports_trims_and_skips_blanks() {
        let ports = parse_ports(" 5173, 3000,,5004 ").unwrap();
        assert_eq!(ports, vec![5173, 3000, 5004]);
    }

    #[test]
    fn test_parse_ports_rejects_garbage() {
        assert!(parse_ports("5173,localhost").is_err());
        assert!(parse_ports("70000").is_err());
    }

    #[test]
    fn test_default_port_list_parses() {
        assert_eq!(
            parse_ports(DEFAULT_CORS_PORTS).unwrap(),
            vec![5173, 5174, 5175, 3000, 5004]
        );
    }

    #[test]
    fn test_failure_policy_from_str() {
        assert_eq!("fallback".parse::<FailurePolicy>().unwrap(), FailurePolicy::Fallback);
        assert_eq!(" Envelope ".parse::<FailurePolicy>().unwrap(), FailurePolicy::Envelope);
        assert!("retry".parse::<FailurePolicy>().is_err());
    }

    #[test]
    fn test_failure_policy_default_is_fallback() {
        assert_eq!(FailurePolicy::default(), FailurePolicy::Fallback);
    }
}
