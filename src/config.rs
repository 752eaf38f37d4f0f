use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_addr: String,
    pub api_prefix: String,
    pub log_dir: String,

    // Rate limiting, 0 disables the limiter
    pub rate_api_per_min: u32,

    /// Reject a second attendance log for the same employee and date server-side
    pub enforce_unique_attendance: bool,
    /// Remove an employee's attendance history together with the employee
    pub cascade_attendance_delete: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", "0.0.0.0:5000"),
            database_url: var_or("DATABASE_URL", "sqlite://hrms.db"),
            api_prefix: var_or("API_PREFIX", "/api"),
            log_dir: var_or("LOG_DIR", "logs"),
            rate_api_per_min: parse_var("RATE_API_PER_MIN", "1000")?,
            enforce_unique_attendance: parse_var("ENFORCE_UNIQUE_ATTENDANCE", "false")?,
            cascade_attendance_delete: parse_var("CASCADE_ATTENDANCE_DELETE", "false")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            server_addr: "127.0.0.1:5000".to_string(),
            api_prefix: "/api".to_string(),
            log_dir: "logs".to_string(),
            rate_api_per_min: 0,
            enforce_unique_attendance: false,
            cascade_attendance_delete: false,
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_var<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = var_or(key, default);
    raw.trim()
        .parse()
        .with_context(|| format!("{key} has an invalid value: {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_falls_back_to_default() {
        let rate: u32 = parse_var("HRMS_TEST_UNSET_RATE", "60").unwrap();
        assert_eq!(rate, 60);

        let flag: bool = parse_var("HRMS_TEST_UNSET_FLAG", "false").unwrap();
        assert!(!flag);
    }

    #[test]
    fn parse_var_reports_the_offending_key() {
        let err = parse_var::<u32>("HRMS_TEST_UNSET_BAD", "sixty").unwrap_err();
        assert!(err.to_string().contains("HRMS_TEST_UNSET_BAD"));
    }
}
