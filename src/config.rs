use std::collections::HashMap;
use thiserror::Error;

use crate::engine::status::{DEFAULT_MATCH_DURATION_MINUTES, DEFAULT_SEASON_YEAR};
use crate::engine::SeasonCalendar;

/// Longest accepted match window: one week.
const MAX_MATCH_DURATION_MINUTES: i64 = 7 * 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: String,
    pub schedule_path: String,
    pub season_year: i32,
    pub match_duration_minutes: i64,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("DATABASE_PATH".to_string()))?;

        let schedule_path = env_map
            .get("SCHEDULE_PATH")
            .cloned()
            .ok_or_else(|| ConfigError::MissingEnv("SCHEDULE_PATH".to_string()))?;

        let season_year = match env_map.get("SEASON_YEAR") {
            Some(s) => s.trim().parse::<i32>().map_err(|_| {
                ConfigError::InvalidValue(
                    "SEASON_YEAR".to_string(),
                    "must be a valid year".to_string(),
                )
            })?,
            None => DEFAULT_SEASON_YEAR,
        };
        if !(1..=9999).contains(&season_year) {
            return Err(ConfigError::InvalidValue(
                "SEASON_YEAR".to_string(),
                format!("must be between 1 and 9999, got {}", season_year),
            ));
        }

        let match_duration_minutes = match env_map.get("MATCH_DURATION_MINUTES") {
            Some(s) => s.trim().parse::<i64>().map_err(|_| {
                ConfigError::InvalidValue(
                    "MATCH_DURATION_MINUTES".to_string(),
                    "must be a whole number of minutes".to_string(),
                )
            })?,
            None => DEFAULT_MATCH_DURATION_MINUTES,
        };
        if !(1..=MAX_MATCH_DURATION_MINUTES).contains(&match_duration_minutes) {
            return Err(ConfigError::InvalidValue(
                "MATCH_DURATION_MINUTES".to_string(),
                format!(
                    "must be between 1 and {}, got {}",
                    MAX_MATCH_DURATION_MINUTES, match_duration_minutes
                ),
            ));
        }

        Ok(Config {
            database_path,
            schedule_path,
            season_year,
            match_duration_minutes,
        })
    }

    pub fn calendar(&self) -> SeasonCalendar {
        SeasonCalendar::new(self.season_year)
            .with_match_duration(chrono::Duration::minutes(self.match_duration_minutes))
    }
}
