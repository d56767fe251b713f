use std::net::SocketAddr;

use anyhow::Context;
use jiff::SignedDuration;

use crate::session::{DEFAULT_IDLE_TIMEOUT, DEFAULT_MAX_SESSIONS};

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub films_url: String,
    pub max_sessions: usize,
    pub session_idle: SignedDuration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port: u16 = var("PORT").unwrap_or_else(|| "3000".to_string()).parse().context("PORT")?;

        let films_url =
            var("FILMS_URL").unwrap_or_else(|| "https://swapi.dev/api/films/".to_string());

        let max_sessions: usize =
            var("MAX_SESSIONS").and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_MAX_SESSIONS);

        let session_idle = var("SESSION_IDLE_MINUTES")
            .and_then(|s| s.parse().ok())
            .map(SignedDuration::from_mins)
            .unwrap_or(DEFAULT_IDLE_TIMEOUT);

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            films_url,
            max_sessions,
            session_idle,
        })
    }
}
