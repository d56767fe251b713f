use jiff::civil::Date;
use serde::Deserialize;
use tracing::debug;
use wreq::header::USER_AGENT;

use crate::{
    error::LoadError,
    models::{Film, FilmId},
};

pub struct SwapiClient {
    client: wreq::Client,
    films_url: String,
}

impl SwapiClient {
    pub fn new(client: wreq::Client, films_url: String) -> Self {
        Self { client, films_url }
    }

    pub async fn fetch_films(&self) -> Result<Vec<Film>, LoadError> {
        debug!(url = %self.films_url, "fetching films");

        let resp: FilmsResponse = self
            .client
            .get(&self.films_url)
            .header(USER_AGENT, "holocron/0.1")
            .query(&[("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let films = resp.into_films()?;
        debug!(count = films.len(), "parsed films");
        Ok(films)
    }
}

#[derive(Debug, Deserialize)]
pub struct FilmsResponse {
    results: Vec<FilmEntry>,
}

#[derive(Debug, Deserialize)]
struct FilmEntry {
    title: String,
    episode_id: u32,
    opening_crawl: String,
    director: String,
    producer: String,
    release_date: String,
}

impl FilmsResponse {
    /// Maps the wire entries onto `Film`, numbering them from 1 in response order.
    pub fn into_films(self) -> Result<Vec<Film>, LoadError> {
        self.results
            .into_iter()
            .zip(1..)
            .map(|(entry, position)| entry.into_film(FilmId(position)))
            .collect()
    }
}

impl FilmEntry {
    fn into_film(self, id: FilmId) -> Result<Film, LoadError> {
        let release_date: Date = self.release_date.trim().parse().map_err(|err| {
            LoadError::Malformed(format!(
                "release_date {:?} of {:?}: {err}",
                self.release_date, self.title
            ))
        })?;

        Ok(Film {
            id,
            title: self.title,
            episode_id: self.episode_id,
            opening_crawl: self.opening_crawl,
            director: self.director,
            producer: self.producer,
            release_date,
        })
    }
}
