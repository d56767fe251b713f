use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info};

use crate::{
    models::{Film, FilmId},
    swapi::SwapiClient,
};

/// Outcome of the one-shot collection load.
#[derive(Clone, Debug)]
pub enum LoadState {
    Pending,
    Loaded(Arc<[Film]>),
    Failed(Arc<str>),
}

impl LoadState {
    pub fn phase(&self) -> &'static str {
        match self {
            LoadState::Pending => "pending",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

/// Read handle on the film collection. Cheap to clone.
#[derive(Clone)]
pub struct Catalog {
    rx: watch::Receiver<LoadState>,
}

impl Catalog {
    /// A catalog whose load has already resolved to `state`.
    pub fn ready(state: LoadState) -> Self {
        let (_tx, rx) = watch::channel(state);
        Self { rx }
    }

    pub fn state(&self) -> LoadState {
        self.rx.borrow().clone()
    }

    /// The loaded films, or an empty collection while pending or after a failure.
    pub fn films(&self) -> Arc<[Film]> {
        match &*self.rx.borrow() {
            LoadState::Loaded(films) => films.clone(),
            LoadState::Pending | LoadState::Failed(_) => Arc::from([]),
        }
    }

    pub fn find(&self, id: FilmId) -> Option<Film> {
        self.films().iter().find(|f| f.id == id).cloned()
    }
}

/// Starts the single background fetch. Requests are served while it runs.
pub fn spawn(client: SwapiClient) -> Catalog {
    let (tx, rx) = watch::channel(LoadState::Pending);

    tokio::spawn(async move {
        let state = match client.fetch_films().await {
            Ok(films) => {
                info!(count = films.len(), "film collection loaded");
                LoadState::Loaded(films.into())
            },
            Err(err) => {
                error!(error = %err, "error loading movies");
                LoadState::Failed(err.to_string().into())
            },
        };
        tx.send_replace(state);
    });

    Catalog { rx }
}
