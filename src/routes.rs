use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use tracing::{debug, warn};

use crate::{
    AppState,
    error::{AppError, AppResult},
    loader::LoadState,
    models::{FilmId, QueryForm, SortForm, SortMode},
    state::Action,
    templates::{self, Banner},
};

pub async fn index(State(state): State<Arc<AppState>>, jar: CookieJar) -> impl IntoResponse {
    let (jar, session) = state.sessions.resolve(jar).await;
    let load = state.catalog.state();

    let banner = match &load {
        LoadState::Pending => Banner::Loading,
        LoadState::Failed(_) if state.sessions.acknowledge_load_failure(session).await => {
            Banner::LoadFailed
        },
        LoadState::Failed(_) | LoadState::Loaded(_) => Banner::None,
    };
    let view_state = state.sessions.view(session).await;

    let films = state.catalog.films();
    let view = view_state.derive(&films);
    debug!(phase = load.phase(), shown = view.items.len(), "render index");

    (jar, Html(templates::index_page(&view_state, &view, banner)))
}

pub async fn query(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<QueryForm>,
) -> impl IntoResponse {
    let (jar, session) = state.sessions.resolve(jar).await;
    state.sessions.dispatch(session, Action::SetQuery(form.query)).await;
    (jar, Redirect::to("/"))
}

pub async fn sort(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<SortForm>,
) -> AppResult<impl IntoResponse> {
    let Some(mode) = SortMode::parse(&form.sort) else {
        return Err(AppError::bad_request(anyhow::anyhow!("unknown sort order {:?}", form.sort)));
    };

    let (jar, session) = state.sessions.resolve(jar).await;
    state.sessions.dispatch(session, Action::SetSort(mode)).await;
    Ok((jar, Redirect::to("/")))
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    let (jar, session) = state.sessions.resolve(jar).await;
    let id = FilmId(id);

    if state.catalog.find(id).is_some() {
        state.sessions.dispatch(session, Action::Select(id)).await;
    } else {
        warn!(film = %id, "ignoring selection of unknown film");
    }

    (jar, Redirect::to("/"))
}

pub async fn health(State(state): State<Arc<AppState>>) -> String {
    format!("ok {} sessions={}", state.catalog.state().phase(), state.sessions.len().await)
}
