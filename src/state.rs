use crate::{
    models::{Film, FilmId, SortMode},
    projection,
};

/// Per-session UI state. Changes only through [`ViewState::apply`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    pub query: String,
    pub sort: SortMode,
    pub selected: Option<FilmId>,
    pub load_notice_shown: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetQuery(String),
    SetSort(SortMode),
    Select(FilmId),
    AcknowledgeLoadFailure,
}

/// What gets rendered for one session.
#[derive(Debug)]
pub struct View<'a> {
    pub items: Vec<&'a Film>,
    pub detail: Option<&'a Film>,
}

impl ViewState {
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SetQuery(query) => Self { query, ..self },
            Action::SetSort(sort) => Self { sort, ..self },
            Action::Select(id) => Self { selected: Some(id), ..self },
            Action::AcknowledgeLoadFailure => Self { load_notice_shown: true, ..self },
        }
    }

    /// The detail panel looks the selection up in the whole collection, so it
    /// stays visible when the current query hides the film from the list.
    pub fn derive<'a>(&self, films: &'a [Film]) -> View<'a> {
        View {
            items: projection::project(films, &self.query, self.sort),
            detail: self.selected.and_then(|id| films.iter().find(|f| f.id == id)),
        }
    }
}
