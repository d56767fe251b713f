use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::{
    models::{Film, SortMode},
    state::{View, ViewState},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Resubmits the search form shortly after the user stops typing.
const SEARCH_ON_INPUT: &str =
    "clearTimeout(this._debounce); this._debounce = setTimeout(() => this.form.requestSubmit(), 250)";
const CARET_TO_END: &str = "this.setSelectionRange(this.value.length, this.value.length)";

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load movie data.";

/// What the page should say about the collection besides listing it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Banner {
    None,
    Loading,
    LoadFailed,
}

pub fn index_page(state: &ViewState, view: &View<'_>, banner: Banner) -> String {
    page(
        "Star Wars Films",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="container max-w-5xl mx-auto px-6 py-10" {
                    @match banner {
                        Banner::LoadFailed => {
                            div role="alert" class="mb-6 rounded-md border border-red-300 bg-red-50 px-4 py-3 text-red-800" {
                                (LOAD_FAILED_MESSAGE)
                            }
                            script { (PreEscaped(format!("window.alert({:?});", LOAD_FAILED_MESSAGE))) }
                        },
                        Banner::Loading => {
                            p class="mb-6 text-sm text-gray-500" { "Loading films…" }
                        },
                        Banner::None => {},
                    }

                    header class="flex flex-wrap gap-4" {
                        (sort_form(state.sort))
                        (search_form(&state.query))
                    }

                    div class="content mt-8 grid gap-6 md:grid-cols-2" {
                        div class="movie-list bg-white shadow rounded-lg p-6" {
                            (film_list(&view.items, state))
                        }
                        div class="movie-details bg-white shadow rounded-lg p-6" {
                            div id="movieDetail" {
                                @if let Some(film) = view.detail {
                                    (film_detail(film))
                                } @else {
                                    p class="text-gray-600" { "Select a movie to see details." }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Error" }
                        p class="mt-4 text-gray-700" { (message) }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Back" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn sort_form(current: SortMode) -> Markup {
    html! {
        form method="post" action="/sort" class="flex gap-2" {
            label class="sr-only" for="sortBy" { "Sort order" }
            select id="sortBy" name="sort" class="rounded-md border border-gray-300 px-3 py-2" onchange="this.form.submit()" {
                @for mode in SortMode::ALL {
                    option value=(mode.as_str()) selected[mode == current] { (mode.label()) }
                }
            }
            noscript {
                button class="rounded-md bg-gray-200 px-3 py-2" type="submit" { "Apply" }
            }
        }
    }
}

fn search_form(query: &str) -> Markup {
    html! {
        form method="post" action="/query" class="flex flex-1 gap-2" {
            input type="text" id="searchInput" name="query" value=(query)
                placeholder="Search for movies..."
                oninput=(SEARCH_ON_INPUT) onfocus=(CARET_TO_END) autofocus[!query.is_empty()]
                class="w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500";
            button class="rounded-md bg-blue-600 px-4 py-2 font-semibold text-white hover:bg-blue-700" type="submit" { "Search" }
        }
    }
}

fn film_list(items: &[&Film], state: &ViewState) -> Markup {
    html! {
        ul id="movieList" class="space-y-1" {
            @for film in items {
                @let class = if state.selected == Some(film.id) {
                    "w-full text-left rounded px-2 py-1 font-semibold text-blue-700 hover:bg-gray-100"
                } else {
                    "w-full text-left rounded px-2 py-1 text-gray-800 hover:bg-gray-100"
                };
                li {
                    form method="post" action=(format!("/select/{}", film.id)) {
                        button type="submit" class=(class) { (list_label(film)) }
                    }
                }
            }
        }
    }
}

fn film_detail(film: &Film) -> Markup {
    html! {
        h2 class="text-xl font-semibold text-gray-900" { (film.title) }
        p { strong { "Episode:" } " " (film.episode_id) }
        p { strong { "Director:" } " " (film.director) }
        p { strong { "Producers:" } " " (film.producer) }
        p { strong { "Release Date:" } " " (format_release_date(film)) }
        p class="mt-4" { strong { "Opening Crawl:" } }
        p class="whitespace-pre-line text-gray-700" { (film.opening_crawl) }
    }
}

pub fn list_label(film: &Film) -> String {
    format!("{} (Episode {})", film.title, film.episode_id)
}

/// US locale short date, e.g. `5/25/1977`.
pub fn format_release_date(film: &Film) -> String {
    film.release_date.strftime("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{FilmId, fixtures::trilogy},
        state::Action,
    };

    fn render(state: &ViewState, films: &[Film], banner: Banner) -> String {
        index_page(state, &state.derive(films), banner)
    }

    #[test]
    fn lists_titles_with_episode() {
        let films = trilogy();
        let html = render(&ViewState::default(), &films, Banner::None);

        assert!(html.contains("A New Hope (Episode 4)"));
        assert!(html.contains("The Empire Strikes Back (Episode 5)"));
        assert!(html.contains("Return of the Jedi (Episode 6)"));
        assert!(html.contains("Select a movie to see details."));
        assert!(html.contains("placeholder=\"Search for movies...\""));
    }

    #[test]
    fn detail_panel_shows_selected_film() {
        let films = trilogy();
        let state = ViewState::default().apply(Action::Select(FilmId(1)));
        let html = render(&state, &films, Banner::None);

        assert!(html.contains("<strong>Director:</strong> George Lucas"));
        assert!(html.contains("<strong>Producers:</strong> Gary Kurtz"));
        assert!(html.contains("<strong>Release Date:</strong> 5/25/1977"));
        assert!(html.contains("Opening Crawl 1"));
        assert!(!html.contains("Select a movie to see details."));
    }

    #[test]
    fn current_sort_is_selected_option() {
        let state = ViewState::default().apply(Action::SetSort(SortMode::Year));
        let html = render(&state, &trilogy(), Banner::None);
        assert!(html.contains("<option value=\"year\" selected>Sort by Release Year</option>"));
        assert!(html.contains("<option value=\"episode\">Sort by Episode</option>"));
    }

    #[test]
    fn load_failure_banner_raises_alert() {
        let html = render(&ViewState::default(), &[], Banner::LoadFailed);
        assert!(html.contains("role=\"alert\""));
        assert_eq!(html.matches("window.alert(").count(), 1);
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn search_box_submits_while_typing() {
        let html = render(&ViewState::default(), &trilogy(), Banner::None);
        assert!(html.contains("oninput=\"clearTimeout(this._debounce);"));
        assert!(html.contains("this.form.requestSubmit()"));
        assert!(!html.contains("autofocus"));

        let state = ViewState::default().apply(Action::SetQuery("emp".to_string()));
        let html = render(&state, &trilogy(), Banner::None);
        assert!(html.contains(" autofocus"));
    }

    #[test]
    fn query_is_escaped_into_search_box() {
        let state = ViewState::default().apply(Action::SetQuery("<jedi>".to_string()));
        let html = render(&state, &trilogy(), Banner::None);
        assert!(html.contains("value=\"&lt;jedi&gt;\""));
    }
}
