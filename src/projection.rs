use crate::models::{Film, SortMode};

pub fn matches_query(film: &Film, query: &str) -> bool {
    film.title.to_lowercase().contains(&query.to_lowercase())
}

/// Filters `films` by title, then orders the survivors by `sort`.
///
/// Sorting is stable, so films with equal keys keep their fetch order.
pub fn project<'a>(films: &'a [Film], query: &str, sort: SortMode) -> Vec<&'a Film> {
    let mut out: Vec<&Film> = films.iter().filter(|f| matches_query(f, query)).collect();

    match sort {
        SortMode::None => {},
        SortMode::Episode => out.sort_by_key(|f| f.episode_id),
        SortMode::Year => out.sort_by_key(|f| f.release_year()),
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{film, trilogy};

    fn episodes(films: &[&Film]) -> Vec<u32> {
        films.iter().map(|f| f.episode_id).collect()
    }

    #[test]
    fn query_is_case_insensitive_substring() {
        let films = trilogy();

        assert_eq!(episodes(&project(&films, "Empire", SortMode::None)), vec![5]);
        assert_eq!(episodes(&project(&films, "eMPIRE", SortMode::None)), vec![5]);
        assert_eq!(episodes(&project(&films, "of the", SortMode::None)), vec![6]);
        assert!(project(&films, "Phantom", SortMode::None).is_empty());
    }

    #[test]
    fn empty_query_keeps_everything_in_fetch_order() {
        let films = trilogy();
        assert_eq!(episodes(&project(&films, "", SortMode::None)), vec![4, 5, 6]);
    }

    #[test]
    fn filter_output_matches_predicate() {
        let films = trilogy();
        for query in ["e", "E", "the", "new", "x", " "] {
            let out = project(&films, query, SortMode::None);
            for f in &films {
                assert_eq!(out.iter().any(|o| o.id == f.id), matches_query(f, query), "{query}");
            }
        }
    }

    #[test]
    fn sorts_by_episode_and_year() {
        let films = vec![
            film(1, "Return of the Jedi", 6, "1983-05-25"),
            film(2, "A New Hope", 4, "1977-05-25"),
            film(3, "The Empire Strikes Back", 5, "1980-05-21"),
        ];

        assert_eq!(episodes(&project(&films, "", SortMode::None)), vec![6, 4, 5]);
        assert_eq!(episodes(&project(&films, "", SortMode::Episode)), vec![4, 5, 6]);
        assert_eq!(episodes(&project(&films, "", SortMode::Year)), vec![4, 5, 6]);
    }

    #[test]
    fn year_sort_is_stable_within_a_year() {
        let films = vec![
            film(1, "Attack of the Clones", 2, "2002-05-16"),
            film(2, "Late Cut", 9, "1977-12-01"),
            film(3, "A New Hope", 4, "1977-05-25"),
        ];

        let ids: Vec<u32> =
            project(&films, "", SortMode::Year).iter().map(|f| f.id.0).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn episode_sort_is_stable_for_shared_episode() {
        let films = vec![
            film(1, "Return of the Jedi", 6, "1983-05-25"),
            film(2, "Return of the Jedi (Special Edition)", 6, "1997-03-14"),
            film(3, "A New Hope", 4, "1977-05-25"),
            film(4, "Return of the Jedi (Remaster)", 6, "2004-09-21"),
        ];

        let ids: Vec<u32> =
            project(&films, "", SortMode::Episode).iter().map(|f| f.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn filter_applies_before_sort() {
        let films = trilogy();
        let out = project(&films, "the", SortMode::Year);
        assert_eq!(episodes(&out), vec![5, 6]);
    }
}
