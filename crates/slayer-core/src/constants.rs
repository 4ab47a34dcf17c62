//! Shared constants

use crate::models::{MangaSource, SourceType};

/// Preferences and progress are stored for a single implicit user.
pub const DEFAULT_USER: &str = "default";

/// Built-in sources as (id, name, url). They are compiled in and never persisted.
pub const BUILT_IN_SOURCES: [(&str, &str, &str); 3] = [
    ("mangadex", "MangaDex", "https://api.mangadex.org"),
    ("mangakakalot", "MangaKakalot", "https://mangakakalot.com"),
    ("manganato", "Manganato", "https://manganato.com"),
];

/// Built-in sources in listing order.
pub fn built_in_sources() -> Vec<MangaSource> {
    BUILT_IN_SOURCES
        .iter()
        .map(|(id, name, url)| MangaSource {
            id: id.to_string(),
            name: name.to_string(),
            url: url.to_string(),
            source_type: SourceType::BuiltIn,
            enabled: true,
            added_date: None,
        })
        .collect()
}

/// Look up a built-in source by id.
pub fn find_built_in(id: &str) -> Option<MangaSource> {
    built_in_sources().into_iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_ins_are_enabled_and_ordered() {
        let sources = built_in_sources();
        let ids: Vec<&str> = sources.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["mangadex", "mangakakalot", "manganato"]);
        assert!(sources
            .iter()
            .all(|s| s.enabled && s.source_type == SourceType::BuiltIn && s.added_date.is_none()));
    }

    #[test]
    fn find_built_in_by_id() {
        assert_eq!(
            find_built_in("manganato").map(|s| s.url),
            Some("https://manganato.com".to_string())
        );
        assert!(find_built_in("unknown").is_none());
    }
}
