//! Operation catalog
//!
//! The fixed table mapping each logical operation onto an upstream path
//! template, its required parameters, and its pagination defaults. Route
//! handlers never build upstream requests themselves; adding a catalog
//! entry is the only step needed to support a new operation.

use std::collections::HashMap;

use crate::error::MediationError;

/// Default page number applied when the caller omits `page`
pub const DEFAULT_PAGE: &str = "1";
/// Default page size applied when the caller omits `limit`
pub const DEFAULT_LIMIT: &str = "20";

/// The closed set of logical operations the gateway mediates.
///
/// Being an enum, an unknown operation id is unrepresentable: the
/// presentation layer cannot submit anything outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationId {
    SearchAll,
    SearchSongs,
    SearchAlbums,
    SearchArtists,
    SearchPlaylists,
    GetSong,
    GetAlbum,
    GetArtist,
    GetPlaylist,
    GetHomeModules,
    GetTrending,
    GetCharts,
    GetLyrics,
}

impl OperationId {
    /// All catalog operations, for table-driven tests and route listings
    pub const ALL: [OperationId; 13] = [
        OperationId::SearchAll,
        OperationId::SearchSongs,
        OperationId::SearchAlbums,
        OperationId::SearchArtists,
        OperationId::SearchPlaylists,
        OperationId::GetSong,
        OperationId::GetAlbum,
        OperationId::GetArtist,
        OperationId::GetPlaylist,
        OperationId::GetHomeModules,
        OperationId::GetTrending,
        OperationId::GetCharts,
        OperationId::GetLyrics,
    ];

    /// Stable identifier used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationId::SearchAll => "search_all",
            OperationId::SearchSongs => "search_songs",
            OperationId::SearchAlbums => "search_albums",
            OperationId::SearchArtists => "search_artists",
            OperationId::SearchPlaylists => "search_playlists",
            OperationId::GetSong => "get_song",
            OperationId::GetAlbum => "get_album",
            OperationId::GetArtist => "get_artist",
            OperationId::GetPlaylist => "get_playlist",
            OperationId::GetHomeModules => "get_home_modules",
            OperationId::GetTrending => "get_trending",
            OperationId::GetCharts => "get_charts",
            OperationId::GetLyrics => "get_lyrics",
        }
    }
}

/// Where an identifier-based entry carries its id, fixed per entry.
///
/// An upstream-compatibility detail: some deployments expect
/// `/songs/{id}`, others `/songs?id=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPlacement {
    /// Append the id as a path segment (`/songs/{id}`)
    Path,
    /// Pass the id as a query parameter (`/songs?id=...`)
    Query,
}

/// One row of the catalog table
struct CatalogEntry {
    /// Upstream path template (without the id segment)
    path: &'static str,
    /// Entry requires a non-empty `query` parameter
    requires_query: bool,
    /// Entry accepts `page`/`limit` with catalog-applied defaults
    paged: bool,
    /// Identifier handling for fetch-by-id entries
    id_placement: Option<IdPlacement>,
    /// Path segments appended after a path-embedded id
    /// (`/songs/{id}/lyrics`)
    path_suffix: &'static str,
}

/// Upstream request derived from a logical operation.
///
/// Every operation in the catalog resolves to exactly one spec.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamRequestSpec {
    /// Path relative to the upstream base URL
    pub path: String,
    /// Query parameters (order irrelevant to the upstream)
    pub query: Vec<(String, String)>,
    /// True for identifier-based lookups; feeds the best-effort
    /// not-found classification in the upstream client
    pub lookup: bool,
}

/// Entry with no parameters at all
const fn plain(path: &'static str) -> CatalogEntry {
    CatalogEntry {
        path,
        requires_query: false,
        paged: false,
        id_placement: None,
        path_suffix: "",
    }
}

/// Query-driven search entry
const fn search(path: &'static str, paged: bool) -> CatalogEntry {
    CatalogEntry {
        path,
        requires_query: true,
        paged,
        id_placement: None,
        path_suffix: "",
    }
}

/// Fetch-by-id entry with the id embedded in the path
const fn lookup(path: &'static str, path_suffix: &'static str) -> CatalogEntry {
    CatalogEntry {
        path,
        requires_query: false,
        paged: false,
        id_placement: Some(IdPlacement::Path),
        path_suffix,
    }
}

fn entry_for(op: OperationId) -> CatalogEntry {
    match op {
        OperationId::SearchAll => search("/search/all", false),
        OperationId::SearchSongs => search("/search/songs", true),
        OperationId::SearchAlbums => search("/search/albums", true),
        OperationId::SearchArtists => search("/search/artists", true),
        OperationId::SearchPlaylists => search("/search/playlists", true),
        OperationId::GetSong => lookup("/songs", ""),
        OperationId::GetAlbum => lookup("/albums", ""),
        OperationId::GetArtist => lookup("/artists", ""),
        OperationId::GetPlaylist => lookup("/playlists", ""),
        OperationId::GetHomeModules => plain("/modules"),
        OperationId::GetTrending => plain("/trending"),
        OperationId::GetCharts => plain("/charts"),
        OperationId::GetLyrics => lookup("/songs", "/lyrics"),
    }
}

/// Resolve a logical operation against the catalog.
///
/// Validation failures are returned before any network activity: a
/// required parameter that is missing or empty after trimming fails with
/// `<name> is required`.
pub fn resolve(
    op: OperationId,
    params: &HashMap<String, String>,
) -> Result<UpstreamRequestSpec, MediationError> {
    resolve_entry(&entry_for(op), params)
}

fn resolve_entry(
    entry: &CatalogEntry,
    params: &HashMap<String, String>,
) -> Result<UpstreamRequestSpec, MediationError> {
    let mut path = entry.path.to_string();
    let mut query = Vec::new();

    if entry.requires_query {
        query.push(("query".to_string(), required(params, "query")?));
    }

    if entry.paged {
        query.push(("page".to_string(), optional(params, "page", DEFAULT_PAGE)));
        query.push(("limit".to_string(), optional(params, "limit", DEFAULT_LIMIT)));
    }

    if let Some(placement) = entry.id_placement {
        let id = required(params, "id")?;
        match placement {
            // Percent-encode the id so it cannot shift the URL's
            // query/fragment boundary (query-placed ids are encoded by
            // the HTTP client)
            IdPlacement::Path => {
                path = format!(
                    "{}/{}{}",
                    entry.path,
                    urlencoding::encode(&id),
                    entry.path_suffix
                )
            }
            IdPlacement::Query => query.push(("id".to_string(), id)),
        }
    }

    Ok(UpstreamRequestSpec {
        path,
        query,
        lookup: entry.id_placement.is_some(),
    })
}

/// Required parameter: present and non-empty after trimming
fn required(params: &HashMap<String, String>, name: &str) -> Result<String, MediationError> {
    match params.get(name).map(|v| v.trim()) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(MediationError::Validation(format!("{} is required", name))),
    }
}

/// Optional parameter with a catalog default
fn optional(params: &HashMap<String, String>, name: &str, default: &str) -> String {
    params
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_search_songs_applies_defaults() {
        let spec = resolve(OperationId::SearchSongs, &params(&[("query", "love")])).unwrap();

        assert_eq!(spec.path, "/search/songs");
        assert!(!spec.lookup);
        assert!(spec.query.contains(&("query".to_string(), "love".to_string())));
        assert!(spec.query.contains(&("page".to_string(), "1".to_string())));
        assert!(spec.query.contains(&("limit".to_string(), "20".to_string())));
    }

    #[test]
    fn test_search_songs_passes_explicit_paging() {
        let spec = resolve(
            OperationId::SearchSongs,
            &params(&[("query", "love"), ("page", "3"), ("limit", "50")]),
        )
        .unwrap();

        assert!(spec.query.contains(&("page".to_string(), "3".to_string())));
        assert!(spec.query.contains(&("limit".to_string(), "50".to_string())));
    }

    #[test]
    fn test_search_all_has_no_paging() {
        let spec = resolve(OperationId::SearchAll, &params(&[("query", "love")])).unwrap();

        assert_eq!(spec.path, "/search/all");
        assert_eq!(spec.query, vec![("query".to_string(), "love".to_string())]);
    }

    #[test]
    fn test_missing_query_fails_validation() {
        let err = resolve(OperationId::SearchSongs, &params(&[])).unwrap_err();
        assert_eq!(err.to_string(), "query is required");
    }

    #[test]
    fn test_whitespace_query_fails_validation() {
        let err = resolve(OperationId::SearchSongs, &params(&[("query", "  ")])).unwrap_err();
        assert_eq!(err.to_string(), "query is required");
    }

    #[test]
    fn test_query_is_trimmed() {
        let spec = resolve(OperationId::SearchAll, &params(&[("query", " love ")])).unwrap();
        assert_eq!(spec.query[0].1, "love");
    }

    #[test]
    fn test_get_song_embeds_id_in_path() {
        let spec = resolve(OperationId::GetSong, &params(&[("id", "abc123")])).unwrap();

        assert_eq!(spec.path, "/songs/abc123");
        assert!(spec.query.is_empty());
        assert!(spec.lookup);
    }

    #[test]
    fn test_get_song_missing_id_fails_validation() {
        let err = resolve(OperationId::GetSong, &params(&[])).unwrap_err();
        assert_eq!(err.to_string(), "id is required");
    }

    #[test]
    fn test_path_id_is_percent_encoded() {
        let spec = resolve(OperationId::GetSong, &params(&[("id", "a/b?c#d")])).unwrap();

        assert_eq!(spec.path, "/songs/a%2Fb%3Fc%23d");
        assert!(!spec.path.contains('?'));
        assert!(!spec.path.contains('#'));
    }

    #[test]
    fn test_get_lyrics_builds_nested_path() {
        let spec = resolve(OperationId::GetLyrics, &params(&[("id", "abc123")])).unwrap();

        assert_eq!(spec.path, "/songs/abc123/lyrics");
        assert!(spec.query.is_empty());
        assert!(spec.lookup);
    }

    #[test]
    fn test_browse_operations_need_no_params() {
        for (op, path) in [
            (OperationId::GetTrending, "/trending"),
            (OperationId::GetCharts, "/charts"),
        ] {
            let spec = resolve(op, &params(&[])).unwrap();
            assert_eq!(spec.path, path);
            assert!(spec.query.is_empty());
            assert!(!spec.lookup);
        }
    }

    #[test]
    fn test_home_modules_needs_no_params() {
        let spec = resolve(OperationId::GetHomeModules, &params(&[])).unwrap();

        assert_eq!(spec.path, "/modules");
        assert!(spec.query.is_empty());
        assert!(!spec.lookup);
    }

    #[test]
    fn test_query_placement_passes_id_as_parameter() {
        // No production entry uses Query placement today, but the knob is
        // part of the per-entry contract
        let entry = CatalogEntry {
            path: "/albums",
            requires_query: false,
            paged: false,
            id_placement: Some(IdPlacement::Query),
            path_suffix: "",
        };

        let spec = resolve_entry(&entry, &params(&[("id", "xyz")])).unwrap();
        assert_eq!(spec.path, "/albums");
        assert_eq!(spec.query, vec![("id".to_string(), "xyz".to_string())]);
        assert!(spec.lookup);
    }

    #[test]
    fn test_every_operation_with_valid_params_resolves() {
        let full = params(&[("query", "q"), ("id", "x")]);
        for op in OperationId::ALL {
            let spec = resolve(op, &full)
                .unwrap_or_else(|e| panic!("{} failed: {}", op.as_str(), e));
            assert!(spec.path.starts_with('/'), "{}", op.as_str());
        }
    }

    #[test]
    fn test_operation_ids_are_unique() {
        let mut names: Vec<_> = OperationId::ALL.iter().map(|op| op.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), OperationId::ALL.len());
    }
}
