//! In-memory catalog store and the pure query functions over it.
//!
//! A [`Catalog`] holds the three record collections and is constructed once at
//! process start, then shared read-only with every request handler. There is no
//! mutation path and no indexing; all lookups are linear scans over small
//! collections.
//!
//! The name-based join between tracks and artists lives in
//! [`Catalog::artist_tracks`] so that the soft-reference semantics stay in one
//! place.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use tunebox_music_models::{Artist, Playlist, Track};

pub mod sample;

/// Filters applied to the track listing.
///
/// Filter values are expected to already be lowercased by the caller; both
/// predicates compare against lowercased track fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackFilters {
    /// Exact (case-insensitive) genre to match.
    pub genre: Option<String>,
    /// Substring (case-insensitive) of the artist name to match.
    pub artist: Option<String>,
}

/// Narrows `tracks` by the given filters.
///
/// Both predicates apply when both filters are present. An empty filter set
/// returns the input unchanged.
#[must_use]
pub fn filter_tracks(tracks: &[Track], filters: &TrackFilters) -> Vec<Track> {
    tracks
        .iter()
        .filter(|track| {
            !filters
                .genre
                .as_ref()
                .is_some_and(|genre| track.genre.to_lowercase() != *genre)
        })
        .filter(|track| {
            !filters
                .artist
                .as_ref()
                .is_some_and(|artist| !track.artist.to_lowercase().contains(artist))
        })
        .cloned()
        .collect()
}

/// Narrows `playlists` to those whose name contains `name`, case-insensitively.
///
/// `name` is expected to already be lowercased by the caller.
#[must_use]
pub fn filter_playlists(playlists: &[Playlist], name: Option<&str>) -> Vec<Playlist> {
    playlists
        .iter()
        .filter(|playlist| !name.is_some_and(|name| !playlist.name.to_lowercase().contains(name)))
        .cloned()
        .collect()
}

/// The three result collections produced by a free-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    /// Tracks whose title or artist contained the query.
    pub tracks: Vec<Track>,
    /// Artists whose name or genre contained the query.
    pub artists: Vec<Artist>,
    /// Playlists whose name contained the query.
    pub playlists: Vec<Playlist>,
}

/// The immutable, in-memory catalog store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    tracks: Vec<Track>,
    artists: Vec<Artist>,
    playlists: Vec<Playlist>,
}

impl Catalog {
    /// Creates a catalog from seeded collections.
    #[must_use]
    pub const fn new(tracks: Vec<Track>, artists: Vec<Artist>, playlists: Vec<Playlist>) -> Self {
        Self {
            tracks,
            artists,
            playlists,
        }
    }

    /// Returns all tracks in seeded order.
    #[must_use]
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Returns all artists in seeded order.
    #[must_use]
    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    /// Returns all playlists in seeded order.
    #[must_use]
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Looks up a track by id.
    #[must_use]
    pub fn track(&self, id: u64) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id == id)
    }

    /// Looks up an artist by id.
    #[must_use]
    pub fn artist(&self, id: u64) -> Option<&Artist> {
        self.artists.iter().find(|artist| artist.id == id)
    }

    /// Looks up a playlist by id.
    #[must_use]
    pub fn playlist(&self, id: u64) -> Option<&Playlist> {
        self.playlists.iter().find(|playlist| playlist.id == id)
    }

    /// Returns the tracks credited to `artist`, by exact name match.
    ///
    /// This is the single place the `Track::artist` soft reference is joined
    /// against `Artist::name`, so swapping to id-based joins later only
    /// touches this function.
    #[must_use]
    pub fn artist_tracks(&self, artist: &Artist) -> Vec<Track> {
        self.tracks
            .iter()
            .filter(|track| track.artist == artist.name)
            .cloned()
            .collect()
    }

    /// Resolves a playlist's track ids to full track records, in playlist order.
    ///
    /// Ids with no matching track are omitted silently, so the result can be
    /// shorter than the id list.
    #[must_use]
    pub fn playlist_tracks(&self, playlist: &Playlist) -> Vec<Track> {
        playlist
            .tracks
            .iter()
            .filter_map(|id| {
                let track = self.track(*id);
                if track.is_none() {
                    log::warn!(
                        "Playlist {} references unknown track id {id}",
                        playlist.id
                    );
                }
                track.cloned()
            })
            .collect()
    }

    /// Runs a free-text search across all three collections.
    ///
    /// Matching is case-insensitive substring containment: tracks match on
    /// title or artist, artists on name or genre, playlists on name.
    #[must_use]
    pub fn search(&self, query: &str) -> SearchResults {
        let query = query.to_lowercase();

        SearchResults {
            tracks: self
                .tracks
                .iter()
                .filter(|track| {
                    track.title.to_lowercase().contains(&query)
                        || track.artist.to_lowercase().contains(&query)
                })
                .cloned()
                .collect(),
            artists: self
                .artists
                .iter()
                .filter(|artist| {
                    artist.name.to_lowercase().contains(&query)
                        || artist.genre.to_lowercase().contains(&query)
                })
                .cloned()
                .collect(),
            playlists: self
                .playlists
                .iter()
                .filter(|playlist| playlist.name.to_lowercase().contains(&query))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tunebox_music_models::{Artist, Playlist, Track};

    use super::*;

    fn track(id: u64, title: &str, artist: &str, genre: &str) -> Track {
        Track {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            genre: genre.to_string(),
            stream_url: format!("https://stream.tunebox.dev/tracks/{id}"),
            ..Track::default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                track(1, "Blinding Lights", "The Weeknd", "Pop"),
                track(2, "Save Your Tears", "The Weeknd", "Pop"),
                track(3, "Bohemian Rhapsody", "Queen", "Rock"),
                track(4, "One More Time", "Daft Punk", "Electronic"),
            ],
            vec![
                Artist {
                    id: 1,
                    name: "The Weeknd".to_string(),
                    genre: "Pop".to_string(),
                    ..Artist::default()
                },
                Artist {
                    id: 2,
                    name: "Queen".to_string(),
                    genre: "Rock".to_string(),
                    ..Artist::default()
                },
            ],
            vec![
                Playlist {
                    id: 1,
                    name: "Late Night Drive".to_string(),
                    tracks: vec![1, 2],
                    track_count: 2,
                    ..Playlist::default()
                },
                Playlist {
                    id: 2,
                    name: "Stale Mix".to_string(),
                    tracks: vec![3, 99, 1],
                    track_count: 3,
                    ..Playlist::default()
                },
            ],
        )
    }

    #[test_log::test]
    fn filter_tracks_by_genre_is_case_insensitive_exact_match() {
        let catalog = catalog();
        let filters = TrackFilters {
            genre: Some("pop".to_string()),
            artist: None,
        };

        let filtered = filter_tracks(catalog.tracks(), &filters);

        assert_eq!(filtered.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test_log::test]
    fn filter_tracks_by_artist_is_substring_match() {
        let catalog = catalog();
        let filters = TrackFilters {
            genre: None,
            artist: Some("weeknd".to_string()),
        };

        let filtered = filter_tracks(catalog.tracks(), &filters);

        assert_eq!(filtered.len(), 2);
    }

    #[test_log::test]
    fn filter_tracks_composes_genre_and_artist_with_and() {
        let catalog = catalog();
        let filters = TrackFilters {
            genre: Some("pop".to_string()),
            artist: Some("queen".to_string()),
        };

        assert!(filter_tracks(catalog.tracks(), &filters).is_empty());
    }

    #[test_log::test]
    fn filter_tracks_is_idempotent() {
        let catalog = catalog();
        let filters = TrackFilters {
            genre: Some("rock".to_string()),
            artist: None,
        };

        let once = filter_tracks(catalog.tracks(), &filters);
        let twice = filter_tracks(&once, &filters);

        assert_eq!(once, twice);
    }

    #[test_log::test]
    fn filter_tracks_with_no_filters_returns_everything() {
        let catalog = catalog();

        let filtered = filter_tracks(catalog.tracks(), &TrackFilters::default());

        assert_eq!(filtered, catalog.tracks());
    }

    #[test_log::test]
    fn filter_playlists_by_name_substring() {
        let catalog = catalog();

        let filtered = filter_playlists(catalog.playlists(), Some("night"));

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test_log::test]
    fn lookup_by_unknown_id_returns_none() {
        let catalog = catalog();

        assert!(catalog.track(99).is_none());
        assert!(catalog.artist(99).is_none());
        assert!(catalog.playlist(99).is_none());
    }

    #[test_log::test]
    fn artist_tracks_joins_on_exact_name() {
        let catalog = catalog();
        let artist = catalog.artist(1).unwrap().clone();

        let tracks = catalog.artist_tracks(&artist);

        assert_eq!(tracks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test_log::test]
    fn playlist_tracks_resolves_ids_in_order() {
        let catalog = catalog();
        let playlist = catalog.playlist(1).unwrap().clone();

        let tracks = catalog.playlist_tracks(&playlist);

        assert_eq!(tracks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test_log::test]
    fn playlist_tracks_omits_unresolved_ids() {
        let catalog = catalog();
        let playlist = catalog.playlist(2).unwrap().clone();

        let tracks = catalog.playlist_tracks(&playlist);

        // Id 99 has no matching track and is dropped; order of the rest holds.
        assert_eq!(tracks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test_log::test]
    fn search_matches_tracks_and_artists_case_insensitively() {
        let catalog = catalog();

        let results = catalog.search("WEEKND");

        assert_eq!(results.tracks.len(), 2);
        assert_eq!(results.artists.len(), 1);
        assert!(results.playlists.is_empty());
    }

    #[test_log::test]
    fn search_matches_artists_by_genre_and_playlists_by_name() {
        let catalog = catalog();

        let results = catalog.search("rock");

        assert_eq!(results.tracks.len(), 0);
        assert_eq!(results.artists.len(), 1);
        assert_eq!(results.artists[0].name, "Queen");

        let results = catalog.search("mix");
        assert_eq!(results.playlists.len(), 1);
    }

    #[test_log::test]
    fn search_with_no_match_returns_empty_collections() {
        let catalog = catalog();

        assert_eq!(catalog.search("zzzzz"), SearchResults::default());
    }
}
