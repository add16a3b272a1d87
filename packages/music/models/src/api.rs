//! API representations of the catalog types.
//!
//! These are the camelCase shapes serialized into HTTP response bodies. They mirror
//! the domain types one to one, except for [`ApiPlaylistWithTracks`], which carries
//! resolved track records in place of the raw id list.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Artist, AudioFormat, Playlist, Track};

/// API representation of a track.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiTrack {
    /// Unique identifier for the track
    pub id: u64,
    /// Track title
    pub title: String,
    /// Artist name
    pub artist: String,
    /// Genre name
    pub genre: String,
    /// Track duration in seconds
    pub duration: u32,
    /// URL of the source audio file
    pub file_url: String,
    /// URL the track is streamed from
    pub stream_url: String,
    /// Artwork thumbnail URL
    pub thumbnail_url: String,
    /// Download URL
    pub download_url: String,
    /// Audio format of the source file
    pub format: AudioFormat,
    /// Audio bitrate in kbps
    pub bitrate: u32,
    /// File size in bytes
    pub size: u64,
}

impl From<Track> for ApiTrack {
    fn from(value: Track) -> Self {
        Self {
            id: value.id,
            title: value.title,
            artist: value.artist,
            genre: value.genre,
            duration: value.duration,
            file_url: value.file_url,
            stream_url: value.stream_url,
            thumbnail_url: value.thumbnail_url,
            download_url: value.download_url,
            format: value.format,
            bitrate: value.bitrate,
            size: value.size,
        }
    }
}

/// API representation of an artist.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiArtist {
    /// Unique identifier for the artist
    pub id: u64,
    /// Artist name
    pub name: String,
    /// Primary genre
    pub genre: String,
    /// Country of origin
    pub country: String,
    /// Profile image URL
    pub profile_image: String,
    /// Social links keyed by platform name
    #[serde(default)]
    pub social_links: BTreeMap<String, String>,
}

impl From<Artist> for ApiArtist {
    fn from(value: Artist) -> Self {
        Self {
            id: value.id,
            name: value.name,
            genre: value.genre,
            country: value.country,
            profile_image: value.profile_image,
            social_links: value.social_links,
        }
    }
}

/// API representation of a playlist, with tracks as raw ids.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiPlaylist {
    /// Unique identifier for the playlist
    pub id: u64,
    /// Playlist name
    pub name: String,
    /// Ordered track ids
    pub tracks: Vec<u64>,
    /// Name of the playlist creator
    pub created_by: String,
    /// Cover image URL
    pub cover_image: String,
    /// Combined duration of all tracks in seconds
    pub total_duration: u32,
    /// Number of tracks in the playlist
    pub track_count: u32,
}

impl From<Playlist> for ApiPlaylist {
    fn from(value: Playlist) -> Self {
        Self {
            id: value.id,
            name: value.name,
            tracks: value.tracks,
            created_by: value.created_by,
            cover_image: value.cover_image,
            total_duration: value.total_duration,
            track_count: value.track_count,
        }
    }
}

/// API representation of a playlist with its track ids resolved to full records.
///
/// Ids that do not resolve against the catalog are omitted from `tracks`, so the
/// resolved list can be shorter than the seeded `track_count`.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiPlaylistWithTracks {
    /// Unique identifier for the playlist
    pub id: u64,
    /// Playlist name
    pub name: String,
    /// Resolved track records, in playlist order
    pub tracks: Vec<ApiTrack>,
    /// Name of the playlist creator
    pub created_by: String,
    /// Cover image URL
    pub cover_image: String,
    /// Combined duration of all tracks in seconds
    pub total_duration: u32,
    /// Number of tracks in the playlist
    pub track_count: u32,
}

impl ApiPlaylistWithTracks {
    /// Combines a playlist with its resolved track records.
    #[must_use]
    pub fn new(playlist: Playlist, tracks: Vec<Track>) -> Self {
        Self {
            id: playlist.id,
            name: playlist.name,
            tracks: tracks.into_iter().map(Into::into).collect(),
            created_by: playlist.created_by,
            cover_image: playlist.cover_image,
            total_duration: playlist.total_duration,
            track_count: playlist.track_count,
        }
    }
}

/// Result arrays returned by the global search endpoint.
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ApiSearchResults {
    /// Tracks whose title or artist matched the query
    pub tracks: Vec<ApiTrack>,
    /// Artists whose name or genre matched the query
    pub artists: Vec<ApiArtist>,
    /// Playlists whose name matched the query
    pub playlists: Vec<ApiPlaylist>,
}
