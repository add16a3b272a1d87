//! Core domain types for the TuneBox catalog.
//!
//! This crate defines the three catalog record types ([`Track`], [`Artist`], and
//! [`Playlist`]) along with supporting types such as [`AudioFormat`]. The [`api`]
//! module provides the camelCase wire representations used by HTTP responses.
//!
//! Records are seeded once at process start and never mutated afterwards. Relations
//! between records are soft: `Track::artist` holds an artist name rather than an
//! enforced foreign key, and `Playlist::tracks` holds track ids that may or may not
//! resolve against the catalog.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};

pub mod api;

/// Audio format of a track's source file.
#[derive(Copy, Debug, Clone, Serialize, Deserialize, EnumString, Default, AsRefStr, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum AudioFormat {
    /// AAC audio format
    Aac,
    /// FLAC audio format
    Flac,
    /// MP3 audio format
    #[default]
    Mp3,
    /// Ogg Vorbis audio format
    Ogg,
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A single catalog track.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Unique identifier for the track
    pub id: u64,
    /// Track title
    pub title: String,
    /// Artist name (soft reference to [`Artist::name`])
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

/// A catalog artist.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Artist {
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
    /// Social links keyed by platform name (may be empty)
    pub social_links: BTreeMap<String, String>,
}

/// An ordered collection of track ids.
///
/// `track_count` and `total_duration` are seeded values and are not recomputed
/// from `tracks` at runtime.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    /// Unique identifier for the playlist
    pub id: u64,
    /// Playlist name
    pub name: String,
    /// Ordered track ids (duplicates allowed)
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
