//! The seeded sample dataset served by the TuneBox server.
//!
//! The content here is fixture data for the local front-end; nothing outside
//! of this module depends on the specific records. Cross-references are soft:
//! track `artist` fields match artist `name` fields, and playlist track ids
//! reference seeded track ids.

use std::collections::BTreeMap;

use tunebox_music_models::{Artist, AudioFormat, Playlist, Track};

use crate::Catalog;

fn track(
    id: u64,
    title: &str,
    artist: &str,
    genre: &str,
    duration: u32,
    size: u64,
) -> Track {
    Track {
        id,
        title: title.to_string(),
        artist: artist.to_string(),
        genre: genre.to_string(),
        duration,
        file_url: format!("https://cdn.tunebox.dev/files/{id}.mp3"),
        stream_url: format!("https://stream.tunebox.dev/tracks/{id}"),
        thumbnail_url: format!("https://cdn.tunebox.dev/thumbnails/{id}.jpg"),
        download_url: format!("https://cdn.tunebox.dev/downloads/{id}.mp3"),
        format: AudioFormat::Mp3,
        bitrate: 320,
        size,
    }
}

fn artist(id: u64, name: &str, genre: &str, country: &str, handle: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
        genre: genre.to_string(),
        country: country.to_string(),
        profile_image: format!("https://cdn.tunebox.dev/artists/{id}.jpg"),
        social_links: BTreeMap::from([
            (
                "instagram".to_string(),
                format!("https://instagram.com/{handle}"),
            ),
            ("x".to_string(), format!("https://x.com/{handle}")),
        ]),
    }
}

/// Builds the catalog seeded into the server at startup.
#[must_use]
pub fn sample_catalog() -> Catalog {
    let tracks = vec![
        track(1, "Blinding Lights", "The Weeknd", "Pop", 200, 8_012_345),
        track(2, "Save Your Tears", "The Weeknd", "Pop", 215, 8_611_002),
        track(3, "Levitating", "Dua Lipa", "Pop", 203, 8_133_760),
        track(4, "Don't Start Now", "Dua Lipa", "Pop", 183, 7_331_840),
        track(5, "HUMBLE.", "Kendrick Lamar", "Hip-Hop", 177, 7_091_200),
        track(6, "DNA.", "Kendrick Lamar", "Hip-Hop", 185, 7_411_712),
        track(7, "One More Time", "Daft Punk", "Electronic", 320, 12_820_480),
        track(8, "Harder, Better, Faster, Stronger", "Daft Punk", "Electronic", 224, 8_972_288),
        track(9, "Do I Wanna Know?", "Arctic Monkeys", "Rock", 272, 10_895_360),
        track(10, "505", "Arctic Monkeys", "Rock", 253, 10_137_600),
    ];

    let artists = vec![
        artist(1, "The Weeknd", "Pop", "Canada", "theweeknd"),
        artist(2, "Dua Lipa", "Pop", "United Kingdom", "dualipa"),
        artist(3, "Kendrick Lamar", "Hip-Hop", "United States", "kendricklamar"),
        artist(4, "Daft Punk", "Electronic", "France", "daftpunk"),
        artist(5, "Arctic Monkeys", "Rock", "United Kingdom", "arcticmonkeys"),
    ];

    let playlists = vec![
        Playlist {
            id: 1,
            name: "Late Night Drive".to_string(),
            tracks: vec![1, 9, 7, 10],
            created_by: "TuneBox".to_string(),
            cover_image: "https://cdn.tunebox.dev/playlists/1.jpg".to_string(),
            total_duration: 1045,
            track_count: 4,
        },
        Playlist {
            id: 2,
            name: "Pop Essentials".to_string(),
            tracks: vec![1, 2, 3, 4],
            created_by: "TuneBox".to_string(),
            cover_image: "https://cdn.tunebox.dev/playlists/2.jpg".to_string(),
            total_duration: 801,
            track_count: 4,
        },
        Playlist {
            id: 3,
            name: "Workout Energy".to_string(),
            tracks: vec![5, 8, 6],
            created_by: "TuneBox".to_string(),
            cover_image: "https://cdn.tunebox.dev/playlists/3.jpg".to_string(),
            total_duration: 586,
            track_count: 3,
        },
    ];

    Catalog::new(tracks, artists, playlists)
}
