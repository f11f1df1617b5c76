// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

use crate::album::Album;
use crate::artist::Artist;

/// A track with full per-track detail, as embedded in other records
/// or decoded from a raw exchange.
///
/// Every field is optional on the wire; absent fields decode to their
/// zero value. The parent artist and album arrive only on some
/// endpoints, so both stay optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Track {
    pub id: u64,
    /// Whether the track is playable in the caller's country.
    pub readable: bool,
    pub title: String,
    pub title_short: String,
    pub title_version: String,
    /// International standard recording code.
    pub isrc: String,
    pub link: String,
    pub share: String,
    /// Duration in seconds.
    pub duration: u64,
    pub track_position: u64,
    pub disk_number: u64,
    pub rank: u64,
    /// Release date, `YYYY-MM-DD`.
    pub release_date: String,
    pub explicit_lyrics: bool,
    pub explicit_content_lyrics: u64,
    pub explicit_content_cover: u64,
    /// URL of a 30-second preview MP3.
    pub preview: String,
    pub bpm: f64,
    /// Gain in dB applied when normalizing playback volume.
    pub gain: f64,
    pub available_countries: Vec<String>,
    pub contributors: Vec<Artist>,
    pub md5_image: String,
    pub artist: Option<Artist>,
    pub album: Option<Box<Album>>,
    #[serde(rename = "type")]
    pub kind: String,
}
