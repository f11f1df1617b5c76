// SPDX-License-Identifier: GPL-3.0-or-later

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::artist::Artist;
use crate::client::DeezerClient;
use crate::error::Result;
use crate::options::ListOptions;
use crate::response::Response;

/// Album endpoints, reached through [`DeezerClient::albums`].
#[derive(Debug)]
pub struct AlbumService<'c> {
    client: &'c DeezerClient,
}

impl<'c> AlbumService<'c> {
    pub(crate) fn new(client: &'c DeezerClient) -> Self {
        Self { client }
    }

    /// Fetch an album by id.
    ///
    /// # Example
    /// ```no_run
    /// # use deezer_client::DeezerClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = DeezerClient::new()?;
    /// let (album, _response) = client.albums().get("302127").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, id: &str) -> Result<(Album, Response)> {
        self.client.get(&format!("album/{id}")).await
    }

    /// Fetch an album by id, returning the response body verbatim
    /// instead of decoding it.
    pub async fn get_raw(&self, id: &str) -> Result<(Bytes, Response)> {
        self.client.get_raw(&format!("album/{id}")).await
    }

    /// List an album's tracks, one page at a time.
    pub async fn tracks(
        &self,
        id: &str,
        options: &ListOptions,
    ) -> Result<(Tracklist, Response)> {
        let path = options.apply(&format!("album/{id}/tracks"))?;
        self.client.get(&path).await
    }
}

/// An album, as returned by `album/{id}`.
///
/// Every field is optional on the wire; absent fields decode to their
/// zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Album {
    pub id: u64,
    pub title: String,
    /// Universal product code of the release.
    pub upc: String,
    pub link: String,
    pub share: String,
    pub cover: String,
    pub cover_small: String,
    pub cover_medium: String,
    pub cover_big: String,
    pub cover_xl: String,
    pub md5_image: String,
    /// Main genre id, `-1` when unknown.
    pub genre_id: i64,
    pub genres: Genres,
    pub label: String,
    pub nb_tracks: u64,
    /// Total duration in seconds.
    pub duration: u64,
    pub fans: u64,
    pub rating: u64,
    /// Release date, `YYYY-MM-DD`.
    pub release_date: String,
    /// Release kind: "album", "ep", "single".
    pub record_type: String,
    pub available: bool,
    /// URL of this album's tracklist resource.
    pub tracklist: String,
    pub explicit_lyrics: bool,
    pub explicit_content_lyrics: u64,
    pub explicit_content_cover: u64,
    pub contributors: Vec<Contributor>,
    pub artist: Artist,
    #[serde(rename = "type")]
    pub kind: String,
    pub tracks: Tracklist,
}

/// Genre collection attached to an album.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genres {
    pub data: Vec<Genre>,
}

/// A music genre.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    pub picture: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// An artist credited on an album.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contributor {
    pub id: u64,
    pub name: String,
    pub link: String,
    pub share: String,
    pub picture: String,
    pub picture_small: String,
    pub picture_medium: String,
    pub picture_big: String,
    pub picture_xl: String,
    pub radio: bool,
    pub tracklist: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Part played on the record (e.g. "Main", "Featured").
    pub role: String,
}

/// One page of an album's tracks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tracklist {
    pub data: Vec<AlbumTrack>,
    /// Total number of tracks across all pages.
    pub total: u64,
    /// URL of the previous page, when one exists.
    pub prev: Option<String>,
    /// URL of the next page, when one exists.
    pub next: Option<String>,
}

/// A track as embedded in an album or tracklist page.
///
/// A slimmer shape than [`crate::Track`]: list endpoints leave out
/// the per-track detail fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlbumTrack {
    pub id: u64,
    pub readable: bool,
    pub title: String,
    pub title_short: String,
    pub title_version: String,
    pub link: String,
    /// Duration in seconds.
    pub duration: u64,
    pub rank: u64,
    pub explicit_lyrics: bool,
    pub explicit_content_lyrics: u64,
    pub explicit_content_cover: u64,
    /// URL of a 30-second preview MP3.
    pub preview: String,
    pub md5_image: String,
    pub artist: Artist,
    #[serde(rename = "type")]
    pub kind: String,
}
