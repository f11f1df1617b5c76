// SPDX-License-Identifier: GPL-3.0-or-later

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::client::DeezerClient;
use crate::error::Result;
use crate::response::Response;

/// Artist endpoints, reached through [`DeezerClient::artists`].
#[derive(Debug)]
pub struct ArtistService<'c> {
    client: &'c DeezerClient,
}

impl<'c> ArtistService<'c> {
    pub(crate) fn new(client: &'c DeezerClient) -> Self {
        Self { client }
    }

    /// Fetch an artist by id.
    pub async fn get(&self, id: &str) -> Result<(Artist, Response)> {
        self.client.get(&format!("artist/{id}")).await
    }

    /// Fetch an artist by id, returning the response body verbatim
    /// instead of decoding it.
    pub async fn get_raw(&self, id: &str) -> Result<(Bytes, Response)> {
        self.client.get_raw(&format!("artist/{id}")).await
    }
}

/// An artist, as returned by `artist/{id}`.
///
/// Every field is optional on the wire; absent fields decode to their
/// zero value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub link: String,
    pub share: String,
    pub picture: String,
    pub picture_small: String,
    pub picture_medium: String,
    pub picture_big: String,
    pub picture_xl: String,
    /// Number of albums in the artist's discography.
    pub nb_album: u64,
    pub nb_fan: u64,
    /// Whether a radio mix is available for this artist.
    pub radio: bool,
    /// URL of the artist's top-tracks resource.
    pub tracklist: String,
    #[serde(rename = "type")]
    pub kind: String,
}
