// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed client for the Deezer music-metadata API.
//!
//! All requests are anonymous, read-only GETs. Responses are decoded
//! into typed records, and every failure is reported through
//! [`DeezerError`], including the logical errors the API embeds
//! inside successful HTTP responses.
//!
//! ```no_run
//! use deezer_client::DeezerClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = DeezerClient::new()?;
//! let (album, _response) = client.albums().get("302127").await?;
//! println!("{} by {}", album.title, album.artist.name);
//! # Ok(())
//! # }
//! ```

pub mod album;
pub mod artist;
pub mod client;
pub mod error;
pub mod options;
pub mod response;
pub mod track;

pub use album::{Album, AlbumService, AlbumTrack, Contributor, Genre, Genres, Tracklist};
pub use artist::{Artist, ArtistService};
pub use client::{DeezerClient, DeezerClientBuilder};
pub use error::{ApiError, DeezerError, ErrorResponse, Result};
pub use options::ListOptions;
pub use response::Response;
pub use track::Track;
