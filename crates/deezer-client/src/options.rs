// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::error::{DeezerError, Result};

/// Pagination parameters for listing endpoints.
///
/// Unset fields are omitted from the query string.
///
/// # Example
/// ```
/// # use deezer_client::ListOptions;
/// let options = ListOptions::new().index(50).limit(25);
/// assert_eq!(
///     options.apply("album/302127/tracks").unwrap(),
///     "album/302127/tracks?index=50&limit=25"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Offset of the first record to return.
    pub index: Option<u64>,
    /// Maximum number of records per page.
    pub limit: Option<u64>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(mut self, index: u64) -> Self {
        self.index = Some(index);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Merge these options into `path`'s query string.
    ///
    /// Parameters already present in `path` are kept, except those
    /// with the same name as a set option, which are overwritten.
    /// Keys serialize in lexicographic order.
    pub fn apply(&self, path: &str) -> Result<String> {
        if path.chars().any(|c| c.is_ascii_control()) {
            return Err(DeezerError::MalformedUrl(format!(
                "control character in path {path:?}"
            )));
        }

        let (base, query) = match path.split_once('?') {
            Some((base, query)) => (base, query),
            None => (path, ""),
        };

        let mut params: BTreeMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();

        if let Some(index) = self.index {
            params.insert("index".to_string(), index.to_string());
        }
        if let Some(limit) = self.limit {
            params.insert("limit".to_string(), limit.to_string());
        }

        if params.is_empty() {
            return Ok(base.to_string());
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();

        Ok(format!("{base}?{query}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_options_into_bare_path() {
        let options = ListOptions::new().index(5).limit(10);
        let path = options.apply("album/1/tracks").unwrap();
        assert_eq!(path, "album/1/tracks?index=5&limit=10");
    }

    #[test]
    fn keeps_unrelated_parameters() {
        let options = ListOptions::new().index(5).limit(10);
        let path = options.apply("album/1/tracks?output=json").unwrap();
        assert_eq!(path, "album/1/tracks?index=5&limit=10&output=json");
    }

    #[test]
    fn overwrites_same_named_parameters() {
        let options = ListOptions::new().index(25);
        let path = options.apply("album/1/tracks?index=0&limit=50").unwrap();
        assert_eq!(path, "album/1/tracks?index=25&limit=50");
    }

    #[test]
    fn unset_options_leave_path_unchanged() {
        let options = ListOptions::new();
        assert_eq!(options.apply("album/1/tracks").unwrap(), "album/1/tracks");
        assert_eq!(
            options.apply("album/1/tracks?limit=5").unwrap(),
            "album/1/tracks?limit=5"
        );
    }

    #[test]
    fn control_characters_are_rejected() {
        let options = ListOptions::new();
        assert!(matches!(
            options.apply("album/\n/tracks"),
            Err(DeezerError::MalformedUrl(_))
        ));
    }
}
