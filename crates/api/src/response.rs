//! Shared response shapes for the website handlers.
//!
//! Every catalog endpoint answers with its rows under an endpoint-specific
//! key, e.g. `{ "cities": [...] }`. Use [`Listing::non_empty`] so that an
//! empty result becomes the standard 404 instead of an empty array.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use vtpartner_core::error::CoreError;

use crate::error::AppResult;

/// `{ "<key>": [rows...] }` response envelope.
#[derive(Debug)]
pub struct Listing<T> {
    key: &'static str,
    rows: Vec<T>,
}

impl<T: Serialize> Listing<T> {
    /// Wrap `rows` under `key`, failing with [`CoreError::NotFound`] when
    /// there are none.
    pub fn non_empty(key: &'static str, rows: Vec<T>) -> AppResult<Self> {
        if rows.is_empty() {
            return Err(CoreError::NotFound.into());
        }
        Ok(Self { key, rows })
    }
}

impl<T: Serialize> Serialize for Listing<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.rows)?;
        map.end()
    }
}

/// `{ "message": ... }` success body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
