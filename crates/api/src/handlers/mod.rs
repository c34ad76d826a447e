//! HTTP handlers for the website API.

pub mod catalog;
pub mod distance;
pub mod enquiry;
pub mod upload;
pub mod vehicle;

use serde_json::Value;
use vtpartner_core::error::CoreError;
use vtpartner_core::types::DbId;
use vtpartner_core::validation::{id_value, RequiredFields};

/// Check that every field is present, then coerce each one to an id.
///
/// Missing fields are reported together, in the order given, before any
/// value is coerced.
pub(crate) fn required_ids<const N: usize>(
    fields: [(&'static str, &Option<Value>); N],
) -> Result<[DbId; N], CoreError> {
    fields
        .iter()
        .fold(RequiredFields::new(), |required, &(name, value)| {
            required.field(name, value)
        })
        .check()?;

    let mut ids = [0; N];
    for (slot, &(name, value)) in ids.iter_mut().zip(fields.iter()) {
        *slot = id_value(name, value)?;
    }
    Ok(ids)
}
