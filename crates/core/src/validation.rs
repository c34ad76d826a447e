//! Required-field validation and value coercion for request payloads.
//!
//! Request bodies arrive as loosely typed JSON: the same identifier may be
//! sent as `3` or `"3"`. Handlers first run [`RequiredFields`] over the raw
//! values, then coerce the survivors with [`id_value`] / [`text_value`].
//!
//! A value counts as missing when it is absent, `null`, or the empty
//! string. Numeric zero and `false` are present.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Presence
// ---------------------------------------------------------------------------

/// Whether a submitted value counts as supplied.
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for Value {
    fn is_present(&self) -> bool {
        match self {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

macro_rules! always_present {
    ($($ty:ty),*) => {
        $(impl Presence for $ty {
            fn is_present(&self) -> bool {
                true
            }
        })*
    };
}

always_present!(bool, i32, i64, u32, u64, f64);

// ---------------------------------------------------------------------------
// RequiredFields
// ---------------------------------------------------------------------------

/// Ordered set of named values that must all be present.
///
/// ```
/// use serde_json::json;
/// use vtpartner_core::validation::RequiredFields;
///
/// let category_id = Some(json!(0));
/// let city_id: Option<serde_json::Value> = None;
///
/// let missing = RequiredFields::new()
///     .field("category_id", &category_id)
///     .field("city_id", &city_id)
///     .missing();
/// assert_eq!(missing, Some(vec!["city_id"]));
/// ```
#[derive(Debug, Default)]
pub struct RequiredFields<'a> {
    fields: Vec<(&'a str, bool)>,
}

impl<'a> RequiredFields<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Order of calls is the order missing names are reported in.
    pub fn field<T: Presence + ?Sized>(mut self, name: &'a str, value: &T) -> Self {
        self.fields.push((name, value.is_present()));
        self
    }

    /// Names of the missing fields in insertion order, or `None` when all
    /// fields are present.
    pub fn missing(&self) -> Option<Vec<&'a str>> {
        let missing: Vec<&'a str> = self
            .fields
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect();

        if missing.is_empty() {
            None
        } else {
            Some(missing)
        }
    }

    /// Fail with [`CoreError::MissingFields`] if any field is missing.
    pub fn check(self) -> Result<(), CoreError> {
        match self.missing() {
            None => Ok(()),
            Some(names) => Err(CoreError::MissingFields(
                names.into_iter().map(str::to_string).collect(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

fn invalid(name: &str) -> CoreError {
    CoreError::Validation(format!("Invalid value for field {name}"))
}

fn required<'v>(name: &str, value: &'v Option<Value>) -> Result<&'v Value, CoreError> {
    value
        .as_ref()
        .filter(|v| v.is_present())
        .ok_or_else(|| CoreError::MissingFields(vec![name.to_string()]))
}

/// Coerce a required identifier sent either as a JSON integer or as a
/// decimal string.
pub fn id_value(name: &str, value: &Option<Value>) -> Result<DbId, CoreError> {
    match required(name, value)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .ok_or_else(|| invalid(name)),
        Value::String(s) => s.trim().parse::<DbId>().map_err(|_| invalid(name)),
        _ => Err(invalid(name)),
    }
}

/// Coerce a required text field. Numbers are accepted and rendered in
/// decimal (mobile numbers are often posted as numbers).
pub fn text_value(name: &str, value: &Option<Value>) -> Result<String, CoreError> {
    match required(name, value)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(invalid(name)),
    }
}
