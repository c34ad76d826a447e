//! Enquiry insert DTO and submission outcome.

use vtpartner_core::types::DbId;

/// Fields of a new enquiry, already validated and coerced.
#[derive(Debug, Clone)]
pub struct CreateEnquiry {
    pub category_id: DbId,
    pub sub_cat_id: DbId,
    pub service_id: DbId,
    pub vehicle_id: DbId,
    pub city_id: DbId,
    pub name: String,
    pub mobile_no: String,
    pub source_type: String,
}

/// Result of [`EnquiryRepo::create_unless_duplicate`](crate::repositories::EnquiryRepo::create_unless_duplicate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnquiryOutcome {
    /// Rows inserted by the statement.
    Inserted(u64),
    /// An enquiry with the same name and category already exists.
    Duplicate,
}
