//! Handler for website enquiry submissions.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use vtpartner_core::error::CoreError;
use vtpartner_core::validation::{id_value, text_value, RequiredFields};
use vtpartner_db::models::enquiry::{CreateEnquiry, EnquiryOutcome};
use vtpartner_db::repositories::EnquiryRepo;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::MessageResponse;
use crate::state::AppState;

pub const ENQUIRY_EXISTS: &str = "Enquiry Request already exists";

#[derive(Debug, Default, Deserialize)]
pub struct EnquiryBody {
    pub category_id: Option<Value>,
    pub sub_cat_id: Option<Value>,
    pub service_id: Option<Value>,
    pub vehicle_id: Option<Value>,
    pub city_id: Option<Value>,
    pub name: Option<Value>,
    pub mobile_no: Option<Value>,
    pub source_type: Option<Value>,
}

impl EnquiryBody {
    fn into_create(self) -> Result<CreateEnquiry, CoreError> {
        RequiredFields::new()
            .field("category_id", &self.category_id)
            .field("sub_cat_id", &self.sub_cat_id)
            .field("service_id", &self.service_id)
            .field("vehicle_id", &self.vehicle_id)
            .field("city_id", &self.city_id)
            .field("name", &self.name)
            .field("mobile_no", &self.mobile_no)
            .field("source_type", &self.source_type)
            .check()?;

        Ok(CreateEnquiry {
            category_id: id_value("category_id", &self.category_id)?,
            sub_cat_id: id_value("sub_cat_id", &self.sub_cat_id)?,
            service_id: id_value("service_id", &self.service_id)?,
            vehicle_id: id_value("vehicle_id", &self.vehicle_id)?,
            city_id: id_value("city_id", &self.city_id)?,
            name: text_value("name", &self.name)?,
            mobile_no: text_value("mobile_no", &self.mobile_no)?,
            source_type: text_value("source_type", &self.source_type)?,
        })
    }
}

/// POST /add_new_enquiry
///
/// Records a customer lead. A lead whose name matches an existing one
/// (ignoring case) in the same category is rejected with 409; the other
/// fields are not compared.
pub async fn add_new_enquiry(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<EnquiryBody>,
) -> AppResult<Json<MessageResponse>> {
    let input = body.into_create()?;

    match EnquiryRepo::create_unless_duplicate(&state.pool, &input).await? {
        EnquiryOutcome::Duplicate => Err(CoreError::Conflict(ENQUIRY_EXISTS.into()).into()),
        EnquiryOutcome::Inserted(rows) => {
            tracing::info!(
                category_id = input.category_id,
                city_id = input.city_id,
                source_type = %input.source_type,
                "Enquiry added",
            );
            Ok(Json(MessageResponse {
                message: format!("{rows} row(s) inserted"),
            }))
        }
    }
}
