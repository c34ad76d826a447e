//! Repository for `vtpartner.enquirytbl`.

use sqlx::{PgExecutor, PgPool};
use vtpartner_core::types::DbId;

use crate::models::enquiry::{CreateEnquiry, EnquiryOutcome};

/// Serializes submissions sharing a duplicate key for the rest of the
/// transaction.
const LOCK_DUPLICATE_KEY: &str = "\
    SELECT pg_advisory_xact_lock(
        hashtextextended(lower($1) || ':' || CAST($2 AS BIGINT)::text, 0)
    )";

pub struct EnquiryRepo;

impl EnquiryRepo {
    /// Count enquiries whose name matches case-insensitively within a category.
    ///
    /// Only `name` and `category_id` take part in the match.
    pub async fn count_duplicates<'e>(
        executor: impl PgExecutor<'e>,
        name: &str,
        category_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM vtpartner.enquirytbl
             WHERE lower(name) = lower($1) AND category_id = $2",
        )
        .bind(name)
        .bind(category_id)
        .fetch_one(executor)
        .await
    }

    /// Insert an enquiry, returning the number of rows affected.
    pub async fn insert<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateEnquiry,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO vtpartner.enquirytbl
                (category_id, sub_cat_id, service_id, vehicle_id, city_id,
                 name, mobile_no, source_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(input.category_id)
        .bind(input.sub_cat_id)
        .bind(input.service_id)
        .bind(input.vehicle_id)
        .bind(input.city_id)
        .bind(&input.name)
        .bind(&input.mobile_no)
        .bind(&input.source_type)
        .execute(executor)
        .await?;
        Ok(result.rows_affected())
    }

    /// Insert an enquiry unless one with the same name and category exists.
    ///
    /// The duplicate check and the insert share a transaction holding an
    /// advisory lock on `(lower(name), category_id)`, so concurrent
    /// identical submissions cannot both insert.
    pub async fn create_unless_duplicate(
        pool: &PgPool,
        input: &CreateEnquiry,
    ) -> Result<EnquiryOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(LOCK_DUPLICATE_KEY)
            .bind(&input.name)
            .bind(input.category_id)
            .execute(&mut *tx)
            .await?;

        let existing = Self::count_duplicates(&mut *tx, &input.name, input.category_id).await?;
        if existing > 0 {
            tracing::debug!(
                category_id = input.category_id,
                existing,
                "Duplicate enquiry rejected"
            );
            tx.rollback().await?;
            return Ok(EnquiryOutcome::Duplicate);
        }

        let inserted = Self::insert(&mut *tx, input).await?;
        tx.commit().await?;
        Ok(EnquiryOutcome::Inserted(inserted))
    }
}
