/// Catalog identifiers (categories, cities, vehicles, ...) are PostgreSQL BIGINT.
pub type DbId = i64;
