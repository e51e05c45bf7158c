//! Classification of database errors.

/// Primary key constraint on `urls.slug`.
const SLUG_CONSTRAINT: &str = "urls_pkey";

/// Returns `true` if `e` is a unique violation on the slug primary key.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SLUG_CONSTRAINT))
}
