/// Returns `true` if the error is a unique violation on the `links.code` index.
///
/// The unique index is the correctness guarantee for code assignment; any
/// `exists` pre-check is advisory only.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("links_code_key"))
}
