use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::Sqlite;

pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// Mapping between a domain type and its backing table
///
/// Every mapped table has an integer `id` primary key assigned by SQLite.
/// `COLUMNS` lists the remaining columns in the order `bind_columns` binds
/// them.
pub trait Entity: Clone + Send + Sync + Unpin + 'static {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error>;
}

pub(crate) fn select_all_sql<E: Entity>() -> String {
    format!(
        "SELECT id, {} FROM {} ORDER BY id",
        E::COLUMNS.join(", "),
        E::TABLE
    )
}

pub(crate) fn select_by_id_sql<E: Entity>() -> String {
    format!(
        "SELECT id, {} FROM {} WHERE id = ?",
        E::COLUMNS.join(", "),
        E::TABLE
    )
}

/// First row, by ID, whose `column` equals the bound value
pub(crate) fn select_first_where_sql<E: Entity>(column: &str) -> String {
    format!(
        "SELECT id, {} FROM {} WHERE {} = ? ORDER BY id LIMIT 1",
        E::COLUMNS.join(", "),
        E::TABLE,
        column
    )
}

pub(crate) fn insert_sql<E: Entity>() -> String {
    let placeholders = vec!["?"; E::COLUMNS.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders
    )
}

pub(crate) fn update_sql<E: Entity>() -> String {
    let assignments = E::COLUMNS
        .iter()
        .map(|column| format!("{} = ?", column))
        .collect::<Vec<_>>()
        .join(", ");
    format!("UPDATE {} SET {} WHERE id = ?", E::TABLE, assignments)
}

pub(crate) fn delete_sql<E: Entity>() -> String {
    format!("DELETE FROM {} WHERE id = ?", E::TABLE)
}
