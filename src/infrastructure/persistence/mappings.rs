use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::domain::driver::Driver;
use crate::infrastructure::persistence::entity::{Entity, SqliteQuery};

impl Entity for Driver {
    const TABLE: &'static str = "drivers";
    const COLUMNS: &'static [&'static str] = &["name", "driver_number", "team"];

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_columns<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.as_str())
            .bind(self.driver_number)
            .bind(self.team.as_str())
    }

    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Driver {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            driver_number: row.try_get("driver_number")?,
            team: row.try_get("team")?,
        })
    }
}
