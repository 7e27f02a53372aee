use sqlx::{postgres::PgRow, FromRow, Row};

/// User record in the database.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,       // SERIAL or BIGSERIAL primary key
    pub name: String,  // display name
    pub email: String, // email address
}

impl<'r> FromRow<'r, PgRow> for User {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        // INT8 decodes directly; INT4 is widened.
        let id = match row.try_get::<i64, _>("id") {
            Ok(id) => id,
            Err(sqlx::Error::ColumnDecode { .. }) => i64::from(row.try_get::<i32, _>("id")?),
            Err(e) => return Err(e),
        };
        Ok(Self {
            id,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
        })
    }
}
