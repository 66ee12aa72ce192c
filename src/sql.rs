//! SQLite column support: a `WeekDate` is stored as its canonical `YYYY-Www` text.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::{WeekDate, WeekError};

impl ToSql for WeekDate {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let text = self
            .to_text()
            .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
        Ok(ToSqlOutput::from(text))
    }
}

impl FromSql for WeekDate {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                Self::from_bytes(bytes).map_err(|err| FromSqlError::Other(Box::new(err)))
            },
            // No coercion from numeric or NULL storage classes
            other => Err(FromSqlError::Other(Box::new(WeekError::InvalidType(
                other.data_type().to_string(),
            )))),
        }
    }
}
