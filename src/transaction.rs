use chrono::NaiveDate;
use rusqlite::Row;

/// Hold transaction info returned from database query
#[derive(Debug, Clone)]
pub(crate) struct Transaction {
    pub(crate) id: i64,
    pub(crate) date: NaiveDate,
    pub(crate) amount: f64,
    pub(crate) category: String,
    pub(crate) description: String,
}

impl Transaction {
    /// Map one row of the Transactions table. Column order must match the
    /// SELECT in [`crate::db::load_transactions`].
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Transaction> {
        Ok(Transaction {
            id: row.get(0)?,
            date: row.get(1)?,
            amount: row.get(2)?,
            category: row.get(3)?,
            // Description is nullable in the schema
            description: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        })
    }
}
