use std::path::Path;

use chrono::NaiveDate;
use log::debug;
use rusqlite::{Connection, OpenFlags, params};

use crate::error::AnalyzerError;
use crate::transaction::Transaction;

/// Range query over the Transactions table. Date is stored as ISO-8601 text,
/// so `>=` / `<` against the bound strings filters chronologically. Start
/// bound is inclusive, end bound is exclusive.
const SELECT_RANGE: &str = "SELECT Id, Date, Amount, Category, Description \
     FROM Transactions \
     WHERE Date >= ?1 AND Date < ?2 \
     ORDER BY Date";

/// Load every transaction with `date_from <= date < date_to`, ordered by date.
///
/// The database is opened read-only and the connection lives only for this
/// one query; it is closed on drop on every path, including query failure.
pub(crate) fn load_transactions(
    path: &Path,
    date_from: NaiveDate,
    date_to: NaiveDate,
) -> Result<Vec<Transaction>, AnalyzerError> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;

    let mut stmt = conn.prepare(SELECT_RANGE)?;
    let rows = stmt.query_map(
        params![
            date_from.format("%Y-%m-%d").to_string(),
            date_to.format("%Y-%m-%d").to_string(),
        ],
        Transaction::from_row,
    )?;

    let transactions: Vec<Transaction> = rows.collect::<Result<_, _>>()?;
    debug!(
        "loaded {} transactions from {} for [{}, {})",
        transactions.len(),
        path.display(),
        date_from,
        date_to
    );
    Ok(transactions)
}
