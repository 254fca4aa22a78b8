//! Data access for mbrs-server
//!
//! Every function takes the caller's connection (a pooled connection or an
//! open transaction) so a request's reads and writes share one unit of work.

pub mod attendance;
pub mod members;
pub mod plans;
pub mod subscriptions;

use sqlx::{Sqlite, SqlitePool, Transaction};

/// Open a write transaction.
///
/// `BEGIN IMMEDIATE` takes the write lock up front, so a handler's
/// read-before-write check sees every committed row and a competing writer
/// waits on the busy timeout instead of failing with a stale WAL snapshot.
pub async fn begin_write(pool: &SqlitePool) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
    pool.begin_with("BEGIN IMMEDIATE").await
}
