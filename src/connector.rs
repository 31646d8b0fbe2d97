//! Data source connector.
//!
//! Opens one scoped PostgreSQL connection per query, materializes typed
//! rows, and releases the connection before returning. Every failure at
//! this boundary (store unreachable, auth rejected, malformed query,
//! schema mismatch) is logged and collapsed into an empty result so that
//! rendering can fall back to its "no data" widgets instead of aborting.

use diesel::deserialize::QueryableByName;
use diesel::pg::Pg;
use diesel::prelude::*;
use std::fmt;

use crate::config::DbSettings;

/// Error type for connector operations
#[derive(Debug, Clone)]
pub enum ConnectorError {
    Connection(String),
    Query(String),
}

impl fmt::Display for ConnectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectorError::Connection(msg) => write!(f, "Connection error: {}", msg),
            ConnectorError::Query(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ConnectorError {}

/// Executes the catalog's fixed queries against PostgreSQL.
pub struct Connector {
    url: String,
}

impl Connector {
    pub fn new(settings: &DbSettings) -> Self {
        Connector {
            url: settings.url(),
        }
    }

    /// Build a connector from a pre-assembled connection URL.
    ///
    /// Useful for tests that point at a disposable database.
    pub fn from_url(url: impl Into<String>) -> Self {
        Connector { url: url.into() }
    }

    /// Execute a fixed query and load its typed rows.
    ///
    /// Never propagates an error: failures are logged and yield an empty
    /// result, which downstream consumers render as a "no data" artifact.
    pub fn load<R>(&self, query: &str) -> Vec<R>
    where
        R: QueryableByName<Pg> + 'static,
    {
        match self.try_load(query) {
            Ok(rows) => rows,
            Err(e) => {
                tracing::error!("report query failed: {}", e);
                Vec::new()
            }
        }
    }

    fn try_load<R>(&self, query: &str) -> Result<Vec<R>, ConnectorError>
    where
        R: QueryableByName<Pg> + 'static,
    {
        // One scoped connection per call; dropped once rows are
        // materialized, on success or failure alike.
        let mut conn = PgConnection::establish(&self.url)
            .map_err(|e| ConnectorError::Connection(e.to_string()))?;

        diesel::sql_query(query)
            .load::<R>(&mut conn)
            .map_err(|e| ConnectorError::Query(e.to_string()))
    }

    /// Test database connectivity.
    pub fn ping(&self) -> Result<(), ConnectorError> {
        let mut conn = PgConnection::establish(&self.url)
            .map_err(|e| ConnectorError::Connection(e.to_string()))?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(|e| ConnectorError::Query(e.to_string()))?;

        Ok(())
    }
}
