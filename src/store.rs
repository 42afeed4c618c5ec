//! Connection pool and the single "execute one statement" primitive.

use crate::config::{DbConfig, PoolSettings};
use crate::error::StorageError;
use crate::sql::TextParam;
use serde_json::Value;
use sqlx::postgres::{PgArguments, PgPool, PgPoolOptions, PgRow, Postgres};
use sqlx::query::Query;

/// Build the pool without connecting. Connection problems surface on the first query.
pub fn create_pool(config: &DbConfig, settings: &PoolSettings) -> PgPool {
    tracing::debug!(config = ?config, "creating connection pool");
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .idle_timeout(settings.idle_timeout)
        .acquire_timeout(settings.acquire_timeout)
        .connect_lazy_with(config.connect_options())
}

/// Run one statement and return every row as a JSON object keyed by column name.
pub async fn query(pool: &PgPool, sql: &str, params: &[TextParam]) -> Result<Vec<Value>, StorageError> {
    let rows = bind_all(sql, params).fetch_all(pool).await?;
    Ok(rows.iter().map(row_to_json).collect())
}

/// Like [`query`] but keeps only the first row; `None` when no row was returned
/// or affected.
pub async fn query_one(pool: &PgPool, sql: &str, params: &[TextParam]) -> Result<Option<Value>, StorageError> {
    let row = bind_all(sql, params).fetch_optional(pool).await?;
    Ok(row.map(|r| row_to_json(&r)))
}

fn bind_all<'q>(sql: &'q str, params: &'q [TextParam]) -> Query<'q, Postgres, PgArguments> {
    tracing::debug!(sql = %sql, params = ?params, "query");
    params.iter().fold(sqlx::query(sql), |q, p| q.bind(p))
}

/// `SELECT 1` round trip.
pub async fn ping(pool: &PgPool) -> Result<(), StorageError> {
    sqlx::query("SELECT 1").fetch_optional(pool).await?;
    Ok(())
}

fn row_to_json(row: &PgRow) -> Value {
    use sqlx::Column;
    use sqlx::Row;
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

fn cell_to_value(row: &PgRow, name: &str) -> Value {
    use sqlx::Row;
    if let Ok(Some(n)) = row.try_get::<Option<i16>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i32>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<i64>, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(Some(n)) = row.try_get::<Option<f32>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n as f64) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(n)) = row.try_get::<Option<f64>, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(Some(b)) = row.try_get::<Option<bool>, _>(name) {
        return Value::Bool(b);
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDate>, _>(name) {
        return Value::String(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(Some(d)) = row.try_get::<Option<chrono::NaiveDateTime>, _>(name) {
        return Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
    }
    if let Ok(Some(s)) = row.try_get::<Option<String>, _>(name) {
        return Value::String(s);
    }
    if let Ok(Some(j)) = row.try_get::<Option<Value>, _>(name) {
        return j;
    }
    // Enum labels travel as plain text on the wire.
    if let Ok(Some(s)) = row.try_get_unchecked::<Option<String>, _>(name) {
        return Value::String(s);
    }
    Value::Null
}
