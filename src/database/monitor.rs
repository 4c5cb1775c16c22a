//! Reporting-view reader
//!
//! Thin adapter over the pre-existing `view_monitor_invest` reporting
//! view. The view's column set is owned elsewhere, so rows come back as
//! ordered name→value mappings reflecting whatever the view defines.
//! Failures surface as internal errors carrying the underlying message
//! verbatim.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{json, Map as JsonMap, Value as JsonValue};
use sqlx::postgres::PgRow;
use sqlx::{Column, PgPool, Row, TypeInfo};
use uuid::Uuid;

use crate::error::RegistryResult;
use crate::id_codec::{encode_id, IdDialect, StoredId};

/// One reporting-view row as an ordered field mapping.
pub type MonitorRow = JsonMap<String, JsonValue>;

#[derive(Clone)]
pub struct MonitorService {
    pool: PgPool,
}

impl MonitorService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the whole view, ordered by `id_virtual`, no filters.
    pub async fn fetch_monitor_invest(&self) -> RegistryResult<Vec<MonitorRow>> {
        let rows = sqlx::query("SELECT * FROM view_monitor_invest ORDER BY id_virtual")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(row_to_map).collect())
    }
}

/// Convert a dynamic row into a field mapping by column type. Identifier
/// columns go through the codec's portable text form; unreadable values
/// degrade to null rather than dropping the row.
fn row_to_map(row: &PgRow) -> MonitorRow {
    let mut map = JsonMap::new();

    for column in row.columns() {
        let name = column.name();
        let type_name = column.type_info().name();

        let value: Option<JsonValue> = match type_name {
            "UUID" => row
                .try_get::<Option<Uuid>, _>(name)
                .ok()
                .flatten()
                .map(|id| match encode_id(Some(id), IdDialect::FixedLengthText) {
                    Some(StoredId::Text(text)) => json!(text),
                    Some(StoredId::Uuid(id)) => json!(id.to_string()),
                    None => JsonValue::Null,
                }),
            "TEXT" | "VARCHAR" | "CHAR" | "BPCHAR" | "NAME" => row
                .try_get::<Option<String>, _>(name)
                .ok()
                .flatten()
                .map(|s| json!(s)),
            "INT2" => row
                .try_get::<Option<i16>, _>(name)
                .ok()
                .flatten()
                .map(|i| json!(i)),
            "INT4" => row
                .try_get::<Option<i32>, _>(name)
                .ok()
                .flatten()
                .map(|i| json!(i)),
            "INT8" => row
                .try_get::<Option<i64>, _>(name)
                .ok()
                .flatten()
                .map(|i| json!(i)),
            "FLOAT4" | "FLOAT8" => row
                .try_get::<Option<f64>, _>(name)
                .ok()
                .flatten()
                .map(|f| json!(f)),
            "NUMERIC" => row
                .try_get::<Option<rust_decimal::Decimal>, _>(name)
                .ok()
                .flatten()
                .map(|d| json!(d.to_string())),
            "BOOL" => row
                .try_get::<Option<bool>, _>(name)
                .ok()
                .flatten()
                .map(|b| json!(b)),
            "DATE" => row
                .try_get::<Option<NaiveDate>, _>(name)
                .ok()
                .flatten()
                .map(|d| json!(d.to_string())),
            "TIMESTAMP" => row
                .try_get::<Option<NaiveDateTime>, _>(name)
                .ok()
                .flatten()
                .map(|ts| json!(ts.to_string())),
            "TIMESTAMPTZ" => row
                .try_get::<Option<DateTime<Utc>>, _>(name)
                .ok()
                .flatten()
                .map(|ts| json!(ts.to_rfc3339())),
            "JSON" | "JSONB" => row.try_get::<Option<JsonValue>, _>(name).ok().flatten(),
            _ => row
                .try_get::<Option<String>, _>(name)
                .ok()
                .flatten()
                .map(|s| json!(s)),
        };

        map.insert(name.to_string(), value.unwrap_or(JsonValue::Null));
    }

    map
}
