//! `PgRow` → [`Row`] conversion for ad-hoc statements run with
//! `sqlx::raw_sql`.
//!
//! The simple query protocol returns every value as the server's text.
//! Numbers, booleans and JSON are decoded into JSON values; dates and times
//! are normalised to the ISO form `row_to_json` produces for the table
//! pages. Every other type keeps the server's text unchanged.

use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::{json, Number, Value};
use sqlx::postgres::types::Oid;
use sqlx::postgres::PgRow;
use sqlx::{Column, Row as _, TypeInfo, ValueRef};
use uuid::Uuid;

use crate::{models::Row, DbError};

pub fn rows_to_json(rows: &[PgRow]) -> Result<Vec<Row>, DbError> {
    rows.iter().map(row_to_json).collect()
}

pub fn row_to_json(row: &PgRow) -> Result<Row, DbError> {
    let mut out = Row::with_capacity(row.columns().len());
    for column in row.columns() {
        let value = column_value(row, column.ordinal(), column.type_info().name())?;
        out.insert(column.name().to_string(), value);
    }
    Ok(out)
}

fn column_value(row: &PgRow, idx: usize, type_name: &str) -> Result<Value, DbError> {
    if row.try_get_raw(idx)?.is_null() {
        return Ok(Value::Null);
    }

    let value = match type_name {
        "BOOL" => Value::Bool(row.try_get::<bool, _>(idx)?),
        "INT2" => json!(row.try_get::<i16, _>(idx)?),
        "INT4" => json!(row.try_get::<i32, _>(idx)?),
        "INT8" => json!(row.try_get::<i64, _>(idx)?),
        "OID" => json!(row.try_get::<Oid, _>(idx)?.0),
        "FLOAT4" => float_value(f64::from(row.try_get::<f32, _>(idx)?)),
        "FLOAT8" => float_value(row.try_get::<f64, _>(idx)?),
        "JSON" | "JSONB" => row.try_get::<sqlx::types::Json<Value>, _>(idx)?.0,
        // NaN, infinities and values outside rust_decimal's range keep their text.
        "NUMERIC" => match row.try_get::<Decimal, _>(idx) {
            Ok(d) => decimal_value(d),
            Err(_) => server_text(row, idx)?,
        },
        "UUID" => match row.try_get::<Uuid, _>(idx) {
            Ok(u) => Value::String(u.to_string()),
            Err(_) => server_text(row, idx)?,
        },
        "TIMESTAMP" => match row.try_get::<NaiveDateTime, _>(idx) {
            Ok(ts) => Value::String(ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            Err(_) => server_text(row, idx)?,
        },
        "TIMESTAMPTZ" => match row.try_get::<DateTime<Utc>, _>(idx) {
            Ok(ts) => Value::String(ts.to_rfc3339()),
            Err(_) => server_text(row, idx)?,
        },
        _ => server_text(row, idx)?,
    };
    Ok(value)
}

fn server_text(row: &PgRow, idx: usize) -> Result<Value, DbError> {
    let raw = row.try_get_raw(idx)?;
    let text = raw.as_str().map_err(sqlx::Error::Decode)?;
    Ok(Value::String(text.to_owned()))
}

fn float_value(f: f64) -> Value {
    Number::from_f64(f).map_or_else(|| Value::String(f.to_string()), Value::Number)
}

/// Exact values become JSON numbers; anything an `f64` would round stays a string.
fn decimal_value(d: Decimal) -> Value {
    if d.scale() == 0 {
        if let Some(i) = d.to_i64() {
            return json!(i);
        }
    }
    match d.to_f64() {
        Some(f) if Decimal::from_str(&f.to_string()).ok() == Some(d) => float_value(f),
        _ => Value::String(d.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_decimals_are_numbers() {
        assert_eq!(decimal_value(Decimal::from(42)), json!(42));
    }

    #[test]
    fn exact_fractions_are_numbers() {
        assert_eq!(decimal_value(Decimal::from_str("54.5").unwrap()), json!(54.5));
    }

    #[test]
    fn imprecise_decimals_stay_strings() {
        let d = Decimal::from_str("1234567890123456789.123456789").unwrap();
        assert_eq!(decimal_value(d), json!("1234567890123456789.123456789"));
    }

    #[test]
    fn non_finite_floats_become_strings() {
        assert_eq!(float_value(f64::INFINITY), json!("inf"));
        assert_eq!(float_value(1.25), json!(1.25));
    }

    #[test]
    fn money_like_decimals_are_numbers() {
        assert_eq!(decimal_value(Decimal::from_str("12.34").unwrap()), json!(12.34));
    }
}
