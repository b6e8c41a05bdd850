use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::collections::HashMap;

/// Format an amount of cents the French way, e.g. `1250` as `12,50 €`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{},{:02} €", cents / 100, cents % 100)
}

pub fn amount(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let cents = value
        .as_i64()
        .ok_or_else(|| tera::Error::msg(format!("Not an amount of cents: {value}")))?;
    Ok(Value::String(format_amount(cents)))
}

pub fn french_date(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let date: NaiveDate = serde::Deserialize::deserialize(value)?;
    Ok(Value::String(date.format("%d/%m/%Y").to_string()))
}

pub fn french_date_time(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let date_time: NaiveDateTime = serde::Deserialize::deserialize(value)?;
    Ok(Value::String(date_time.format("%d/%m/%Y à %Hh%M").to_string()))
}
