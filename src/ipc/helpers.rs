use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::StoreError;
use crate::ipc::error::err;

pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl HandlerErr {
    pub fn bad_params(message: impl Into<String>) -> Self {
        Self {
            code: "bad_params",
            message: message.into(),
            details: None,
        }
    }

    pub fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, self.details)
    }
}

impl From<StoreError> for HandlerErr {
    fn from(e: StoreError) -> Self {
        let details = match &e {
            StoreError::NotFound { kind, id } => Some(json!({ "kind": kind, "id": id })),
            StoreError::Forbidden { action, role } => {
                Some(json!({ "action": action, "role": role }))
            }
            StoreError::NotSignedIn { action } => Some(json!({ "action": action })),
        };
        Self {
            code: e.code(),
            message: e.to_string(),
            details,
        }
    }
}

/// Ids are passed through as given; only presence and string type are checked.
pub fn get_required_str(params: &serde_json::Value, key: &str) -> Result<String, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| HandlerErr::bad_params(format!("missing {}", key)))
}

/// Deserialize `params[key]` into a typed value.
pub fn get_required<T: DeserializeOwned>(
    params: &serde_json::Value,
    key: &str,
) -> Result<T, HandlerErr> {
    let Some(raw) = params.get(key).filter(|v| !v.is_null()) else {
        return Err(HandlerErr::bad_params(format!("missing {}", key)));
    };
    serde_json::from_value(raw.clone())
        .map_err(|e| HandlerErr::bad_params(format!("invalid {}: {}", key, e)))
}

pub fn parse_date(raw: &str, key: &str) -> Result<NaiveDate, HandlerErr> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| HandlerErr::bad_params(format!("{} must be YYYY-MM-DD", key)))
}

pub fn get_required_date(params: &serde_json::Value, key: &str) -> Result<NaiveDate, HandlerErr> {
    let raw = get_required_str(params, key)?;
    parse_date(&raw, key)
}

/// `params[key]` as a date, or today's local date when absent.
pub fn get_date_or_today(params: &serde_json::Value, key: &str) -> Result<NaiveDate, HandlerErr> {
    match params.get(key) {
        None | Some(serde_json::Value::Null) => Ok(Local::now().date_naive()),
        Some(v) => match v.as_str() {
            Some(raw) => parse_date(raw, key),
            None => Err(HandlerErr::bad_params(format!("{} must be YYYY-MM-DD", key))),
        },
    }
}
