//! Field-level validation of JSON write payloads.
//!
//! Handlers accept the raw JSON body and pull typed values out of it one field at a time.
//! Every problem is recorded against its field name so a rejected payload reports all of
//! its errors at once:
//!
//! ```json
//! { "title": ["This field is required."], "number_of_players": ["A valid integer is required."] }
//! ```

use std::collections::BTreeMap;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Key used for errors that do not belong to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const INVALID_INTEGER: &str = "A valid integer is required.";
const INVALID_STRING: &str = "Not a valid string.";
const INVALID_DATE: &str = "Date has wrong format. Use one of these formats instead: YYYY-MM-DD.";
const INVALID_TIME: &str =
    "Time has wrong format. Use one of these formats instead: hh:mm[:ss[.uuuuuu]].";

/// JSON request body extractor whose rejections render as [`AppError`] JSON.
///
/// A missing `Content-Type: application/json` header is a 415; any other unreadable body
/// is a 400 `{ "message": ... }`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(rejection)) => {
                Err(AppError::UnsupportedMediaType(rejection.body_text()))
            }
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Per-field error messages, serialized as `{ field: [message, ...] }`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, empty if it passed.
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Cursor over a JSON object that extracts typed fields and collects errors.
#[derive(Debug)]
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    errors: FieldErrors,
}

impl<'a> Fields<'a> {
    /// Start validating `body`, which must be a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with a `non_field_errors` entry for any other JSON type.
    pub fn from_body(body: &'a Value) -> Result<Self, AppError> {
        match body {
            Value::Object(map) => Ok(Self {
                map,
                errors: FieldErrors::new(),
            }),
            other => {
                let mut errors = FieldErrors::new();
                errors.add(
                    NON_FIELD_ERRORS,
                    format!(
                        "Invalid data. Expected a dictionary, but got {}.",
                        json_type_name(other)
                    ),
                );
                Err(AppError::Validation(errors))
            }
        }
    }

    /// Look up a required field, recording an error when it is absent or null.
    fn present(&mut self, name: &str) -> Option<&'a Value> {
        match self.map.get(name) {
            None => {
                self.errors.add(name, REQUIRED);
                None
            }
            Some(Value::Null) => {
                self.errors.add(name, NOT_NULL);
                None
            }
            Some(value) => Some(value),
        }
    }

    /// Required, non-blank text, trimmed. Numbers are accepted in their string form.
    pub fn text(&mut self, name: &str, max_len: Option<usize>) -> Option<String> {
        let text = match self.present(name)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => {
                self.errors.add(name, INVALID_STRING);
                return None;
            }
        };

        if text.is_empty() {
            self.errors.add(name, NOT_BLANK);
            return None;
        }

        if let Some(max) = max_len {
            if text.chars().count() > max {
                self.errors.add(
                    name,
                    format!("Ensure this field has no more than {max} characters."),
                );
                return None;
            }
        }

        Some(text)
    }

    /// Required integer. Whole-number strings and floats such as `"4"` or `4.0` are accepted.
    pub fn integer(&mut self, name: &str) -> Option<i32> {
        let value = self.present(name)?;
        let parsed = match value {
            Value::Number(n) => parse_whole(&n.to_string()),
            Value::String(s) => parse_whole(s),
            _ => None,
        };
        if parsed.is_none() {
            self.errors.add(name, INVALID_INTEGER);
        }
        parsed
    }

    /// Required calendar date in `YYYY-MM-DD` form.
    pub fn date(&mut self, name: &str) -> Option<NaiveDate> {
        let value = self.present(name)?;
        let parsed = value
            .as_str()
            .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok());
        if parsed.is_none() {
            self.errors.add(name, INVALID_DATE);
        }
        parsed
    }

    /// Required time of day as `hh:mm`, `hh:mm:ss` or `hh:mm:ss.ffffff`.
    ///
    /// Fractions finer than a microsecond are dropped.
    pub fn time(&mut self, name: &str) -> Option<NaiveTime> {
        let value = self.present(name)?;
        let parsed = value.as_str().and_then(|s| parse_time(s.trim()));
        if parsed.is_none() {
            self.errors.add(name, INVALID_TIME);
        }
        parsed
    }

    /// Required reference to another row by primary key.
    ///
    /// Only the shape is checked here; whether the row exists is up to the caller, which
    /// reports a miss through [`Fields::missing_reference`].
    pub fn primary_key(&mut self, name: &str) -> Option<i32> {
        let value = self.present(name)?;
        let parsed = match value {
            Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Value::String(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        };
        if parsed.is_none() {
            self.errors.add(
                name,
                format!(
                    "Incorrect type. Expected pk value, received {}.",
                    json_type_name(value)
                ),
            );
        }
        parsed
    }

    /// Record that `name` points at a row that does not exist.
    pub fn missing_reference(&mut self, name: &str, id: i32) {
        self.errors
            .add(name, format!("Invalid pk \"{id}\" - object does not exist."));
    }

    /// `true` while no field has failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consume the cursor, yielding the collected errors as an [`AppError::Validation`].
    #[must_use]
    pub fn into_error(self) -> AppError {
        AppError::Validation(self.errors)
    }
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let time = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())?;
    time.with_nanosecond(time.nanosecond() / 1_000 * 1_000)
}

/// Integer text with an optional all-zero fraction, as in `"4"`, `"4.0"` or `"4.00"`.
fn parse_whole(s: &str) -> Option<i32> {
    let s = s.trim();
    let digits = match s.split_once('.') {
        Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole,
        Some(_) => return None,
        None => s,
    };
    digits.parse().ok()
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn errors_of(err: AppError) -> FieldErrors {
        match err {
            AppError::Validation(errors) => errors,
            _ => FieldErrors::new(),
        }
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        let body = json!([1, 2, 3]);
        let errors = Fields::from_body(&body).map_or_else(errors_of, |_| FieldErrors::new());
        assert_eq!(
            errors.get(NON_FIELD_ERRORS),
            ["Invalid data. Expected a dictionary, but got list.".to_string()]
        );
    }

    #[test]
    fn test_missing_null_and_blank_text() {
        let body = json!({ "maker": null, "skill_level": "   " });
        let Ok(mut fields) = Fields::from_body(&body) else {
            return;
        };

        assert_eq!(fields.text("title", None), None);
        assert_eq!(fields.text("maker", None), None);
        assert_eq!(fields.text("skill_level", None), None);

        let errors = errors_of(fields.into_error());
        assert_eq!(errors.get("title"), [REQUIRED.to_string()]);
        assert_eq!(errors.get("maker"), [NOT_NULL.to_string()]);
        assert_eq!(errors.get("skill_level"), [NOT_BLANK.to_string()]);
    }

    #[test]
    fn test_text_is_trimmed_and_rejects_booleans() {
        let body = json!({ "title": "  Catan  ", "maker": true, "players": 4 });
        let Ok(mut fields) = Fields::from_body(&body) else {
            return;
        };

        assert_eq!(fields.text("title", None), Some("Catan".to_string()));
        assert_eq!(fields.text("maker", None), None);
        assert_eq!(fields.text("players", None), Some("4".to_string()));

        let errors = errors_of(fields.into_error());
        assert!(errors.get("title").is_empty());
        assert_eq!(errors.get("maker"), [INVALID_STRING.to_string()]);
    }

    #[test]
    fn test_text_length_limit_counts_characters() {
        let body = json!({ "short": "é".repeat(50), "long": "x".repeat(51) });
        let Ok(mut fields) = Fields::from_body(&body) else {
            return;
        };

        assert_eq!(fields.text("short", Some(50)), Some("é".repeat(50)));
        assert_eq!(fields.text("long", Some(50)), None);
        assert_eq!(
            errors_of(fields.into_error()).get("long"),
            ["Ensure this field has no more than 50 characters.".to_string()]
        );
    }

    #[test]
    fn test_integer_accepts_numeric_strings() {
        let body = json!({
            "a": 4,
            "b": "6",
            "c": "six",
            "d": 2.5,
            "e": 9_999_999_999_i64,
            "f": 4.0,
            "g": "8.00",
            "h": "8.",
        });
        let Ok(mut fields) = Fields::from_body(&body) else {
            return;
        };

        assert_eq!(fields.integer("a"), Some(4));
        assert_eq!(fields.integer("b"), Some(6));
        assert_eq!(fields.integer("c"), None);
        assert_eq!(fields.integer("d"), None);
        assert_eq!(fields.integer("e"), None);
        assert_eq!(fields.integer("f"), Some(4));
        assert_eq!(fields.integer("g"), Some(8));
        assert_eq!(fields.integer("h"), Some(8));

        let errors = errors_of(fields.into_error());
        assert!(errors.get("a").is_empty());
        assert_eq!(errors.get("c"), [INVALID_INTEGER.to_string()]);
    }

    #[test]
    fn test_date_and_time_formats() {
        let body = json!({
            "date": "2026-11-05",
            "bad_date": "05/11/2026",
            "short_time": "19:30",
            "long_time": "19:30:15",
            "fine_time": "19:30:15.250000999",
            "bad_time": "7pm",
        });
        let Ok(mut fields) = Fields::from_body(&body) else {
            return;
        };

        assert_eq!(fields.date("date"), NaiveDate::from_ymd_opt(2026, 11, 5));
        assert_eq!(fields.date("bad_date"), None);
        assert_eq!(fields.time("short_time"), NaiveTime::from_hms_opt(19, 30, 0));
        assert_eq!(fields.time("long_time"), NaiveTime::from_hms_opt(19, 30, 15));
        assert_eq!(
            fields.time("fine_time"),
            NaiveTime::from_hms_micro_opt(19, 30, 15, 250_000)
        );
        assert_eq!(fields.time("bad_time"), None);

        let errors = errors_of(fields.into_error());
        assert_eq!(errors.get("bad_date"), [INVALID_DATE.to_string()]);
        assert_eq!(errors.get("bad_time"), [INVALID_TIME.to_string()]);
    }

    #[test]
    fn test_primary_key_type_and_missing_reference() {
        let body = json!({ "game_type": "board", "game": 7 });
        let Ok(mut fields) = Fields::from_body(&body) else {
            return;
        };

        assert_eq!(fields.primary_key("game_type"), None);
        assert_eq!(fields.primary_key("game"), Some(7));
        assert!(!fields.is_clean());
        fields.missing_reference("game", 7);

        let errors = errors_of(fields.into_error());
        assert_eq!(
            errors.get("game_type"),
            ["Incorrect type. Expected pk value, received str.".to_string()]
        );
        assert_eq!(
            errors.get("game"),
            ["Invalid pk \"7\" - object does not exist.".to_string()]
        );
    }
}
