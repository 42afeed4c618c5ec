//! Statement parameters in PostgreSQL text form.
//!
//! Every value is sent as text (or NULL) with no declared type, so the server
//! infers it from the column, enums included. Placeholders bound to non-text
//! columns are written `$n::text::<type>` in the statement: the bytes arrive
//! as text and the cast, not the handler, rejects malformed input.

use serde_json::Value;
use sqlx::encode::{Encode, IsNull};
use sqlx::postgres::{types::Oid, PgArgumentBuffer, PgTypeInfo, Postgres};

/// One positional parameter. `None` binds SQL NULL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextParam(Option<String>);

impl TextParam {
    pub fn null() -> Self {
        TextParam(None)
    }

    pub fn text(s: impl Into<String>) -> Self {
        TextParam(Some(s.into()))
    }

    /// Text form of a JSON body value. Scalars keep their literal spelling;
    /// arrays and objects are sent as JSON text.
    pub fn from_json(v: &Value) -> Self {
        match v {
            Value::Null => TextParam(None),
            Value::Bool(b) => TextParam::text(b.to_string()),
            Value::Number(n) if n.is_f64() => {
                TextParam::text(n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()))
            }
            Value::Number(n) => TextParam::text(n.to_string()),
            Value::String(s) => TextParam::text(s.as_str()),
            Value::Array(_) | Value::Object(_) => TextParam::text(v.to_string()),
        }
    }

    /// Field `name` of a request body; missing fields and non-object bodies bind NULL.
    pub fn field(body: &Value, name: &str) -> Self {
        body.get(name).map(Self::from_json).unwrap_or_default()
    }

    /// Path segment coerced to a number first, `"NaN"` when it does not parse.
    pub fn numeric(s: &str) -> Self {
        TextParam::text(format_number(coerce_number(s)))
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<'q> Encode<'q, Postgres> for TextParam {
    fn encode_by_ref(
        &self,
        buf: &mut PgArgumentBuffer,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        match &self.0 {
            Some(s) => <&str as Encode<Postgres>>::encode_by_ref(&s.as_str(), buf),
            None => Ok(IsNull::Yes),
        }
    }
}

/// Declared as unspecified (oid 0): the server picks the parameter type.
impl sqlx::Type<Postgres> for TextParam {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_oid(Oid(0))
    }
}

/// Numeric reading of a string with the permissive rules of JavaScript's `Number()`.
pub fn coerce_number(s: &str) -> f64 {
    let t = s.trim();
    if t.is_empty() {
        return 0.0;
    }
    let radix = match t.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&t[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }
    let unsigned = t.strip_prefix(['+', '-']).unwrap_or(t);
    if unsigned == "Infinity" {
        return if t.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    // f64::from_str also takes "inf" and "nan" spellings that Number() rejects.
    if !unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    t.parse().unwrap_or(f64::NAN)
}

/// Canonical text of a number: integral values without a fraction, `-0` as `0`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_scalars_keep_their_spelling() {
        assert_eq!(TextParam::from_json(&json!(null)), TextParam::null());
        assert_eq!(TextParam::from_json(&json!(7)).as_deref(), Some("7"));
        assert_eq!(TextParam::from_json(&json!(2.5)).as_deref(), Some("2.5"));
        assert_eq!(TextParam::from_json(&json!(5.0)).as_deref(), Some("5"));
        assert_eq!(TextParam::from_json(&json!(1e0)).as_deref(), Some("1"));
        assert_eq!(TextParam::from_json(&json!(-0.0)).as_deref(), Some("0"));
        assert_eq!(TextParam::from_json(&json!(true)).as_deref(), Some("true"));
        assert_eq!(TextParam::from_json(&json!("HW1")).as_deref(), Some("HW1"));
        assert_eq!(
            TextParam::from_json(&json!({"a": 1})).as_deref(),
            Some(r#"{"a":1}"#)
        );
    }

    #[test]
    fn parameters_are_untyped() {
        assert_eq!(
            <TextParam as sqlx::Type<Postgres>>::type_info(),
            PgTypeInfo::with_oid(Oid(0))
        );
    }

    #[test]
    fn missing_field_binds_null() {
        let body = json!({"title": "HW1"});
        assert_eq!(TextParam::field(&body, "due_date"), TextParam::null());
        assert_eq!(TextParam::field(&json!([1, 2]), "title"), TextParam::null());
        assert_eq!(TextParam::field(&body, "title").as_deref(), Some("HW1"));
    }

    #[test]
    fn coerces_like_number() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number("  42\n"), 42.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("0x1F"), 31.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("-Infinity"), f64::NEG_INFINITY);
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("12abc").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("0xZZ").is_nan());
    }

    #[test]
    fn numeric_param_text() {
        assert_eq!(TextParam::numeric("5").as_deref(), Some("5"));
        assert_eq!(TextParam::numeric("5.0").as_deref(), Some("5"));
        assert_eq!(TextParam::numeric("5.5").as_deref(), Some("5.5"));
        assert_eq!(TextParam::numeric("-0").as_deref(), Some("0"));
        assert_eq!(TextParam::numeric("course").as_deref(), Some("NaN"));
        assert_eq!(TextParam::numeric("Infinity").as_deref(), Some("Infinity"));
    }
}
