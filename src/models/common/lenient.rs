//! 宽松反序列化
//!
//! 前端常把 LRN、编号、金额以数字或字符串任意一种形式提交，这里统一接受两种写法。

use serde::Deserializer;
use serde::de::{Error, Unexpected, Visitor};
use std::fmt;

struct StringOrNumber;

impl<'de> Visitor<'de> for StringOrNumber {
    type Value = Option<String>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or a number")
    }

    fn visit_str<E: Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_string<E: Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Some(value))
    }

    fn visit_i64<E: Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_u64<E: Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_f64<E: Error>(self, value: f64) -> Result<Self::Value, E> {
        Ok(Some(value.to_string()))
    }

    fn visit_none<E: Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }
}

/// 字符串或数字 -> `Option<String>`
pub fn deserialize_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(StringOrNumber)
}

/// 数字或数字字符串 -> `Option<i64>`，空字符串视为缺省
pub fn deserialize_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match deserializer.deserialize_any(StringOrNumber)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| D::Error::invalid_value(Unexpected::Str(&raw), &"an integer")),
    }
}

/// 数字或数字字符串 -> `Option<f64>`，空字符串视为缺省
pub fn deserialize_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match deserializer.deserialize_any(StringOrNumber)? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| D::Error::invalid_value(Unexpected::Str(&raw), &"a number")),
    }
}

/// 分页参数使用：数字或数字字符串 -> `i64`
pub fn deserialize_string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_opt_i64(deserializer)?
        .ok_or_else(|| D::Error::invalid_type(Unexpected::Unit, &"an integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "deserialize_opt_string")]
        lrn: Option<String>,
        #[serde(default, deserialize_with = "deserialize_opt_i64")]
        class_id: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_opt_f64")]
        amount: Option<f64>,
    }

    #[test]
    fn test_numbers_and_strings_accepted() {
        let p: Sample =
            serde_json::from_str(r#"{"lrn":123456789012,"class_id":"7","amount":"1500.50"}"#)
                .unwrap();
        assert_eq!(p.lrn.as_deref(), Some("123456789012"));
        assert_eq!(p.class_id, Some(7));
        assert_eq!(p.amount, Some(1500.5));
    }

    #[test]
    fn test_missing_and_null_are_none() {
        let p: Sample = serde_json::from_str(r#"{"lrn":null,"amount":""}"#).unwrap();
        assert!(p.lrn.is_none());
        assert!(p.class_id.is_none());
        assert!(p.amount.is_none());
    }

    #[test]
    fn test_non_numeric_rejected() {
        assert!(serde_json::from_str::<Sample>(r#"{"class_id":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"amount":"ten"}"#).is_err());
    }
}
