use serde::{Deserialize, Deserializer};

/// Deserialize an optional string parameter, treating a blank value as absent.
///
/// A form submitted with an empty input sends `handle=`, which means "nothing to check".
pub fn deserialize_optional_trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct Params {
        #[serde(default, deserialize_with = "deserialize_optional_trimmed")]
        handle: Option<String>,
    }

    #[test]
    fn trims_value() {
        let params: Params = serde_json::from_str(r#"{"handle": "  tourist "}"#).unwrap();
        assert_eq!(params.handle, Some(String::from("tourist")));
    }

    #[test]
    fn blank_value_is_none() {
        let params: Params = serde_json::from_str(r#"{"handle": "   "}"#).unwrap();
        assert_eq!(params.handle, None);
    }

    #[test]
    fn missing_value_is_none() {
        let params: Params = serde_json::from_str("{}").unwrap();
        assert_eq!(params.handle, None);
    }
}
