use crate::modules::models::response::ParameterRejection;
use axum::{async_trait, extract::FromRequestParts};
use cf_cheat_detector_libs::api::deserialize_optional_trimmed;
use http::request::Parts;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use validator::Validate;

/// Characters Codeforces allows in a handle.
static HANDLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_.\-]+$").unwrap());

#[derive(Debug, Serialize, Deserialize, Validate, PartialEq, Eq, Clone, Default)]
pub struct CheckParameter {
    #[validate(length(min = 3, max = 24), regex = "HANDLE_PATTERN")]
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_trimmed"
    )]
    pub handle: Option<String>,
}

pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ParameterRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = parts.uri.query().unwrap_or_default();
        let value: T = serde_urlencoded::from_str(query).map_err(|rejection| {
            tracing::error!("Parsing error: {}", rejection);
            ParameterRejection::new(format!("invalid format query string: [{}]", rejection))
        })?;

        value.validate().map_err(|rejection| {
            tracing::error!("Validation error: {}", rejection);
            ParameterRejection::new(
                format!("Validation error: [{}]", rejection).replace('\n', ", "),
            )
        })?;

        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(query: &str) -> CheckParameter {
        serde_urlencoded::from_str(query).unwrap()
    }

    #[test]
    fn deserialize_handle() {
        assert_eq!(
            parse("handle=tourist"),
            CheckParameter {
                handle: Some(String::from("tourist"))
            }
        );
        assert_eq!(
            parse("handle=+jiangly+"),
            CheckParameter {
                handle: Some(String::from("jiangly"))
            }
        );
    }

    #[test]
    fn empty_query_string() {
        assert_eq!(parse(""), CheckParameter::default());
        assert_eq!(parse("handle="), CheckParameter::default());
    }

    #[test]
    fn validate_handle() {
        assert!(parse("handle=Um_nik").validate().is_ok());
        assert!(parse("handle=a.b-c_1").validate().is_ok());
        assert!(parse("").validate().is_ok());

        assert!(parse("handle=ab").validate().is_err());
        assert!(parse("handle=abcdefghijklmnopqrstuvwxy").validate().is_err());
        assert!(parse("handle=%3Cscript%3E").validate().is_err());
        assert!(parse("handle=tour%20ist").validate().is_err());
    }
}
