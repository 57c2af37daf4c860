use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Payload accepted by the validation debug endpoint.
///
/// Both fields are optional on the wire so that a missing value reaches validation as
/// `None` instead of failing deserialization.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequestDto {
    /// Must not be blank.
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub name: Option<String>,
    /// Format: "YYYY-MM-DD"
    #[serde(default, deserialize_with = "scalar_as_string")]
    pub expiry_date: Option<String>,
}

/// Reads a text field that also accepts numbers and booleans in their JSON spelling.
///
/// Objects and arrays are rejected.
fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        Value::Bool(flag) => Ok(Some(flag.to_string())),
        other => Err(de::Error::custom(format!(
            "expected a text value, found {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_scalars_as_text() {
        let dto: ValidationRequestDto =
            serde_json::from_str(r#"{"name": 42, "expiryDate": true}"#).unwrap();

        assert_eq!(dto.name.as_deref(), Some("42"));
        assert_eq!(dto.expiry_date.as_deref(), Some("true"));
    }

    #[test]
    fn treats_null_and_missing_as_absent() {
        let dto: ValidationRequestDto = serde_json::from_str(r#"{"name": null}"#).unwrap();

        assert_eq!(dto, ValidationRequestDto::default());
    }

    #[test]
    fn rejects_objects_and_arrays() {
        assert!(serde_json::from_str::<ValidationRequestDto>(r#"{"name": {}}"#).is_err());
        assert!(serde_json::from_str::<ValidationRequestDto>(r#"{"expiryDate": []}"#).is_err());
    }
}
