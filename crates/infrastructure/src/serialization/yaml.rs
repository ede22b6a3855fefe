//! YAML input.

use serde::de::DeserializeOwned;

use super::SerializationError;

/// Deserializes YAML from a string.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or doesn't match the expected type.
pub fn from_yaml<T: DeserializeOwned>(yaml: &str) -> Result<T, SerializationError> {
    Ok(serde_yaml::from_str(yaml)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_domain::TransportSettings;

    #[test]
    fn test_yaml_settings() {
        let settings: TransportSettings =
            from_yaml("timeout_ms: 250\nuser_agent: probe/1\n").expect("yaml should parse");
        assert_eq!(settings.timeout_ms, 250);
        assert_eq!(settings.user_agent, "probe/1");
    }

    #[test]
    fn test_invalid_yaml() {
        let result: Result<TransportSettings, _> = from_yaml("timeout_ms: [");
        assert!(matches!(result, Err(SerializationError::Yaml(_))));
    }
}
