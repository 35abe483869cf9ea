//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod br_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Connection refused on a closed local port gives a real transport error
        let client = reqwest::Client::new();
        let result = client.get("http://127.0.0.1:9/").send().await;
        let reqwest_error = result.unwrap_err();
        let br_error = BrError::from(reqwest_error);

        match br_error {
            BrError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
        assert_eq!(br_error.kind(), ErrorKind::Transport);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let br_error = BrError::from(json_error);

        match br_error {
            BrError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let br_error = BrError::from(parse_error);

        match br_error {
            BrError::InvalidTeamId(_) => (),
            _ => panic!("Expected InvalidTeamId error variant"),
        }
        assert_eq!(br_error.kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_config_error_display() {
        let error = BrError::config("/tmp/.brkeys", "missing field `ACCESS_KEY`");

        let error_string = error.to_string();
        assert!(error_string.contains("/tmp/.brkeys"));
        assert!(error_string.contains("ACCESS_KEY"));
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_api_error_carries_status() {
        let error = BrError::Api {
            status: "Error".to_string(),
        };

        assert_eq!(error.to_string(), "BR API error: Error");
        assert_eq!(error.kind(), ErrorKind::Api);
    }

    #[test]
    fn test_malformed_response_is_api_kind() {
        let error = BrError::malformed("body is not JSON");
        assert!(error.to_string().contains("body is not JSON"));
        assert_eq!(error.kind(), ErrorKind::Api);
    }

    #[test]
    fn test_player_field_errors_are_normalization_kind() {
        let missing = BrError::MissingPlayerField {
            player: "123".to_string(),
            field: "age",
        };
        let invalid = BrError::InvalidPlayerField {
            player: "123".to_string(),
            field: "age",
            value: "\"old\"".to_string(),
        };

        assert!(missing.to_string().contains("`age`"));
        assert!(invalid.to_string().contains("\"old\""));
        assert_eq!(missing.kind(), ErrorKind::Normalization);
        assert_eq!(invalid.kind(), ErrorKind::Normalization);
    }

    #[test]
    fn test_unknown_tool_error() {
        let error = BrError::UnknownTool {
            name: "get_weather".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown tool: get_weather");
        assert_eq!(error.kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(BrError::Api {
                status: "Error".to_string(),
            })
        }

        match test_function().unwrap_err() {
            BrError::Api { status } => assert_eq!(status, "Error"),
            _ => panic!("Expected Api error"),
        }
    }
}
