//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod lineup_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = LineupError::from(json_error);

        assert_eq!(error.code(), "json_error");
        match error {
            LineupError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LineupError::from(io_error);

        match error {
            LineupError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let error = LineupError::from(header_error);

        match error {
            LineupError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_missing_league_key_error() {
        let error = LineupError::MissingLeagueKey {
            env_var: "YAHOO_FFL_LEAGUE_KEY".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League key not provided"));
        assert!(error_string.contains("YAHOO_FFL_LEAGUE_KEY"));
        assert_eq!(error.code(), "config_error");
    }

    #[test]
    fn test_invalid_key_error() {
        let error = LineupError::InvalidKey {
            kind: "team",
            value: "nfl.x".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid team key: \"nfl.x\"");
    }

    #[test]
    fn test_parse_error_code_and_message() {
        let error = LineupError::parse("league", "no settings object in response");

        assert_eq!(error.code(), "parse_error");
        assert!(error.to_string().contains("no settings object"));
        assert_eq!(error.user_message(), "Could not read league data from Yahoo.");
    }

    #[test]
    fn test_missing_token_user_message() {
        let error = LineupError::MissingAccessToken {
            env_var: "YAHOO_ACCESS_TOKEN".to_string(),
        };

        assert!(error.user_message().contains("YAHOO_ACCESS_TOKEN"));
    }

    #[test]
    fn test_error_body_from_parse_error() {
        let error = LineupError::parse("roster", "missing fantasy_content.team");
        let body = ErrorBody::from(&error);

        assert_eq!(body.error, "parse_error");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "parse_error");
        assert!(json["detail"].as_str().unwrap().contains("roster"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = LineupError::from(io_error);

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(LineupError::parse("league", "empty"))
        }

        match test_function().unwrap_err() {
            LineupError::Parse { collection, .. } => assert_eq!(collection, "league"),
            _ => panic!("Expected Parse error"),
        }
    }
}
