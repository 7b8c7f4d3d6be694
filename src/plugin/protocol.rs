//! Wire protocol with the host launcher
//!
//! Line-delimited JSON: the host writes one request per line on the plugin's
//! stdin and reads one response line per request from its stdout.
//!
//! ```text
//! -> {"type":"query","text":"git"}
//! <- {"type":"results","items":[{"id":"id1","name":"GitHub","description":"alice"}]}
//! -> {"type":"activate","id":"id1"}
//! <- {"type":"copied","name":"GitHub"}
//! -> {"type":"exit"}
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::SearchItem;

/// One request from the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// The user typed something; respond with matching entries
    Query { text: String },
    /// The user activated a previously rendered result
    Activate { id: String },
    /// Shut the plugin down
    Exit,
}

/// One response to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    /// Rows to render, in order
    Results { items: Vec<SearchItem> },
    /// The password for `name` is now on the clipboard
    Copied { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_request_deserializes() {
        let request: Request = serde_json::from_str(r#"{"type":"query","text":"git"}"#).unwrap();
        assert_eq!(
            request,
            Request::Query {
                text: "git".to_string()
            }
        );
    }

    #[test]
    fn test_activate_request_deserializes() {
        let request: Request = serde_json::from_str(r#"{"type":"activate","id":"id1"}"#).unwrap();
        assert_eq!(
            request,
            Request::Activate {
                id: "id1".to_string()
            }
        );
    }

    #[test]
    fn test_exit_request_deserializes() {
        let request: Request = serde_json::from_str(r#"{"type":"exit"}"#).unwrap();
        assert_eq!(request, Request::Exit);
    }

    #[test]
    fn test_unknown_request_is_an_error() {
        let result: Result<Request, _> = serde_json::from_str(r#"{"type":"reload"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_results_response_serializes() {
        let response = Response::Results {
            items: vec![SearchItem {
                id: "id1".to_string(),
                name: "GitHub".to_string(),
                description: "alice".to_string(),
            }],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"type":"results","items":[{"id":"id1","name":"GitHub","description":"alice"}]}"#
        );
    }

    #[test]
    fn test_copied_response_serializes() {
        let response = Response::Copied {
            name: "GitHub".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"type":"copied","name":"GitHub"}"#);
    }
}
