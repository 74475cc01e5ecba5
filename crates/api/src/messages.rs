use serde::{Deserialize, Serialize};

/// Known dashboard API actions
pub enum Action {
    GetData, // get_data

    Unknown(String),
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        match s {
            "get_data" => Self::GetData,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::GetData => "get_data",
            Self::Unknown(s) => s,
        };
        write!(f, "{s}")
    }
}

/// Body of the configuration request a page sends on mount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub action: String,
    pub csrf_token: String,
}

impl DashboardRequest {
    pub fn get_data(csrf_token: &str) -> Self {
        Self {
            action: Action::GetData.to_string(),
            csrf_token: csrf_token.to_string(),
        }
    }
}

/// Group payload carried on a successful `get_data` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupData {
    pub game_server: String,
}

/// Envelope every dashboard endpoint answers with.
/// `code` is the application-level outcome; transport success alone does
/// not mean the data arrived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "groupData", default)]
    pub group_data: Option<GroupData>,
}

/// Dashboard exchange failure. Both kinds end up in the same dialog;
/// `Display` is the bare message either way.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardError {
    /// Backend answered but refused (`code != 0`)
    #[error("{message}")]
    Api { code: i64, message: String },
    /// The request itself failed (network, status, body shape)
    #[error("{0}")]
    Transport(String),
}

impl DashboardResponse {
    /// Split the envelope into the application-level outcome
    pub fn into_result(self) -> Result<GroupData, DashboardError> {
        if self.code != 0 {
            return Err(DashboardError::Api {
                code: self.code,
                message: self.message,
            });
        }
        self.group_data.ok_or_else(|| {
            DashboardError::Transport("malformed response: code 0 without groupData".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let req = DashboardRequest::get_data("tok-123");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["action"], "get_data");
        assert_eq!(json["csrf_token"], "tok-123");
    }

    #[test]
    fn test_success_response() {
        let resp: DashboardResponse =
            serde_json::from_str(r#"{"code":0,"groupData":{"game_server":"cn"}}"#).unwrap();
        let data = resp.into_result().unwrap();
        assert_eq!(data.game_server, "cn");
    }

    #[test]
    fn test_error_response_display_is_bare_message() {
        let resp: DashboardResponse =
            serde_json::from_str(r#"{"code":1,"message":"boom"}"#).unwrap();
        let err = resp.into_result().unwrap_err();
        assert!(matches!(err, DashboardError::Api { code: 1, .. }));
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_success_without_payload_is_transport_error() {
        let resp: DashboardResponse = serde_json::from_str(r#"{"code":0}"#).unwrap();
        assert!(matches!(
            resp.into_result(),
            Err(DashboardError::Transport(_))
        ));
    }

    #[test]
    fn test_unknown_backend_fields_ignored() {
        let resp: DashboardResponse = serde_json::from_str(
            r#"{"code":0,"message":"","groupData":{"game_server":"tw","group_id":123},"extra":true}"#,
        )
        .unwrap();
        assert_eq!(resp.into_result().unwrap().game_server, "tw");
    }

    #[test]
    fn test_action_round_trip() {
        assert!(matches!(Action::from("get_data"), Action::GetData));
        assert_eq!(Action::GetData.to_string(), "get_data");
        assert_eq!(Action::from("no_such").to_string(), "no_such");
    }
}
