//! Response envelope of a Bot API call.

use serde_json::{json, Value};
use silbot_core::error::SilbotError;
use silbot_core::types::ResponseParameters;
use silbot_core::{Expected, ResultKind, WireRecord};

/// Decoded `{ok, result | error}` wrapper around one Bot API response.
///
/// Built for every call, including calls that never reached Telegram: a
/// transport failure becomes `ok = false, connection_error = true`.
#[derive(Debug, Clone, PartialEq)]
pub struct BotApiResponse {
    /// Body as received, or the synthetic body of a transport failure.
    pub raw: String,
    pub decoded: Value,
    pub ok: bool,
    pub error_code: Option<i64>,
    pub description: Option<String>,
    /// Set only when the request never reached Telegram.
    pub connection_error: bool,
    pub parameters: Option<ResponseParameters>,
    /// Result shape the method promises on success.
    pub kind: ResultKind,
}

impl BotApiResponse {
    /// Decode a response body. `status` is the HTTP status, used as the
    /// error code when the body is not a JSON envelope.
    pub fn parse(raw: impl Into<String>, status: Option<u16>, kind: ResultKind) -> Self {
        let raw = raw.into();
        let decoded = match serde_json::from_str::<Value>(&raw) {
            Ok(value) if value.is_object() => value,
            Ok(_) | Err(_) => {
                let description = format!(
                    "response is not a JSON envelope (HTTP {})",
                    status.map_or_else(|| "status unknown".to_string(), |s| s.to_string())
                );
                return Self {
                    raw,
                    decoded: Value::Null,
                    ok: false,
                    error_code: status.map(i64::from),
                    description: Some(description),
                    connection_error: false,
                    parameters: None,
                    kind,
                };
            }
        };

        let ok = decoded.get("ok").and_then(Value::as_bool).unwrap_or(false);
        let (error_code, description, connection_error, parameters) = if ok {
            (None, None, false, None)
        } else {
            (
                decoded.get("error_code").and_then(Value::as_i64),
                decoded
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_owned),
                decoded
                    .get("connection_error")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
                decoded.get("parameters").map(ResponseParameters::hydrate),
            )
        };

        Self {
            raw,
            decoded,
            ok,
            error_code,
            description,
            connection_error,
            parameters,
            kind,
        }
    }

    /// Synthetic envelope for a request that never reached Telegram.
    pub fn connection_failure(reason: impl Into<String>, kind: ResultKind) -> Self {
        let decoded = json!({"ok": false, "connection_error": true});
        Self {
            raw: decoded.to_string(),
            decoded,
            ok: false,
            error_code: None,
            description: Some(reason.into()),
            connection_error: true,
            parameters: None,
            kind,
        }
    }

    /// Raw `result` payload of a successful response.
    pub fn result(&self) -> Option<&Value> {
        if !self.ok {
            return None;
        }
        self.decoded.get("result")
    }

    /// Decode the payload into `T`; `None` on failure or shape mismatch.
    pub fn decode<T: Expected>(&self) -> Option<T> {
        self.result().and_then(T::from_result)
    }

    /// Seconds Telegram asked to wait before retrying, if flood-limited.
    pub fn retry_after(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.retry_after)
    }

    /// Error equivalent of a failed envelope.
    pub fn error(&self) -> Option<SilbotError> {
        if self.ok {
            return None;
        }
        let description = self
            .description
            .clone()
            .unwrap_or_else(|| "no description".to_string());
        if self.connection_error {
            return Some(SilbotError::Transport(description));
        }
        Some(SilbotError::Api {
            code: self.error_code.unwrap_or_default(),
            description,
        })
    }

    /// `Ok(self)` on success, the matching [`SilbotError`] otherwise.
    pub fn into_result(self) -> Result<Self, SilbotError> {
        match self.error() {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silbot_core::types::{Message, Update};

    #[test]
    fn test_integer_result() {
        let response = BotApiResponse::parse(r#"{"ok":true,"result":42}"#, Some(200), i64::kind());
        assert!(response.ok);
        assert_eq!(response.decode::<i64>(), Some(42));
        assert_eq!(response.kind, ResultKind::Integer);
        assert_eq!(response.error_code, None);
        assert!(response.error().is_none());
    }

    #[test]
    fn test_api_error_fields() {
        let response = BotApiResponse::parse(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
            Some(400),
            Message::kind(),
        );
        assert!(!response.ok);
        assert_eq!(response.error_code, Some(400));
        assert_eq!(response.description.as_deref(), Some("Bad Request: chat not found"));
        assert!(!response.connection_error);
        assert!(response.decode::<Message>().is_none());
        assert!(matches!(
            response.into_result(),
            Err(SilbotError::Api { code: 400, .. })
        ));
    }

    #[test]
    fn test_connection_failure_envelope() {
        let response = BotApiResponse::connection_failure("timed out", bool::kind());
        assert!(!response.ok);
        assert!(response.connection_error);
        assert_eq!(response.error_code, None);
        assert_eq!(response.decoded, json!({"ok": false, "connection_error": true}));
        assert!(matches!(response.error(), Some(SilbotError::Transport(_))));
    }

    #[test]
    fn test_non_json_body_uses_http_status() {
        let response = BotApiResponse::parse("<html>502 Bad Gateway</html>", Some(502), bool::kind());
        assert!(!response.ok);
        assert!(!response.connection_error);
        assert_eq!(response.error_code, Some(502));
        assert!(response.result().is_none());
    }

    #[test]
    fn test_flood_parameters() {
        let response = BotApiResponse::parse(
            r#"{"ok":false,"error_code":429,"description":"Too Many Requests","parameters":{"retry_after":7}}"#,
            Some(429),
            bool::kind(),
        );
        assert_eq!(response.retry_after(), Some(7));
    }

    #[test]
    fn test_list_of_records_and_opaque() {
        let body = r#"{"ok":true,"result":[{"update_id":1},{"update_id":2,"message":{"message_id":5}}]}"#;
        let response = BotApiResponse::parse(body, Some(200), Vec::<Update>::kind());
        let updates = response.decode::<Vec<Update>>().unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[1].message.as_ref().unwrap().message_id, Some(5));
        assert_eq!(response.decode::<Value>().unwrap().as_array().unwrap().len(), 2);
        assert_eq!(response.kind.to_string(), "list<Update>");
    }

    #[test]
    fn test_list_keeps_well_formed_updates() {
        let body = r#"{"ok":true,"result":[{"update_id":1},42,{"update_id":3}]}"#;
        let response = BotApiResponse::parse(body, Some(200), Vec::<Update>::kind());
        let ids: Vec<_> = response
            .decode::<Vec<Update>>()
            .unwrap()
            .iter()
            .map(|u| u.update_id)
            .collect();
        assert_eq!(ids, vec![Some(1), Some(3)]);
    }

    #[test]
    fn test_shape_mismatch_decodes_to_none() {
        let response = BotApiResponse::parse(r#"{"ok":true,"result":true}"#, Some(200), Message::kind());
        assert!(response.decode::<Message>().is_none());
        assert_eq!(response.result(), Some(&json!(true)));
    }
}
