use contracts::shared::{ApiEnvelope, ApiSuccess};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub type ApiResult<T> = Result<ApiSuccess<T>, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a usable envelope
    #[error("Network error: {0}")]
    Transport(String),
    /// The backend answered with `type: "ERROR"`
    #[error("{0}")]
    Business(String),
    /// HTTP 401, handled globally by the session manager
    #[error("Session expired: {0}")]
    SessionExpired(String),
}

impl ApiError {
    /// The synthetic `ERROR` envelope equivalent of this failure
    pub fn to_envelope<T>(&self) -> ApiEnvelope<T> {
        ApiEnvelope::error(self.to_string())
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::SessionExpired(_))
    }
}

/// Turn the raw outcome of an HTTP exchange into an `ApiResult`.
///
/// `outcome` is `Err` when the request failed before a response body was read.
pub fn classify_response<T: DeserializeOwned>(outcome: Result<(u16, String), String>) -> ApiResult<T> {
    let (status, body) = outcome.map_err(ApiError::Transport)?;
    let success = (200..300).contains(&status);

    if success && body.trim().is_empty() {
        return Ok(ApiSuccess {
            data: None,
            message: None,
            pagination: None,
        });
    }

    let parsed = serde_json::from_str::<ApiEnvelope<serde_json::Value>>(&body);

    if status == 401 {
        let message = parsed
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| "Please sign in again".to_string());
        return Err(ApiError::SessionExpired(message));
    }

    let envelope = parsed.map_err(|e| {
        log::debug!("unparseable response body (HTTP {}): {}", status, e);
        ApiError::Transport(format!("Unexpected response (HTTP {})", status))
    })?;

    let ok = envelope.into_result().map_err(ApiError::Business)?;
    if !success {
        return Err(ApiError::Business(
            ok.message
                .unwrap_or_else(|| format!("Request failed (HTTP {})", status)),
        ));
    }

    let data = match ok.data {
        Some(serde_json::Value::Null) | None => None,
        Some(value) => Some(serde_json::from_value::<T>(value).map_err(|e| {
            log::debug!("response data does not match the expected shape: {}", e);
            ApiError::Transport(format!("Malformed response data: {}", e))
        })?),
    };

    Ok(ApiSuccess {
        data,
        message: ok.message,
        pagination: ok.pagination,
    })
}

/// Unwrap the payload of an endpoint that must return data.
pub fn required_data<T>(ok: ApiSuccess<T>) -> Result<T, ApiError> {
    ok.data
        .ok_or_else(|| ApiError::Transport("Response carried no data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::brand::Brand;
    use contracts::shared::{Collection, EnvelopeType};

    fn reply(status: u16, body: &str) -> Result<(u16, String), String> {
        Ok((status, body.to_string()))
    }

    #[test]
    fn test_transport_failure_is_normalized() {
        let r: ApiResult<()> = classify_response(Err("Failed to fetch".to_string()));
        let err = r.unwrap_err();
        assert_eq!(err, ApiError::Transport("Failed to fetch".to_string()));
        let env = err.to_envelope::<()>();
        assert_eq!(env.kind, EnvelopeType::Error);
        assert_eq!(env.message.as_deref(), Some("Network error: Failed to fetch"));
    }

    #[test]
    fn test_non_json_body_is_a_transport_error() {
        let r: ApiResult<()> = classify_response(reply(502, "<html>Bad gateway</html>"));
        assert_eq!(
            r.unwrap_err(),
            ApiError::Transport("Unexpected response (HTTP 502)".to_string())
        );
    }

    #[test]
    fn test_error_envelope_is_a_business_error() {
        let r: ApiResult<()> =
            classify_response(reply(200, r#"{"type":"ERROR","message":"Slug already taken"}"#));
        assert_eq!(r.unwrap_err(), ApiError::Business("Slug already taken".to_string()));
    }

    #[test]
    fn test_error_envelope_with_4xx_keeps_backend_message() {
        let r: ApiResult<()> =
            classify_response(reply(422, r#"{"type":"ERROR","message":"Name is required","data":{"field":"name"}}"#));
        assert_eq!(r.unwrap_err(), ApiError::Business("Name is required".to_string()));
    }

    #[test]
    fn test_unauthorized_escalates_to_session_expiry() {
        let r: ApiResult<()> =
            classify_response(reply(401, r#"{"type":"ERROR","message":"Token expired"}"#));
        let err = r.unwrap_err();
        assert!(err.is_session_expired());
        assert_eq!(err, ApiError::SessionExpired("Token expired".to_string()));
    }

    #[test]
    fn test_unauthorized_without_body() {
        let r: ApiResult<()> = classify_response(reply(401, ""));
        assert_eq!(
            r.unwrap_err(),
            ApiError::SessionExpired("Please sign in again".to_string())
        );
    }

    #[test]
    fn test_keyed_list_is_decoded() {
        let body = r#"{
            "type": "OK",
            "data": { "brands": [ { "id": "b1", "name": "Nike", "logoUrl": null, "description": null, "isActive": true } ] },
            "pagination": { "total": 1, "page": 1, "limit": 10, "totalPages": 1, "hasNextPage": false, "hasPrevPage": false }
        }"#;
        let r: ApiResult<Collection<Brand>> = classify_response(reply(200, body));
        let ok = r.unwrap();
        assert_eq!(ok.pagination.unwrap().total, 1);
        let brands = required_data(ok).unwrap().into_items();
        assert_eq!(brands[0].name, "Nike");
    }

    #[test]
    fn test_wrong_collection_key_is_malformed() {
        let body = r#"{ "type": "OK", "data": { "products": [] } }"#;
        let r: ApiResult<Collection<Brand>> = classify_response(reply(200, body));
        assert!(matches!(r.unwrap_err(), ApiError::Transport(m) if m.contains("brands")));
    }

    #[test]
    fn test_empty_success_body_has_no_data() {
        let r: ApiResult<()> = classify_response(reply(204, ""));
        let ok = r.unwrap();
        assert!(ok.data.is_none());
        assert_eq!(
            required_data(ok).unwrap_err(),
            ApiError::Transport("Response carried no data".to_string())
        );
    }

    #[test]
    fn test_ok_envelope_with_server_error_status_is_not_success() {
        let r: ApiResult<()> = classify_response(reply(500, r#"{"type":"OK"}"#));
        assert_eq!(
            r.unwrap_err(),
            ApiError::Business("Request failed (HTTP 500)".to_string())
        );
    }
}
