//! Tests for the domain error payload and its serde contract.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case::invalid_request(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case::unauthorized(Error::unauthorized("login required"), ErrorCode::Unauthorized)]
#[case::forbidden(Error::forbidden("denied"), ErrorCode::Forbidden)]
#[case::not_found(Error::not_found("missing"), ErrorCode::NotFound)]
#[case::service_unavailable(
    Error::service_unavailable("database down"),
    ErrorCode::ServiceUnavailable
)]
#[case::internal(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn try_new_rejects_empty_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, "   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyMessage)));
}

#[rstest]
fn try_with_trace_id_rejects_empty_values() {
    let result = Error::invalid_request("bad").try_with_trace_id("   ");
    assert!(matches!(result, Err(ErrorValidationError::EmptyTraceId)));
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("fixture UUID");
    let error = TraceId::scope(trace_id, async move { Error::internal("boom") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
#[tokio::test]
async fn deserialising_does_not_pick_up_ambient_trace(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("fixture UUID");
    let error = TraceId::scope(trace_id, async move {
        serde_json::from_value::<Error>(json!({"code": "invalid_request", "message": "bad"}))
            .expect("payload without trace id")
    })
    .await;

    assert!(error.trace_id().is_none());
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields(expected_trace_id: String) {
    let error = Error::service_unavailable("database down").with_trace_id(expected_trace_id);
    let value = serde_json::to_value(&error).expect("serialise error");

    assert_eq!(
        value,
        json!({
            "code": "service_unavailable",
            "message": "database down",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
fn deserialise_accepts_snake_case_trace_alias() {
    let error: Error = serde_json::from_value(json!({
        "code": "not_found",
        "message": "missing",
        "trace_id": TRACE_ID,
        "details": {"field": "id"},
    }))
    .expect("alias accepted");

    assert_eq!(error.trace_id(), Some(TRACE_ID));
    assert_eq!(error.details(), Some(&json!({"field": "id"})));
}

#[rstest]
#[case::blank_message(json!({"code": "internal_error", "message": " "}))]
#[case::blank_trace(json!({"code": "internal_error", "message": "boom", "traceId": ""}))]
#[case::unknown_field(json!({"code": "internal_error", "message": "boom", "extra": 1}))]
fn deserialise_rejects_invalid_payloads(#[case] payload: serde_json::Value) {
    assert!(serde_json::from_value::<Error>(payload).is_err());
}

#[rstest]
fn display_uses_message() {
    assert_eq!(Error::forbidden("denied").to_string(), "denied");
}
