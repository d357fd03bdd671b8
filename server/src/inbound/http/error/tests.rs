//! Tests for the error envelope rendering.

use actix_web::ResponseError;
use actix_web::body::MessageBody;
use actix_web::http::StatusCode;
use rstest::rstest;
use serde_json::Value;

use crate::domain::Error;

fn envelope_for(error: &Error) -> (StatusCode, Value) {
    let response = error.error_response();
    let status = response.status();
    let bytes = response
        .into_body()
        .try_into_bytes()
        .expect("in-memory body");
    let value = serde_json::from_slice(&bytes).expect("envelope json");
    (status, value)
}

#[rstest]
fn validation_errors_render_as_422() {
    let (status, body) = envelope_for(&Error::validation("Id was invalidly set on request."));

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["exceptionType"], "ValidationError");
    assert_eq!(body["code"], 422);
    assert_eq!(body["error"], "Id was invalidly set on request.");
}

#[rstest]
fn not_found_omits_the_error_field() {
    let (status, body) = envelope_for(&Error::NotFound);

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["exceptionType"], "NotFound");
    assert_eq!(body["code"], 404);
    assert!(
        body.as_object().expect("object body").get("error").is_none(),
        "error must be omitted, not null"
    );
}

#[rstest]
fn wrapped_failures_report_the_root_cause() {
    let wrapped = Error::wrapped(Error::wrapped(Error::conflict(
        "duplicate key value violates unique constraint \"fruits_name_key\"",
    )));
    let (status, body) = envelope_for(&wrapped);

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["exceptionType"], "ConstraintViolation");
    assert_eq!(body["code"], 409);
    assert_eq!(
        body["error"],
        "duplicate key value violates unique constraint \"fruits_name_key\""
    );
}

#[rstest]
#[case(Error::unavailable("pool timed out"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn store_faults_keep_their_status(#[case] error: Error, #[case] expected: StatusCode) {
    let (status, body) = envelope_for(&error);

    assert_eq!(status, expected);
    assert_eq!(body["code"], expected.as_u16());
}
