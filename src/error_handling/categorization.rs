//! Error categorization.
//!
//! This module maps client errors and HTTP status codes onto `ErrorType`.

use reqwest::StatusCode;

use super::types::ErrorType;

/// Categorizes a non-2xx `StatusCode` into an `ErrorType`.
pub fn categorize_status(status: StatusCode) -> ErrorType {
    match status.as_u16() {
        400 => ErrorType::HttpRequestBadRequest,
        404 => ErrorType::HttpRequestNotFound,
        429 => ErrorType::HttpRequestTooManyRequests,
        500 => ErrorType::HttpRequestInternalServerError,
        502 => ErrorType::HttpRequestBadGateway,
        503 => ErrorType::HttpRequestServiceUnavailable,
        504 => ErrorType::HttpRequestGatewayTimeout,
        _ => ErrorType::HttpRequestStatusError,
    }
}

/// Categorizes a `reqwest::Error` into an `ErrorType` by its kind.
///
/// Non-2xx responses never reach here; they are categorized with
/// [`categorize_status`].
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_common_statuses() {
        assert_eq!(
            categorize_status(StatusCode::BAD_REQUEST),
            ErrorType::HttpRequestBadRequest
        );
        assert_eq!(
            categorize_status(StatusCode::NOT_FOUND),
            ErrorType::HttpRequestNotFound
        );
        assert_eq!(
            categorize_status(StatusCode::TOO_MANY_REQUESTS),
            ErrorType::HttpRequestTooManyRequests
        );
        assert_eq!(
            categorize_status(StatusCode::INTERNAL_SERVER_ERROR),
            ErrorType::HttpRequestInternalServerError
        );
        assert_eq!(
            categorize_status(StatusCode::SERVICE_UNAVAILABLE),
            ErrorType::HttpRequestServiceUnavailable
        );
    }

    #[test]
    fn test_categorize_uncommon_status_falls_back() {
        assert_eq!(
            categorize_status(StatusCode::IM_A_TEAPOT),
            ErrorType::HttpRequestStatusError
        );
        assert_eq!(
            categorize_status(StatusCode::NOT_IMPLEMENTED),
            ErrorType::HttpRequestStatusError
        );
    }

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Reserve a port, then free it so nothing is listening
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = reqwest::Client::new();
        let error = client
            .post(format!("http://127.0.0.1:{}/predict", port))
            .send()
            .await
            .expect_err("request to a closed port should fail");
        assert_eq!(
            categorize_reqwest_error(&error),
            ErrorType::HttpRequestConnectError
        );
    }

    #[test]
    fn test_categorize_builder_error() {
        let client = reqwest::Client::new();
        let error = client
            .post("not a url")
            .build()
            .expect_err("invalid URL should fail to build");
        assert_eq!(
            categorize_reqwest_error(&error),
            ErrorType::HttpRequestBuilderError
        );
    }
}
