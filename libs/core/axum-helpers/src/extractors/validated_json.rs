//! JSON extractor that converts and validates the body.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde_json::Value;
use validator::Validate;

/// Reads the body as raw JSON, converts it with `T: TryFrom<Value>`, then runs
/// `validator` rules.
///
/// Going through `Value` lets `T` report its own messages for missing keys or
/// wrongly typed fields instead of serde's.
///
/// - missing or non-JSON `Content-Type` → 415
/// - unparseable body → 400
/// - conversion failure → whatever `T::Error` maps to
/// - rule violation → 400 with per-field details
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: TryFrom<Value> + Validate,
    AppError: From<T::Error>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state).await?;
        let data = T::try_from(value)?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use tower::ServiceExt;

    #[derive(Validate)]
    struct Tag {
        #[validate(length(min = 1, max = 8))]
        label: String,
    }

    impl TryFrom<Value> for Tag {
        type Error = AppError;

        fn try_from(value: Value) -> Result<Self, Self::Error> {
            match value.get("label").and_then(Value::as_str) {
                Some(label) => Ok(Tag {
                    label: label.to_string(),
                }),
                None => Err(AppError::BadRequest("missing label".to_string())),
            }
        }
    }

    fn app() -> Router {
        Router::new().route(
            "/tags",
            post(|ValidatedJson(tag): ValidatedJson<Tag>| async move { tag.label }),
        )
    }

    fn request(content_type: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::post("/tags");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let response = app()
            .oneshot(request(Some("application/json"), r#"{"label":"sale"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_415() {
        let response = app()
            .oneshot(request(None, r#"{"label":"sale"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_415() {
        let response = app()
            .oneshot(request(Some("text/plain"), r#"{"label":"sale"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let response = app()
            .oneshot(request(Some("application/json"), "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_conversion_failure_is_400() {
        let response = app()
            .oneshot(request(Some("application/json"), "{}"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_rule_violation_is_400() {
        let response = app()
            .oneshot(request(Some("application/json"), r#"{"label":"far-too-long"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
