//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body that may be absent.
///
/// Unlike `axum::Json`, this never rejects on content: an empty body, a
/// literal `null`, or JSON that does not fit `T` all bind to `None`, and the
/// handler answers with a validation failure. Content type is not checked.
#[derive(Debug)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        Ok(Self(bind_json(&bytes)))
    }
}

/// Lenient JSON binding used by [`OptionalJson`].
pub fn bind_json<T: DeserializeOwned>(body: &[u8]) -> Option<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    match serde_json::from_slice::<Option<T>>(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "request body did not bind");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateItemRequest;

    #[test]
    fn empty_and_null_bodies_are_none() {
        assert_eq!(bind_json::<CreateItemRequest>(b""), None);
        assert_eq!(bind_json::<CreateItemRequest>(b"  \n"), None);
        assert_eq!(bind_json::<CreateItemRequest>(b"null"), None);
    }

    #[test]
    fn malformed_body_is_none() {
        assert_eq!(bind_json::<CreateItemRequest>(b"{ 'ItemName': 'x' }"), None);
        assert_eq!(bind_json::<CreateItemRequest>(b"[1, 2]"), None);
    }

    #[test]
    fn valid_body_binds() {
        let req = bind_json::<CreateItemRequest>(br#"{"ItemName":"Item1","Quantity":1}"#);
        assert_eq!(req, Some(CreateItemRequest::new("Item1", 1)));
    }

    #[tokio::test]
    async fn extractor_reads_request_body() {
        let req = axum::http::Request::builder()
            .method("POST")
            .body(axum::body::Body::from(r#"{"ItemName":"Eggs","Quantity":12}"#))
            .unwrap();

        let OptionalJson(body) = OptionalJson::<CreateItemRequest>::from_request(req, &())
            .await
            .unwrap();
        assert_eq!(body, Some(CreateItemRequest::new("Eggs", 12)));
    }
}
