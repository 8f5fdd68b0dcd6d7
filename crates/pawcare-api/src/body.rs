//! [`IntakeBody`]: request body extractor for the booking intake.
//!
//! Accepts a JSON object or URL-encoded form fields, chosen by
//! `Content-Type`. Anything that cannot be read (wrong content type, invalid
//! JSON, a JSON value that is not an object, undecodable form data) becomes an
//! empty [`IntakeForm`]. The caller then sees the ordinary missing-fields
//! error rather than a parse error.

use std::convert::Infallible;

use axum::{
  Form, Json,
  extract::{FromRequest, Request},
  http::{HeaderMap, header},
};
use pawcare_core::intake::IntakeForm;
use serde_json::Value;

/// The normalized intake form read from the request body.
#[derive(Debug)]
pub struct IntakeBody(pub IntakeForm);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
  Json,
  Form,
  Unsupported,
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
  let Some(content_type) = headers
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
  else {
    return BodyKind::Unsupported;
  };

  let mime = content_type
    .split(';')
    .next()
    .unwrap_or_default()
    .trim()
    .to_ascii_lowercase();

  if mime == "application/json"
    || (mime.starts_with("application/") && mime.ends_with("+json"))
  {
    BodyKind::Json
  } else if mime == "application/x-www-form-urlencoded" {
    BodyKind::Form
  } else {
    BodyKind::Unsupported
  }
}

impl<S> FromRequest<S> for IntakeBody
where
  S: Send + Sync,
{
  type Rejection = Infallible;

  async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
    let form = match body_kind(req.headers()) {
      BodyKind::Json => match Json::<Value>::from_request(req, state).await {
        Ok(Json(Value::Object(object))) => IntakeForm::from_json_object(&object),
        Ok(Json(_)) => {
          tracing::debug!("intake JSON body is not an object; treating as empty");
          IntakeForm::default()
        }
        Err(rejection) => {
          tracing::debug!(%rejection, "unreadable intake JSON body; treating as empty");
          IntakeForm::default()
        }
      },
      BodyKind::Form => {
        match Form::<Vec<(String, String)>>::from_request(req, state).await {
          Ok(Form(pairs)) => IntakeForm::from_form_pairs(&pairs),
          Err(rejection) => {
            tracing::debug!(%rejection, "unreadable intake form body; treating as empty");
            IntakeForm::default()
          }
        }
      }
      BodyKind::Unsupported => {
        tracing::debug!("unsupported intake content type; treating as empty");
        IntakeForm::default()
      }
    };

    Ok(Self(form))
  }
}

#[cfg(test)]
mod tests {
  use axum::http::HeaderValue;

  use super::*;

  fn headers(content_type: &'static str) -> HeaderMap {
    let mut map = HeaderMap::new();
    map.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    map
  }

  #[test]
  fn classifies_content_types() {
    assert_eq!(body_kind(&headers("application/json")), BodyKind::Json);
    assert_eq!(
      body_kind(&headers("application/json; charset=utf-8")),
      BodyKind::Json
    );
    assert_eq!(body_kind(&headers("application/vnd.api+json")), BodyKind::Json);
    assert_eq!(
      body_kind(&headers("application/x-www-form-urlencoded")),
      BodyKind::Form
    );
    assert_eq!(body_kind(&headers("text/plain")), BodyKind::Unsupported);
    assert_eq!(body_kind(&HeaderMap::new()), BodyKind::Unsupported);
  }
}
