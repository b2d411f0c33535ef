//! Campaign request body extraction.
//!
//! The body is required. It is decoded as JSON when `Content-Type` is absent
//! or names `application/json` (or an `application/*+json` subtype); any
//! other body is validated as raw text and therefore rejected as a
//! non-object. Each of the three known fields must be a string when present.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::http::error::{ApiError, ValidationDetail};
use crate::marketing::CampaignRequest;

/// Extractor yielding a `CampaignRequest` with defaults applied.
#[derive(Debug, Clone)]
pub struct CampaignBody(pub CampaignRequest);

impl<S> FromRequest<S> for CampaignBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        parse_campaign_request(content_type.as_deref(), &bytes)
            .map(CampaignBody)
            .map_err(IntoResponse::into_response)
    }
}

/// True when a body with this content type is decoded as JSON.
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(value) = content_type else {
        return true;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

/// Parse and validate a raw campaign body.
pub fn parse_campaign_request(
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<CampaignRequest, ApiError> {
    if bytes.is_empty() {
        return Err(ValidationDetail::missing_body().into());
    }

    if !is_json_content_type(content_type) {
        let raw = String::from_utf8_lossy(bytes).into_owned();
        return Err(ValidationDetail::not_an_object(Value::String(raw)).into());
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| ValidationDetail::json_invalid(&e))?;
    match value {
        Value::Object(fields) => campaign_from_fields(&fields),
        other => Err(ValidationDetail::not_an_object(other).into()),
    }
}

/// Apply defaults and check field types, reporting every bad field.
fn campaign_from_fields(fields: &Map<String, Value>) -> Result<CampaignRequest, ApiError> {
    let mut request = CampaignRequest::default();
    let mut errors = Vec::new();

    let slots = [
        ("campaign_type", &mut request.campaign_type),
        ("target_audience", &mut request.target_audience),
        ("product", &mut request.product),
    ];
    for (name, slot) in slots {
        match fields.get(name) {
            None => {}
            Some(Value::String(s)) => *slot = s.clone(),
            Some(other) => errors.push(ValidationDetail::string_type(name, other.clone())),
        }
    }

    if errors.is_empty() {
        Ok(request)
    } else {
        Err(ApiError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const JSON: Option<&str> = Some("application/json");

    fn details_of(result: Result<CampaignRequest, ApiError>) -> Vec<ValidationDetail> {
        match result {
            Err(ApiError::Validation(details)) => details,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(parse_campaign_request(JSON, b"{}").unwrap(), CampaignRequest::default());
        assert_eq!(parse_campaign_request(None, b"{}").unwrap(), CampaignRequest::default());
    }

    #[test]
    fn test_missing_body_is_rejected() {
        let details = details_of(parse_campaign_request(JSON, b""));
        assert_eq!(details, vec![ValidationDetail::missing_body()]);
        assert_eq!(details[0].loc, vec!["body"]);

        let details = details_of(parse_campaign_request(None, b""));
        assert_eq!(details[0].kind, "missing");
    }

    #[test]
    fn test_whitespace_body_is_invalid_json() {
        let details = details_of(parse_campaign_request(JSON, b"  \n"));
        assert_eq!(details[0].kind, "json_invalid");
    }

    #[test]
    fn test_supplied_fields_override_defaults() {
        let request = parse_campaign_request(
            JSON,
            br#"{"product":"SaaS","target_audience":"agencies","budget":5}"#,
        )
        .unwrap();
        assert_eq!(request.product, "SaaS");
        assert_eq!(request.target_audience, "agencies");
        assert_eq!(request.campaign_type, "email");
    }

    #[test]
    fn test_json_content_type_variants() {
        assert!(is_json_content_type(None));
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("Application/JSON; charset=utf-8")));
        assert!(is_json_content_type(Some("application/merge-patch+json")));
        assert!(!is_json_content_type(Some("text/plain")));
        assert!(!is_json_content_type(Some("application/x-www-form-urlencoded")));
        assert!(!is_json_content_type(Some("text/json")));
    }

    #[test]
    fn test_non_json_content_type_is_not_an_object() {
        let details =
            details_of(parse_campaign_request(Some("text/plain"), br#"{"product":"SaaS"}"#));
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].kind, "model_attributes_type");
        assert_eq!(details[0].input, json!(r#"{"product":"SaaS"}"#));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert_eq!(details_of(parse_campaign_request(JSON, b"{\"product\""))[0].kind, "json_invalid");
        assert_eq!(details_of(parse_campaign_request(None, b"not json"))[0].kind, "json_invalid");
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        for body in [&b"[\"email\"]"[..], &b"\"SaaS\""[..], &b"null"[..]] {
            let details = details_of(parse_campaign_request(JSON, body));
            assert_eq!(details[0].kind, "model_attributes_type");
            assert_eq!(details[0].loc, vec!["body"]);
        }
    }

    #[test]
    fn test_every_wrong_field_is_reported() {
        let details = details_of(parse_campaign_request(
            JSON,
            br#"{"campaign_type":null,"product":7,"target_audience":"ok"}"#,
        ));
        assert_eq!(
            details,
            vec![
                ValidationDetail::string_type("campaign_type", Value::Null),
                ValidationDetail::string_type("product", json!(7)),
            ]
        );
        assert_eq!(details[1].loc, vec!["body", "product"]);
        assert_eq!(details[1].msg, "Input should be a valid string");
    }
}
