// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Decoding of HVCA response bodies into domain records.
//!
//! Every decoder takes the [`Response`] by value: the body is read exactly
//! once and the response cannot be decoded again afterwards. Bodies are
//! read before any header is inspected, so a response with both an invalid
//! body and a missing header reports the body error.
//!
//! | Endpoint response | Decoder | Body | Headers |
//! |-------------------|---------|------|---------|
//! | claim | [`claim_from_response`] | object | |
//! | claim assertion | [`claim_assertion_info_from_response`] | object | `Location` |
//! | claims listing | [`claims_from_response`] | array of objects | `Total-Count` |

use std::io::Read;

use http::Response;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::configuration::DecoderOptions;
use crate::constants::{LOCATION_HEADER, TOTAL_COUNT_HEADER};
use crate::errors::ResponseError;
use crate::headers::{base_path_header_from_response, header_from_response, int_header_from_response};
use crate::models::{ApiErrorBody, Claim, ClaimAssertionBody, ClaimAssertionInfo, ClaimsPage};

/// Decodes responses according to a set of [`DecoderOptions`].
#[derive(Debug, Clone, Default)]
pub struct ResponseDecoder {
    options: DecoderOptions,
}

impl ResponseDecoder {
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decodes a single [`Claim`] from a JSON object body.
    ///
    /// # Errors
    ///
    /// - [`ResponseError::Decode`] - invalid JSON, a non-object body, a field
    ///   of the wrong type or an unknown status token
    /// - [`ResponseError::Io`] / [`ResponseError::BodyTooLarge`] - the body
    ///   could not be read
    #[tracing::instrument(skip(self, response))]
    pub fn claim<B: Read>(&self, response: Response<B>) -> Result<Claim, ResponseError> {
        let body = self.read_body(response.into_body())?;
        let claim: Claim = decode_object(&body)?;

        tracing::debug!(
            "[hvclient] decoded claim {} for {} ({})",
            claim.id,
            claim.domain,
            claim.status
        );

        Ok(claim)
    }

    /// Decodes a [`ClaimAssertionInfo`]: `token` and `assert_by` come from
    /// the body, `id` from the last path segment of the `Location` header.
    ///
    /// The body is decoded first. A missing `Location` header is reported
    /// as [`ResponseError::MissingHeader`] even when the body was valid, and
    /// a `Location` ending in `/` is [`ResponseError::MalformedHeader`].
    #[tracing::instrument(skip(self, response))]
    pub fn claim_assertion_info<B: Read>(
        &self,
        response: Response<B>,
    ) -> Result<ClaimAssertionInfo, ResponseError> {
        let (parts, body) = response.into_parts();
        let assertion: ClaimAssertionBody = decode_object(&self.read_body(body)?)?;

        let id = base_path_header_from_response(&parts, LOCATION_HEADER)?;
        if id.is_empty() {
            let location = header_from_response(&parts, LOCATION_HEADER)?;
            tracing::warn!("[hvclient] no claim id in location {:?}", location);
            return Err(ResponseError::malformed_header(
                LOCATION_HEADER,
                location,
                "no resource identifier after final '/'",
            ));
        }

        tracing::debug!("[hvclient] decoded assertion info for claim {}", id);

        Ok(assertion.with_id(id))
    }

    /// Decodes one page of a claims listing: a JSON array of claim objects
    /// plus the `Total-Count` header.
    #[tracing::instrument(skip(self, response))]
    pub fn claims<B: Read>(&self, response: Response<B>) -> Result<ClaimsPage, ResponseError> {
        let (parts, body) = response.into_parts();
        let objects: Vec<Map<String, Value>> = serde_json::from_slice(&self.read_body(body)?)?;
        let claims = objects
            .into_iter()
            .map(|object| serde_json::from_value(Value::Object(object)))
            .collect::<Result<Vec<Claim>, _>>()?;

        let total_count = int_header_from_response(&parts, TOTAL_COUNT_HEADER)?;

        tracing::debug!(
            "[hvclient] decoded {} claims of {}",
            claims.len(),
            total_count
        );

        Ok(ClaimsPage {
            claims,
            total_count,
        })
    }

    /// Passes successful and redirect responses through untouched.
    ///
    /// For 4xx and 5xx responses the body is read and turned into
    /// [`ResponseError::Api`]. The description comes from the service's
    /// error document when the body is one, otherwise from the raw body text.
    pub fn error_for_status<B: Read>(
        &self,
        response: Response<B>,
    ) -> Result<Response<B>, ResponseError> {
        let status = response.status();
        if !status.is_client_error() && !status.is_server_error() {
            return Ok(response);
        }

        let body = self.read_body(response.into_body())?;
        let description = match serde_json::from_slice::<ApiErrorBody>(&body) {
            Ok(api_error) => api_error.description,
            Err(_) => String::from_utf8_lossy(&body).trim().to_string(),
        };

        tracing::warn!("[hvclient] service returned {}: {}", status, description);

        Err(ResponseError::Api {
            status,
            description,
        })
    }

    fn read_body<B: Read>(&self, body: B) -> Result<Vec<u8>, ResponseError> {
        let limit = self.options.max_body_size;

        // Read one byte past the limit to tell "exactly at" from "over".
        let mut buffer = Vec::new();
        body.take(limit.saturating_add(1))
            .read_to_end(&mut buffer)?;

        if buffer.len() as u64 > limit {
            tracing::warn!("[hvclient] response body exceeds {} bytes", limit);
            return Err(ResponseError::BodyTooLarge { limit });
        }

        Ok(buffer)
    }
}

/// Deserializes `body` into `T`, rejecting any top-level value that is not
/// a JSON object.
fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, ResponseError> {
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Decodes a [`Claim`] with the default [`DecoderOptions`].
pub fn claim_from_response<B: Read>(response: Response<B>) -> Result<Claim, ResponseError> {
    ResponseDecoder::default().claim(response)
}

/// Decodes a [`ClaimAssertionInfo`] with the default [`DecoderOptions`].
pub fn claim_assertion_info_from_response<B: Read>(
    response: Response<B>,
) -> Result<ClaimAssertionInfo, ResponseError> {
    ResponseDecoder::default().claim_assertion_info(response)
}

/// Decodes a [`ClaimsPage`] with the default [`DecoderOptions`].
pub fn claims_from_response<B: Read>(response: Response<B>) -> Result<ClaimsPage, ResponseError> {
    ResponseDecoder::default().claims(response)
}

/// See [`ResponseDecoder::error_for_status`].
pub fn error_for_status<B: Read>(response: Response<B>) -> Result<Response<B>, ResponseError> {
    ResponseDecoder::default().error_for_status(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClaimStatus;

    fn decoder_with_limit(max_body_size: u64) -> ResponseDecoder {
        ResponseDecoder::new(DecoderOptions { max_body_size })
    }

    // ==================== Body Limit Tests ====================

    #[test]
    fn test_read_body_at_limit() {
        let decoder = decoder_with_limit(4);
        assert_eq!(decoder.read_body(&b"abcd"[..]).unwrap(), b"abcd");
    }

    #[test]
    fn test_read_body_over_limit() {
        let decoder = decoder_with_limit(4);
        let err = decoder.read_body(&b"abcde"[..]).unwrap_err();
        assert!(matches!(err, ResponseError::BodyTooLarge { limit: 4 }));
    }

    #[test]
    fn test_read_body_empty() {
        let decoder = ResponseDecoder::default();
        assert!(decoder.read_body(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn test_claim_body_over_limit() {
        let body = r#"{"id":"1234","status":"PENDING","domain":"example.com","created_at":1,"expires_at":2,"assert_by":3}"#;
        let response = Response::new(body.as_bytes());
        let err = decoder_with_limit(16).claim(response).unwrap_err();
        assert!(matches!(err, ResponseError::BodyTooLarge { limit: 16 }));
    }

    // ==================== Object Shape Tests ====================

    #[test]
    fn test_decode_object_accepts_object() {
        let status: Map<String, Value> = decode_object(br#"{"status":"PENDING"}"#).unwrap();
        assert_eq!(status["status"], "PENDING");
    }

    #[test]
    fn test_decode_object_rejects_array() {
        let err = decode_object::<Claim>(br#"["1234","VERIFIED"]"#).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_decode_object_rejects_scalar() {
        let err = decode_object::<ClaimStatus>(br#""PENDING""#).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_decode_object_rejects_empty_body() {
        let err = decode_object::<Claim>(b"").unwrap_err();
        assert!(err.is_decode());
    }
}
