// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use http::StatusCode;

/// Everything that can go wrong while turning an HTTP response into a
/// domain record.
#[derive(thiserror::Error, Debug)]
pub enum ResponseError {
    #[error("missing header: {0}")]
    MissingHeader(String),
    #[error("malformed header {name}: {value:?}: {reason}")]
    MalformedHeader {
        name: String,
        value: String,
        reason: String,
    },
    #[error("unable to decode response body: {0}")]
    Decode(serde_json::Error),
    #[error("unable to read response body: {0}")]
    Io(std::io::Error),
    #[error("response body exceeds maximum allowed size {limit}")]
    BodyTooLarge { limit: u64 },
    #[error("service returned {status}: {description}")]
    Api {
        status: StatusCode,
        description: String,
    },
}

impl ResponseError {
    pub fn malformed_header(
        name: impl Into<String>,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::MalformedHeader {
            name: name.into(),
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_missing_header(&self) -> bool {
        matches!(self, Self::MissingHeader(_))
    }

    pub fn is_malformed_header(&self) -> bool {
        matches!(self, Self::MalformedHeader { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl From<serde_json::Error> for ResponseError {
    fn from(source: serde_json::Error) -> Self {
        tracing::warn!("[hvclient] {:?}", source);
        ResponseError::Decode(source)
    }
}

impl From<std::io::Error> for ResponseError {
    fn from(source: std::io::Error) -> Self {
        tracing::warn!("[hvclient] {:?}", source);
        ResponseError::Io(source)
    }
}
