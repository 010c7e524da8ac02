// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Typed access to response headers.
//!
//! The extractors in this module only need to look up the values recorded
//! for a header name, so they are written against the small
//! [`HeaderSource`] capability rather than a concrete transport type.
//!
//! When a header is repeated, only its first value is used and the rest are
//! ignored without error.

use http::response::Parts;
use http::{HeaderMap, HeaderValue, Response};

use crate::errors::ResponseError;

/// Anything that can list the raw values of a header by case-insensitive name.
pub trait HeaderSource {
    /// All values recorded for `name`, in the order they were received.
    fn header_values(&self, name: &str) -> Vec<&[u8]>;
}

impl HeaderSource for HeaderMap {
    fn header_values(&self, name: &str) -> Vec<&[u8]> {
        self.get_all(name).iter().map(HeaderValue::as_bytes).collect()
    }
}

impl HeaderSource for Parts {
    fn header_values(&self, name: &str) -> Vec<&[u8]> {
        self.headers.header_values(name)
    }
}

impl<B> HeaderSource for Response<B> {
    fn header_values(&self, name: &str) -> Vec<&[u8]> {
        self.headers().header_values(name)
    }
}

/// Returns the first value of the named header.
///
/// # Errors
///
/// - [`ResponseError::MissingHeader`] if the header has no values
/// - [`ResponseError::MalformedHeader`] if the first value is not valid UTF-8
pub fn header_from_response<S>(source: &S, name: &str) -> Result<String, ResponseError>
where
    S: HeaderSource + ?Sized,
{
    let values = source.header_values(name);
    let Some(value) = values.first() else {
        return Err(ResponseError::MissingHeader(name.to_string()));
    };

    std::str::from_utf8(value)
        .map(str::to_string)
        .map_err(|err| ResponseError::malformed_header(name, String::from_utf8_lossy(value), err))
}

/// Returns the last path segment of the named header, e.g. `claim` for a
/// `Location: /path/to/claim` header. A value without any `/` is returned
/// unchanged.
pub fn base_path_header_from_response<S>(source: &S, name: &str) -> Result<String, ResponseError>
where
    S: HeaderSource + ?Sized,
{
    let value = header_from_response(source, name)?;

    match value.rfind('/') {
        Some(index) => Ok(value[index + 1..].to_string()),
        None => Ok(value),
    }
}

/// Returns the first value of the named header parsed as a base-10 `i64`.
///
/// Out of range values are rejected rather than saturated.
pub fn int_header_from_response<S>(source: &S, name: &str) -> Result<i64, ResponseError>
where
    S: HeaderSource + ?Sized,
{
    let value = header_from_response(source, name)?;

    value
        .parse::<i64>()
        .map_err(|err| ResponseError::malformed_header(name, value.as_str(), err))
}
