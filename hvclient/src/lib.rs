// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # hvclient
//!
//! Response decoding for the HVCA certificate issuance API.
//!
//! This crate turns HTTP responses handed over by a transport into typed
//! domain records. It builds no requests and keeps no state: each decoder
//! consumes one [`http::Response`] whose body implements [`std::io::Read`]
//! and returns either a fully populated record or a [`ResponseError`].
//!
//! ```text
//! transport -> http::Response<B: Read> -> hvclient -> Claim / ClaimAssertionInfo / ClaimsPage
//! ```
//!
//! ## Modules
//!
//! - [`configuration`]: decoder options such as the body size limit
//! - [`constants`]: header names and default limits
//! - [`errors`]: the [`ResponseError`] taxonomy
//! - [`headers`]: first-value, path-suffix and integer header extraction
//! - [`models`]: claims, log entries and claim assertion info
//! - [`responses`]: body decoders and status checking
//!
//! ## Usage
//!
//! ```
//! use hvclient::responses::claim_assertion_info_from_response;
//!
//! let response = http::Response::builder()
//!     .header("Location", "/v2/claims/domains/claim")
//!     .body(&br#"{"token":"1234","assert_by":1477958500}"#[..])
//!     .unwrap();
//!
//! let info = claim_assertion_info_from_response(response).unwrap();
//! assert_eq!(info.id, "claim");
//! assert_eq!(info.token, "1234");
//! ```

pub mod configuration;
pub mod constants;
pub mod errors;
pub mod headers;
pub mod models;
pub mod responses;

pub use errors::ResponseError;
