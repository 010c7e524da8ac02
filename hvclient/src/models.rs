// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;

use chrono::serde::ts_seconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The state of a domain claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimStatus {
    Pending,
    Verified,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Verified => "VERIFIED",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of one verification attempt recorded against a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerificationStatus {
    Success,
    Error,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain claim as returned by the `claims/domains` endpoints.
///
/// Timestamps travel as integer epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: String,
    pub status: ClaimStatus,
    pub domain: String,
    #[serde(with = "ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "ts_seconds")]
    pub expires_at: DateTime<Utc>,
    #[serde(with = "ts_seconds")]
    pub assert_by: DateTime<Utc>,
    /// Verification attempts, in the order the service reported them.
    #[serde(default)]
    pub log: Vec<ClaimLogEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimLogEntry {
    pub status: VerificationStatus,
    pub description: String,
    #[serde(with = "ts_seconds")]
    pub timestamp: DateTime<Utc>,
}

/// The token a client must publish to assert control over a claimed domain.
///
/// `id` does not appear in the response body; it is the last path segment
/// of the `Location` header of the same response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimAssertionInfo {
    pub token: String,
    #[serde(with = "ts_seconds")]
    pub assert_by: DateTime<Utc>,
    pub id: String,
}

/// Body half of a [`ClaimAssertionInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct ClaimAssertionBody {
    pub token: String,
    #[serde(with = "ts_seconds")]
    pub assert_by: DateTime<Utc>,
}

impl ClaimAssertionBody {
    pub(crate) fn with_id(self, id: String) -> ClaimAssertionInfo {
        ClaimAssertionInfo {
            token: self.token,
            assert_by: self.assert_by,
            id,
        }
    }
}

/// One page of a claims listing together with the total number of claims
/// reported by the `Total-Count` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimsPage {
    pub claims: Vec<Claim>,
    pub total_count: i64,
}

/// Error document returned by the service alongside 4xx and 5xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub status: u16,
    pub description: String,
}
