// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use serde::Deserialize;

use crate::constants::MAX_BODY_SIZE;

/// Tunables for [`ResponseDecoder`](crate::responses::ResponseDecoder).
///
/// Missing fields fall back to their defaults when deserialized, so the
/// options can be embedded in a larger application config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecoderOptions {
    /// Upper bound in bytes on a response body read by the decoder.
    pub max_body_size: u64,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_body_size: MAX_BODY_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_max_body_size() {
        assert_eq!(DecoderOptions::default().max_body_size, MAX_BODY_SIZE);
    }

    #[test]
    fn test_deserialize_empty_object_uses_defaults() {
        let options: DecoderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, DecoderOptions::default());
    }

    #[test]
    fn test_deserialize_overrides_max_body_size() {
        let options: DecoderOptions = serde_json::from_str(r#"{"max_body_size": 512}"#).unwrap();
        assert_eq!(options.max_body_size, 512);
    }
}
