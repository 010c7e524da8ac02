// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

/// Header carrying the URL of a newly created resource.
pub const LOCATION_HEADER: &str = "Location";
/// Header carrying the total number of items behind a paginated listing.
pub const TOTAL_COUNT_HEADER: &str = "Total-Count";
pub const MAX_BODY_SIZE: u64 = 10 * 1024 * 1024; // 10 MB
