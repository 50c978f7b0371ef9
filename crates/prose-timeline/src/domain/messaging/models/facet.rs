// prose-core-client/prose-timeline
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::SenderId;

/// A rich-text annotation on a byte range of the message text. The timeline passes facets
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub range: Range<usize>,
    pub feature: FacetFeature,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FacetFeature {
    Mention(SenderId),
    Link(String),
    Tag(String),
}
