use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::common::TagMap;
use crate::v1::{error::ModelError, wire::insert_unique};

/// Single-entry builder for inputs that carry a `tags` map.
pub trait TagsEntry: Sized {
    fn tags_mut(&mut self) -> &mut Option<TagMap>;

    /// Adds one tag. Fails if `key` is already present.
    fn add_tags_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let tags = self.tags_mut().get_or_insert_with(TagMap::new);
        insert_unique(tags, "tags", key, value.into())?;
        Ok(self)
    }

    /// Clears the map, so that `tags` is omitted from the request.
    fn clear_tags_entries(mut self) -> Self {
        *self.tags_mut() = None;
        self
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceInput {
    pub resource_arn: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceOutput {
    pub tags: Option<TagMap>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceInput {
    pub resource_arn: Option<String>,
    pub tags: Option<TagMap>,
}

impl TagsEntry for TagResourceInput {
    fn tags_mut(&mut self) -> &mut Option<TagMap> {
        &mut self.tags
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagResourceOutput {}

/// `tag_keys` are sent as repeated `tagKeys` query parameters.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UntagResourceInput {
    pub resource_arn: Option<String>,
    pub tag_keys: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UntagResourceOutput {}
