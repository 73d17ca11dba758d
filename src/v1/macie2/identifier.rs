use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{
    common::{TagMap, Timestamp},
    tag::TagsEntry,
};

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CustomDataIdentifierSummary {
    pub arn: Option<String>,
    pub created_at: Option<Timestamp>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Summary returned by a batch lookup; `deleted` marks identifiers that were
/// removed but are still referenced by jobs.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetCustomDataIdentifierSummary {
    pub arn: Option<String>,
    pub created_at: Option<Timestamp>,
    pub deleted: Option<bool>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomDataIdentifierInput {
    pub client_token: Option<String>,
    pub description: Option<String>,
    pub ignore_words: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub maximum_match_distance: Option<i32>,
    pub name: Option<String>,
    pub regex: Option<String>,
    pub tags: Option<TagMap>,
}

impl TagsEntry for CreateCustomDataIdentifierInput {
    fn tags_mut(&mut self) -> &mut Option<TagMap> {
        &mut self.tags
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomDataIdentifierOutput {
    pub custom_data_identifier_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetCustomDataIdentifiersInput {
    pub ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetCustomDataIdentifiersOutput {
    pub custom_data_identifiers: Option<Vec<BatchGetCustomDataIdentifierSummary>>,
    pub not_found_identifier_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCustomDataIdentifierInput {
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DeleteCustomDataIdentifierOutput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetCustomDataIdentifierInput {
    pub id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetCustomDataIdentifierOutput {
    pub arn: Option<String>,
    pub created_at: Option<Timestamp>,
    pub deleted: Option<bool>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub ignore_words: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub maximum_match_distance: Option<i32>,
    pub name: Option<String>,
    pub regex: Option<String>,
    pub tags: Option<TagMap>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomDataIdentifiersInput {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomDataIdentifiersOutput {
    pub items: Option<Vec<CustomDataIdentifierSummary>>,
    pub next_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TestCustomDataIdentifierInput {
    pub ignore_words: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub maximum_match_distance: Option<i32>,
    pub regex: Option<String>,
    pub sample_text: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TestCustomDataIdentifierOutput {
    pub match_count: Option<i32>,
}
