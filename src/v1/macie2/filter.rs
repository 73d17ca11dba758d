//! Saved findings filters and suppression rules.

use serde::{Deserialize, Serialize};
use serde_with::{skip_serializing_none, DeserializeFromStr, SerializeDisplay};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

use super::{common::TagMap, finding::FindingCriteria, tag::TagsEntry};
use crate::v1::wire::wire_enum;

/// `Archive` makes the filter a suppression rule.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum FindingsFilterAction {
    #[strum(serialize = "ARCHIVE")]
    Archive,
    #[strum(serialize = "NOOP")]
    Noop,
}

wire_enum!(FindingsFilterAction);

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FindingsFilterListItem {
    pub action: Option<FindingsFilterAction>,
    pub arn: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub tags: Option<TagMap>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateFindingsFilterInput {
    pub action: Option<FindingsFilterAction>,
    pub client_token: Option<String>,
    pub description: Option<String>,
    pub finding_criteria: Option<FindingCriteria>,
    pub name: Option<String>,
    pub position: Option<i32>,
    pub tags: Option<TagMap>,
}

impl TagsEntry for CreateFindingsFilterInput {
    fn tags_mut(&mut self) -> &mut Option<TagMap> {
        &mut self.tags
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateFindingsFilterOutput {
    pub arn: Option<String>,
    pub id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DeleteFindingsFilterInput {
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DeleteFindingsFilterOutput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingsFilterInput {
    pub id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingsFilterOutput {
    pub action: Option<FindingsFilterAction>,
    pub arn: Option<String>,
    pub description: Option<String>,
    pub finding_criteria: Option<FindingCriteria>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub position: Option<i32>,
    pub tags: Option<TagMap>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListFindingsFiltersInput {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListFindingsFiltersOutput {
    pub findings_filter_list_items: Option<Vec<FindingsFilterListItem>>,
    pub next_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFindingsFilterInput {
    pub action: Option<FindingsFilterAction>,
    pub description: Option<String>,
    pub finding_criteria: Option<FindingCriteria>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub position: Option<i32>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFindingsFilterOutput {
    pub arn: Option<String>,
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::v1::macie2::finding::CriterionAdditionalProperties;

    #[test]
    fn suppression_rule_body() {
        let input = CreateFindingsFilterInput {
            action: Some(FindingsFilterAction::Archive),
            name: Some("archive-low".to_string()),
            position: Some(1),
            finding_criteria: Some(
                FindingCriteria::default()
                    .add_criterion_entry(
                        "severity.description",
                        CriterionAdditionalProperties::equals(["Low"]),
                    )
                    .unwrap(),
            ),
            ..Default::default()
        }
        .add_tags_entry("owner", "secops")
        .unwrap();

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "action": "ARCHIVE",
                "findingCriteria": {"criterion": {"severity.description": {"eq": ["Low"]}}},
                "name": "archive-low",
                "position": 1,
                "tags": {"owner": "secops"}
            })
        );
    }

    #[test]
    fn filter_list_items() {
        let output: ListFindingsFiltersOutput = serde_json::from_value(json!({
            "findingsFilterListItems": [
                {"action": "NOOP", "id": "8a3c0a2b", "name": "watch"},
                {"action": "ARCHIVE", "id": "b1e2", "name": "suppress", "tags": {}}
            ],
            "nextToken": null
        }))
        .unwrap();

        let items = output.findings_filter_list_items.unwrap();
        assert_eq!(items[0].action, Some(FindingsFilterAction::Noop));
        assert_eq!(items[0].tags, None);
        assert_eq!(items[1].tags, Some(TagMap::new()));
        assert_eq!(output.next_token, None);
    }
}
