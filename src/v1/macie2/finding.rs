//! Findings: the sensitive-data and policy issues Macie reports, the
//! criteria used to select them, and aggregated finding statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{skip_serializing_none, DeserializeFromStr, SerializeDisplay};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

use super::{
    bucket::{BucketPublicAccess, ServerSideEncryption, StorageClass},
    common::{KeyValuePair, OrderBy, SortCriteria, Timestamp},
    identity::UserIdentity,
};
use crate::v1::{
    error::ModelError,
    wire::{insert_unique, wire_enum},
};

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
pub enum FindingType {
    #[strum(serialize = "SensitiveData:S3Object/Multiple")]
    SensitiveDataS3ObjectMultiple,
    #[strum(serialize = "SensitiveData:S3Object/Financial")]
    SensitiveDataS3ObjectFinancial,
    #[strum(serialize = "SensitiveData:S3Object/Personal")]
    SensitiveDataS3ObjectPersonal,
    #[strum(serialize = "SensitiveData:S3Object/Credentials")]
    SensitiveDataS3ObjectCredentials,
    #[strum(serialize = "SensitiveData:S3Object/CustomIdentifier")]
    SensitiveDataS3ObjectCustomIdentifier,
    #[strum(serialize = "Policy:IAMUser/S3BucketPublic")]
    PolicyIamUserS3BucketPublic,
    #[strum(serialize = "Policy:IAMUser/S3BucketSharedExternally")]
    PolicyIamUserS3BucketSharedExternally,
    #[strum(serialize = "Policy:IAMUser/S3BucketReplicatedExternally")]
    PolicyIamUserS3BucketReplicatedExternally,
    #[strum(serialize = "Policy:IAMUser/S3BucketEncryptionDisabled")]
    PolicyIamUserS3BucketEncryptionDisabled,
    #[strum(serialize = "Policy:IAMUser/S3BlockPublicAccessDisabled")]
    PolicyIamUserS3BlockPublicAccessDisabled,
}

impl FindingType {
    pub fn category(self) -> FindingCategory {
        match self {
            Self::SensitiveDataS3ObjectMultiple
            | Self::SensitiveDataS3ObjectFinancial
            | Self::SensitiveDataS3ObjectPersonal
            | Self::SensitiveDataS3ObjectCredentials
            | Self::SensitiveDataS3ObjectCustomIdentifier => FindingCategory::Classification,
            Self::PolicyIamUserS3BucketPublic
            | Self::PolicyIamUserS3BucketSharedExternally
            | Self::PolicyIamUserS3BucketReplicatedExternally
            | Self::PolicyIamUserS3BucketEncryptionDisabled
            | Self::PolicyIamUserS3BlockPublicAccessDisabled => FindingCategory::Policy,
        }
    }
}

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
pub enum FindingCategory {
    #[strum(serialize = "CLASSIFICATION")]
    Classification,
    #[strum(serialize = "POLICY")]
    Policy,
}

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
pub enum SeverityDescription {
    #[strum(serialize = "Low")]
    Low,
    #[strum(serialize = "Medium")]
    Medium,
    #[strum(serialize = "High")]
    High,
}

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
pub enum FindingActionType {
    #[strum(serialize = "AWS_API_CALL")]
    AwsApiCall,
}

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
pub enum SensitiveDataItemCategory {
    #[strum(serialize = "FINANCIAL_INFORMATION")]
    FinancialInformation,
    #[strum(serialize = "PERSONAL_INFORMATION")]
    PersonalInformation,
    #[strum(serialize = "CREDENTIALS")]
    Credentials,
    #[strum(serialize = "CUSTOM_IDENTIFIER")]
    CustomIdentifier,
}

/// Finding property that `GetFindingStatistics` groups by. Tokens are
/// property paths, not constants.
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
pub enum GroupBy {
    #[strum(serialize = "resourcesAffected.s3Bucket.name")]
    ResourcesAffectedS3BucketName,
    #[strum(serialize = "type")]
    Type,
    #[strum(serialize = "classificationDetails.jobId")]
    ClassificationDetailsJobId,
    #[strum(serialize = "severity.description")]
    SeverityDescription,
}

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
pub enum FindingStatisticsSortAttributeName {
    #[strum(serialize = "groupKey")]
    GroupKey,
    #[strum(serialize = "count")]
    Count,
}

wire_enum!(
    FindingType,
    FindingCategory,
    SeverityDescription,
    FindingActionType,
    SensitiveDataItemCategory,
    GroupBy,
    FindingStatisticsSortAttributeName
);

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Severity {
    pub description: Option<SeverityDescription>,
    pub score: Option<i64>,
}

// Classification details

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResultStatus {
    pub code: Option<String>,
    pub reason: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DefaultDetection {
    pub count: Option<i64>,
    pub r#type: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SensitiveDataItem {
    pub category: Option<SensitiveDataItemCategory>,
    pub detections: Option<Vec<DefaultDetection>>,
    pub total_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CustomDetection {
    pub arn: Option<String>,
    pub count: Option<i64>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CustomDataIdentifiers {
    pub detections: Option<Vec<CustomDetection>>,
    pub total_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub custom_data_identifiers: Option<CustomDataIdentifiers>,
    pub mime_type: Option<String>,
    pub sensitive_data: Option<Vec<SensitiveDataItem>>,
    pub size_classified: Option<i64>,
    pub status: Option<ClassificationResultStatus>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationDetails {
    pub detailed_results_location: Option<String>,
    pub job_arn: Option<String>,
    pub job_id: Option<String>,
    pub result: Option<ClassificationResult>,
}

// Policy details

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ApiCallDetails {
    pub api: Option<String>,
    pub api_service_name: Option<String>,
    pub first_seen: Option<Timestamp>,
    pub last_seen: Option<Timestamp>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FindingAction {
    pub action_type: Option<FindingActionType>,
    pub api_call_details: Option<ApiCallDetails>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DomainDetails {
    pub domain_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct IpCity {
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct IpCountry {
    pub code: Option<String>,
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IpGeoLocation {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct IpOwner {
    pub asn: Option<String>,
    pub asn_org: Option<String>,
    pub isp: Option<String>,
    pub org: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IpAddressDetails {
    pub ip_address_v4: Option<String>,
    pub ip_city: Option<IpCity>,
    pub ip_country: Option<IpCountry>,
    pub ip_geo_location: Option<IpGeoLocation>,
    pub ip_owner: Option<IpOwner>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FindingActor {
    pub domain_details: Option<DomainDetails>,
    pub ip_address_details: Option<IpAddressDetails>,
    pub user_identity: Option<UserIdentity>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDetails {
    pub action: Option<FindingAction>,
    pub actor: Option<FindingActor>,
}

// Affected resources

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct S3BucketOwner {
    pub display_name: Option<String>,
    pub id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct S3Bucket {
    pub arn: Option<String>,
    pub created_at: Option<Timestamp>,
    pub default_server_side_encryption: Option<ServerSideEncryption>,
    pub name: Option<String>,
    pub owner: Option<S3BucketOwner>,
    pub public_access: Option<BucketPublicAccess>,
    pub tags: Option<Vec<KeyValuePair>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct S3Object {
    pub bucket_arn: Option<String>,
    pub e_tag: Option<String>,
    pub extension: Option<String>,
    pub key: Option<String>,
    pub last_modified: Option<Timestamp>,
    pub path: Option<String>,
    pub public_access: Option<bool>,
    pub server_side_encryption: Option<ServerSideEncryption>,
    pub size: Option<i64>,
    pub storage_class: Option<StorageClass>,
    pub tags: Option<Vec<KeyValuePair>>,
    pub version_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesAffected {
    pub s3_bucket: Option<S3Bucket>,
    pub s3_object: Option<S3Object>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub account_id: Option<String>,
    pub archived: Option<bool>,
    pub category: Option<FindingCategory>,
    pub classification_details: Option<ClassificationDetails>,
    pub count: Option<i64>,
    pub created_at: Option<Timestamp>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub partition: Option<String>,
    pub policy_details: Option<PolicyDetails>,
    pub region: Option<String>,
    pub resources_affected: Option<ResourcesAffected>,
    pub sample: Option<bool>,
    pub schema_version: Option<String>,
    pub severity: Option<Severity>,
    pub title: Option<String>,
    pub r#type: Option<FindingType>,
    pub updated_at: Option<Timestamp>,
}

// Criteria

/// Operators applied to one finding property.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CriterionAdditionalProperties {
    pub eq: Option<Vec<String>>,
    pub gt: Option<i64>,
    pub gte: Option<i64>,
    pub lt: Option<i64>,
    pub lte: Option<i64>,
    pub neq: Option<Vec<String>>,
}

impl CriterionAdditionalProperties {
    pub fn equals<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            eq: Some(values.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

/// Finding selection, keyed by finding property path (e.g.
/// `severity.description`).
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FindingCriteria {
    pub criterion: Option<BTreeMap<String, CriterionAdditionalProperties>>,
}

impl FindingCriteria {
    /// Adds the condition for one property. A property can only be
    /// constrained once; a second entry for the same key is an error, never
    /// an overwrite.
    pub fn add_criterion_entry(
        mut self,
        key: impl Into<String>,
        value: CriterionAdditionalProperties,
    ) -> Result<Self, ModelError> {
        let criterion = self.criterion.get_or_insert_with(BTreeMap::new);
        insert_unique(criterion, "criterion", key, value)?;
        Ok(self)
    }

    pub fn clear_criterion_entries(mut self) -> Self {
        self.criterion = None;
        self
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FindingStatisticsSortCriteria {
    pub attribute_name: Option<FindingStatisticsSortAttributeName>,
    pub order_by: Option<OrderBy>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GroupCount {
    pub count: Option<i64>,
    pub group_key: Option<String>,
}

// Operations

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveFindingsInput {
    pub finding_ids: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ArchiveFindingsOutput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UnarchiveFindingsInput {
    pub finding_ids: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UnarchiveFindingsOutput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateSampleFindingsInput {
    pub finding_types: Option<Vec<FindingType>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CreateSampleFindingsOutput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingsInput {
    pub finding_ids: Option<Vec<String>>,
    pub sort_criteria: Option<SortCriteria>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingsOutput {
    pub findings: Option<Vec<Finding>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListFindingsInput {
    pub finding_criteria: Option<FindingCriteria>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub sort_criteria: Option<SortCriteria>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListFindingsOutput {
    pub finding_ids: Option<Vec<String>>,
    pub next_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingStatisticsInput {
    pub finding_criteria: Option<FindingCriteria>,
    pub group_by: Option<GroupBy>,
    pub size: Option<i32>,
    pub sort_criteria: Option<FindingStatisticsSortCriteria>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetFindingStatisticsOutput {
    pub counts_by_group: Option<Vec<GroupCount>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::v1::{macie2::bucket::EncryptionType, wire::WireEnum};

    #[test]
    fn criterion_entry_rejects_duplicate_key() {
        let criteria = FindingCriteria::default()
            .add_criterion_entry(
                "severity.description",
                CriterionAdditionalProperties::equals(["High"]),
            )
            .unwrap();

        let err = criteria
            .clone()
            .add_criterion_entry(
                "severity.description",
                CriterionAdditionalProperties::equals(["Low"]),
            )
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateKey {
                field: "criterion",
                key: "severity.description".to_string()
            }
        );
        assert_eq!(
            criteria.criterion.as_ref().unwrap()["severity.description"].eq,
            Some(vec!["High".to_string()])
        );
    }

    #[test]
    fn cleared_criteria_differ_from_empty_criteria() {
        let empty = FindingCriteria {
            criterion: Some(BTreeMap::new()),
        };
        let cleared = empty.clone().clear_criterion_entries();
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!({"criterion": {}}));
        assert_eq!(serde_json::to_value(&cleared).unwrap(), json!({}));
        assert_ne!(empty, cleared);
    }

    #[test]
    fn list_findings_body() {
        let input = ListFindingsInput {
            finding_criteria: Some(
                FindingCriteria::default()
                    .add_criterion_entry(
                        "category",
                        CriterionAdditionalProperties::equals([FindingCategory::Policy.as_wire()]),
                    )
                    .unwrap()
                    .add_criterion_entry(
                        "count",
                        CriterionAdditionalProperties {
                            gte: Some(2),
                            ..Default::default()
                        },
                    )
                    .unwrap(),
            ),
            sort_criteria: Some(SortCriteria {
                attribute_name: Some("updatedAt".to_string()),
                order_by: Some(OrderBy::Desc),
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "findingCriteria": {
                    "criterion": {
                        "category": {"eq": ["POLICY"]},
                        "count": {"gte": 2}
                    }
                },
                "sortCriteria": {"attributeName": "updatedAt", "orderBy": "DESC"}
            })
        );
    }

    #[test]
    fn finding_types_and_categories() {
        for finding_type in FindingType::iter() {
            let expected = if finding_type.as_wire().starts_with("Policy:") {
                FindingCategory::Policy
            } else {
                FindingCategory::Classification
            };
            assert_eq!(finding_type.category(), expected);
        }
        assert_eq!(
            GroupBy::from_wire("resourcesAffected.s3Bucket.name"),
            Ok(GroupBy::ResourcesAffectedS3BucketName)
        );
        assert!(GroupBy::from_wire("Type").is_err());
    }

    #[test]
    fn sensitive_data_finding() {
        let finding: Finding = serde_json::from_value(json!({
            "accountId": "111111111111",
            "archived": false,
            "category": "CLASSIFICATION",
            "classificationDetails": {
                "jobId": "3ce05dbb7ec5505def334104bf1d9c2a",
                "result": {
                    "mimeType": "text/csv",
                    "sensitiveData": [{
                        "category": "PERSONAL_INFORMATION",
                        "detections": [{"count": 12, "type": "USA_SOCIAL_SECURITY_NUMBER"}],
                        "totalCount": 12
                    }],
                    "sizeClassified": 2048,
                    "status": {"code": "COMPLETE"}
                }
            },
            "count": 1,
            "createdAt": "2020-05-15T20:46:56.000Z",
            "id": "90b7c5a5c33c5bd0c0fc6d7c1dd1bc77",
            "resourcesAffected": {
                "s3Object": {
                    "key": "data/customers.csv",
                    "storageClass": "STANDARD_IA",
                    "serverSideEncryption": {"encryptionType": "aws:kms"}
                }
            },
            "severity": {"description": "High", "score": 3},
            "type": "SensitiveData:S3Object/Personal"
        }))
        .unwrap();

        assert_eq!(finding.r#type, Some(FindingType::SensitiveDataS3ObjectPersonal));
        let object = finding.resources_affected.unwrap().s3_object.unwrap();
        assert_eq!(object.storage_class, Some(StorageClass::StandardIa));
        assert_eq!(
            object.server_side_encryption.unwrap().encryption_type,
            Some(EncryptionType::AwsKms)
        );
        let sensitive_data = finding
            .classification_details
            .and_then(|details| details.result)
            .and_then(|result| result.sensitive_data)
            .unwrap();
        let item = &sensitive_data[0];
        assert_eq!(item.category, Some(SensitiveDataItemCategory::PersonalInformation));
        assert_eq!(item.total_count, Some(12));
    }

    #[test]
    fn policy_finding_with_geo_location() {
        let finding: Finding = serde_json::from_value(json!({
            "category": "POLICY",
            "policyDetails": {
                "action": {
                    "actionType": "AWS_API_CALL",
                    "apiCallDetails": {"api": "PutBucketPolicy", "apiServiceName": "s3.amazonaws.com"}
                },
                "actor": {
                    "ipAddressDetails": {
                        "ipAddressV4": "192.0.2.10",
                        "ipGeoLocation": {"lat": 47.61, "lon": -122.33}
                    },
                    "userIdentity": {"type": "Root", "root": {"accountId": "111111111111"}}
                }
            },
            "type": "Policy:IAMUser/S3BucketPublic"
        }))
        .unwrap();

        let actor = finding.policy_details.unwrap().actor.unwrap();
        let location = actor.ip_address_details.unwrap().ip_geo_location.unwrap();
        assert_eq!(location.lat, Some(47.61));
        assert_eq!(
            actor.user_identity.unwrap().root.unwrap().account_id.as_deref(),
            Some("111111111111")
        );
    }
}
