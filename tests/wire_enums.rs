use std::{
    collections::hash_map::DefaultHasher,
    fmt::Debug,
    hash::{Hash, Hasher},
};

use macie2_model::prelude::*;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use strum::IntoEnumIterator;

fn assert_round_trips<T>()
where
    T: WireEnum + Debug + PartialEq + Serialize + DeserializeOwned + std::str::FromStr + ToString,
{
    for variant in T::iter() {
        let token = variant.as_wire();
        assert_eq!(variant.to_string(), token);
        assert_eq!(T::from_wire(token).ok(), Some(variant), "{}::{token}", T::NAME);
        assert_eq!(token.parse::<T>().ok(), Some(variant));

        let encoded = serde_json::to_value(variant).unwrap();
        assert_eq!(encoded, Value::String(token.to_string()));
        assert_eq!(serde_json::from_value::<T>(encoded).unwrap(), variant);
    }

    let err = T::from_wire("").unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownEnumValue {
            enum_name: T::NAME,
            value: String::new()
        }
    );
    assert!(T::from_wire("NOT_A_TOKEN").is_err());
    assert!(serde_json::from_value::<T>(Value::Null).is_err());
    assert!(serde_json::from_value::<T>(json!("")).is_err());
}

#[test]
fn every_enum_round_trips() {
    assert_round_trips::<AdminStatus>();
    assert_round_trips::<AllowsUnencryptedObjectUploads>();
    assert_round_trips::<Currency>();
    assert_round_trips::<DayOfWeek>();
    assert_round_trips::<EffectivePermission>();
    assert_round_trips::<EncryptionType>();
    assert_round_trips::<ErrorCode>();
    assert_round_trips::<FindingActionType>();
    assert_round_trips::<FindingCategory>();
    assert_round_trips::<FindingPublishingFrequency>();
    assert_round_trips::<FindingStatisticsSortAttributeName>();
    assert_round_trips::<FindingType>();
    assert_round_trips::<FindingsFilterAction>();
    assert_round_trips::<GroupBy>();
    assert_round_trips::<JobComparator>();
    assert_round_trips::<JobStatus>();
    assert_round_trips::<JobType>();
    assert_round_trips::<ListJobsFilterKey>();
    assert_round_trips::<ListJobsSortAttributeName>();
    assert_round_trips::<MacieStatus>();
    assert_round_trips::<OperationName>();
    assert_round_trips::<OrderBy>();
    assert_round_trips::<RelationshipStatus>();
    assert_round_trips::<ScopeFilterKey>();
    assert_round_trips::<SensitiveDataItemCategory>();
    assert_round_trips::<SeverityDescription>();
    assert_round_trips::<SharedAccess>();
    assert_round_trips::<StorageClass>();
    assert_round_trips::<TagTarget>();
    assert_round_trips::<Unit>();
    assert_round_trips::<UsageStatisticsFilterKey>();
    assert_round_trips::<UsageStatisticsSortKey>();
    assert_round_trips::<UsageType>();
    assert_round_trips::<UserIdentityType>();
}

#[test]
fn service_vocabularies_are_exact() {
    assert_eq!(EncryptionType::values(), ["NONE", "AES256", "aws:kms", "UNKNOWN"]);
    assert_eq!(
        FindingType::values(),
        [
            "SensitiveData:S3Object/Multiple",
            "SensitiveData:S3Object/Financial",
            "SensitiveData:S3Object/Personal",
            "SensitiveData:S3Object/Credentials",
            "SensitiveData:S3Object/CustomIdentifier",
            "Policy:IAMUser/S3BucketPublic",
            "Policy:IAMUser/S3BucketSharedExternally",
            "Policy:IAMUser/S3BucketReplicatedExternally",
            "Policy:IAMUser/S3BucketEncryptionDisabled",
            "Policy:IAMUser/S3BlockPublicAccessDisabled",
        ]
    );
    assert_eq!(
        GroupBy::values(),
        [
            "resourcesAffected.s3Bucket.name",
            "type",
            "classificationDetails.jobId",
            "severity.description",
        ]
    );
    assert_eq!(
        JobStatus::values(),
        ["RUNNING", "PAUSED", "CANCELLED", "COMPLETE", "IDLE"]
    );
    assert_eq!(
        ScopeFilterKey::values(),
        [
            "BUCKET_CREATION_DATE",
            "OBJECT_EXTENSION",
            "OBJECT_LAST_MODIFIED_DATE",
            "OBJECT_SIZE",
            "TAG",
        ]
    );
    assert_eq!(
        RelationshipStatus::values(),
        [
            "Enabled",
            "Paused",
            "Invited",
            "Created",
            "Removed",
            "Resigned",
            "EmailVerificationInProgress",
            "EmailVerificationFailed",
            "RegionDisabled",
            "AccountSuspended",
        ]
    );
    assert_eq!(
        StorageClass::values(),
        [
            "STANDARD",
            "REDUCED_REDUNDANCY",
            "STANDARD_IA",
            "INTELLIGENT_TIERING",
            "DEEP_ARCHIVE",
            "ONEZONE_IA",
            "GLACIER",
        ]
    );
    assert_eq!(UsageStatisticsFilterKey::values(), ["accountId"]);
    assert_eq!(
        UserIdentityType::values(),
        [
            "AssumedRole",
            "IAMUser",
            "FederatedUser",
            "Root",
            "AWSAccount",
            "AWSService",
        ]
    );
}

#[test]
fn kms_encryption_token() {
    assert_eq!(EncryptionType::AwsKms.to_string(), "aws:kms");
    assert_eq!(EncryptionType::from_wire("aws:kms"), Ok(EncryptionType::AwsKms));

    let err = EncryptionType::from_wire("AWS_KMS").unwrap_err();
    assert_eq!(
        err.to_string(),
        "UnknownEnumValue: 'AWS_KMS' is not a valid EncryptionType"
    );
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn account_detail_value_semantics() {
    let a = AccountDetail::new("111111111111", "a@example.com");
    let b = AccountDetail::new("111111111111", "a@example.com");
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let c = AccountDetail {
        email: Some("b@example.com".to_string()),
        ..b.clone()
    };
    assert_ne!(a, c);
}

#[test]
fn finding_criteria_rejects_duplicate_keys() {
    let criteria = FindingCriteria::default()
        .add_criterion_entry("type", CriterionAdditionalProperties::equals(["Policy:IAMUser/S3BucketPublic"]))
        .unwrap();
    let err = criteria
        .add_criterion_entry("type", CriterionAdditionalProperties::default())
        .unwrap_err();
    assert_eq!(
        err,
        ModelError::DuplicateKey {
            field: "criterion",
            key: "type".to_string()
        }
    );
}

#[test]
fn unset_and_empty_collections_serialize_differently() {
    let unset = CreateInvitationsInput::default();
    let empty = CreateInvitationsInput {
        account_ids: Some(Vec::new()),
        ..Default::default()
    };
    assert_eq!(serde_json::to_value(&unset).unwrap(), json!({}));
    assert_eq!(serde_json::to_value(&empty).unwrap(), json!({"accountIds": []}));
    assert_ne!(unset, empty);
}
