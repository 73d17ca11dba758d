//! S3 bucket inventory: bucket metadata, permissions, encryption, and
//! aggregated bucket statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{skip_serializing_none, DeserializeFromStr, SerializeDisplay};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

use super::common::{KeyValuePair, OrderBy, Timestamp};
use crate::v1::{error::ModelError, wire::insert_unique, wire::wire_enum};

/// Server-side encryption applied to a bucket or object.
///
/// `AwsKms` is transmitted as `aws:kms`, not as its symbolic name.
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
pub enum EncryptionType {
    #[strum(serialize = "NONE")]
    None,
    #[strum(serialize = "AES256")]
    Aes256,
    #[strum(serialize = "aws:kms")]
    AwsKms,
    #[strum(serialize = "UNKNOWN")]
    Unknown,
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
pub enum EffectivePermission {
    #[strum(serialize = "PUBLIC")]
    Public,
    #[strum(serialize = "NOT_PUBLIC")]
    NotPublic,
    #[strum(serialize = "UNKNOWN")]
    Unknown,
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
pub enum SharedAccess {
    #[strum(serialize = "EXTERNAL")]
    External,
    #[strum(serialize = "INTERNAL")]
    Internal,
    #[strum(serialize = "NOT_SHARED")]
    NotShared,
    #[strum(serialize = "UNKNOWN")]
    Unknown,
}

/// Whether the bucket policy denies unencrypted `PutObject` requests.
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
pub enum AllowsUnencryptedObjectUploads {
    #[strum(serialize = "TRUE")]
    True,
    #[strum(serialize = "FALSE")]
    False,
    #[strum(serialize = "UNKNOWN")]
    Unknown,
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
pub enum StorageClass {
    #[strum(serialize = "STANDARD")]
    Standard,
    #[strum(serialize = "REDUCED_REDUNDANCY")]
    ReducedRedundancy,
    #[strum(serialize = "STANDARD_IA")]
    StandardIa,
    #[strum(serialize = "INTELLIGENT_TIERING")]
    IntelligentTiering,
    #[strum(serialize = "DEEP_ARCHIVE")]
    DeepArchive,
    #[strum(serialize = "ONEZONE_IA")]
    OnezoneIa,
    #[strum(serialize = "GLACIER")]
    Glacier,
}

wire_enum!(
    EncryptionType,
    EffectivePermission,
    SharedAccess,
    AllowsUnencryptedObjectUploads,
    StorageClass
);

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ServerSideEncryption {
    pub encryption_type: Option<EncryptionType>,
    pub kms_master_key_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AccessControlList {
    pub allows_public_read_access: Option<bool>,
    pub allows_public_write_access: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BucketPolicy {
    pub allows_public_read_access: Option<bool>,
    pub allows_public_write_access: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BlockPublicAccess {
    pub block_public_acls: Option<bool>,
    pub block_public_policy: Option<bool>,
    pub ignore_public_acls: Option<bool>,
    pub restrict_public_buckets: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AccountLevelPermissions {
    pub block_public_access: Option<BlockPublicAccess>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BucketLevelPermissions {
    pub access_control_list: Option<AccessControlList>,
    pub block_public_access: Option<BlockPublicAccess>,
    pub bucket_policy: Option<BucketPolicy>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BucketPermissionConfiguration {
    pub account_level_permissions: Option<AccountLevelPermissions>,
    pub bucket_level_permissions: Option<BucketLevelPermissions>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BucketPublicAccess {
    pub effective_permission: Option<EffectivePermission>,
    pub permission_configuration: Option<BucketPermissionConfiguration>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationDetails {
    pub replicated: Option<bool>,
    pub replicated_externally: Option<bool>,
    pub replication_accounts: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ObjectCountByEncryptionType {
    pub customer_managed: Option<i64>,
    pub kms_managed: Option<i64>,
    pub s3_managed: Option<i64>,
    pub unencrypted: Option<i64>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BucketCountByEffectivePermission {
    pub publicly_accessible: Option<i64>,
    pub publicly_readable: Option<i64>,
    pub publicly_writable: Option<i64>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BucketCountByEncryptionType {
    pub kms_managed: Option<i64>,
    pub s3_managed: Option<i64>,
    pub unencrypted: Option<i64>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BucketCountBySharedAccessType {
    pub external: Option<i64>,
    pub internal: Option<i64>,
    pub not_shared: Option<i64>,
}

/// Condition on one bucket attribute in a `DescribeBuckets` query.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BucketCriteriaAdditionalProperties {
    pub eq: Option<Vec<String>>,
    pub gt: Option<i64>,
    pub gte: Option<i64>,
    pub lt: Option<i64>,
    pub lte: Option<i64>,
    pub neq: Option<Vec<String>>,
    pub prefix: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BucketSortCriteria {
    pub attribute_name: Option<String>,
    pub order_by: Option<OrderBy>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct BucketMetadata {
    pub account_id: Option<String>,
    pub allows_unencrypted_object_uploads: Option<AllowsUnencryptedObjectUploads>,
    pub bucket_arn: Option<String>,
    pub bucket_created_at: Option<Timestamp>,
    pub bucket_name: Option<String>,
    pub classifiable_object_count: Option<i64>,
    pub last_updated: Option<Timestamp>,
    pub object_count: Option<i64>,
    pub object_count_by_encryption_type: Option<ObjectCountByEncryptionType>,
    pub public_access: Option<BucketPublicAccess>,
    pub region: Option<String>,
    pub replication_details: Option<ReplicationDetails>,
    pub shared_access: Option<SharedAccess>,
    pub size_in_bytes: Option<i64>,
    pub size_in_bytes_compressed: Option<i64>,
    pub tags: Option<Vec<KeyValuePair>>,
    pub versioning: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DescribeBucketsInput {
    pub criteria: Option<BTreeMap<String, BucketCriteriaAdditionalProperties>>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub sort_criteria: Option<BucketSortCriteria>,
}

impl DescribeBucketsInput {
    /// Adds the condition for one bucket attribute. Fails if the attribute
    /// already has a condition.
    pub fn add_criteria_entry(
        mut self,
        key: impl Into<String>,
        value: BucketCriteriaAdditionalProperties,
    ) -> Result<Self, ModelError> {
        let criteria = self.criteria.get_or_insert_with(BTreeMap::new);
        insert_unique(criteria, "criteria", key, value)?;
        Ok(self)
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DescribeBucketsOutput {
    pub buckets: Option<Vec<BucketMetadata>>,
    pub next_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetBucketStatisticsInput {
    pub account_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetBucketStatisticsOutput {
    pub bucket_count: Option<i64>,
    pub bucket_count_by_effective_permission: Option<BucketCountByEffectivePermission>,
    pub bucket_count_by_encryption_type: Option<BucketCountByEncryptionType>,
    pub bucket_count_by_shared_access_type: Option<BucketCountBySharedAccessType>,
    pub classifiable_object_count: Option<i64>,
    pub last_updated: Option<Timestamp>,
    pub object_count: Option<i64>,
    pub size_in_bytes: Option<i64>,
    pub size_in_bytes_compressed: Option<i64>,
}
