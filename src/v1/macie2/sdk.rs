//! Conversions between these enums and their `aws-sdk-macie2` counterparts.
//!
//! Both sides agree on wire tokens, so conversion goes through the token. A
//! token the SDK holds as `Unknown` converts back only if it is part of our
//! vocabulary.

use aws_sdk_macie2::types as sdk;

use super::{
    account::RelationshipStatus,
    bucket::{EncryptionType, StorageClass},
    common::OrderBy,
    filter::FindingsFilterAction,
    finding::{FindingType, GroupBy},
    identity::UserIdentityType,
    job::{JobStatus, JobType, ScopeFilterKey},
    session::{FindingPublishingFrequency, MacieStatus},
    usage::UsageStatisticsFilterKey,
};
use crate::v1::{error::ModelError, wire::WireEnum};

macro_rules! sdk_enum {
    ($($ours:ident => $theirs:ident),+ $(,)?) => {
        $(
            impl From<$ours> for sdk::$theirs {
                fn from(value: $ours) -> Self {
                    sdk::$theirs::from(value.as_wire())
                }
            }

            impl TryFrom<&sdk::$theirs> for $ours {
                type Error = ModelError;

                fn try_from(value: &sdk::$theirs) -> Result<Self, Self::Error> {
                    $ours::from_wire(value.as_str())
                }
            }
        )+
    };
}

sdk_enum!(
    EncryptionType => EncryptionType,
    FindingType => FindingType,
    GroupBy => GroupBy,
    JobStatus => JobStatus,
    ScopeFilterKey => ScopeFilterKey,
    RelationshipStatus => RelationshipStatus,
    StorageClass => StorageClass,
    UsageStatisticsFilterKey => UsageStatisticsFilterKey,
    UserIdentityType => UserIdentityType,
    MacieStatus => MacieStatus,
    JobType => JobType,
    FindingPublishingFrequency => FindingPublishingFrequency,
    OrderBy => OrderBy,
    FindingsFilterAction => FindingsFilterAction,
);

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn kms_encryption_maps_to_sdk_variant() {
        let theirs: sdk::EncryptionType = EncryptionType::AwsKms.into();
        assert_eq!(theirs, sdk::EncryptionType::AwsKms);
        assert_eq!(theirs.as_str(), "aws:kms");
        assert_eq!(EncryptionType::try_from(&theirs), Ok(EncryptionType::AwsKms));
    }

    #[test]
    fn every_variant_survives_the_sdk() {
        for ours in FindingType::iter() {
            let theirs = sdk::FindingType::from(ours);
            assert_eq!(FindingType::try_from(&theirs), Ok(ours));
        }
        for ours in RelationshipStatus::iter() {
            let theirs = sdk::RelationshipStatus::from(ours);
            assert_eq!(RelationshipStatus::try_from(&theirs), Ok(ours));
        }
        for ours in StorageClass::iter() {
            let theirs = sdk::StorageClass::from(ours);
            assert_eq!(StorageClass::try_from(&theirs), Ok(ours));
        }
    }

    #[test]
    fn unknown_sdk_token_is_rejected() {
        let theirs = sdk::JobStatus::from("ARCHIVED");
        assert_eq!(
            JobStatus::try_from(&theirs),
            Err(ModelError::UnknownEnumValue {
                enum_name: "JobStatus",
                value: "ARCHIVED".to_string()
            })
        );
    }
}
