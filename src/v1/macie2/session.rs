use serde::{Deserialize, Serialize};
use serde_with::{skip_serializing_none, DeserializeFromStr, SerializeDisplay};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

use super::common::Timestamp;
use crate::v1::wire::wire_enum;

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
pub enum MacieStatus {
    #[strum(serialize = "PAUSED")]
    Paused,
    #[strum(serialize = "ENABLED")]
    Enabled,
}

/// How often updated findings are published to EventBridge.
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
pub enum FindingPublishingFrequency {
    #[strum(serialize = "FIFTEEN_MINUTES")]
    FifteenMinutes,
    #[strum(serialize = "ONE_HOUR")]
    OneHour,
    #[strum(serialize = "SIX_HOURS")]
    SixHours,
}

wire_enum!(MacieStatus, FindingPublishingFrequency);

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct EnableMacieInput {
    pub client_token: Option<String>,
    pub finding_publishing_frequency: Option<FindingPublishingFrequency>,
    pub status: Option<MacieStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EnableMacieOutput {}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DisableMacieInput {}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DisableMacieOutput {}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GetMacieSessionInput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetMacieSessionOutput {
    pub created_at: Option<Timestamp>,
    pub finding_publishing_frequency: Option<FindingPublishingFrequency>,
    pub service_role: Option<String>,
    pub status: Option<MacieStatus>,
    pub updated_at: Option<Timestamp>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMacieSessionInput {
    pub finding_publishing_frequency: Option<FindingPublishingFrequency>,
    pub status: Option<MacieStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UpdateMacieSessionOutput {}

/// Enables or suspends Macie for a member account, from its master account.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberSessionInput {
    pub id: Option<String>,
    pub status: Option<MacieStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UpdateMemberSessionOutput {}
