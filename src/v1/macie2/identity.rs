//! Identities that performed the action behind a policy finding.

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
pub enum UserIdentityType {
    #[strum(serialize = "AssumedRole")]
    AssumedRole,
    #[strum(serialize = "IAMUser")]
    IamUser,
    #[strum(serialize = "FederatedUser")]
    FederatedUser,
    #[strum(serialize = "Root")]
    Root,
    #[strum(serialize = "AWSAccount")]
    AwsAccount,
    #[strum(serialize = "AWSService")]
    AwsService,
}

wire_enum!(UserIdentityType);

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SessionContextAttributes {
    pub creation_date: Option<Timestamp>,
    pub mfa_authenticated: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SessionIssuer {
    pub account_id: Option<String>,
    pub arn: Option<String>,
    pub principal_id: Option<String>,
    pub r#type: Option<String>,
    pub user_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub attributes: Option<SessionContextAttributes>,
    pub session_issuer: Option<SessionIssuer>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AssumedRole {
    pub access_key_id: Option<String>,
    pub account_id: Option<String>,
    pub arn: Option<String>,
    pub principal_id: Option<String>,
    pub session_context: Option<SessionContext>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct FederatedUser {
    pub access_key_id: Option<String>,
    pub account_id: Option<String>,
    pub arn: Option<String>,
    pub principal_id: Option<String>,
    pub session_context: Option<SessionContext>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AwsAccount {
    pub account_id: Option<String>,
    pub principal_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AwsService {
    pub invoked_by: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct IamUser {
    pub account_id: Option<String>,
    pub arn: Option<String>,
    pub principal_id: Option<String>,
    pub user_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentityRoot {
    pub account_id: Option<String>,
    pub arn: Option<String>,
    pub principal_id: Option<String>,
}

/// Only the member matching `type` is expected to be set.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub assumed_role: Option<AssumedRole>,
    pub aws_account: Option<AwsAccount>,
    pub aws_service: Option<AwsService>,
    pub federated_user: Option<FederatedUser>,
    pub iam_user: Option<IamUser>,
    pub root: Option<UserIdentityRoot>,
    pub r#type: Option<UserIdentityType>,
}
