//! Multi-account membership: invitations, member accounts, the master
//! account, and AWS Organizations delegated administration.

use serde::{Deserialize, Serialize};
use serde_with::{skip_serializing_none, DeserializeFromStr, SerializeDisplay};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

use super::{
    common::{TagMap, Timestamp},
    tag::TagsEntry,
};
use crate::v1::wire::wire_enum;

/// Relationship between a member account and its master account.
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
pub enum RelationshipStatus {
    #[strum(serialize = "Enabled")]
    Enabled,
    #[strum(serialize = "Paused")]
    Paused,
    #[strum(serialize = "Invited")]
    Invited,
    #[strum(serialize = "Created")]
    Created,
    #[strum(serialize = "Removed")]
    Removed,
    #[strum(serialize = "Resigned")]
    Resigned,
    #[strum(serialize = "EmailVerificationInProgress")]
    EmailVerificationInProgress,
    #[strum(serialize = "EmailVerificationFailed")]
    EmailVerificationFailed,
    #[strum(serialize = "RegionDisabled")]
    RegionDisabled,
    #[strum(serialize = "AccountSuspended")]
    AccountSuspended,
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
pub enum AdminStatus {
    #[strum(serialize = "ENABLED")]
    Enabled,
    #[strum(serialize = "DISABLING_IN_PROGRESS")]
    DisablingInProgress,
}

/// Why an account could not be processed by a batch request.
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
pub enum ErrorCode {
    #[strum(serialize = "ClientError")]
    ClientError,
    #[strum(serialize = "InternalError")]
    InternalError,
}

wire_enum!(RelationshipStatus, AdminStatus, ErrorCode);

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetail {
    pub account_id: Option<String>,
    pub email: Option<String>,
}

impl AccountDetail {
    pub fn new(account_id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            email: Some(email.into()),
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Invitation {
    pub account_id: Option<String>,
    pub invitation_id: Option<String>,
    pub invited_at: Option<Timestamp>,
    pub relationship_status: Option<RelationshipStatus>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub account_id: Option<String>,
    pub arn: Option<String>,
    pub email: Option<String>,
    pub invited_at: Option<Timestamp>,
    pub master_account_id: Option<String>,
    pub relationship_status: Option<RelationshipStatus>,
    pub tags: Option<TagMap>,
    pub updated_at: Option<Timestamp>,
}

/// Delegated Macie administrator of an organization.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub account_id: Option<String>,
    pub status: Option<AdminStatus>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UnprocessedAccount {
    pub account_id: Option<String>,
    pub error_code: Option<ErrorCode>,
    pub error_message: Option<String>,
}

// Invitations

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AcceptInvitationInput {
    pub invitation_id: Option<String>,
    pub master_account: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AcceptInvitationOutput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationsInput {
    pub account_ids: Option<Vec<String>>,
    pub disable_email_notification: Option<bool>,
    pub message: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvitationsOutput {
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DeclineInvitationsInput {
    pub account_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DeclineInvitationsOutput {
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DeleteInvitationsInput {
    pub account_ids: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DeleteInvitationsOutput {
    pub unprocessed_accounts: Option<Vec<UnprocessedAccount>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GetInvitationsCountInput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetInvitationsCountOutput {
    pub invitations_count: Option<i64>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListInvitationsInput {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListInvitationsOutput {
    pub invitations: Option<Vec<Invitation>>,
    pub next_token: Option<String>,
}

// Members

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberInput {
    pub account: Option<AccountDetail>,
    pub tags: Option<TagMap>,
}

impl TagsEntry for CreateMemberInput {
    fn tags_mut(&mut self) -> &mut Option<TagMap> {
        &mut self.tags
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberOutput {
    pub arn: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMemberInput {
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DeleteMemberOutput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DisassociateMemberInput {
    pub id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DisassociateMemberOutput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetMemberInput {
    pub id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetMemberOutput {
    pub account_id: Option<String>,
    pub arn: Option<String>,
    pub email: Option<String>,
    pub invited_at: Option<Timestamp>,
    pub master_account_id: Option<String>,
    pub relationship_status: Option<RelationshipStatus>,
    pub tags: Option<TagMap>,
    pub updated_at: Option<Timestamp>,
}

/// `only_associated` is sent verbatim as the `onlyAssociated` query
/// parameter (`"true"` or `"false"`).
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListMembersInput {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub only_associated: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListMembersOutput {
    pub members: Option<Vec<Member>>,
    pub next_token: Option<String>,
}

// Master account

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GetMasterAccountInput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetMasterAccountOutput {
    pub master: Option<Invitation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DisassociateFromMasterAccountInput {}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DisassociateFromMasterAccountOutput {}

// Organizations

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct EnableOrganizationAdminAccountInput {
    pub admin_account_id: Option<String>,
    pub client_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EnableOrganizationAdminAccountOutput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DisableOrganizationAdminAccountInput {
    pub admin_account_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DisableOrganizationAdminAccountOutput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListOrganizationAdminAccountsInput {
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListOrganizationAdminAccountsOutput {
    pub admin_accounts: Option<Vec<AdminAccount>>,
    pub next_token: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DescribeOrganizationConfigurationInput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DescribeOrganizationConfigurationOutput {
    pub auto_enable: Option<bool>,
    pub max_account_limit_reached: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganizationConfigurationInput {
    pub auto_enable: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UpdateOrganizationConfigurationOutput {}
