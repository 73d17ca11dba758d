//! Binding table from each Macie 2 operation to its HTTP method, path
//! template and query members.

use serde_json::Value;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

use super::{
    account::*, bucket::*, filter::*, finding::*, identifier::*, job::*, session::*, tag::*,
    usage::*,
};
use crate::v1::{
    config::ClientConfig,
    operation::{plan_from_value, HttpMethod, HttpRequest, Operation, OperationError},
    wire::wire_enum,
};

macro_rules! operations {
    ($(
        $name:ident($input:ident, $output:ident) => $method:ident $path:literal
            $([$($query:literal),+])?;
    )+) => {
        /// Every operation of the API, by its wire name.
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
        pub enum OperationName {
            $($name,)+
        }

        impl OperationName {
            pub fn method(self) -> HttpMethod {
                match self {
                    $(Self::$name => <$input as Operation>::METHOD,)+
                }
            }

            pub fn path(self) -> &'static str {
                match self {
                    $(Self::$name => <$input as Operation>::PATH,)+
                }
            }

            pub fn query(self) -> &'static [&'static str] {
                match self {
                    $(Self::$name => <$input as Operation>::QUERY,)+
                }
            }

            /// Marshals an untyped JSON input for this operation. The value
            /// must deserialize into the operation's input type.
            pub fn plan(
                self,
                input: Value,
                config: &ClientConfig,
            ) -> Result<HttpRequest, OperationError> {
                match self {
                    $(Self::$name => plan_from_value::<$input>(input, config),)+
                }
            }
        }

        $(
            impl Operation for $input {
                type Output = $output;

                const NAME: OperationName = OperationName::$name;
                const METHOD: HttpMethod = HttpMethod::$method;
                const PATH: &'static str = $path;
                $(const QUERY: &'static [&'static str] = &[$($query),+];)?
            }
        )+
    };
}

operations! {
    AcceptInvitation(AcceptInvitationInput, AcceptInvitationOutput) => Post "/invitations/accept";
    ArchiveFindings(ArchiveFindingsInput, ArchiveFindingsOutput) => Post "/findings/archive";
    BatchGetCustomDataIdentifiers(BatchGetCustomDataIdentifiersInput, BatchGetCustomDataIdentifiersOutput) => Post "/custom-data-identifiers/get";
    CreateClassificationJob(CreateClassificationJobInput, CreateClassificationJobOutput) => Post "/jobs";
    CreateCustomDataIdentifier(CreateCustomDataIdentifierInput, CreateCustomDataIdentifierOutput) => Post "/custom-data-identifiers";
    CreateFindingsFilter(CreateFindingsFilterInput, CreateFindingsFilterOutput) => Post "/findingsfilters";
    CreateInvitations(CreateInvitationsInput, CreateInvitationsOutput) => Post "/invitations";
    CreateMember(CreateMemberInput, CreateMemberOutput) => Post "/members";
    CreateSampleFindings(CreateSampleFindingsInput, CreateSampleFindingsOutput) => Post "/findings/sample";
    DeclineInvitations(DeclineInvitationsInput, DeclineInvitationsOutput) => Post "/invitations/decline";
    DeleteCustomDataIdentifier(DeleteCustomDataIdentifierInput, DeleteCustomDataIdentifierOutput) => Delete "/custom-data-identifiers/{id}";
    DeleteFindingsFilter(DeleteFindingsFilterInput, DeleteFindingsFilterOutput) => Delete "/findingsfilters/{id}";
    DeleteInvitations(DeleteInvitationsInput, DeleteInvitationsOutput) => Post "/invitations/delete";
    DeleteMember(DeleteMemberInput, DeleteMemberOutput) => Delete "/members/{id}";
    DescribeBuckets(DescribeBucketsInput, DescribeBucketsOutput) => Post "/datasources/s3";
    DescribeClassificationJob(DescribeClassificationJobInput, DescribeClassificationJobOutput) => Get "/jobs/{jobId}";
    DescribeOrganizationConfiguration(DescribeOrganizationConfigurationInput, DescribeOrganizationConfigurationOutput) => Get "/admin/configuration";
    DisableMacie(DisableMacieInput, DisableMacieOutput) => Delete "/macie";
    DisableOrganizationAdminAccount(DisableOrganizationAdminAccountInput, DisableOrganizationAdminAccountOutput) => Delete "/admin" ["adminAccountId"];
    DisassociateFromMasterAccount(DisassociateFromMasterAccountInput, DisassociateFromMasterAccountOutput) => Post "/master/disassociate";
    DisassociateMember(DisassociateMemberInput, DisassociateMemberOutput) => Post "/members/disassociate/{id}";
    EnableMacie(EnableMacieInput, EnableMacieOutput) => Post "/macie";
    EnableOrganizationAdminAccount(EnableOrganizationAdminAccountInput, EnableOrganizationAdminAccountOutput) => Post "/admin";
    GetBucketStatistics(GetBucketStatisticsInput, GetBucketStatisticsOutput) => Post "/datasources/s3/statistics";
    GetClassificationExportConfiguration(GetClassificationExportConfigurationInput, GetClassificationExportConfigurationOutput) => Get "/classification-export-configuration";
    GetCustomDataIdentifier(GetCustomDataIdentifierInput, GetCustomDataIdentifierOutput) => Get "/custom-data-identifiers/{id}";
    GetFindingStatistics(GetFindingStatisticsInput, GetFindingStatisticsOutput) => Post "/findings/statistics";
    GetFindings(GetFindingsInput, GetFindingsOutput) => Post "/findings/describe";
    GetFindingsFilter(GetFindingsFilterInput, GetFindingsFilterOutput) => Get "/findingsfilters/{id}";
    GetInvitationsCount(GetInvitationsCountInput, GetInvitationsCountOutput) => Get "/invitations/count";
    GetMacieSession(GetMacieSessionInput, GetMacieSessionOutput) => Get "/macie";
    GetMasterAccount(GetMasterAccountInput, GetMasterAccountOutput) => Get "/master";
    GetMember(GetMemberInput, GetMemberOutput) => Get "/members/{id}";
    GetUsageStatistics(GetUsageStatisticsInput, GetUsageStatisticsOutput) => Post "/usage/statistics";
    GetUsageTotals(GetUsageTotalsInput, GetUsageTotalsOutput) => Get "/usage";
    ListClassificationJobs(ListClassificationJobsInput, ListClassificationJobsOutput) => Post "/jobs/list";
    ListCustomDataIdentifiers(ListCustomDataIdentifiersInput, ListCustomDataIdentifiersOutput) => Post "/custom-data-identifiers/list";
    ListFindings(ListFindingsInput, ListFindingsOutput) => Post "/findings";
    ListFindingsFilters(ListFindingsFiltersInput, ListFindingsFiltersOutput) => Get "/findingsfilters" ["maxResults", "nextToken"];
    ListInvitations(ListInvitationsInput, ListInvitationsOutput) => Get "/invitations" ["maxResults", "nextToken"];
    ListMembers(ListMembersInput, ListMembersOutput) => Get "/members" ["maxResults", "nextToken", "onlyAssociated"];
    ListOrganizationAdminAccounts(ListOrganizationAdminAccountsInput, ListOrganizationAdminAccountsOutput) => Get "/admin" ["maxResults", "nextToken"];
    ListTagsForResource(ListTagsForResourceInput, ListTagsForResourceOutput) => Get "/tags/{resourceArn}";
    PutClassificationExportConfiguration(PutClassificationExportConfigurationInput, PutClassificationExportConfigurationOutput) => Put "/classification-export-configuration";
    TagResource(TagResourceInput, TagResourceOutput) => Post "/tags/{resourceArn}";
    TestCustomDataIdentifier(TestCustomDataIdentifierInput, TestCustomDataIdentifierOutput) => Post "/custom-data-identifiers/test";
    UnarchiveFindings(UnarchiveFindingsInput, UnarchiveFindingsOutput) => Post "/findings/unarchive";
    UntagResource(UntagResourceInput, UntagResourceOutput) => Delete "/tags/{resourceArn}" ["tagKeys"];
    UpdateClassificationJob(UpdateClassificationJobInput, UpdateClassificationJobOutput) => Patch "/jobs/{jobId}";
    UpdateFindingsFilter(UpdateFindingsFilterInput, UpdateFindingsFilterOutput) => Patch "/findingsfilters/{id}";
    UpdateMacieSession(UpdateMacieSessionInput, UpdateMacieSessionOutput) => Patch "/macie";
    UpdateMemberSession(UpdateMemberSessionInput, UpdateMemberSessionOutput) => Patch "/macie/members/{id}";
    UpdateOrganizationConfiguration(UpdateOrganizationConfigurationInput, UpdateOrganizationConfigurationOutput) => Patch "/admin/configuration";
}

wire_enum!(OperationName);

#[cfg(test)]
mod tests {
    use serde_json::json;
    use strum::IntoEnumIterator;

    use super::*;
    use crate::v1::wire::WireEnum;

    fn config() -> ClientConfig {
        ClientConfig::new("eu-west-1").unwrap()
    }

    #[test]
    fn names_are_unique_and_decodable() {
        let names = OperationName::values();
        assert_eq!(names.len(), 53);
        for name in OperationName::iter() {
            assert_eq!(OperationName::from_wire(name.as_wire()), Ok(name));
            assert!(name.path().starts_with('/'), "{name}");
        }
        assert!(OperationName::from_wire("acceptInvitation").is_err());
    }

    #[test]
    fn query_members_exist_only_on_bodyless_methods() {
        for name in OperationName::iter() {
            if !name.query().is_empty() {
                assert!(!name.method().has_body(), "{name}");
            }
        }
    }

    #[test]
    fn plan_dispatches_on_name() {
        let request = OperationName::GetMember
            .plan(json!({"id": "111111111111"}), &config())
            .unwrap();
        assert_eq!(request.operation, OperationName::GetMember);
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.url.as_str(),
            "https://macie2.eu-west-1.amazonaws.com/members/111111111111"
        );
        assert_eq!(request.body, None);
    }

    #[test]
    fn plan_rejects_mistyped_input() {
        let err = OperationName::UpdateMacieSession
            .plan(json!({"status": "enabled"}), &config())
            .unwrap_err();
        assert!(matches!(err, OperationError::JsonError(_)));
    }
}
