//! Classification jobs: what to scan, when to scan it, and where results go.

use serde::{Deserialize, Serialize};
use serde_with::{skip_serializing_none, DeserializeFromStr, SerializeDisplay};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

use super::{
    common::{OrderBy, TagMap, Timestamp},
    tag::TagsEntry,
};
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
pub enum JobStatus {
    #[strum(serialize = "RUNNING")]
    Running,
    #[strum(serialize = "PAUSED")]
    Paused,
    #[strum(serialize = "CANCELLED")]
    Cancelled,
    #[strum(serialize = "COMPLETE")]
    Complete,
    #[strum(serialize = "IDLE")]
    Idle,
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
pub enum JobType {
    #[strum(serialize = "ONE_TIME")]
    OneTime,
    #[strum(serialize = "SCHEDULED")]
    Scheduled,
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
pub enum JobComparator {
    #[strum(serialize = "EQ")]
    Eq,
    #[strum(serialize = "GT")]
    Gt,
    #[strum(serialize = "GTE")]
    Gte,
    #[strum(serialize = "LT")]
    Lt,
    #[strum(serialize = "LTE")]
    Lte,
    #[strum(serialize = "NE")]
    Ne,
    #[strum(serialize = "CONTAINS")]
    Contains,
}

/// Object property a `SimpleScopeTerm` tests.
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
pub enum ScopeFilterKey {
    #[strum(serialize = "BUCKET_CREATION_DATE")]
    BucketCreationDate,
    #[strum(serialize = "OBJECT_EXTENSION")]
    ObjectExtension,
    #[strum(serialize = "OBJECT_LAST_MODIFIED_DATE")]
    ObjectLastModifiedDate,
    #[strum(serialize = "OBJECT_SIZE")]
    ObjectSize,
    #[strum(serialize = "TAG")]
    Tag,
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
pub enum TagTarget {
    #[strum(serialize = "S3_OBJECT")]
    S3Object,
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
pub enum DayOfWeek {
    #[strum(serialize = "SUNDAY")]
    Sunday,
    #[strum(serialize = "MONDAY")]
    Monday,
    #[strum(serialize = "TUESDAY")]
    Tuesday,
    #[strum(serialize = "WEDNESDAY")]
    Wednesday,
    #[strum(serialize = "THURSDAY")]
    Thursday,
    #[strum(serialize = "FRIDAY")]
    Friday,
    #[strum(serialize = "SATURDAY")]
    Saturday,
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
pub enum ListJobsFilterKey {
    #[strum(serialize = "jobType")]
    JobType,
    #[strum(serialize = "jobStatus")]
    JobStatus,
    #[strum(serialize = "createdAt")]
    CreatedAt,
    #[strum(serialize = "name")]
    Name,
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
pub enum ListJobsSortAttributeName {
    #[strum(serialize = "createdAt")]
    CreatedAt,
    #[strum(serialize = "jobStatus")]
    JobStatus,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "jobType")]
    JobType,
}

wire_enum!(
    JobStatus,
    JobType,
    JobComparator,
    ScopeFilterKey,
    TagTarget,
    DayOfWeek,
    ListJobsFilterKey,
    ListJobsSortAttributeName
);

// Scope

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct S3BucketDefinitionForJob {
    pub account_id: Option<String>,
    pub buckets: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SimpleScopeTerm {
    pub comparator: Option<JobComparator>,
    pub key: Option<ScopeFilterKey>,
    pub values: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TagValuePair {
    pub key: Option<String>,
    pub value: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TagScopeTerm {
    pub comparator: Option<JobComparator>,
    pub key: Option<String>,
    pub tag_values: Option<Vec<TagValuePair>>,
    pub target: Option<TagTarget>,
}

/// Exactly one of the two terms is expected per entry.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct JobScopeTerm {
    pub simple_scope_term: Option<SimpleScopeTerm>,
    pub tag_scope_term: Option<TagScopeTerm>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct JobScopingBlock {
    pub and: Option<Vec<JobScopeTerm>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Scoping {
    pub excludes: Option<JobScopingBlock>,
    pub includes: Option<JobScopingBlock>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct S3JobDefinition {
    pub bucket_definitions: Option<Vec<S3BucketDefinitionForJob>>,
    pub scoping: Option<Scoping>,
}

// Schedule

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DailySchedule {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySchedule {
    pub day_of_month: Option<i32>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    pub day_of_week: Option<DayOfWeek>,
}

/// Recurrence of a `SCHEDULED` job. Set one of the three members.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct JobScheduleFrequency {
    pub daily_schedule: Option<DailySchedule>,
    pub monthly_schedule: Option<MonthlySchedule>,
    pub weekly_schedule: Option<WeeklySchedule>,
}

impl JobScheduleFrequency {
    pub fn daily() -> Self {
        Self {
            daily_schedule: Some(DailySchedule {}),
            ..Default::default()
        }
    }

    pub fn weekly(day_of_week: DayOfWeek) -> Self {
        Self {
            weekly_schedule: Some(WeeklySchedule {
                day_of_week: Some(day_of_week),
            }),
            ..Default::default()
        }
    }

    pub fn monthly(day_of_month: i32) -> Self {
        Self {
            monthly_schedule: Some(MonthlySchedule {
                day_of_month: Some(day_of_month),
            }),
            ..Default::default()
        }
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub approximate_number_of_objects_to_process: Option<f64>,
    pub number_of_runs: Option<f64>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub bucket_definitions: Option<Vec<S3BucketDefinitionForJob>>,
    pub created_at: Option<Timestamp>,
    pub job_id: Option<String>,
    pub job_status: Option<JobStatus>,
    pub job_type: Option<JobType>,
    pub name: Option<String>,
}

// Listing

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsFilterTerm {
    pub comparator: Option<JobComparator>,
    pub key: Option<ListJobsFilterKey>,
    pub values: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsFilterCriteria {
    pub excludes: Option<Vec<ListJobsFilterTerm>>,
    pub includes: Option<Vec<ListJobsFilterTerm>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsSortCriteria {
    pub attribute_name: Option<ListJobsSortAttributeName>,
    pub order_by: Option<OrderBy>,
}

// Export

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct S3Destination {
    pub bucket_name: Option<String>,
    pub key_prefix: Option<String>,
    pub kms_key_arn: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationExportConfiguration {
    pub s3_destination: Option<S3Destination>,
}

// Operations

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassificationJobInput {
    pub client_token: Option<String>,
    pub custom_data_identifier_ids: Option<Vec<String>>,
    pub description: Option<String>,
    pub initial_run: Option<bool>,
    pub job_type: Option<JobType>,
    pub name: Option<String>,
    pub s3_job_definition: Option<S3JobDefinition>,
    pub sampling_percentage: Option<i32>,
    pub schedule_frequency: Option<JobScheduleFrequency>,
    pub tags: Option<TagMap>,
}

impl TagsEntry for CreateClassificationJobInput {
    fn tags_mut(&mut self) -> &mut Option<TagMap> {
        &mut self.tags
    }
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassificationJobOutput {
    pub job_arn: Option<String>,
    pub job_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DescribeClassificationJobInput {
    pub job_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DescribeClassificationJobOutput {
    pub client_token: Option<String>,
    pub created_at: Option<Timestamp>,
    pub custom_data_identifier_ids: Option<Vec<String>>,
    pub description: Option<String>,
    pub initial_run: Option<bool>,
    pub job_arn: Option<String>,
    pub job_id: Option<String>,
    pub job_status: Option<JobStatus>,
    pub job_type: Option<JobType>,
    pub last_run_time: Option<Timestamp>,
    pub name: Option<String>,
    pub s3_job_definition: Option<S3JobDefinition>,
    pub sampling_percentage: Option<i32>,
    pub schedule_frequency: Option<JobScheduleFrequency>,
    pub statistics: Option<Statistics>,
    pub tags: Option<TagMap>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListClassificationJobsInput {
    pub filter_criteria: Option<ListJobsFilterCriteria>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub sort_criteria: Option<ListJobsSortCriteria>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListClassificationJobsOutput {
    pub items: Option<Vec<JobSummary>>,
    pub next_token: Option<String>,
}

/// Only `CANCELLED` is accepted by the service as a target status.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClassificationJobInput {
    pub job_id: Option<String>,
    pub job_status: Option<JobStatus>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UpdateClassificationJobOutput {}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GetClassificationExportConfigurationInput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetClassificationExportConfigurationOutput {
    pub configuration: Option<ClassificationExportConfiguration>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PutClassificationExportConfigurationInput {
    pub configuration: Option<ClassificationExportConfiguration>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PutClassificationExportConfigurationOutput {
    pub configuration: Option<ClassificationExportConfiguration>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn scheduled_job_body() {
        let input = CreateClassificationJobInput {
            job_type: Some(JobType::Scheduled),
            name: Some("weekly-pii".to_string()),
            schedule_frequency: Some(JobScheduleFrequency::weekly(DayOfWeek::Monday)),
            s3_job_definition: Some(S3JobDefinition {
                bucket_definitions: Some(vec![S3BucketDefinitionForJob {
                    account_id: Some("111111111111".to_string()),
                    buckets: Some(vec!["customer-exports".to_string()]),
                }]),
                scoping: Some(Scoping {
                    excludes: Some(JobScopingBlock {
                        and: Some(vec![JobScopeTerm {
                            simple_scope_term: Some(SimpleScopeTerm {
                                comparator: Some(JobComparator::Eq),
                                key: Some(ScopeFilterKey::ObjectExtension),
                                values: Some(vec!["jpg".to_string(), "png".to_string()]),
                            }),
                            ..Default::default()
                        }]),
                    }),
                    ..Default::default()
                }),
            }),
            ..Default::default()
        }
        .add_tags_entry("env", "prod")
        .unwrap();

        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "jobType": "SCHEDULED",
                "name": "weekly-pii",
                "s3JobDefinition": {
                    "bucketDefinitions": [{"accountId": "111111111111", "buckets": ["customer-exports"]}],
                    "scoping": {
                        "excludes": {
                            "and": [{
                                "simpleScopeTerm": {
                                    "comparator": "EQ",
                                    "key": "OBJECT_EXTENSION",
                                    "values": ["jpg", "png"]
                                }
                            }]
                        }
                    }
                },
                "scheduleFrequency": {"weeklySchedule": {"dayOfWeek": "MONDAY"}},
                "tags": {"env": "prod"}
            })
        );
    }

    #[test]
    fn daily_schedule_is_an_empty_object() {
        assert_eq!(
            serde_json::to_value(JobScheduleFrequency::daily()).unwrap(),
            json!({"dailySchedule": {}})
        );
    }

    #[test]
    fn describe_job_output() {
        let output: DescribeClassificationJobOutput = serde_json::from_value(json!({
            "jobId": "3ce05dbb7ec5505def334104bf1d9c2a",
            "jobStatus": "IDLE",
            "jobType": "SCHEDULED",
            "scheduleFrequency": {"monthlySchedule": {"dayOfMonth": 1}},
            "statistics": {"approximateNumberOfObjectsToProcess": 1250.0, "numberOfRuns": 3.0},
            "lastRunTime": "2020-06-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(output.job_status, Some(JobStatus::Idle));
        assert_eq!(output.schedule_frequency, Some(JobScheduleFrequency::monthly(1)));
        assert_eq!(output.statistics.unwrap().number_of_runs, Some(3.0));
        assert!(output.last_run_time.is_some());
    }

    #[test]
    fn list_jobs_filter_keys_are_camel_case() {
        let criteria = ListJobsFilterCriteria {
            includes: Some(vec![ListJobsFilterTerm {
                comparator: Some(JobComparator::Eq),
                key: Some(ListJobsFilterKey::JobStatus),
                values: Some(vec![JobStatus::Running.to_string()]),
            }]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&criteria).unwrap(),
            json!({"includes": [{"comparator": "EQ", "key": "jobStatus", "values": ["RUNNING"]}]})
        );
        assert!("JOB_STATUS".parse::<ListJobsFilterKey>().is_err());
    }
}
