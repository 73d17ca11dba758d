//! Usage quotas and estimated cost, per account and in total.

use serde::{Deserialize, Serialize};
use serde_with::{skip_serializing_none, DeserializeFromStr, SerializeDisplay};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

use super::common::{OrderBy, Timestamp};
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
pub enum Currency {
    #[strum(serialize = "USD")]
    Usd,
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
pub enum Unit {
    #[strum(serialize = "TERABYTES")]
    Terabytes,
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
pub enum UsageType {
    #[strum(serialize = "DATA_INVENTORY_EVALUATION")]
    DataInventoryEvaluation,
    #[strum(serialize = "SENSITIVE_DATA_DISCOVERY")]
    SensitiveDataDiscovery,
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
pub enum UsageStatisticsFilterKey {
    #[strum(serialize = "accountId")]
    AccountId,
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
pub enum UsageStatisticsSortKey {
    #[strum(serialize = "accountId")]
    AccountId,
    #[strum(serialize = "total")]
    Total,
}

wire_enum!(
    Currency,
    Unit,
    UsageType,
    UsageStatisticsFilterKey,
    UsageStatisticsSortKey
);

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLimit {
    pub is_service_limited: Option<bool>,
    pub unit: Option<Unit>,
    pub value: Option<i64>,
}

/// `estimated_cost` is a decimal string, kept verbatim.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UsageByAccount {
    pub currency: Option<Currency>,
    pub estimated_cost: Option<String>,
    pub service_limit: Option<ServiceLimit>,
    pub r#type: Option<UsageType>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    pub account_id: Option<String>,
    pub free_trial_start_date: Option<Timestamp>,
    pub usage: Option<Vec<UsageByAccount>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UsageStatisticsFilter {
    pub key: Option<UsageStatisticsFilterKey>,
    pub values: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UsageStatisticsSortBy {
    pub key: Option<UsageStatisticsSortKey>,
    pub order_by: Option<OrderBy>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct UsageTotal {
    pub currency: Option<Currency>,
    pub estimated_cost: Option<String>,
    pub r#type: Option<UsageType>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetUsageStatisticsInput {
    pub filter_by: Option<Vec<UsageStatisticsFilter>>,
    pub max_results: Option<i32>,
    pub next_token: Option<String>,
    pub sort_by: Option<UsageStatisticsSortBy>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetUsageStatisticsOutput {
    pub next_token: Option<String>,
    pub records: Option<Vec<UsageRecord>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GetUsageTotalsInput {}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GetUsageTotalsOutput {
    pub usage_totals: Option<Vec<UsageTotal>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn usage_statistics_request() {
        let input = GetUsageStatisticsInput {
            filter_by: Some(vec![UsageStatisticsFilter {
                key: Some(UsageStatisticsFilterKey::AccountId),
                values: Some(vec!["111111111111".to_string()]),
            }]),
            sort_by: Some(UsageStatisticsSortBy {
                key: Some(UsageStatisticsSortKey::Total),
                order_by: Some(OrderBy::Desc),
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "filterBy": [{"key": "accountId", "values": ["111111111111"]}],
                "sortBy": {"key": "total", "orderBy": "DESC"}
            })
        );
    }

    #[test]
    fn usage_records_keep_cost_as_text() {
        let output: GetUsageStatisticsOutput = serde_json::from_value(json!({
            "records": [{
                "accountId": "111111111111",
                "usage": [{
                    "currency": "USD",
                    "estimatedCost": "12.50",
                    "serviceLimit": {"isServiceLimited": false, "unit": "TERABYTES", "value": 5},
                    "type": "SENSITIVE_DATA_DISCOVERY"
                }]
            }]
        }))
        .unwrap();
        let records = output.records.unwrap();
        let usage = &records[0].usage.as_ref().unwrap()[0];
        assert_eq!(usage.estimated_cost.as_deref(), Some("12.50"));
        assert_eq!(usage.r#type, Some(UsageType::SensitiveDataDiscovery));
        assert_eq!(usage.service_limit.as_ref().unwrap().unit, Some(Unit::Terabytes));
    }

    #[test]
    fn unknown_usage_type_is_rejected() {
        let err = serde_json::from_value::<UsageTotal>(json!({"type": "AUTOMATED_DISCOVERY"}))
            .unwrap_err();
        assert!(err.to_string().contains("AUTOMATED_DISCOVERY"));
    }
}
