use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{skip_serializing_none, DeserializeFromStr, SerializeDisplay};
use strum_macros::{AsRefStr, Display, EnumIter, IntoStaticStr};

use crate::v1::wire::wire_enum;

/// Timestamps travel as ISO-8601 strings.
pub type Timestamp = DateTime<Utc>;

/// Resource tags, keyed by tag key.
pub type TagMap = BTreeMap<String, String>;

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
pub enum OrderBy {
    #[strum(serialize = "ASC")]
    Asc,
    #[strum(serialize = "DESC")]
    Desc,
}

wire_enum!(OrderBy);

/// Sorting for `ListFindings` and `GetFindings`.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SortCriteria {
    pub attribute_name: Option<String>,
    pub order_by: Option<OrderBy>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePair {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}
