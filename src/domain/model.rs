use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

// The service encodes empty lists as `null`
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// 短链接创建请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortenRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            custom_code: None,
        }
    }

    pub fn with_custom_code(mut self, code: impl Into<String>) -> Self {
        self.custom_code = Some(code.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<FixedOffset>,
}

// 短链接统计数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub total_clicks: i64,
    pub created_at: DateTime<FixedOffset>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub device_stats: Vec<DeviceStat>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub referrer_stats: Vec<ReferrerStat>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub ip_stats: Vec<IpStat>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub time_distribution: Vec<TimeDistributionStat>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub device_type_stats: Vec<DeviceTypeStat>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub location_stats: Vec<LocationStat>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub os_stats: Vec<OsStat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceStat {
    pub user_agent: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferrerStat {
    pub referrer: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpStat {
    pub ip_address: String,
    pub count: i64,
}

/// One bucket of the click time histogram, `time` is a label such as
/// `2024-01-01` or `14:00`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDistributionStat {
    pub time: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceTypeStat {
    pub device_type: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationStat {
    pub location: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsStat {
    pub os: String,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickListResponse {
    pub short_code: String,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub clicks: Vec<ClickDetail>,
    pub total: i64,
}

// 点击明细，clicked_at 保持服务端的格式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickDetail {
    pub clicked_at: String,
    #[serde(default)]
    pub ip_address: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub device_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl HealthResponse {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub message: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}
