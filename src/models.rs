use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account and its group memberships.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub uuid: Uuid,
    pub name: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// Fields for updating a user.
///
/// Either `groups` by itself, or `groups_add` and/or `groups_remove`.
/// Unset fields are omitted from the request body and left untouched
/// server-side.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replaces the user's group list wholesale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_add: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups_remove: Option<Vec<Uuid>>,
}

/// A secret token registered on a user. The secret itself is only
/// handed out once, at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserToken {
    pub uuid: Uuid,
    pub name: String,
    pub created: DateTime<FixedOffset>,
}

/// Response to token creation, carrying the one-time secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedUserToken {
    pub uuid: Uuid,
    pub name: String,
    pub secret: String,
}

/// A named group of users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub uuid: Uuid,
    pub name: String,
}

/// An access-control policy attached to a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    pub uuid: Uuid,
    pub group_uuid: Uuid,
    pub priority: i64,
    pub effect: PolicyEffect,
    pub action: PolicyAction,
    /// Resource pattern the policy applies to, e.g. `timeseries/%`.
    pub resource: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyEffect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    Create,
    Read,
    Update,
    Delete,
}

/// Fields for creating a policy.
#[derive(Debug, Clone, Serialize)]
pub struct NewPolicy {
    pub group_uuid: Uuid,
    pub priority: i64,
    pub effect: PolicyEffect,
    pub action: PolicyAction,
    pub resource: String,
}

/// Fields for updating a policy. Unset fields are omitted from the
/// request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PolicyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect: Option<PolicyEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<PolicyAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

/// A thing: the physical or logical entity timeseries and datasets
/// hang off of.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thing {
    pub uuid: Uuid,
    pub name: String,
    pub state: String,
    #[serde(rename = "type")]
    pub thing_type: String,
    pub created_by: Uuid,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Fields for creating a thing.
#[derive(Debug, Clone, Serialize)]
pub struct NewThing {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub thing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Fields for updating a thing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ThingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub thing_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A timeseries and its metadata. Data points live under the
/// `/data` sub-resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeseries {
    pub uuid: Uuid,
    pub thing_uuid: Option<Uuid>,
    pub created_by: Uuid,
    pub name: String,
    pub si_unit: String,
    pub lower_bound: Option<i64>,
    pub upper_bound: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Fields for creating a timeseries.
#[derive(Debug, Clone, Serialize)]
pub struct NewTimeseries {
    pub name: String,
    pub si_unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Fields for updating a timeseries.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TimeseriesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub si_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// One timeseries sample. `ts` crosses the wire as an RFC 3339
/// date-time string; the offset survives the round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub v: f64,
    pub ts: DateTime<FixedOffset>,
}

/// One result bucket of a multi-series data query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeseriesData {
    pub uuid: Uuid,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

/// Optional refinements shared by the timeseries data read endpoints.
/// Unset fields are omitted from the query string.
#[derive(Debug, Clone, Default)]
pub struct DataFilter {
    /// SI unit of the result; the server casts when it differs from
    /// the stored unit.
    pub unit: Option<String>,
    /// Keep values >= this.
    pub ge: Option<i64>,
    /// Keep values <= this.
    pub le: Option<i64>,
    pub precision: Option<Precision>,
    /// Aggregate function applied per `precision` bucket; the server
    /// defaults to avg. Meaningless without `precision`.
    pub aggregate: Option<Aggregate>,
    /// IANA time zone name to act as; the server defaults to UTC.
    pub timezone: Option<String>,
}

/// Timestamp truncation granularity for aggregated data queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Microseconds,
    Milliseconds,
    Second,
    Minute,
    Minute5,
    Minute10,
    Minute15,
    Minute20,
    Minute30,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
    Century,
    Millennia,
}

impl Precision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Microseconds => "microseconds",
            Self::Milliseconds => "milliseconds",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Minute5 => "minute5",
            Self::Minute10 => "minute10",
            Self::Minute15 => "minute15",
            Self::Minute20 => "minute20",
            Self::Minute30 => "minute30",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Decade => "decade",
            Self::Century => "century",
            Self::Millennia => "millennia",
        }
    }
}

/// Aggregate function for grouped data queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregate {
    Avg,
    Min,
    Max,
    Sum,
    Count,
}

impl Aggregate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::Min => "min",
            Self::Max => "max",
            Self::Sum => "sum",
            Self::Count => "count",
        }
    }
}

/// A stored dataset's metadata. The content itself is fetched through
/// the `/raw` sub-resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub uuid: Uuid,
    pub name: String,
    /// File format of the content, e.g. `ini`, `csv`.
    pub format: String,
    /// sha256 checksum of the content.
    pub checksum: String,
    /// Content size in bytes.
    pub size: u64,
    pub thing_uuid: Option<Uuid>,
    pub created: DateTime<FixedOffset>,
    pub created_by: Uuid,
    pub updated: DateTime<FixedOffset>,
    pub updated_by: Uuid,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Fields for creating a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct NewDataset {
    pub name: String,
    pub format: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Fields for updating a dataset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatasetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// A scheduled program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub uuid: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub program_type: String,
    pub state: String,
    /// Cron expression with a seconds field, e.g. `0 45 23 * * 6`.
    pub schedule: String,
    pub deadline: i64,
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Fields for creating a program.
#[derive(Debug, Clone, Serialize)]
pub struct NewProgram {
    pub name: String,
    #[serde(rename = "type")]
    pub program_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Fields for updating a program.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgramUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub program_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// An alert raised against a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub uuid: Uuid,
    pub resource: String,
    pub environment: String,
    pub event: String,
    pub severity: String,
    pub status: String,
    #[serde(default)]
    pub service: Vec<String>,
    pub value: String,
    pub description: String,
    pub origin: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub created: DateTime<FixedOffset>,
    pub timeout: i64,
    pub rawdata: Option<String>,
    /// How many times this alert has been received.
    pub duplicate: i64,
    pub previous_severity: Option<String>,
    pub last_receive_time: Option<DateTime<FixedOffset>>,
}

/// Response to alert creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedAlert {
    pub uuid: Uuid,
}

/// Fields for creating an alert.
#[derive(Debug, Clone, Serialize)]
pub struct NewAlert {
    pub resource: String,
    pub environment: String,
    pub event: String,
    pub value: String,
    pub description: String,
    pub origin: String,
    pub severity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rawdata: Option<String>,
}

/// Fields for updating an alert.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlertUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rawdata: Option<String>,
}

/// Filters for listing alerts. Unset filters are omitted from the
/// query string; `tags` and `service` encode as repeated parameters.
#[derive(Debug, Clone, Default)]
pub struct AlertFilter {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub resource: Option<String>,
    pub environment: Option<String>,
    pub event: Option<String>,
    pub origin: Option<String>,
    pub status: Option<String>,
    pub severity_le: Option<String>,
    pub severity_ge: Option<String>,
    pub severity: Option<String>,
    pub tags: Option<Vec<String>>,
    pub service: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_enums_use_lowercase_wire_strings() {
        assert_eq!(
            serde_json::to_string(&PolicyEffect::Allow).unwrap(),
            "\"allow\""
        );
        assert_eq!(
            serde_json::to_string(&PolicyAction::Delete).unwrap(),
            "\"delete\""
        );
        let effect: PolicyEffect = serde_json::from_str("\"deny\"").unwrap();
        assert_eq!(effect, PolicyEffect::Deny);
    }

    #[test]
    fn precision_wire_names_match_as_str() {
        for precision in [
            Precision::Microseconds,
            Precision::Minute5,
            Precision::Minute30,
            Precision::Hour,
            Precision::Millennia,
        ] {
            let wire = serde_json::to_string(&precision).unwrap();
            assert_eq!(wire, format!("\"{}\"", precision.as_str()));
        }
    }

    #[test]
    fn data_point_round_trips_rfc3339_with_offset() {
        let json = r#"{"v":3.14,"ts":"2022-02-04T13:50:54+02:00"}"#;
        let point: DataPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.ts.offset().local_minus_utc(), 2 * 3600);
        assert_eq!(serde_json::to_string(&point).unwrap(), json);
    }

    #[test]
    fn update_bodies_omit_unset_fields() {
        let update = ThingUpdate {
            name: Some("boiler".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"name":"boiler"}"#
        );

        let empty = UserUpdate::default();
        assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
    }

    #[test]
    fn thing_type_field_renames_to_type() {
        let thing = NewThing {
            name: "pump".to_string(),
            thing_type: Some("office/building".to_string()),
            tags: None,
        };
        assert_eq!(
            serde_json::to_string(&thing).unwrap(),
            r#"{"name":"pump","type":"office/building"}"#
        );
    }
}
