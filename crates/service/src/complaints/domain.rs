use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Keys owned by the server; caller-supplied values under these names are dropped.
pub const RESERVED_KEYS: [&str; 3] = ["id", "date_logged", "status"];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum ComplaintStatus {
    Pending,
    Escalated,
    Resolved,
}

impl ComplaintStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplaintStatus::Pending => "Pending",
            ComplaintStatus::Escalated => "Escalated",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

/// A logged complaint. Caller fields are flattened next to the server fields
/// in the JSON representation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Complaint {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub id: u64,
    pub date_logged: DateTime<Utc>,
    pub status: ComplaintStatus,
    /// Time of the most recent resolve call; only surfaced in reports.
    #[serde(skip)]
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Complaint {
    pub fn new(id: u64, mut fields: Map<String, Value>, date_logged: DateTime<Utc>) -> Self {
        for key in RESERVED_KEYS {
            fields.remove(key);
        }
        Self { fields, id, date_logged, status: ComplaintStatus::Pending, resolved_at: None }
    }
}

/// One Pending → Escalated transition observed by a sweep.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EscalationRecord {
    pub complaint_id: u64,
    pub date_logged: DateTime<Utc>,
    pub escalated_at: DateTime<Utc>,
}

/// Counts by age bucket. Bucket names keep the historical three-day wording
/// whatever threshold is configured.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub resolved: usize,
    pub pending_lt3: usize,
    pub pending_gte3: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn server_fields_override_caller_fields() {
        let fields = json!({"customer": "Amina", "id": 99, "status": "Resolved", "date_logged": "x"});
        let Value::Object(map) = fields else { unreachable!() };
        let now = Utc::now();
        let c = Complaint::new(1, map, now);
        let out = serde_json::to_value(&c).unwrap();
        assert_eq!(out["id"], 1);
        assert_eq!(out["status"], "Pending");
        assert_eq!(out["customer"], "Amina");
        assert_eq!(out["date_logged"], serde_json::to_value(now).unwrap());
        assert!(out.get("resolved_at").is_none());
    }
}
