//! CSV export of the complaint log.

use chrono::{DateTime, SecondsFormat, Utc};

use super::domain::{Complaint, ComplaintStatus};
use super::escalation::days_pending;
use crate::errors::ServiceError;

pub const CSV_HEADER: [&str; 6] = [
    "Complaint ID",
    "Days Pending",
    "Escalation Flag",
    "Status",
    "Logged At",
    "Resolution Date",
];

/// Render complaints as CSV, newest first. An empty slice yields the header only.
pub fn complaints_csv(complaints: &[Complaint], now: DateTime<Utc>) -> Result<String, ServiceError> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    wtr.write_record(CSV_HEADER).map_err(|e| ServiceError::Report(e.to_string()))?;

    let mut rows: Vec<&Complaint> = complaints.iter().collect();
    rows.sort_by(|a, b| b.date_logged.cmp(&a.date_logged).then(b.id.cmp(&a.id)));

    for c in rows {
        let escalated = if c.status == ComplaintStatus::Escalated { "Yes" } else { "No" };
        let resolved_at = match (c.status, c.resolved_at) {
            (ComplaintStatus::Resolved, Some(t)) => t.to_rfc3339_opts(SecondsFormat::Secs, true),
            _ => String::new(),
        };
        wtr.write_record([
            c.id.to_string(),
            days_pending(c, now).to_string(),
            escalated.to_string(),
            c.status.as_str().to_string(),
            c.date_logged.to_rfc3339_opts(SecondsFormat::Secs, true),
            resolved_at,
        ])
        .map_err(|e| ServiceError::Report(e.to_string()))?;
    }

    let bytes = wtr.into_inner().map_err(|e| ServiceError::Report(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ServiceError::Report(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use serde_json::Map;

    #[test]
    fn empty_log_is_header_only() {
        let out = complaints_csv(&[], Utc::now()).unwrap();
        assert_eq!(out, "Complaint ID,Days Pending,Escalation Flag,Status,Logged At,Resolution Date\n");
    }

    #[test]
    fn rows_are_newest_first_with_flags() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let mut old = Complaint::new(1, Map::new(), t0);
        old.status = ComplaintStatus::Escalated;
        let mut done = Complaint::new(2, Map::new(), t0 + Duration::days(1));
        done.status = ComplaintStatus::Resolved;
        done.resolved_at = Some(t0 + Duration::days(2));
        let now = t0 + Duration::days(5) + Duration::hours(1);

        let out = complaints_csv(&[old, done], now).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2,0,No,Resolved,2026-03-02T08:00:00Z,2026-03-03T08:00:00Z");
        assert_eq!(lines[2], "1,5,Yes,Escalated,2026-03-01T08:00:00Z,");
    }
}
