//! Time-based status rules. Pure functions; the store decides when to apply them.

use chrono::{DateTime, Duration, Utc};

use super::domain::{Complaint, ComplaintStatus};

/// Status a complaint should have at `now`: a `Pending` complaint older than
/// `threshold` (strictly) becomes `Escalated`, anything else is unchanged.
pub fn compute_status(c: &Complaint, now: DateTime<Utc>, threshold: Duration) -> ComplaintStatus {
    match c.status {
        ComplaintStatus::Pending if now - c.date_logged > threshold => ComplaintStatus::Escalated,
        status => status,
    }
}

/// Whole days an open complaint has been waiting; zero once resolved.
pub fn days_pending(c: &Complaint, now: DateTime<Utc>) -> i64 {
    if c.status == ComplaintStatus::Resolved {
        return 0;
    }
    (now - c.date_logged).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn logged(at: DateTime<Utc>) -> Complaint {
        Complaint::new(1, Map::new(), at)
    }

    #[test]
    fn pending_escalates_only_past_threshold() {
        let now = Utc::now();
        let three = Duration::days(3);
        assert_eq!(compute_status(&logged(now), now, three), ComplaintStatus::Pending);
        assert_eq!(compute_status(&logged(now - three), now, three), ComplaintStatus::Pending);
        assert_eq!(
            compute_status(&logged(now - three - Duration::seconds(1)), now, three),
            ComplaintStatus::Escalated
        );
    }

    #[test]
    fn terminal_and_escalated_states_are_kept() {
        let now = Utc::now();
        let old = now - Duration::days(30);
        let mut c = logged(old);
        c.status = ComplaintStatus::Resolved;
        assert_eq!(compute_status(&c, now, Duration::days(3)), ComplaintStatus::Resolved);
        c.status = ComplaintStatus::Escalated;
        assert_eq!(compute_status(&c, now, Duration::days(3)), ComplaintStatus::Escalated);
    }

    #[test]
    fn days_pending_truncates_and_zeroes_resolved() {
        let now = Utc::now();
        let mut c = logged(now - Duration::hours(71));
        assert_eq!(days_pending(&c, now), 2);
        c.status = ComplaintStatus::Resolved;
        assert_eq!(days_pending(&c, now), 0);
        // clock skew never yields negative ages
        assert_eq!(days_pending(&logged(now + Duration::hours(5)), now), 0);
    }
}
