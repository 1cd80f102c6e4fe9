//! Job board: a fixed listing and an echo-only submission endpoint.
//!
//! Submissions are acknowledged but never stored; the listing is the same four
//! records for the life of the process.

use common::metrics::JOBS_ECHOED_TOTAL;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Job {
    pub id: u32,
    pub region: &'static str,
    pub status: &'static str,
}

const JOBS: [Job; 4] = [
    Job { id: 1, region: "Lurambi", status: "Open" },
    Job { id: 2, region: "Malava", status: "In Progress" },
    Job { id: 3, region: "Mumias East", status: "Open" },
    Job { id: 4, region: "Ikolomani", status: "Completed" },
];

/// The hardcoded job list.
pub fn catalog() -> Vec<Job> {
    JOBS.to_vec()
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JobAck {
    pub ok: bool,
    pub job: Value,
}

/// Acknowledge a submission by returning it unchanged.
pub fn echo(body: Value) -> JobAck {
    JOBS_ECHOED_TOTAL.inc();
    debug!("job submission echoed");
    JobAck { ok: true, job: body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn catalog_has_four_stable_records() {
        let a = catalog();
        assert_eq!(a.len(), 4);
        assert_eq!(a.iter().map(|j| j.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(a, catalog());
    }

    #[test]
    fn echo_returns_body_and_leaves_catalog_alone() {
        let body = json!({"id": 5, "region": "Shinyalu"});
        let ack = echo(body.clone());
        assert_eq!(serde_json::to_value(&ack).unwrap(), json!({"ok": true, "job": body}));
        assert_eq!(catalog().len(), 4);
        assert!(catalog().iter().all(|j| j.region != "Shinyalu"));
    }
}
