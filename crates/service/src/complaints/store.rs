use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use common::metrics::{COMPLAINTS_CREATED_TOTAL, COMPLAINTS_ESCALATED_TOTAL, COMPLAINTS_RESOLVED_TOTAL};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::domain::{Complaint, ComplaintStatus, EscalationRecord, Summary};
use super::escalation::compute_status;
use super::report;
use crate::clock::{Clock, SystemClock};
use crate::errors::ServiceError;

/// Window used for `recent` escalation queries.
pub const RECENT_ESCALATION_WINDOW_MINUTES: i64 = 20;

#[derive(Debug)]
struct ComplaintBook {
    complaints: Vec<Complaint>,
    escalations: Vec<EscalationRecord>,
    next_id: u64,
}

impl Default for ComplaintBook {
    fn default() -> Self {
        Self { complaints: Vec::new(), escalations: Vec::new(), next_id: 1 }
    }
}

impl ComplaintBook {
    /// Apply the escalation rule to every complaint; returns how many moved.
    fn sweep(&mut self, now: DateTime<Utc>, threshold: Duration) -> usize {
        let mut moved = 0;
        for c in self.complaints.iter_mut() {
            let next = compute_status(c, now, threshold);
            if next != c.status {
                c.status = next;
                self.escalations.push(EscalationRecord {
                    complaint_id: c.id,
                    date_logged: c.date_logged,
                    escalated_at: now,
                });
                moved += 1;
            }
        }
        moved
    }
}

/// In-memory complaint collection shared by all handlers.
///
/// Sweep, create and resolve all run under the write lock, so ids stay unique
/// and sequential under concurrent requests.
pub struct ComplaintStore {
    inner: Arc<RwLock<ComplaintBook>>,
    clock: Arc<dyn Clock>,
    escalate_after: Duration,
}

impl ComplaintStore {
    pub fn new(clock: Arc<dyn Clock>, escalate_after: Duration) -> Arc<Self> {
        Arc::new(Self { inner: Arc::new(RwLock::new(ComplaintBook::default())), clock, escalate_after })
    }

    /// Store on the wall clock with a threshold in whole days.
    pub fn with_system_clock(escalate_after_days: u32) -> Arc<Self> {
        Self::new(Arc::new(SystemClock), Duration::days(i64::from(escalate_after_days)))
    }

    async fn swept(&self) -> (tokio::sync::RwLockWriteGuard<'_, ComplaintBook>, DateTime<Utc>) {
        let mut book = self.inner.write().await;
        // read under the lock so ids and timestamps share one order
        let now = self.clock.now();
        let moved = book.sweep(now, self.escalate_after);
        if moved > 0 {
            COMPLAINTS_ESCALATED_TOTAL.inc_by(moved as u64);
            info!(escalated = moved, "complaints_escalated");
        }
        (book, now)
    }

    /// All complaints in creation order, after the escalation sweep.
    pub async fn list(&self) -> Vec<Complaint> {
        let (book, _) = self.swept().await;
        book.complaints.clone()
    }

    /// Log a new complaint. Status is always `Pending` regardless of input.
    pub async fn create(&self, fields: Map<String, Value>) -> Complaint {
        let (mut book, now) = self.swept().await;
        let id = book.next_id;
        book.next_id += 1;
        let complaint = Complaint::new(id, fields, now);
        book.complaints.push(complaint.clone());
        drop(book);
        COMPLAINTS_CREATED_TOTAL.inc();
        debug!(id, "complaint_created");
        complaint
    }

    /// Mark a complaint resolved. Resolving twice is allowed and leaves it resolved.
    pub async fn resolve(&self, id: u64) -> Result<Complaint, ServiceError> {
        let mut book = self.inner.write().await;
        let now = self.clock.now();
        let Some(c) = book.complaints.iter_mut().find(|c| c.id == id) else {
            warn!(id, "resolve_unknown_complaint");
            return Err(ServiceError::not_found("complaint"));
        };
        c.status = ComplaintStatus::Resolved;
        c.resolved_at = Some(now);
        let resolved = c.clone();
        drop(book);
        COMPLAINTS_RESOLVED_TOTAL.inc();
        info!(id, "complaint_resolved");
        Ok(resolved)
    }

    /// Escalation log, newest first. With `within`, only entries whose
    /// `escalated_at` is inside that window ending now.
    pub async fn escalations(&self, within: Option<Duration>) -> Vec<EscalationRecord> {
        let (book, now) = self.swept().await;
        let cutoff = within.map(|w| now - w);
        book.escalations
            .iter()
            .rev()
            .filter(|e| cutoff.map_or(true, |c| e.escalated_at > c))
            .cloned()
            .collect()
    }

    pub async fn recent_escalations(&self) -> Vec<EscalationRecord> {
        self.escalations(Some(Duration::minutes(RECENT_ESCALATION_WINDOW_MINUTES))).await
    }

    pub async fn summary(&self) -> Summary {
        let (book, now) = self.swept().await;
        let mut s = Summary { total: book.complaints.len(), ..Summary::default() };
        for c in &book.complaints {
            if c.status == ComplaintStatus::Resolved {
                s.resolved += 1;
            } else if now - c.date_logged < self.escalate_after {
                s.pending_lt3 += 1;
            } else {
                s.pending_gte3 += 1;
            }
        }
        s
    }

    /// CSV export of every complaint, newest first.
    pub async fn report_csv(&self) -> Result<String, ServiceError> {
        let (book, now) = self.swept().await;
        let rows = book.complaints.clone();
        drop(book);
        report::complaints_csv(&rows, now)
    }
}
