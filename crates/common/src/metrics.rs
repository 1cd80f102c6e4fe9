use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter, Encoder, IntCounter, TextEncoder};

// Prometheus metrics (default registry)
pub static COMPLAINTS_CREATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "complaints_created_total",
        "Total complaints logged"
    )
    .expect("register complaints_created_total")
});

pub static COMPLAINTS_ESCALATED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "complaints_escalated_total",
        "Total complaints moved from Pending to Escalated"
    )
    .expect("register complaints_escalated_total")
});

pub static COMPLAINTS_RESOLVED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "complaints_resolved_total",
        "Total successful resolve calls"
    )
    .expect("register complaints_resolved_total")
});

pub static STAFF_LOGINS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "staff_logins_total",
        "Total successful staff logins"
    )
    .expect("register staff_logins_total")
});

pub static STAFF_LOGIN_FAILURES_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "staff_login_failures_total",
        "Total rejected staff logins"
    )
    .expect("register staff_login_failures_total")
});

pub static JOBS_ECHOED_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "jobs_echoed_total",
        "Total job submissions echoed back"
    )
    .expect("register jobs_echoed_total")
});

/// Render every registered metric in the Prometheus text format.
pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_output_lists_touched_counters() {
        COMPLAINTS_CREATED_TOTAL.inc();
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("complaints_created_total"));
    }
}
