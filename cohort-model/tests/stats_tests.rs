use chrono::{DateTime, Duration, Utc};
use cohort_model::{Enrollment, EnrollmentStats};
use cohort_types::{EnrollmentId, EnrollmentKind, PaymentStatus, Plan};
use pretty_assertions::assert_eq;

fn record(
    kind: EnrollmentKind,
    plan: Plan,
    status: PaymentStatus,
    created_at: DateTime<Utc>,
) -> Enrollment {
    Enrollment {
        id: EnrollmentId::new(),
        name: "Test Student".to_string(),
        email: format!("{}@example.com", EnrollmentId::new()),
        phone: "9772512345".to_string(),
        education: None,
        experience: None,
        motivation: None,
        kind,
        plan,
        transaction_id: status.is_completed().then(|| "UPI1".to_string()),
        payment_status: status,
        created_at,
        updated_at: created_at,
        source: None,
        ip_address: None,
        user_agent: None,
    }
}

#[test]
fn empty_record_set_is_all_zero() {
    let stats = EnrollmentStats::compute(&[], Utc::now());
    assert_eq!(stats.total, 0);
    assert_eq!(stats.demos, 0);
    assert_eq!(stats.paid, 0);
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.conversion_rate, 0);
    assert_eq!(stats.average_value, 0);
    assert_eq!(stats.last_7_days, 0);
    assert_eq!(stats.last_30_days, 0);
}

#[test]
fn counts_mixed_record_set() {
    // 3 demos + 2 completed joins + 1 pending join.
    let now = Utc::now();
    let records = vec![
        record(EnrollmentKind::Demo, Plan::Starter, PaymentStatus::Completed, now),
        record(EnrollmentKind::Demo, Plan::Starter, PaymentStatus::Completed, now),
        record(EnrollmentKind::Demo, Plan::Starter, PaymentStatus::Completed, now),
        record(EnrollmentKind::Join, Plan::Pro, PaymentStatus::Completed, now),
        record(EnrollmentKind::Join, Plan::Elite, PaymentStatus::Completed, now),
        record(EnrollmentKind::Join, Plan::Starter, PaymentStatus::Pending, now),
    ];

    let stats = EnrollmentStats::compute(&records, now);
    assert_eq!(stats.total, 6);
    assert_eq!(stats.demos, 3);
    assert_eq!(stats.paid, 2);
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.conversion_rate, 67); // round(2/3 * 100)
}

#[test]
fn plan_breakdown_counts_join_records_only() {
    let now = Utc::now();
    let records = vec![
        record(EnrollmentKind::Demo, Plan::Elite, PaymentStatus::Completed, now),
        record(EnrollmentKind::Join, Plan::Starter, PaymentStatus::Pending, now),
        record(EnrollmentKind::Join, Plan::Pro, PaymentStatus::Completed, now),
        record(EnrollmentKind::Join, Plan::Pro, PaymentStatus::Pending, now),
    ];

    let stats = EnrollmentStats::compute(&records, now);
    assert_eq!(stats.plan_breakdown.starter, 1);
    assert_eq!(stats.plan_breakdown.pro, 2);
    assert_eq!(stats.plan_breakdown.elite, 0);
    assert_eq!(stats.plan_breakdown.for_plan(Plan::Pro), 2);
}

#[test]
fn conversion_rate_zero_without_demos() {
    let now = Utc::now();
    let records = vec![record(
        EnrollmentKind::Join,
        Plan::Pro,
        PaymentStatus::Completed,
        now,
    )];
    let stats = EnrollmentStats::compute(&records, now);
    assert_eq!(stats.demos, 0);
    assert_eq!(stats.conversion_rate, 0);
}

#[test]
fn average_value_uses_catalog_prices() {
    let now = Utc::now();
    let records = vec![
        record(EnrollmentKind::Join, Plan::Pro, PaymentStatus::Completed, now), // 199
        record(EnrollmentKind::Join, Plan::Elite, PaymentStatus::Completed, now), // 399
        record(EnrollmentKind::Join, Plan::Elite, PaymentStatus::Pending, now), // not paid
    ];
    let stats = EnrollmentStats::compute(&records, now);
    assert_eq!(stats.average_value, 299); // (199 + 399) / 2
}

#[test]
fn average_value_zero_without_paid_records() {
    let now = Utc::now();
    let records = vec![
        record(EnrollmentKind::Demo, Plan::Starter, PaymentStatus::Completed, now),
        record(EnrollmentKind::Join, Plan::Pro, PaymentStatus::Pending, now),
    ];
    let stats = EnrollmentStats::compute(&records, now);
    assert_eq!(stats.average_value, 0);
}

// ── Recency windows ──────────────────────────────────────────────

#[test]
fn recency_windows_bucket_by_age() {
    let now = Utc::now();
    let records = vec![
        record(EnrollmentKind::Demo, Plan::Starter, PaymentStatus::Completed, now - Duration::hours(1)),
        record(EnrollmentKind::Demo, Plan::Starter, PaymentStatus::Completed, now - Duration::days(10)),
        record(EnrollmentKind::Demo, Plan::Starter, PaymentStatus::Completed, now - Duration::days(40)),
    ];

    let stats = EnrollmentStats::compute(&records, now);
    assert_eq!(stats.last_7_days, 1);
    assert_eq!(stats.last_30_days, 2);
    assert_eq!(stats.total, 3);
}

#[test]
fn window_edges_are_inclusive() {
    let now = Utc::now();
    let records = vec![
        record(EnrollmentKind::Demo, Plan::Starter, PaymentStatus::Completed, now - Duration::days(7)),
        record(EnrollmentKind::Demo, Plan::Starter, PaymentStatus::Completed, now - Duration::days(30)),
    ];

    let stats = EnrollmentStats::compute(&records, now);
    assert_eq!(stats.last_7_days, 1);
    assert_eq!(stats.last_30_days, 2);
}

// ── Wire shape ───────────────────────────────────────────────────

#[test]
fn stats_serialize_with_camel_case_keys() {
    let stats = EnrollmentStats::empty();
    let json = serde_json::to_value(&stats).unwrap();
    assert!(json.get("planBreakdown").is_some());
    assert!(json.get("last7Days").is_some());
    assert!(json.get("last30Days").is_some());
    assert!(json.get("conversionRate").is_some());
    assert!(json.get("averageValue").is_some());
}
