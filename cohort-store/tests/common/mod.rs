//! Shared test helpers for the store backends.

#![allow(dead_code)]

use cohort_model::NewEnrollment;
use cohort_types::{EnrollmentKind, Plan};

/// A demo signup with no payment fields.
pub fn demo_signup(email: &str) -> NewEnrollment {
    NewEnrollment {
        name: "Asha Verma".into(),
        email: email.into(),
        phone: "9876543210".into(),
        education: Some("B.Tech CSE".into()),
        experience: None,
        motivation: None,
        kind: EnrollmentKind::Demo,
        plan: Plan::Starter,
        transaction_id: None,
        source: Some("direct".into()),
        ip_address: None,
        user_agent: None,
    }
}

/// A join signup on the given plan, not yet paid.
pub fn join_signup(email: &str, plan: Plan) -> NewEnrollment {
    NewEnrollment {
        name: "Rohan Gupta".into(),
        email: email.into(),
        phone: "9123456780".into(),
        education: None,
        experience: Some("1 year QA".into()),
        motivation: Some("Switching to development".into()),
        kind: EnrollmentKind::Join,
        plan,
        transaction_id: None,
        source: None,
        ip_address: Some("203.0.113.7".into()),
        user_agent: Some("Mozilla/5.0".into()),
    }
}

/// A join signup that already carries a UPI transaction ID.
pub fn paid_join_signup(email: &str, plan: Plan, transaction_id: &str) -> NewEnrollment {
    NewEnrollment {
        transaction_id: Some(transaction_id.into()),
        ..join_signup(email, plan)
    }
}
