use chrono::{DateTime, Utc};
use cohort_types::{EnrollmentId, EnrollmentKind, PaymentStatus, Plan};
use serde::{Deserialize, Serialize};

/// A stored enrollment record.
///
/// JSON field names are camelCase because this is the shape the web
/// front-end consumes directly. `payment_status` is always derived — see
/// [`initial_payment_status`] — and callers never set it themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    #[serde(rename = "enrollmentType")]
    pub kind: EnrollmentKind,
    #[serde(rename = "selectedPlan")]
    pub plan: Plan,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Where the lead came from (e.g. "direct", "instagram").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

/// Data needed to create an enrollment record.
///
/// The store assigns the id, timestamps, and initial payment status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnrollment {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub motivation: Option<String>,
    #[serde(rename = "enrollmentType")]
    pub kind: EnrollmentKind,
    #[serde(rename = "selectedPlan")]
    pub plan: Plan,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Enrollment {
    /// Builds a record from submitted data: assigns a fresh id, stamps both
    /// timestamps with the current time, and derives the payment status.
    #[must_use]
    pub fn create(new: NewEnrollment) -> Self {
        let now = Utc::now();
        let payment_status = initial_payment_status(new.kind, new.transaction_id.is_some());
        Self {
            id: EnrollmentId::new(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            education: new.education,
            experience: new.experience,
            motivation: new.motivation,
            kind: new.kind,
            plan: new.plan,
            transaction_id: new.transaction_id,
            payment_status,
            created_at: now,
            updated_at: now,
            source: new.source,
            ip_address: new.ip_address,
            user_agent: new.user_agent,
        }
    }

    /// Records a self-reported payment: sets the transaction ID, forces the
    /// status to completed, and bumps `updated_at`.
    pub fn attach_transaction(&mut self, transaction_id: impl Into<String>) {
        self.transaction_id = Some(transaction_id.into());
        self.payment_status = PaymentStatus::Completed;
        self.updated_at = Utc::now();
    }

    /// The email in the form used for uniqueness checks and lookups.
    #[must_use]
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

/// Normalizes an email for case-insensitive keying.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// The payment status a freshly created record starts with.
///
/// Demo enrollments have nothing to pay and complete immediately; join
/// enrollments complete only once a transaction ID is present.
#[must_use]
pub fn initial_payment_status(kind: EnrollmentKind, has_transaction: bool) -> PaymentStatus {
    match kind {
        EnrollmentKind::Demo => PaymentStatus::Completed,
        EnrollmentKind::Join if has_transaction => PaymentStatus::Completed,
        EnrollmentKind::Join => PaymentStatus::Pending,
    }
}
