//! On-demand enrollment analytics.
//!
//! Everything is recomputed from the full record set on each call. There is
//! no caching and no incremental maintenance; record volumes are small
//! enough that a single pass per request is fine.

use crate::enrollment::Enrollment;
use crate::plan::plan_info;
use chrono::{DateTime, Duration, Utc};
use cohort_types::{EnrollmentKind, PaymentStatus, Plan};
use serde::{Deserialize, Serialize};

/// Counts per plan tier among join enrollments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanBreakdown {
    pub starter: u64,
    pub pro: u64,
    pub elite: u64,
}

impl PlanBreakdown {
    fn bump(&mut self, plan: Plan) {
        match plan {
            Plan::Starter => self.starter += 1,
            Plan::Pro => self.pro += 1,
            Plan::Elite => self.elite += 1,
        }
    }

    /// Count for a single tier.
    #[must_use]
    pub fn for_plan(&self, plan: Plan) -> u64 {
        match plan {
            Plan::Starter => self.starter,
            Plan::Pro => self.pro,
            Plan::Elite => self.elite,
        }
    }
}

/// Aggregated funnel figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentStats {
    pub total: u64,
    /// Records with kind = demo.
    pub demos: u64,
    /// Join records whose payment is completed.
    pub paid: u64,
    /// Records still awaiting payment.
    pub pending: u64,
    pub plan_breakdown: PlanBreakdown,
    pub last_7_days: u64,
    pub last_30_days: u64,
    /// round(paid / demos × 100), or 0 when there are no demos.
    pub conversion_rate: u32,
    /// Average order value in INR across paid join records, or 0 when none.
    pub average_value: u32,
}

impl EnrollmentStats {
    /// Aggregates the full record set in one pass.
    ///
    /// `now` anchors the last-7/30-day windows; both are inclusive of
    /// records created exactly at the window edge.
    #[must_use]
    pub fn compute(records: &[Enrollment], now: DateTime<Utc>) -> Self {
        let mut demos = 0u64;
        let mut paid = 0u64;
        let mut pending = 0u64;
        let mut revenue = 0u64;
        let mut plan_breakdown = PlanBreakdown::default();
        let mut last_7_days = 0u64;
        let mut last_30_days = 0u64;

        for record in records {
            match record.kind {
                EnrollmentKind::Demo => demos += 1,
                EnrollmentKind::Join => {
                    plan_breakdown.bump(record.plan);
                    if record.payment_status.is_completed() {
                        paid += 1;
                        revenue += u64::from(plan_info(record.plan).price_inr);
                    }
                }
            }
            if record.payment_status == PaymentStatus::Pending {
                pending += 1;
            }
            let age = now.signed_duration_since(record.created_at);
            if age <= Duration::days(7) {
                last_7_days += 1;
            }
            if age <= Duration::days(30) {
                last_30_days += 1;
            }
        }

        let conversion_rate = if demos > 0 {
            ((paid as f64 / demos as f64) * 100.0).round() as u32
        } else {
            0
        };
        let average_value = if paid > 0 {
            ((revenue as f64) / (paid as f64)).round() as u32
        } else {
            0
        };

        Self {
            total: records.len() as u64,
            demos,
            paid,
            pending,
            plan_breakdown,
            last_7_days,
            last_30_days,
            conversion_rate,
            average_value,
        }
    }

    /// Stats for an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::compute(&[], Utc::now())
    }
}
