//! The static plan catalog.
//!
//! Plan names, INR prices, and feature lists are fixed at build time; the
//! catalog is served read-only to the front-end and used by the stats
//! aggregator for revenue figures.

use cohort_types::Plan;
use serde::Serialize;

/// A plan tier as presented to prospective students.
#[derive(Debug, Clone, Serialize)]
pub struct PlanInfo {
    pub plan: Plan,
    pub name: &'static str,
    #[serde(rename = "price")]
    pub price_inr: u32,
    pub features: &'static [&'static str],
}

/// All plan tiers, cheapest first.
pub const CATALOG: [PlanInfo; 3] = [
    PlanInfo {
        plan: Plan::Starter,
        name: "Starter Plan",
        price_inr: 99,
        features: &[
            "21 Days Live Classes",
            "Recorded Sessions Access",
            "3 Guided Projects",
            "WhatsApp Support",
            "Completion Certificate",
            "Community Access",
        ],
    },
    PlanInfo {
        plan: Plan::Pro,
        name: "Pro Plan",
        price_inr: 199,
        features: &[
            "Everything in Starter",
            "1-on-1 Doubt Sessions (3x)",
            "Portfolio Review & Feedback",
            "Interview Preparation",
            "Job Referrals Network",
            "Premium Resources & Tools",
            "Priority Support",
        ],
    },
    PlanInfo {
        plan: Plan::Elite,
        name: "Elite Plan",
        price_inr: 399,
        features: &[
            "Everything in Pro",
            "Unlimited 1-on-1 Sessions",
            "Live Portfolio Building",
            "Mock Interviews (5x)",
            "LinkedIn Profile Optimization",
            "Guaranteed Job Referrals",
            "6 Months Career Mentorship",
            "Advanced React/Node.js Bonus",
        ],
    },
];

/// Looks up the catalog entry for a plan tier.
#[must_use]
pub fn plan_info(plan: Plan) -> &'static PlanInfo {
    match plan {
        Plan::Starter => &CATALOG[0],
        Plan::Pro => &CATALOG[1],
        Plan::Elite => &CATALOG[2],
    }
}
