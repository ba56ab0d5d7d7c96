//! Enrollment record model for the Cohort enrollment service.
//!
//! Defines the types shared by the store backends and the HTTP API:
//! - [`Enrollment`] — a stored enrollment record with derived payment status
//! - [`NewEnrollment`] — the data needed to create a record
//! - [`PlanInfo`] / [`CATALOG`] — the static plan catalog (names, INR prices,
//!   feature lists)
//! - [`EnrollmentStats`] — on-demand aggregation over the full record set
//! - [`to_csv`] — the admin CSV export
//!
//! The store backends persist these types; everything here is pure data and
//! computation with no I/O.

mod csv;
mod enrollment;
mod plan;
mod stats;

pub use csv::{to_csv, CSV_HEADER};
pub use enrollment::{initial_payment_status, normalize_email, Enrollment, NewEnrollment};
pub use plan::{plan_info, PlanInfo, CATALOG};
pub use stats::{EnrollmentStats, PlanBreakdown};
