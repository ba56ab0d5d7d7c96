//! Request validation, mirroring what the enrollment form enforces
//! client-side so direct API callers get the same rules.

use crate::error::{ApiError, ApiResult};
use crate::routes::CreateEnrollmentRequest;
use cohort_model::NewEnrollment;

const MAX_NAME: usize = 255;
const MAX_EMAIL: usize = 255;
const MIN_PHONE: usize = 10;
const MAX_PHONE: usize = 20;
const MAX_BACKGROUND: usize = 100;
const MAX_MOTIVATION: usize = 1000;
const MAX_TRANSACTION_ID: usize = 255;

/// Checks a create request field by field and assembles the storable
/// form. `ip_address` and `user_agent` come from request metadata, not
/// the body.
pub fn validate_create(
    req: CreateEnrollmentRequest,
    ip_address: Option<String>,
    user_agent: Option<String>,
) -> ApiResult<NewEnrollment> {
    let name = required_trimmed(req.name, "Name is required")?;
    bounded(&name, MAX_NAME, "Name")?;

    let email = required_trimmed(req.email, "Email is required")?;
    bounded(&email, MAX_EMAIL, "Email")?;
    if !looks_like_email(&email) {
        return Err(ApiError::Validation("Invalid email format".to_string()));
    }

    let phone = required_trimmed(req.phone, "Phone number is required")?;
    if phone.chars().count() < MIN_PHONE {
        return Err(ApiError::Validation(
            "Phone number must be at least 10 digits".to_string(),
        ));
    }
    bounded(&phone, MAX_PHONE, "Phone number")?;

    let kind = req
        .kind
        .ok_or_else(|| ApiError::Validation("Enrollment type is required".to_string()))?;
    let plan = req
        .plan
        .ok_or_else(|| ApiError::Validation("Plan selection is required".to_string()))?;

    let education = optional_bounded(req.education, MAX_BACKGROUND, "Education")?;
    let experience = optional_bounded(req.experience, MAX_BACKGROUND, "Experience")?;
    let motivation = optional_bounded(req.motivation, MAX_MOTIVATION, "Motivation")?;
    let transaction_id =
        optional_bounded(req.transaction_id, MAX_TRANSACTION_ID, "Transaction ID")?;

    Ok(NewEnrollment {
        name,
        email,
        phone,
        education,
        experience,
        motivation,
        kind,
        plan,
        transaction_id,
        source: Some(req.source.unwrap_or_else(|| "direct".to_string())),
        ip_address,
        user_agent,
    })
}

/// Checks the transaction ID supplied on the payment-update call.
pub fn validate_transaction_id(raw: Option<String>) -> ApiResult<String> {
    let id = required_trimmed(raw, "Transaction ID is required")?;
    bounded(&id, MAX_TRANSACTION_ID, "Transaction ID")?;
    Ok(id)
}

fn required_trimmed(value: Option<String>, missing_msg: &str) -> ApiResult<String> {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                Err(ApiError::Validation(missing_msg.to_string()))
            } else {
                Ok(trimmed.to_string())
            }
        }
        None => Err(ApiError::Validation(missing_msg.to_string())),
    }
}

fn bounded(value: &str, max: usize, field: &str) -> ApiResult<()> {
    if value.chars().count() > max {
        return Err(ApiError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(())
}

fn optional_bounded(
    value: Option<String>,
    max: usize,
    field: &str,
) -> ApiResult<Option<String>> {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            bounded(trimmed, max, field)?;
            Ok(Some(trimmed.to_string()))
        }
        None => Ok(None),
    }
}

/// Deliberately loose: one `@`, something on both sides, a dot in the
/// domain, no whitespace. Real deliverability is the mail provider's
/// problem.
fn looks_like_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
