//! Outbound enrollment notifications.
//!
//! Nothing is actually delivered: each notification is rendered and
//! logged, standing in for a real mail provider integration. Sending is
//! fire-and-forget per request, so a slow or failing sender can never
//! fail the enrollment call that triggered it.

use cohort_model::{plan_info, Enrollment};
use cohort_types::EnrollmentKind;
use tracing::{debug, info};

struct RenderedEmail {
    subject: String,
    body: String,
}

/// Dispatches whichever notification a fresh enrollment warrants: demo
/// signups get a session confirmation, join signups get a payment
/// receipt once payment is complete. A join that is still pending gets
/// nothing until its transaction is attached.
pub fn notify_created(enrollment: &Enrollment) {
    match enrollment.kind {
        EnrollmentKind::Demo => spawn_send(enrollment.email.clone(), render_demo_confirmation(enrollment)),
        EnrollmentKind::Join if enrollment.payment_status.is_completed() => {
            spawn_send(enrollment.email.clone(), render_receipt(enrollment));
        }
        EnrollmentKind::Join => {}
    }
}

/// Sends the payment receipt after a transaction is attached.
pub fn notify_payment(enrollment: &Enrollment) {
    spawn_send(enrollment.email.clone(), render_receipt(enrollment));
}

fn spawn_send(to: String, email: RenderedEmail) {
    tokio::spawn(async move {
        // A real provider call would go here.
        info!("Email sent to {}: {}", to, email.subject);
        debug!("Email body:\n{}", email.body);
    });
}

fn render_receipt(enrollment: &Enrollment) -> RenderedEmail {
    let plan = plan_info(enrollment.plan);
    let transaction_id = enrollment.transaction_id.as_deref().unwrap_or("-");
    let date = enrollment.created_at.format("%d %B %Y");

    let subject = format!("Payment Receipt - Frontend Bootcamp {}", plan.name);

    let mut body = format!(
        "Hi {}!\n\n\
         Thank you for enrolling in the Frontend Bootcamp. Your payment has\n\
         been received and your seat is confirmed.\n\n\
         Receipt ID:     FBC-{}\n\
         Plan:           {}\n\
         Amount paid:    ₹{}\n\
         Transaction ID: {}\n\
         Date:           {}\n\n\
         What's included:\n",
        enrollment.name, enrollment.id, plan.name, plan.price_inr, transaction_id, date,
    );
    for feature in plan.features {
        body.push_str(&format!("  - {feature}\n"));
    }
    body.push_str(
        "\nYou'll be added to the course WhatsApp group within 2 hours for\n\
         updates and materials.\n\n\
         GenZ Coding School\n",
    );

    RenderedEmail { subject, body }
}

fn render_demo_confirmation(enrollment: &Enrollment) -> RenderedEmail {
    let subject = "Demo Session Confirmed - Frontend Bootcamp".to_string();
    let body = format!(
        "Hi {}!\n\n\
         Your free demo session is confirmed. Our instructor will reach out\n\
         on WhatsApp within 2 hours to schedule it.\n\n\
         GenZ Coding School\n",
        enrollment.name,
    );
    RenderedEmail { subject, body }
}
