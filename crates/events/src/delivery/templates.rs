//! Notification email templates.
//!
//! Each function renders a complete [`EmailMessage`] inside the shared
//! Broadway Sellers layout.

use crate::delivery::email::EmailMessage;

/// Wrap inner HTML in the standard layout.
fn render_layout(subject: &str, inner: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{subject}</title>
</head>
<body style="font-family: sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: #000; color: #fff; padding: 20px; text-align: center;">
    <h1>Broadway Sellers</h1>
  </div>
  <div style="background: #f9f9f9; padding: 30px; border: 1px solid #ddd;">
    {inner}
  </div>
  <div style="text-align: center; padding: 20px; font-size: 12px; color: #666;">
    <p>Broadway Sellers</p>
  </div>
</body>
</html>
"#
    )
}

pub fn application_submitted(to: &str, tracking_url: &str) -> EmailMessage {
    let subject = "Application Submitted - Broadway Sellers";
    let inner = format!(
        r#"<h2>Thank you for applying to Broadway Sellers!</h2>
<p>We've received your seller application and our team is reviewing it.</p>
<p><strong>What happens next?</strong></p>
<ul>
  <li>Our team will review your application within 48-72 business hours</li>
  <li>You'll receive updates via email and in your dashboard</li>
  <li>You can track your application status in real-time</li>
</ul>
<p><a href="{tracking_url}">Track Application Status</a></p>"#
    );
    EmailMessage {
        to: to.to_string(),
        subject: subject.to_string(),
        html_body: render_layout(subject, &inner),
    }
}

pub fn application_approved(to: &str, dashboard_url: &str) -> EmailMessage {
    let subject = "Congratulations! Your Application is Approved";
    let inner = format!(
        r#"<h2>Welcome to Broadway Sellers!</h2>
<p>Great news! Your seller application has been approved and you're now Broadway Certified.</p>
<p><strong>Your Broadway Certification Badge</strong> will help boost your product discovery and build trust with buyers.</p>
<p><strong>Next Steps:</strong></p>
<ol>
  <li>Complete your seller profile</li>
  <li>Add your first product</li>
  <li>Set up payment details</li>
  <li>Configure shipping addresses</li>
</ol>
<p><a href="{dashboard_url}">Go to Dashboard</a></p>"#
    );
    EmailMessage {
        to: to.to_string(),
        subject: subject.to_string(),
        html_body: render_layout(subject, &inner),
    }
}

pub fn application_rejected(to: &str, reason: &str) -> EmailMessage {
    let subject = "Broadway Sellers Application Update";
    let inner = format!(
        r#"<h2>Application Status Update</h2>
<p>Thank you for your interest in Broadway Sellers. After careful review, we're unable to approve your application at this time.</p>
<p><strong>Reason:</strong></p>
<p>{reason}</p>
<p>If you'd like to discuss this decision or have questions, please contact our support team.</p>"#
    );
    EmailMessage {
        to: to.to_string(),
        subject: subject.to_string(),
        html_body: render_layout(subject, &inner),
    }
}

pub fn clarification_needed(to: &str, message: &str, status_url: &str) -> EmailMessage {
    let subject = "Additional Information Required - Broadway Sellers";
    let inner = format!(
        r#"<h2>We need more information</h2>
<p>Our team is reviewing your application and needs some clarification:</p>
<div style="background: #fff3cd; padding: 15px; border-left: 4px solid #ffc107;">
  {message}
</div>
<p><a href="{status_url}">Provide Clarification</a></p>"#
    );
    EmailMessage {
        to: to.to_string(),
        subject: subject.to_string(),
        html_body: render_layout(subject, &inner),
    }
}

pub fn status_changed(to: &str, new_status: &str, status_url: &str) -> EmailMessage {
    let subject = format!("Application Status Update: {new_status}");
    let inner = format!(
        r#"<h2>Your application status has been updated</h2>
<p>Status: <strong>{new_status}</strong></p>
<p><a href="{status_url}">View Details</a></p>"#
    );
    EmailMessage {
        to: to.to_string(),
        html_body: render_layout(&subject, &inner),
        subject,
    }
}

pub fn magic_link(to: &str, link: &str) -> EmailMessage {
    let subject = "Sign in to Broadway Sellers";
    let inner = format!(
        r#"<h2>Sign in to your account</h2>
<p>Click the link below to sign in to Broadway Sellers. This link will expire in 10 minutes.</p>
<p><a href="{link}">Sign In</a></p>
<p>If you didn't request this email, you can safely ignore it.</p>"#
    );
    EmailMessage {
        to: to.to_string(),
        subject: subject.to_string(),
        html_body: render_layout(subject, &inner),
    }
}

pub fn support_ticket_created(to: &str, ticket_id: i64, ticket_subject: &str) -> EmailMessage {
    let subject = format!("Support Ticket Created: {ticket_subject}");
    let inner = format!(
        r#"<h2>Support Ticket Created</h2>
<p>We've received your support request and our team will respond within 24 hours.</p>
<p><strong>Ticket ID:</strong> #{ticket_id}</p>
<p><strong>Subject:</strong> {ticket_subject}</p>
<p>You can track your ticket status in your dashboard.</p>"#
    );
    EmailMessage {
        to: to.to_string(),
        html_body: render_layout(&subject, &inner),
        subject,
    }
}
