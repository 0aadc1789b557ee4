//! Plain-text and HTML bodies for each notification.

use chrono::{DateTime, Utc};

use crate::domain::entities::order::Order;
use crate::domain::entities::otp::OtpPurpose;

use super::traits::EmailMessage;

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn wrap_html(brand: &str, inner: &str) -> String {
    format!(
        "<!doctype html><html><body style=\"font-family:Helvetica,Arial,sans-serif;color:#222\">\
         <h2>{}</h2>{}<p style=\"color:#888;font-size:12px\">This is an automated message.</p>\
         </body></html>",
        escape_html(brand),
        inner
    )
}

pub(super) fn otp_code(
    brand: &str,
    to: &str,
    code: &str,
    purpose: OtpPurpose,
    valid_minutes: i64,
) -> EmailMessage {
    let (subject, intro) = match purpose {
        OtpPurpose::Registration => (
            format!("{brand} - Verify your email"),
            "Use this code to finish creating your account:",
        ),
        OtpPurpose::PasswordReset => (
            format!("{brand} - Password reset code"),
            "Use this code to reset your password:",
        ),
    };

    let text_body = format!(
        "{intro}\n\n    {code}\n\nThe code expires in {valid_minutes} minutes. \
         If you did not request it, you can ignore this email.\n"
    );
    let html_body = wrap_html(
        brand,
        &format!(
            "<p>{intro}</p><p style=\"font-size:28px;letter-spacing:6px\"><strong>{code}</strong></p>\
             <p>The code expires in {valid_minutes} minutes. If you did not request it, \
             you can ignore this email.</p>"
        ),
    );

    EmailMessage {
        to: to.to_string(),
        subject,
        text_body,
        html_body,
    }
}

pub(super) fn login_notice(brand: &str, to: &str, name: &str, at: DateTime<Utc>) -> EmailMessage {
    let when = at.format("%Y-%m-%d %H:%M UTC");
    EmailMessage {
        to: to.to_string(),
        subject: format!("{brand} - New sign-in to your account"),
        text_body: format!(
            "Hi {name},\n\nWe noticed a sign-in to your account at {when}.\n\
             If this wasn't you, reset your password right away.\n"
        ),
        html_body: wrap_html(
            brand,
            &format!(
                "<p>Hi {},</p><p>We noticed a sign-in to your account at {when}.</p>\
                 <p>If this wasn't you, reset your password right away.</p>",
                escape_html(name)
            ),
        ),
    }
}

pub(super) fn password_changed(brand: &str, to: &str, frontend_url: &str) -> EmailMessage {
    EmailMessage {
        to: to.to_string(),
        subject: format!("{brand} - Your password was changed"),
        text_body: format!(
            "The password for your account was just changed.\n\
             If you did not do this, reset it at {frontend_url}/forgot-password.\n"
        ),
        html_body: wrap_html(
            brand,
            &format!(
                "<p>The password for your account was just changed.</p>\
                 <p>If you did not do this, <a href=\"{0}/forgot-password\">reset it here</a>.</p>",
                escape_html(frontend_url)
            ),
        ),
    }
}

pub(super) fn order_confirmation(
    brand: &str,
    to: &str,
    name: &str,
    order: &Order,
    frontend_url: &str,
) -> EmailMessage {
    let mut text_lines = String::new();
    let mut html_rows = String::new();
    for item in &order.products {
        let variant = [item.selected_size.as_str(), item.selected_color.as_str()]
            .iter()
            .filter(|v| !v.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" / ");
        text_lines.push_str(&format!(
            "  - {} {} x{} @ {}\n",
            item.name, variant, item.quantity, item.price
        ));
        html_rows.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&item.name),
            escape_html(&variant),
            item.quantity,
            item.price
        ));
    }

    let address = &order.shipping_address;
    let ship_to = [
        address.address.as_str(),
        address.city.as_str(),
        address.state.as_str(),
        address.zip_code.as_str(),
        address.country.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(", ");

    EmailMessage {
        to: to.to_string(),
        subject: format!("{brand} - Order {} confirmed", order.order_id),
        text_body: format!(
            "Hi {name},\n\nThanks for your order {}.\n\n{text_lines}\nTotal: {}\n\
             Payment: {}\nShipping to: {ship_to}\nStatus: {}\n\n\
             Track it at {frontend_url}/orders\n",
            order.order_id, order.total_amount, order.payment_method, order.status
        ),
        html_body: wrap_html(
            brand,
            &format!(
                "<p>Hi {},</p><p>Thanks for your order <strong>{}</strong>.</p>\
                 <table cellpadding=\"4\"><tr><th>Item</th><th>Variant</th><th>Qty</th><th>Price</th></tr>{html_rows}</table>\
                 <p><strong>Total:</strong> {}</p><p><strong>Payment:</strong> {}</p>\
                 <p><strong>Shipping to:</strong> {}</p><p><strong>Status:</strong> {}</p>\
                 <p><a href=\"{}/orders\">View your orders</a></p>",
                escape_html(name),
                escape_html(&order.order_id),
                order.total_amount,
                escape_html(&order.payment_method),
                escape_html(&ship_to),
                order.status,
                escape_html(frontend_url)
            ),
        ),
    }
}
