// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! Notification composition for contact requests.
//!
//! Renders the subject line and HTML body the business owner receives for
//! each contact request. Pure: the submission timestamp is passed in, so
//! output is deterministic given its inputs.

use crate::sanitize::SanitizedContact;
use chrono::{DateTime, Utc};
use chrono_tz::Europe::Madrid;

/// A composed notification, consumed once by the mail dispatcher.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    /// Business contact address the notification is delivered to
    pub recipient: String,
    pub subject: String,
    pub html: String,
}

/// Compose the notification for a sanitized contact request.
///
/// `domain` is the website the footer credits; `sent_at` is rendered in the
/// business's local timezone (Europe/Madrid).
pub fn compose(
    contact: &SanitizedContact,
    recipient: &str,
    domain: &str,
    sent_at: DateTime<Utc>,
) -> NotificationMessage {
    let subject = if contact.urgent {
        format!("🚨 URGENTE: Nueva solicitud de {}", contact.name)
    } else {
        format!("Nueva solicitud de {}", contact.name)
    };

    NotificationMessage {
        recipient: recipient.to_string(),
        subject,
        html: body_html(contact, domain, sent_at),
    }
}

fn body_html(contact: &SanitizedContact, domain: &str, sent_at: DateTime<Utc>) -> String {
    let mut content = String::new();

    if contact.urgent {
        content.push_str(
            r#"<div class="urgent">
  <p>⚠️ EL CLIENTE INDICA QUE ES URGENTE</p>
</div>
"#,
        );
    }

    content.push_str(&field("Nombre", &contact.name));
    content.push_str(&field(
        "Teléfono",
        &format!(r#"<a href="tel:{0}">{0}</a>"#, contact.phone),
    ));

    if let Some(email) = &contact.email {
        content.push_str(&field(
            "Email",
            &format!(r#"<a href="mailto:{0}">{0}</a>"#, email),
        ));
    }

    if let Some(service) = &contact.service {
        content.push_str(&field("Servicio solicitado", service));
    }

    if let Some(message) = &contact.message {
        content.push_str(&field("Mensaje", &message.replace('\n', "<br>")));
    }

    // es-ES wall clock: d/m/yyyy, H:MM:SS
    let stamp = sent_at
        .with_timezone(&Madrid)
        .format("%-d/%-m/%Y, %-H:%M:%S");

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
    .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
    .header {{ background: #1d4ed8; color: white; padding: 20px; border-radius: 8px 8px 0 0; }}
    .content {{ background: #f9fafb; padding: 20px; border: 1px solid #e5e7eb; }}
    .urgent {{ background: #fef2f2; border: 2px solid #ef4444; padding: 10px; margin-bottom: 20px; border-radius: 4px; }}
    .urgent p {{ color: #dc2626; font-weight: bold; margin: 0; }}
    .field {{ margin-bottom: 15px; }}
    .label {{ font-weight: bold; color: #374151; }}
    .value {{ color: #111827; }}
    .footer {{ text-align: center; padding: 20px; color: #6b7280; font-size: 12px; }}
    a {{ color: #1d4ed8; }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1 style="margin: 0;">Nueva Solicitud desde la Web</h1>
    </div>
    <div class="content">
{content}    </div>
    <div class="footer">
      <p>Enviado desde {domain} el {stamp}</p>
    </div>
  </div>
</body>
</html>
"#
    )
}

fn field(label: &str, value_html: &str) -> String {
    format!(
        r#"<div class="field">
  <p class="label">{label}:</p>
  <p class="value">{value_html}</p>
</div>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn contact() -> SanitizedContact {
        SanitizedContact {
            name: "Ana".to_string(),
            phone: "+34600000000".to_string(),
            email: None,
            service: None,
            message: None,
            urgent: false,
        }
    }

    fn at() -> DateTime<Utc> {
        // 11:30 UTC is 13:30 in Madrid in August (CEST).
        Utc.with_ymd_and_hms(2026, 8, 6, 11, 30, 5).unwrap()
    }

    #[test]
    fn subject_without_urgency() {
        let msg = compose(&contact(), "info@arturomorgadanes.es", "arturomorgadanes.com", at());
        assert_eq!(msg.subject, "Nueva solicitud de Ana");
        assert_eq!(msg.recipient, "info@arturomorgadanes.es");
    }

    #[test]
    fn urgent_subject_and_banner() {
        let mut c = contact();
        c.urgent = true;
        let msg = compose(&c, "info@arturomorgadanes.es", "arturomorgadanes.com", at());
        assert_eq!(msg.subject, "🚨 URGENTE: Nueva solicitud de Ana");
        assert!(msg.html.contains("EL CLIENTE INDICA QUE ES URGENTE"));
    }

    #[test]
    fn non_urgent_body_has_no_banner() {
        let msg = compose(&contact(), "a@b.es", "arturomorgadanes.com", at());
        assert!(!msg.html.contains("EL CLIENTE INDICA QUE ES URGENTE"));
    }

    #[test]
    fn phone_renders_as_click_to_call_link() {
        let msg = compose(&contact(), "a@b.es", "arturomorgadanes.com", at());
        assert!(msg
            .html
            .contains(r#"<a href="tel:+34600000000">+34600000000</a>"#));
    }

    #[test]
    fn optional_fields_render_only_when_present() {
        let msg = compose(&contact(), "a@b.es", "arturomorgadanes.com", at());
        assert!(!msg.html.contains("mailto:"));
        assert!(!msg.html.contains("Servicio solicitado"));
        assert!(!msg.html.contains("Mensaje"));

        let mut c = contact();
        c.email = Some("ana@example.com".to_string());
        c.service = Some("Desatascos".to_string());
        c.message = Some("Tengo una fuga.\n¿Puede venir hoy?".to_string());
        let msg = compose(&c, "a@b.es", "arturomorgadanes.com", at());
        assert!(msg
            .html
            .contains(r#"<a href="mailto:ana@example.com">ana@example.com</a>"#));
        assert!(msg.html.contains("Servicio solicitado"));
        assert!(msg.html.contains("Tengo una fuga.<br>¿Puede venir hoy?"));
    }

    #[test]
    fn footer_is_stamped_in_madrid_time() {
        let msg = compose(&contact(), "a@b.es", "arturomorgadanes.com", at());
        assert!(msg
            .html
            .contains("Enviado desde arturomorgadanes.com el 6/8/2026, 13:30:05"));
    }
}
