//! Markup written into the dashboard elements.

use crate::escape::escape_html;
use crate::snapshot::{LastDeployment, display_timestamp};

pub const ONLINE_INDICATOR_HTML: &str = r#"<i class="fas fa-circle me-1"></i>Online"#;
pub const ONLINE_INDICATOR_CLASS: &str = "badge bg-success";
pub const OFFLINE_INDICATOR_HTML: &str = r#"<i class="fas fa-circle me-1"></i>Offline"#;
pub const OFFLINE_INDICATOR_CLASS: &str = "badge bg-danger pulse";
pub const ERROR_INDICATOR_HTML: &str = r#"<i class="fas fa-exclamation-circle me-1"></i>Error"#;
pub const ERROR_INDICATOR_CLASS: &str = "badge bg-warning";

pub const ONLINE_BADGE_HTML: &str = r#"<span class="badge bg-success">Online</span>"#;
pub const OFFLINE_BADGE_HTML: &str = r#"<span class="badge bg-danger">Offline</span>"#;
pub const CONNECTION_ERROR_BADGE_HTML: &str =
    r#"<span class="badge bg-warning">Connection Error</span>"#;

pub const USER_PLACEHOLDER: &str = "Not logged in";
pub const COUNT_PLACEHOLDER: &str = "0";
pub const USER_UNAVAILABLE: &str = "Unable to fetch";
pub const COUNT_UNAVAILABLE: &str = "N/A";

pub const EMPTY_STATE_TEXT: &str = "No deployments created yet";

pub const EMPTY_STATE_HTML: &str = r#"
                <div class="text-center text-muted">
                    <i class="fas fa-clock fa-2x mb-2"></i>
                    <p>No deployments created yet</p>
                </div>
            "#;

/// Detail card for the most recent deployment.
///
/// Free-text fields are escaped; the promotional flag and the formatted
/// timestamp are inserted as-is.
pub fn deployment_card_html(deployment: &LastDeployment) -> String {
    let text = |field: &Option<String>| escape_html(field.as_deref().unwrap_or_default());
    let timestamp = display_timestamp(deployment.timestamp.as_ref());

    format!(
        r#"
            <div class="row">
                <div class="col-md-6">
                    <div class="deployment-detail">
                        <strong>👑 Host:</strong>
                        <span>{host}</span>
                    </div>
                    <div class="deployment-detail">
                        <strong>🤝 Co-Host:</strong>
                        <span>{cohost}</span>
                    </div>
                </div>
                <div class="col-md-6">
                    <div class="deployment-detail">
                        <strong>📅 When:</strong>
                        <span>{when}</span>
                    </div>
                    <div class="deployment-detail">
                        <strong>🎁 Promotional:</strong>
                        <span>{promotional}</span>
                    </div>
                </div>
            </div>
            <div class="row mt-2">
                <div class="col-12">
                    <div class="deployment-detail">
                        <strong>📍 Channel:</strong>
                        <span>#{channel}</span>
                    </div>
                    <div class="deployment-detail">
                        <strong>🕒 Created:</strong>
                        <span>{timestamp}</span>
                    </div>
                </div>
            </div>
        "#,
        host = text(&deployment.host),
        cohost = text(&deployment.cohost),
        when = text(&deployment.when),
        promotional = deployment.promotional_display(),
        channel = text(&deployment.channel),
        timestamp = timestamp,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::html_to_text;
    use serde_json::json;

    #[test]
    fn test_card_contains_every_field() {
        let deployment = LastDeployment {
            host: Some("alice".to_string()),
            cohost: Some("bob".to_string()),
            when: Some("Friday 8pm".to_string()),
            promotional: Some(json!("✅ Yes")),
            channel: Some("deployments".to_string()),
            timestamp: Some(json!("2024-03-05T14:07:09")),
        };

        let text = html_to_text(&deployment_card_html(&deployment));
        assert_eq!(
            text,
            "👑 Host: alice 🤝 Co-Host: bob 📅 When: Friday 8pm 🎁 Promotional: ✅ Yes \
             📍 Channel: #deployments 🕒 Created: 3/5/2024, 2:07:09 PM"
        );
    }

    #[test]
    fn test_card_escapes_free_text() {
        let deployment = LastDeployment {
            host: Some("<script>alert(1)</script>".to_string()),
            channel: Some("<b>ops</b>".to_string()),
            ..LastDeployment::default()
        };

        let html = deployment_card_html(&deployment);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("#&lt;b&gt;ops&lt;/b&gt;"));
    }

    #[test]
    fn test_card_with_missing_fields() {
        let text = html_to_text(&deployment_card_html(&LastDeployment::default()));
        assert!(text.contains("👑 Host: 🤝 Co-Host:"));
        assert!(text.contains("📍 Channel: #"));
        assert!(text.ends_with("🕒 Created: Invalid Date"));
    }

    #[test]
    fn test_empty_state_text() {
        assert_eq!(html_to_text(EMPTY_STATE_HTML), EMPTY_STATE_TEXT);
    }
}
