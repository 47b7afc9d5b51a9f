use serde::{Deserialize, Serialize};

/// One status document as served by the bot's web server.
///
/// Received fresh on every poll and never merged with a previous one.
/// Every field tolerates being absent or `null`; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    /// Whether the bot process is connected and operational.
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_ready: bool,

    /// Identity the bot is logged in as.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_count: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_deployments: Option<i64>,

    #[serde(default)]
    pub last_deployment: Option<LastDeployment>,
}

/// The most recent deployment announced by the bot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastDeployment {
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub cohost: Option<String>,
    #[serde(default)]
    pub when: Option<String>,
    /// Free-form flag. The bot stores strings like `"✅ Yes"`, other
    /// producers send booleans, so the raw JSON value is kept.
    #[serde(default)]
    pub promotional: Option<serde_json::Value>,
    #[serde(default)]
    pub channel: Option<String>,
    /// Creation time; see [`crate::snapshot::timestamp`] for accepted forms.
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
}

/// Response of the bot's health endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: String,
    /// Server time as epoch seconds.
    #[serde(default)]
    pub timestamp: f64,
    /// Seconds since the web server started.
    #[serde(default)]
    pub uptime: f64,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl StatusSnapshot {
    /// Parse a status document from a JSON body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

impl LastDeployment {
    /// The promotional flag as it is displayed: strings without quotes,
    /// other scalars as their JSON text, absent or null as empty.
    pub fn promotional_display(&self) -> String {
        match &self.promotional {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_snapshot_parses() {
        let body = r##"{
            "is_ready": true,
            "user": "Deployment Bot#1234",
            "guild_count": 3,
            "total_deployments": 17,
            "last_deployment": {
                "host": "alice",
                "cohost": "bob",
                "when": "Friday 8pm",
                "promotional": "✅ Yes",
                "channel": "deployments",
                "timestamp": "2024-03-05T14:07:09.123456"
            }
        }"##;

        let snapshot = StatusSnapshot::from_json(body).unwrap();
        assert!(snapshot.is_ready);
        assert_eq!(snapshot.user.as_deref(), Some("Deployment Bot#1234"));
        assert_eq!(snapshot.guild_count, Some(3));
        assert_eq!(snapshot.total_deployments, Some(17));

        let deployment = snapshot.last_deployment.unwrap();
        assert_eq!(deployment.host.as_deref(), Some("alice"));
        assert_eq!(deployment.channel.as_deref(), Some("deployments"));
        assert_eq!(deployment.promotional_display(), "✅ Yes");
    }

    #[test]
    fn test_minimal_snapshot_uses_defaults() {
        let snapshot = StatusSnapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, StatusSnapshot::default());
        assert!(!snapshot.is_ready);
    }

    #[test]
    fn test_nulls_are_absent() {
        let snapshot = StatusSnapshot::from_json(
            r#"{"is_ready": null, "user": null, "guild_count": null, "last_deployment": null}"#,
        )
        .unwrap();
        assert!(!snapshot.is_ready);
        assert!(snapshot.user.is_none());
        assert!(snapshot.guild_count.is_none());
        assert!(snapshot.last_deployment.is_none());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let snapshot =
            StatusSnapshot::from_json(r#"{"is_ready": true, "latency_ms": 42}"#).unwrap();
        assert!(snapshot.is_ready);
    }

    #[test]
    fn test_malformed_body_is_error() {
        assert!(StatusSnapshot::from_json("<html>502 Bad Gateway</html>").is_err());
        assert!(StatusSnapshot::from_json(r#"{"is_ready": "yes"}"#).is_err());
    }

    #[test]
    fn test_promotional_display() {
        let mut deployment = LastDeployment::default();
        assert_eq!(deployment.promotional_display(), "");

        deployment.promotional = Some(json!(true));
        assert_eq!(deployment.promotional_display(), "true");

        deployment.promotional = Some(json!("❌ No"));
        assert_eq!(deployment.promotional_display(), "❌ No");

        deployment.promotional = Some(json!(null));
        assert_eq!(deployment.promotional_display(), "");
    }

    #[test]
    fn test_health_report_parses() {
        let report: HealthReport = serde_json::from_str(
            r#"{"status": "healthy", "timestamp": 1700000000.5, "uptime": 12.25}"#,
        )
        .unwrap();
        assert_eq!(report.status, "healthy");
        assert_eq!(report.uptime, 12.25);
    }
}
