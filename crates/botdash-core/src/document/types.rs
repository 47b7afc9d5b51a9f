use std::fmt;

/// Identifiers of the page elements the dashboard writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Badge in the navbar
    StatusIndicator,
    BotStatus,
    BotUser,
    GuildCount,
    TotalDeployments,
    /// Detail card of the most recent deployment
    LastDeployment,
}

impl ElementId {
    pub const ALL: [ElementId; 6] = [
        ElementId::StatusIndicator,
        ElementId::BotStatus,
        ElementId::BotUser,
        ElementId::GuildCount,
        ElementId::TotalDeployments,
        ElementId::LastDeployment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::StatusIndicator => "status-indicator",
            ElementId::BotStatus => "bot-status",
            ElementId::BotUser => "bot-user",
            ElementId::GuildCount => "guild-count",
            ElementId::TotalDeployments => "total-deployments",
            ElementId::LastDeployment => "last-deployment",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single addressable element: its markup content and class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub inner_html: String,
    pub class_name: String,
}
