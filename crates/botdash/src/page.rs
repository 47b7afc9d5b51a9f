use botdash_core::{ElementId, PageDocument};

const LABEL_WIDTH: usize = 16;
const VALUE_WIDTH: usize = 48;

/// Rows shown above the last-deployment card.
const SUMMARY_ROWS: [(&str, ElementId); 5] = [
    ("Status", ElementId::StatusIndicator),
    ("Bot", ElementId::BotStatus),
    ("User", ElementId::BotUser),
    ("Guilds", ElementId::GuildCount),
    ("Deployments", ElementId::TotalDeployments),
];

/// Draw the visible text of a dashboard page as a two-column box.
pub fn render_page(page: &PageDocument) -> String {
    let mut lines = vec![border('┌', '┬', '┐')];

    for (label, id) in SUMMARY_ROWS {
        let value = page.text_content(id.as_str()).unwrap_or_default();
        lines.push(row(label, &value));
    }

    lines.push(border('├', '┼', '┤'));

    let card = page
        .text_lines(ElementId::LastDeployment.as_str())
        .unwrap_or_default();
    if card.is_empty() {
        lines.push(row("Last Deployment", ""));
    }
    for (i, line) in card.iter().enumerate() {
        let label = if i == 0 { "Last Deployment" } else { "" };
        lines.push(row(label, line));
    }

    lines.push(border('└', '┴', '┘'));
    lines.join("\n")
}

pub fn print_page(page: &PageDocument) {
    println!("{}", render_page(page));
}

fn row(label: &str, value: &str) -> String {
    format!(
        "│ {} │ {} │",
        truncate(label, LABEL_WIDTH),
        truncate(value, VALUE_WIDTH)
    )
}

fn border(left: char, middle: char, right: char) -> String {
    format!(
        "{}{}{}{}{}",
        left,
        "─".repeat(LABEL_WIDTH + 2),
        middle,
        "─".repeat(VALUE_WIDTH + 2),
        right
    )
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use botdash_core::render_ops;
    use botdash_core::{LastDeployment, StatusSnapshot};

    #[test]
    fn test_truncate_pads_and_cuts() {
        assert_eq!(truncate("abc", 5), "abc  ");
        assert_eq!(truncate("abcdefgh", 6), "abc...");
        assert_eq!(truncate("👑👑👑👑", 4), "👑👑👑👑");
    }

    #[test]
    fn test_render_blank_page() {
        let output = render_page(&PageDocument::dashboard());
        assert!(output.starts_with('┌'));
        assert!(output.ends_with('┘'));
        assert!(output.contains("│ Last Deployment"));
    }

    #[test]
    fn test_render_snapshot() {
        let mut page = PageDocument::dashboard();
        render_ops::render_status(
            &mut page,
            &StatusSnapshot {
                is_ready: true,
                user: Some("botA".to_string()),
                guild_count: Some(12),
                total_deployments: Some(5),
                last_deployment: Some(LastDeployment {
                    host: Some("alice".to_string()),
                    channel: Some("deployments".to_string()),
                    ..LastDeployment::default()
                }),
            },
        );

        let output = render_page(&page);
        assert!(output.contains("│ Status           │ Online"));
        assert!(output.contains("│ User             │ botA"));
        assert!(output.contains("│ Guilds           │ 12"));
        assert!(output.contains("│ Last Deployment  │ 👑 Host: alice"));
        assert!(output.contains("📍 Channel: #deployments"));
    }

    #[test]
    fn test_render_error_page() {
        let mut page = PageDocument::dashboard();
        render_ops::render_error(&mut page);

        let output = render_page(&page);
        assert!(output.contains("Connection Error"));
        assert!(output.contains("Unable to fetch"));
        assert!(output.contains("N/A"));
    }
}
