use tracing::debug;

use crate::document::{Document, ElementId};
use crate::escape::escape_html;
use crate::render::templates::*;
use crate::snapshot::{LastDeployment, StatusSnapshot};

/// Replace the markup of `id`, tolerating a missing element.
pub fn update_element<D: Document + ?Sized>(doc: &mut D, id: ElementId, content: &str) {
    if !doc.set_inner_html(id.as_str(), content) {
        debug!(event = "core.render.target_missing", target = id.as_str());
    }
}

fn update_class<D: Document + ?Sized>(doc: &mut D, id: ElementId, class_name: &str) {
    if !doc.set_class_name(id.as_str(), class_name) {
        debug!(event = "core.render.target_missing", target = id.as_str());
    }
}

/// Render a successfully fetched snapshot into every dashboard element.
pub fn render_status<D: Document + ?Sized>(doc: &mut D, status: &StatusSnapshot) {
    let (indicator_html, indicator_class, badge) = if status.is_ready {
        (ONLINE_INDICATOR_HTML, ONLINE_INDICATOR_CLASS, ONLINE_BADGE_HTML)
    } else {
        (
            OFFLINE_INDICATOR_HTML,
            OFFLINE_INDICATOR_CLASS,
            OFFLINE_BADGE_HTML,
        )
    };

    update_element(doc, ElementId::StatusIndicator, indicator_html);
    update_class(doc, ElementId::StatusIndicator, indicator_class);
    update_element(doc, ElementId::BotStatus, badge);

    let user = match status.user.as_deref() {
        Some(user) if !user.is_empty() => escape_html(user),
        _ => USER_PLACEHOLDER.to_string(),
    };
    update_element(doc, ElementId::BotUser, &user);
    update_element(doc, ElementId::GuildCount, &count_text(status.guild_count));
    update_element(
        doc,
        ElementId::TotalDeployments,
        &count_text(status.total_deployments),
    );

    render_last_deployment(doc, status.last_deployment.as_ref());
}

fn count_text(count: Option<i64>) -> String {
    count
        .map(|n| n.to_string())
        .unwrap_or_else(|| COUNT_PLACEHOLDER.to_string())
}

/// Render the last-deployment card, or the empty state when there is none.
pub fn render_last_deployment<D: Document + ?Sized>(
    doc: &mut D,
    deployment: Option<&LastDeployment>,
) {
    match deployment {
        Some(deployment) => update_element(
            doc,
            ElementId::LastDeployment,
            &deployment_card_html(deployment),
        ),
        None => update_element(doc, ElementId::LastDeployment, EMPTY_STATE_HTML),
    }
}

/// Render the uniform connection-error state.
///
/// The last-deployment card keeps whatever it showed before.
pub fn render_error<D: Document + ?Sized>(doc: &mut D) {
    update_element(doc, ElementId::StatusIndicator, ERROR_INDICATOR_HTML);
    update_class(doc, ElementId::StatusIndicator, ERROR_INDICATOR_CLASS);

    update_element(doc, ElementId::BotStatus, CONNECTION_ERROR_BADGE_HTML);
    update_element(doc, ElementId::BotUser, USER_UNAVAILABLE);
    update_element(doc, ElementId::GuildCount, COUNT_UNAVAILABLE);
    update_element(doc, ElementId::TotalDeployments, COUNT_UNAVAILABLE);
}
