use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::document::Document;
use crate::errors::DashError;
use crate::poller::types::PollOutcome;
use crate::render;
use crate::source::StatusSource;

/// Run one poll cycle: fetch a snapshot and render it, or render the error
/// state if anything went wrong.
///
/// Never fails: every error is logged and turned into
/// [`PollOutcome::Failed`]. The document lock is held only for the render.
pub async fn poll_cycle<S, D>(source: &S, document: &Mutex<D>) -> PollOutcome
where
    S: StatusSource + ?Sized,
    D: Document + ?Sized,
{
    match source.fetch_status().await {
        Ok(snapshot) => {
            let mut doc = document.lock().await;
            render::render_status(&mut *doc, &snapshot);
            drop(doc);

            info!(
                event = "core.poller.poll_succeeded",
                is_ready = snapshot.is_ready,
                has_last_deployment = snapshot.last_deployment.is_some()
            );
            PollOutcome::Rendered {
                is_ready: snapshot.is_ready,
            }
        }
        Err(e) => {
            warn!(
                event = "core.poller.poll_failed",
                endpoint = %source.endpoint(),
                error = %e,
                error_code = e.error_code()
            );

            let mut doc = document.lock().await;
            render::render_error(&mut *doc);
            PollOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PageDocument;
    use crate::snapshot::StatusSnapshot;
    use crate::source::{FetchError, MockStatusSource};

    fn mock_returning(
        result: Result<StatusSnapshot, FetchError>,
    ) -> MockStatusSource {
        let mut source = MockStatusSource::new();
        source
            .expect_fetch_status()
            .times(1)
            .returning(move || result.clone());
        source
            .expect_endpoint()
            .returning(|| "http://test/api/status".to_string());
        source
    }

    #[tokio::test]
    async fn test_success_renders_snapshot() {
        let source = mock_returning(Ok(StatusSnapshot {
            is_ready: true,
            user: Some("botA".to_string()),
            ..StatusSnapshot::default()
        }));
        let page = Mutex::new(PageDocument::dashboard());

        let outcome = poll_cycle(&source, &page).await;

        assert_eq!(outcome, PollOutcome::Rendered { is_ready: true });
        let page = page.lock().await;
        assert_eq!(page.text_content("status-indicator").as_deref(), Some("Online"));
        assert_eq!(page.inner_html("bot-user"), Some("botA"));
    }

    #[tokio::test]
    async fn test_every_failure_kind_renders_error_state() {
        for error in [
            FetchError::Transport {
                message: "connection refused".to_string(),
            },
            FetchError::HttpStatus { status: 500 },
            FetchError::MalformedBody {
                message: "expected value at line 1 column 1".to_string(),
            },
        ] {
            let source = mock_returning(Err(error.clone()));
            let page = Mutex::new(PageDocument::dashboard());

            let outcome = poll_cycle(&source, &page).await;

            assert_eq!(outcome, PollOutcome::Failed(error));
            let page = page.lock().await;
            assert_eq!(page.text_content("status-indicator").as_deref(), Some("Error"));
            assert_eq!(page.inner_html("bot-user"), Some("Unable to fetch"));
            assert_eq!(page.inner_html("guild-count"), Some("N/A"));
            assert_eq!(page.inner_html("total-deployments"), Some("N/A"));
        }
    }
}
