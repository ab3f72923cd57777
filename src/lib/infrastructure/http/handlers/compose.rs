//! Compose page

use askama::Template;

use crate::domain::communication::emails::{MessageFormat, DEFAULT_LIMIT};

/// The compose form and sent email history
#[derive(Debug, Template)]
#[template(path = "compose.html")]
pub struct ComposeTemplate {
    /// Where the page posts and lists emails
    pub emails_url: &'static str,

    /// Selectable message formats, the default first
    pub formats: Vec<MessageFormat>,

    /// Page size of the history list
    pub history_limit: i64,
}

impl Default for ComposeTemplate {
    fn default() -> Self {
        Self {
            emails_url: "/api/v1/emails",
            formats: vec![MessageFormat::Plain, MessageFormat::Html, MessageFormat::Rich],
            history_limit: DEFAULT_LIMIT,
        }
    }
}

/// Render the compose page
pub async fn handler() -> ComposeTemplate {
    ComposeTemplate::default()
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{router, state::test_state};

    #[tokio::test]
    async fn test_compose_page() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?.get("/").await;

        response.assert_status_ok();

        let html = response.text();

        assert!(html.contains("<form id=\"compose\""));
        assert!(html.contains("<option value=\"plain\""));
        assert!(html.contains("<option value=\"rich\""));
        assert!(html.contains("/api/v1/emails"));

        Ok(())
    }

    #[tokio::test]
    async fn test_compose_page_is_html() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?.get("/").await;

        let content_type = response.header("content-type");

        assert!(content_type.to_str()?.starts_with("text/html"));

        Ok(())
    }
}
