//! Alerts for reporting the outcome of an HTMX request.
//!
//! Mutation endpoints respond with an alert fragment that HTMX swaps into
//! the `#alert-container` element rendered by [crate::html::base].

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

/// A dismissable error message shown at the bottom of the page.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_html(self) -> Markup {
        // Template adapted from https://flowbite.com/docs/components/alerts/
        html!(
            div
                class="p-4 mb-4 text-red-800 border border-red-300 rounded-lg \
                    bg-red-50 dark:bg-gray-800 dark:text-red-400 dark:border-red-800"
                role="alert"
            {
                div class="flex items-center justify-between"
                {
                    h3 class="text-lg font-medium" { (self.message) }

                    button
                        type="button"
                        class="ms-2 bg-transparent rounded-lg p-1.5 inline-flex \
                            items-center justify-center h-8 w-8 hover:opacity-75"
                        aria-label="Close"
                        onclick="this.closest('#alert-container').classList.add('hidden')"
                    {
                        span class="sr-only" { "Close" }
                        "✕"
                    }
                }

                @if !self.details.is_empty() {
                    div class="mt-2 text-sm" { (self.details) }
                }
            }
        )
    }

    /// Render the alert with `status_code`.
    ///
    /// HTMX only swaps error responses into the page when the requesting
    /// element sets `hx-target-error`.
    pub fn into_response(self, status_code: StatusCode) -> Response {
        (status_code, Html(self.into_html().into_string())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::{Html, Selector};

    use super::Alert;
    use crate::test_utils::parse_html_fragment;

    #[test]
    fn error_alert_shows_message_and_details() {
        let html = Html::parse_fragment(
            &Alert::error("Could not save changes", "Try again later.")
                .into_html()
                .into_string(),
        );

        let alert = html
            .select(&Selector::parse("div[role=alert]").unwrap())
            .next()
            .expect("want an element with role=alert");
        let text = alert.text().collect::<String>();
        assert!(text.contains("Could not save changes"), "got {text}");
        assert!(text.contains("Try again later."), "got {text}");
        assert!(
            alert.value().attr("class").unwrap().contains("text-red-800"),
            "want error styling"
        );
    }

    #[test]
    fn details_are_optional() {
        let html = Html::parse_fragment(&Alert::error("Saved", "").into_html().into_string());

        let details = html.select(&Selector::parse("div.mt-2").unwrap()).count();
        assert_eq!(details, 0, "want no details element");
    }

    #[tokio::test]
    async fn into_response_sets_status() {
        let response = Alert::error("Nope", "").into_response(StatusCode::BAD_REQUEST);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = parse_html_fragment(response).await;
        assert!(html.errors.is_empty(), "{:?}", html.errors);
    }
}
