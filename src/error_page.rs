//! Full-page responses for failed page requests: 400, 404 and 500.
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::html::error_view;

/// An error page with a large status code heading, what went wrong and how to fix it.
pub struct ErrorPage<'a> {
    pub status: StatusCode,
    pub description: &'a str,
    pub fix: &'a str,
}

impl<'a> ErrorPage<'a> {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            description: "Something's missing.",
            fix: "Sorry, we can't find that page. You'll find lots to explore on the home page.",
        }
    }

    pub fn bad_request(fix: &'a str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            description: "Invalid input",
            fix,
        }
    }

    pub fn internal(description: &'a str, fix: &'a str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            description,
            fix,
        }
    }

    fn title(&self) -> &'static str {
        match self.status {
            StatusCode::NOT_FOUND => "Not Found",
            StatusCode::BAD_REQUEST => "Bad Request",
            _ => "Internal Server Error",
        }
    }
}

impl Default for ErrorPage<'_> {
    fn default() -> Self {
        Self::internal(
            "Sorry, something went wrong.",
            "Try again later or check the server logs",
        )
    }
}

impl IntoResponse for ErrorPage<'_> {
    fn into_response(self) -> Response {
        let html = error_view(
            self.title(),
            self.status.as_str(),
            self.description,
            self.fix,
        );

        (self.status, Html(html.into_string())).into_response()
    }
}

pub async fn get_404_not_found() -> Response {
    ErrorPage::not_found().into_response()
}

pub async fn get_internal_server_error_page() -> Response {
    ErrorPage::default().into_response()
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use scraper::Selector;

    use super::{ErrorPage, get_404_not_found, get_internal_server_error_page};
    use crate::test_utils::{assert_valid_html, parse_html_document};

    #[tokio::test]
    async fn not_found_page_shows_status_code() {
        let response = get_404_not_found().await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let heading = html
            .select(&Selector::parse("h1").unwrap())
            .next()
            .expect("want a heading");
        assert_eq!(heading.text().collect::<String>().trim(), "404");
    }

    #[tokio::test]
    async fn internal_error_page_is_500() {
        let response = get_internal_server_error_page().await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_valid_html(&parse_html_document(response).await);
    }

    #[tokio::test]
    async fn bad_request_page_shows_fix() {
        let response = ErrorPage::bad_request("Amount must be a number").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let text = parse_html_document(response)
            .await
            .root_element()
            .text()
            .collect::<String>();
        assert!(text.contains("Amount must be a number"), "got {text}");
    }
}
