//! Yardstick is a web app for tracking spending against monthly budgets.
//!
//! The app keeps no data of its own. Transactions and budgets live in a
//! remote finance service, and every page fetches them over HTTP, aggregates
//! them and serves the result as HTML.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod aggregation;
mod alert;
mod api;
mod app_state;
mod budget;
mod calendar;
mod category;
mod charts;
mod dashboard;
mod endpoints;
mod error_page;
mod html;
mod navigation;
mod routing;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::ApiClient;
pub use app_state::AppState;
pub use routing::build_router;

use crate::{alert::Alert, error_page::ErrorPage};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("could not listen for Ctrl+C: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("could not listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
        },
    }

    handle.graceful_shutdown(Some(Duration::from_secs(1)));
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The finance service could not be reached, or the request timed out.
    #[error("could not reach the finance service: {0}")]
    Network(String),

    /// The finance service answered with a status other than 2xx or 404.
    #[error("the finance service responded to {url} with status {status}")]
    UnexpectedStatus {
        /// The HTTP status code of the response.
        status: u16,
        /// The URL that was requested.
        url: String,
    },

    /// The requested resource was not found.
    ///
    /// Either the finance service responded with 404, or the record with the
    /// requested ID is not in the list it returned.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The finance service sent a body that could not be decoded.
    #[error("could not decode the response from the finance service: {0}")]
    Parse(String),

    /// User input was rejected before anything was sent to the finance service.
    #[error("{0}")]
    Validation(String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// The configured base URL of the finance service cannot have paths appended to it.
    #[error("\"{0}\" is not a valid base URL for the finance service")]
    InvalidApiUrl(String),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Error::Parse(value.to_string())
        } else {
            Error::Network(value.to_string())
        }
    }
}

const SERVICE_UNAVAILABLE_FIX: &str =
    "The finance service did not respond. Check that it is running and try again.";

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => ErrorPage::not_found().into_response(),
            Error::Validation(message) => ErrorPage::bad_request(&message).into_response(),
            Error::Network(_) => ErrorPage::internal(
                "Could not reach the finance service",
                SERVICE_UNAVAILABLE_FIX,
            )
            .into_response(),
            Error::UnexpectedStatus { status, .. } => ErrorPage::internal(
                "The finance service returned an error",
                &format!(
                    "The finance service responded with status {status}. \
                    Try again later or check the server logs."
                ),
            )
            .into_response(),
            Error::Parse(_) => ErrorPage::internal(
                "Unexpected response from the finance service",
                "The data could not be read. Check that the finance service URL is correct.",
            )
            .into_response(),
            Error::InvalidTimezone(timezone) => ErrorPage::internal(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            )
            .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                ErrorPage::default().into_response()
            }
        }
    }
}

impl Error {
    /// Render the error as an alert for HTMX to swap into the alert container.
    fn into_alert_response(self) -> Response {
        match self {
            Error::Validation(message) => {
                Alert::error("Invalid input", &message).into_response(StatusCode::BAD_REQUEST)
            }
            Error::NotFound => Alert::error(
                "Not found",
                "The record could not be found. \
                Try refreshing the page to see if it has already been deleted.",
            )
            .into_response(StatusCode::NOT_FOUND),
            Error::Network(_) => Alert::error("Could not save changes", SERVICE_UNAVAILABLE_FIX)
                .into_response(StatusCode::BAD_GATEWAY),
            Error::UnexpectedStatus { status, .. } => Alert::error(
                "Could not save changes",
                &format!("The finance service responded with status {status}."),
            )
            .into_response(StatusCode::BAD_GATEWAY),
            Error::InvalidTimezone(timezone) => Alert::error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            )
            .into_response(StatusCode::INTERNAL_SERVER_ERROR),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                Alert::error(
                    "Something went wrong",
                    "An unexpected error occurred. Try again later or check the server logs.",
                )
                .into_response(StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
