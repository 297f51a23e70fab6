//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::api::ApiClient;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The client for the finance service that stores transactions and budgets.
    pub api: ApiClient,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    /// It is checked when a page first needs today's date.
    pub fn new(api: ApiClient, local_timezone: &str) -> Self {
        Self {
            api,
            local_timezone: local_timezone.to_owned(),
        }
    }
}

// Handlers that only talk to the finance service can extract the client directly.
impl FromRef<AppState> for ApiClient {
    fn from_ref(state: &AppState) -> Self {
        state.api.clone()
    }
}
