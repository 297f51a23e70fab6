use std::time::Duration;

use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    Error,
    budget::{Budget, NewBudget},
    transaction::{Transaction, TransactionFields},
};

const TRANSACTIONS: [&str; 2] = ["api", "transactions"];
const BUDGETS: [&str; 2] = ["api", "budgets"];

/// A client for the finance service's REST API.
///
/// Cloning is cheap, all clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client that sends requests to `base_url`, e.g.
    /// "http://localhost:5000", and gives up on a request after `timeout`.
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `base_url` is not an absolute HTTP URL,
    /// or [Error::Network] if the TLS backend could not be initialised.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let parsed_url = Url::parse(base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| {
                tracing::error!("could not use \"{base_url}\" as the finance service URL");
                Error::InvalidApiUrl(base_url.to_owned())
            })?;

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: parsed_url,
        })
    }

    /// Get every transaction in the order the service returns them.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, Error> {
        let url = self.url(&TRANSACTIONS)?;
        let response = self.send::<()>(Method::GET, url, None).await?;
        let transactions: Vec<Transaction> = decode_records(response).await?;

        for transaction in transactions
            .iter()
            .filter(|transaction| transaction.parsed_date().is_none())
        {
            tracing::warn!(
                "transaction {} has the unrecognised date \"{}\" and will be left out of monthly totals",
                transaction.id,
                transaction.date
            );
        }

        Ok(transactions)
    }

    /// Get the transaction with `id`.
    ///
    /// The service has no endpoint for a single transaction, so this fetches
    /// the whole list.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no transaction has `id`.
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, Error> {
        self.list_transactions()
            .await?
            .into_iter()
            .find(|transaction| transaction.id == id)
            .ok_or_else(|| {
                tracing::debug!("transaction {id} is not in the list from the finance service");
                Error::NotFound
            })
    }

    /// Create a transaction and return it with the ID the service assigned.
    pub async fn create_transaction(&self, fields: &TransactionFields) -> Result<Transaction, Error> {
        let url = self.url(&TRANSACTIONS)?;
        let response = self.send(Method::POST, url, Some(fields)).await?;

        decode(response).await
    }

    /// Replace the fields of the transaction with `id`.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the service does not know `id`.
    pub async fn update_transaction(
        &self,
        id: &str,
        fields: &TransactionFields,
    ) -> Result<Transaction, Error> {
        let url = self.url(&[TRANSACTIONS[0], TRANSACTIONS[1], id])?;
        let response = self.send(Method::PUT, url, Some(fields)).await?;

        decode(response).await
    }

    /// Delete the transaction with `id`. Any response body is ignored.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if the service does not know `id`.
    pub async fn delete_transaction(&self, id: &str) -> Result<(), Error> {
        let url = self.url(&[TRANSACTIONS[0], TRANSACTIONS[1], id])?;
        self.send::<()>(Method::DELETE, url, None).await?;

        Ok(())
    }

    /// Get every budget in the order the service returns them.
    pub async fn list_budgets(&self) -> Result<Vec<Budget>, Error> {
        let url = self.url(&BUDGETS)?;
        let response = self.send::<()>(Method::GET, url, None).await?;
        let budgets: Vec<Budget> = decode_records(response).await?;

        for budget in budgets.iter().filter(|budget| budget.parsed_month().is_none()) {
            tracing::warn!(
                "budget for {} has the unrecognised month \"{}\" and will be ignored",
                budget.category,
                budget.month
            );
        }

        Ok(budgets)
    }

    /// Store a budget and return it as the service saved it.
    pub async fn create_budget(&self, budget: &NewBudget) -> Result<Budget, Error> {
        let url = self.url(&BUDGETS)?;
        let response = self.send(Method::POST, url, Some(budget)).await?;

        decode(response).await
    }

    /// Append `segments` to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| Error::InvalidApiUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<Response, Error> {
        tracing::debug!("{method} {url}");

        let mut request = self.http.request(method.clone(), url.clone());

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .inspect_err(|error| tracing::error!("{method} {url} failed: {error}"))?;

        check_status(&method, response)
    }
}

fn check_status(method: &Method, response: Response) -> Result<Response, Error> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    tracing::error!("{method} {url} responded with {status}");

    if status == StatusCode::NOT_FOUND {
        Err(Error::NotFound)
    } else {
        Err(Error::UnexpectedStatus {
            status: status.as_u16(),
            url,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    let url = response.url().clone();
    let body = response
        .bytes()
        .await
        .inspect_err(|error| tracing::error!("could not read the response from {url}: {error}"))?;

    serde_json::from_slice(&body).map_err(|error| {
        tracing::error!("could not decode the response from {url}: {error}");
        Error::Parse(error.to_string())
    })
}

/// Decode a JSON array record by record.
///
/// Records that do not decode as `T` are logged and left out so that one bad
/// record cannot hide the rest.
async fn decode_records<T: DeserializeOwned>(response: Response) -> Result<Vec<T>, Error> {
    let url = response.url().clone();
    let records: Vec<Value> = decode(response).await?;

    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let id = record.get("_id").cloned().unwrap_or(Value::Null);

            serde_json::from_value(record)
                .inspect_err(|error| {
                    tracing::warn!("skipping record {index} (_id {id}) from {url}: {error}")
                })
                .ok()
        })
        .collect())
}
