//! An in-memory stand-in for the finance service, served over real HTTP.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::{AppState, api::ApiClient};

#[derive(Debug, Default)]
struct Records {
    transactions: Vec<Value>,
    budgets: Vec<Value>,
    next_id: u32,
}

type SharedRecords = Arc<Mutex<Records>>;

pub(crate) struct FakeFinanceService {
    base_url: String,
    records: SharedRecords,
}

impl FakeFinanceService {
    pub(crate) async fn start() -> Self {
        Self::with_records(Vec::new(), Vec::new()).await
    }

    pub(crate) async fn with_records(transactions: Vec<Value>, budgets: Vec<Value>) -> Self {
        let records = Arc::new(Mutex::new(Records {
            transactions,
            budgets,
            next_id: 0,
        }));

        let router = Router::new()
            .route(
                "/api/transactions",
                get(list_transactions).post(create_transaction),
            )
            .route(
                "/api/transactions/{id}",
                put(update_transaction).delete(delete_transaction),
            )
            .route("/api/budgets", get(list_budgets).post(create_budget))
            .with_state(records.clone());

        Self {
            base_url: serve(router).await,
            records,
        }
    }

    pub(crate) fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url, Duration::from_secs(5)).unwrap()
    }

    pub(crate) fn app_state(&self) -> AppState {
        AppState::new(self.client(), "Etc/UTC")
    }

    pub(crate) fn transactions(&self) -> Vec<Value> {
        self.records.lock().unwrap().transactions.clone()
    }

    pub(crate) fn budgets(&self) -> Vec<Value> {
        self.records.lock().unwrap().budgets.clone()
    }
}

/// A transaction as the finance service would send it.
pub(crate) fn transaction_record(
    id: &str,
    amount: f64,
    category: &str,
    date: &str,
    kind: &str,
) -> Value {
    json!({
        "_id": id,
        "amount": amount,
        "description": format!("{category} {kind}"),
        "category": category,
        "date": date,
        "type": kind,
    })
}

/// A budget as the finance service would send it.
pub(crate) fn budget_record(id: &str, category: &str, amount: f64, month: &str) -> Value {
    json!({
        "_id": id,
        "category": category,
        "amount": amount,
        "month": month,
    })
}

/// Serve `router` on an ephemeral port and return a client for it.
pub(crate) async fn client_for(router: Router) -> ApiClient {
    let base_url = serve(router).await;

    ApiClient::new(&base_url, Duration::from_secs(5)).unwrap()
}

/// A client pointed at a port nothing listens on.
pub(crate) fn unreachable_client() -> ApiClient {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    ApiClient::new(&format!("http://{address}"), Duration::from_secs(1)).unwrap()
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{address}")
}

async fn list_transactions(State(records): State<SharedRecords>) -> Json<Vec<Value>> {
    Json(records.lock().unwrap().transactions.clone())
}

async fn create_transaction(
    State(records): State<SharedRecords>,
    Json(mut transaction): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut records = records.lock().unwrap();
    records.next_id += 1;
    transaction["_id"] = json!(format!("t{}", records.next_id));
    records.transactions.push(transaction.clone());

    (StatusCode::CREATED, Json(transaction))
}

async fn update_transaction(
    State(records): State<SharedRecords>,
    Path(id): Path<String>,
    Json(fields): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut records = records.lock().unwrap();
    let transaction = records
        .transactions
        .iter_mut()
        .find(|transaction| transaction["_id"] == id.as_str())
        .ok_or(StatusCode::NOT_FOUND)?;

    if let (Some(transaction), Some(fields)) = (transaction.as_object_mut(), fields.as_object()) {
        for (key, value) in fields {
            transaction.insert(key.clone(), value.clone());
        }
    }

    Ok(Json(transaction.clone()))
}

async fn delete_transaction(
    State(records): State<SharedRecords>,
    Path(id): Path<String>,
) -> StatusCode {
    let mut records = records.lock().unwrap();

    match records
        .transactions
        .iter()
        .position(|transaction| transaction["_id"] == id.as_str())
    {
        Some(index) => {
            records.transactions.remove(index);
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn list_budgets(State(records): State<SharedRecords>) -> Json<Vec<Value>> {
    Json(records.lock().unwrap().budgets.clone())
}

async fn create_budget(
    State(records): State<SharedRecords>,
    Json(mut budget): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut records = records.lock().unwrap();
    records.next_id += 1;
    budget["_id"] = json!(format!("b{}", records.next_id));
    records.budgets.push(budget.clone());

    (StatusCode::CREATED, Json(budget))
}
