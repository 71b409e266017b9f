use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    #[serde(rename = "employeeID")]
    pub id: u64,
    #[serde(rename = "employeeName")]
    pub name: String,
    #[serde(rename = "employeeAge")]
    pub age: u32,
    #[serde(rename = "employeeEmail")]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateEmployee {
    #[serde(rename = "employeeName")]
    pub name: String,
    #[serde(rename = "employeeAge")]
    pub age: u32,
    #[serde(rename = "employeeEmail")]
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveEmployee {
    #[serde(rename = "employeeID")]
    pub id: u64,
}

/// Roster keyed by id; BTreeMap keeps list responses in stable id order.
#[derive(Default)]
pub struct Roster {
    next_id: u64,
    rows: BTreeMap<u64, Employee>,
}

pub type Db = Arc<RwLock<Roster>>;

#[derive(Clone)]
struct AppState {
    expected_auth: String,
    db: Db,
}

/// Build the router with the Basic-Auth credentials every route requires.
pub fn app(username: &str, password: &str) -> Router {
    let state = AppState {
        expected_auth: format!(
            "Basic {}",
            STANDARD.encode(format!("{username}:{password}"))
        ),
        db: Arc::new(RwLock::new(Roster::default())),
    };
    Router::new()
        .route("/employees", get(list_employees))
        .route("/employees/add", post(add_employee))
        .route("/employees/remove", post(remove_employee))
        .with_state(state)
}

pub async fn run(listener: TcpListener, username: &str, password: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(username, password)).await
}

fn authorized(state: &AppState, headers: &HeaderMap) -> Result<(), StatusCode> {
    let presented = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    if presented == Some(state.expected_auth.as_str()) {
        Ok(())
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

async fn list_employees(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Employee>>, StatusCode> {
    authorized(&state, &headers)?;
    let roster = state.db.read().await;
    Ok(Json(roster.rows.values().cloned().collect()))
}

async fn add_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<CreateEmployee>,
) -> Result<StatusCode, StatusCode> {
    authorized(&state, &headers)?;
    let mut roster = state.db.write().await;
    roster.next_id += 1;
    let id = roster.next_id;
    roster.rows.insert(
        id,
        Employee {
            id,
            name: input.name,
            age: input.age,
            email: input.email,
        },
    );
    // The real service responds with no useful body; clients re-fetch.
    Ok(StatusCode::OK)
}

async fn remove_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<RemoveEmployee>,
) -> Result<StatusCode, StatusCode> {
    authorized(&state, &headers)?;
    let mut roster = state.db.write().await;
    roster
        .rows
        .remove(&input.id)
        .map(|_| StatusCode::OK)
        .ok_or(StatusCode::NOT_FOUND)
}
