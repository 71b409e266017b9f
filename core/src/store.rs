//! In-memory employee roster, reconciled against server responses.
//!
//! # Design
//! The store is the only mutator of the roster; consumers read cloned
//! snapshots. Every record in the list came from a successful server
//! response — a fetch replaces the whole list, a delete filters it only
//! after the server confirmed, and a create never touches it at all (the
//! follow-up refresh materializes the new record).
//!
//! Phase and list live under one mutex so the Loading check-and-set that
//! coalesces concurrent refreshes is atomic. The guard is never held across
//! an await, and events are published after it is released.
//!
//! `remove` and `refresh` are deliberately not mutually exclusive: if both
//! are in flight, whichever response resolves later is applied to whatever
//! the list is at that moment. That looseness is accepted, not guaranteed
//! against.

use std::fmt;
use std::sync::Mutex;

use crate::client::EmployeeClient;
use crate::error::ApiError;
use crate::http::Transport;
use crate::types::Employee;
use crate::validate::{validate_employee_input, ValidationError};

const CREATE_SUCCESS_NOTICE: &str = "Employee added successfully!";
const CREATE_FAILURE_NOTICE: &str = "Failed to add employee. Please try again later.";
const DELETE_FAILURE_NOTICE: &str = "Failed to delete employee. Please try again later.";
const FETCH_FAILURE_NOTICE: &str = "Failed to load employees. Please try again later.";

/// Load phase of the store. Failures land back in `Ready` with the previous
/// list intact, so the roster is always presentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
}

/// What a `refresh` call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The list was replaced with the server's response.
    Replaced,
    /// A refresh was already in flight; this call was a no-op.
    Coalesced,
    /// The fetch failed; the list kept its previous value.
    Failed,
}

/// Events published to subscribers (the presentation layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// The visible list changed.
    ListChanged,
    /// A mutation succeeded elsewhere; the list screen should refresh.
    RefreshRequested,
    /// Success message to surface to the user.
    Notice(String),
    /// Failure message to surface to the user. Never contains transport
    /// detail; that goes to the log.
    Failure(String),
}

/// Why a create request did not go through.
#[derive(Debug)]
pub enum CreateError {
    /// Rejected locally; no network call was made.
    Invalid(ValidationError),
    /// The API call failed after validation passed.
    Api(ApiError),
}

impl fmt::Display for CreateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateError::Invalid(rule) => write!(f, "{rule}"),
            CreateError::Api(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CreateError {}

type Listener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

struct State {
    phase: Phase,
    employees: Vec<Employee>,
}

/// Holds the current roster and reconciles it after fetch/create/delete.
pub struct EmployeeStore<T: Transport> {
    client: EmployeeClient,
    transport: T,
    state: Mutex<State>,
    listeners: Mutex<Vec<Listener>>,
}

impl<T: Transport> EmployeeStore<T> {
    pub fn new(client: EmployeeClient, transport: T) -> Self {
        Self {
            client,
            transport,
            state: Mutex::new(State {
                phase: Phase::Idle,
                employees: Vec::new(),
            }),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Current copy of the roster. Consumers never mutate the store's list.
    pub fn snapshot(&self) -> Vec<Employee> {
        self.state.lock().unwrap().employees.clone()
    }

    pub fn phase(&self) -> Phase {
        self.state.lock().unwrap().phase
    }

    /// The record handed to the external edit screen, passed through opaquely.
    pub fn find(&self, id: u64) -> Option<Employee> {
        self.state
            .lock()
            .unwrap()
            .employees
            .iter()
            .find(|employee| employee.id == id)
            .cloned()
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&StoreEvent) + Send + Sync + 'static,
    {
        self.listeners.lock().unwrap().push(Box::new(listener));
    }

    /// Fetch the list and replace the roster wholesale.
    ///
    /// At most one fetch is in flight: a call that finds the store already
    /// `Loading` returns `Coalesced` without touching the network, and the
    /// in-flight fetch produces the latest state when it resolves. On failure
    /// the list keeps its previous value and the store returns to `Ready`.
    pub async fn refresh(&self) -> RefreshOutcome {
        {
            let mut state = self.state.lock().unwrap();
            if state.phase == Phase::Loading {
                log::debug!("list refresh already in flight; coalescing");
                return RefreshOutcome::Coalesced;
            }
            state.phase = Phase::Loading;
        }

        match self.client.list_employees(&self.transport).await {
            Ok(employees) => {
                {
                    let mut state = self.state.lock().unwrap();
                    state.employees = employees;
                    state.phase = Phase::Ready;
                }
                self.publish(&StoreEvent::ListChanged);
                RefreshOutcome::Replaced
            }
            Err(err) => {
                log::error!("failed to fetch employees: {err}");
                self.state.lock().unwrap().phase = Phase::Ready;
                self.publish(&StoreEvent::Failure(FETCH_FAILURE_NOTICE.to_string()));
                RefreshOutcome::Failed
            }
        }
    }

    /// Delete `id` on the server, then drop it from the roster.
    ///
    /// The local filter is applied only after the server confirmed; a failed
    /// call leaves the list untouched.
    pub async fn remove(&self, id: u64) -> Result<(), ApiError> {
        match self.client.delete_employee(&self.transport, id).await {
            Ok(()) => {
                let removed = {
                    let mut state = self.state.lock().unwrap();
                    let removed = state
                        .employees
                        .iter()
                        .find(|employee| employee.id == id)
                        .cloned();
                    state.employees.retain(|employee| employee.id != id);
                    removed
                };
                if let Some(employee) = removed {
                    self.publish(&StoreEvent::Notice(format!(
                        "Employee '{}' deleted successfully.",
                        employee.name
                    )));
                    self.publish(&StoreEvent::ListChanged);
                }
                Ok(())
            }
            Err(err) => {
                log::error!("failed to delete employee {id}: {err}");
                self.publish(&StoreEvent::Failure(DELETE_FAILURE_NOTICE.to_string()));
                Err(err)
            }
        }
    }

    /// Validate the raw form fields and, if they pass, submit a create call.
    ///
    /// A rejection returns synchronously with zero network traffic. A
    /// successful create does not touch the local list — the server assigns
    /// the id and echoes nothing back, so `RefreshRequested` is published and
    /// the follow-up refresh materializes the record.
    pub async fn request_create(
        &self,
        name: &str,
        age: &str,
        email: &str,
    ) -> Result<(), CreateError> {
        let input = validate_employee_input(name, age, email).map_err(CreateError::Invalid)?;

        match self.client.create_employee(&self.transport, &input).await {
            Ok(()) => {
                self.publish(&StoreEvent::Notice(CREATE_SUCCESS_NOTICE.to_string()));
                self.publish(&StoreEvent::RefreshRequested);
                Ok(())
            }
            Err(err) => {
                log::error!("failed to add employee: {err}");
                self.publish(&StoreEvent::Failure(CREATE_FAILURE_NOTICE.to_string()));
                Err(CreateError::Api(err))
            }
        }
    }

    fn publish(&self, event: &StoreEvent) {
        let listeners = self.listeners.lock().unwrap();
        for listener in listeners.iter() {
            listener(event);
        }
    }
}
