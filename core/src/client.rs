//! Request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeClient` holds only the shared `Config` and carries no mutable
//! state between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, keeping construction and interpretation testable without
//! I/O. The async `list_employees`/`create_employee`/`delete_employee`
//! wrappers run build → [`Transport::execute`] → parse for callers that do
//! want the round-trip.
//!
//! The `authorization` header is recomputed from the credentials on every
//! build rather than cached; it is pure and cheap.

use std::sync::Arc;

use crate::config::Config;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{Employee, NewEmployee, RemoveEmployee};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Stateless client for the three employee endpoints.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    config: Arc<Config>,
}

impl EmployeeClient {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    pub fn build_list_employees(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.config.list_url.clone(),
            headers: vec![self.auth_header()],
            body: None,
        }
    }

    pub fn build_create_employee(&self, input: &NewEmployee) -> Result<HttpRequest, ApiError> {
        let body =
            serde_urlencoded::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.config.create_url.clone(),
            headers: vec![
                ("content-type".to_string(), FORM_CONTENT_TYPE.to_string()),
                self.auth_header(),
            ],
            body: Some(body),
        })
    }

    pub fn build_delete_employee(&self, id: u64) -> Result<HttpRequest, ApiError> {
        let body = serde_urlencoded::to_string(RemoveEmployee { id })
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: self.config.delete_url.clone(),
            headers: vec![
                ("content-type".to_string(), FORM_CONTENT_TYPE.to_string()),
                self.auth_header(),
            ],
            body: Some(body),
        })
    }

    pub fn parse_list_employees(&self, response: HttpResponse) -> Result<Vec<Employee>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Create success is determined purely by status; the server echoes
    /// nothing useful back, so the caller re-fetches the list instead.
    pub fn parse_create_employee(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub fn parse_delete_employee(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }

    pub async fn list_employees<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<Vec<Employee>, ApiError> {
        let response = transport.execute(self.build_list_employees()).await?;
        self.parse_list_employees(response)
    }

    pub async fn create_employee<T: Transport>(
        &self,
        transport: &T,
        input: &NewEmployee,
    ) -> Result<(), ApiError> {
        let request = self.build_create_employee(input)?;
        let response = transport.execute(request).await?;
        self.parse_create_employee(response)
    }

    pub async fn delete_employee<T: Transport>(
        &self,
        transport: &T,
        id: u64,
    ) -> Result<(), ApiError> {
        let request = self.build_delete_employee(id)?;
        let response = transport.execute(request).await?;
        self.parse_delete_employee(response)
    }

    fn auth_header(&self) -> (String, String) {
        (
            "authorization".to_string(),
            self.config.credentials.authorization_header(),
        )
    }
}

/// Map any non-2xx status to `ServerRejected`, carrying the code for logs.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::ServerRejected(response.status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credentials;

    fn config() -> Arc<Config> {
        Arc::new(Config {
            credentials: Credentials::new("user", "pass"),
            list_url: "http://localhost:3000/employees".to_string(),
            create_url: "http://localhost:3000/employees/add".to_string(),
            delete_url: "http://localhost:3000/employees/remove".to_string(),
        })
    }

    fn client() -> EmployeeClient {
        EmployeeClient::new(config())
    }

    const AUTH: &str = "Basic dXNlcjpwYXNz";

    #[test]
    fn build_list_produces_authenticated_get() {
        let req = client().build_list_employees();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:3000/employees");
        assert_eq!(
            req.headers,
            vec![("authorization".to_string(), AUTH.to_string())]
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_produces_form_encoded_post() {
        let input = NewEmployee {
            name: "Bob Lee".to_string(),
            age: 25,
            email: "bob@gmail.com".to_string(),
        };
        let req = client().build_create_employee(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/employees/add");
        assert_eq!(
            req.headers,
            vec![
                (
                    "content-type".to_string(),
                    "application/x-www-form-urlencoded".to_string()
                ),
                ("authorization".to_string(), AUTH.to_string()),
            ]
        );
        assert_eq!(
            req.body.as_deref(),
            Some("employeeName=Bob+Lee&employeeAge=25&employeeEmail=bob%40gmail.com")
        );
    }

    #[test]
    fn build_delete_produces_single_field_form_post() {
        let req = client().build_delete_employee(7).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:3000/employees/remove");
        assert_eq!(req.body.as_deref(), Some("employeeID=7"));
    }

    #[test]
    fn parse_list_decodes_employee_array() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"[{"employeeID":1,"employeeName":"Ann","employeeAge":30,"employeeEmail":"ann@gmail.com"}]"#
                .to_string(),
        };
        let employees = client().parse_list_employees(response).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, 1);
        assert_eq!(employees[0].name, "Ann");
    }

    #[test]
    fn parse_list_rejects_non_success_status() {
        let response = HttpResponse {
            status: 401,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_list_employees(response).unwrap_err();
        assert!(matches!(err, ApiError::ServerRejected(401)));
    }

    #[test]
    fn parse_list_bad_json() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "not json".to_string(),
        };
        let err = client().parse_list_employees(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_create_ignores_body_on_success() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: "whatever the server felt like".to_string(),
        };
        assert!(client().parse_create_employee(response).is_ok());
    }

    #[test]
    fn parse_create_carries_status_on_failure() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_create_employee(response).unwrap_err();
        assert!(matches!(err, ApiError::ServerRejected(500)));
    }

    #[test]
    fn parse_delete_success_by_status_only() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: String::new(),
        };
        assert!(client().parse_delete_employee(response).is_ok());

        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: String::new(),
        };
        let err = client().parse_delete_employee(response).unwrap_err();
        assert!(matches!(err, ApiError::ServerRejected(404)));
    }
}
