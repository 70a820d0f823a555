#![allow(dead_code)]

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use employee_form::config::Config;
use employee_form::handlers::form::FormController;
use employee_form::handlers::prompt::Prompt;
use employee_form::models::employee::{Employee, Gender};
use employee_form::store::EmployeeStore;

#[derive(Default)]
struct Inner {
    employees: Vec<Employee>,
    next_id: i64,
    requests: Vec<String>,
    failure: Option<(StatusCode, String)>,
    list_failure: Option<(StatusCode, String)>,
}

fn failure_response((status, body): &(StatusCode, String)) -> HttpResponse {
    HttpResponse::build(*status)
        .content_type("application/json")
        .body(body.clone())
}

impl Inner {
    fn record(&mut self, request: String) -> Option<HttpResponse> {
        self.requests.push(request);
        self.failure.as_ref().map(failure_response)
    }
}

pub struct MockState {
    inner: Mutex<Inner>,
}

/// In-process employee service that keeps its records in memory and logs
/// every request it receives as `"METHOD /path"`.
pub struct MockService {
    pub base_url: String,
    state: web::Data<MockState>,
}

impl MockService {
    pub async fn start(seed: Vec<Employee>) -> Self {
        let next_id = seed.iter().map(|employee| employee.id).max().unwrap_or(0);
        let state = web::Data::new(MockState {
            inner: Mutex::new(Inner {
                employees: seed,
                next_id,
                ..Inner::default()
            }),
        });

        let data = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(data.clone())
                .service(
                    web::resource("/employees")
                        .route(web::get().to(list_employees))
                        .route(web::post().to(create_employee)),
                )
                .service(
                    web::resource("/employees/{id}")
                        .route(web::put().to(update_employee))
                        .route(web::delete().to(delete_employee)),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind mock employee service");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.state.inner.lock().unwrap().requests.clone()
    }

    pub fn employees(&self) -> Vec<Employee> {
        self.state.inner.lock().unwrap().employees.clone()
    }

    /// Every following request answers with `status` and `body`.
    pub fn fail_with(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap();
        self.state.inner.lock().unwrap().failure = Some((status, body.to_string()));
    }

    /// Only `GET /employees` answers with `status` and `body`; writes still succeed.
    pub fn fail_lists_with(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap();
        self.state.inner.lock().unwrap().list_failure = Some((status, body.to_string()));
    }

    pub fn recover(&self) {
        let mut inner = self.state.inner.lock().unwrap();
        inner.failure = None;
        inner.list_failure = None;
    }
}

async fn list_employees(state: web::Data<MockState>) -> HttpResponse {
    let mut inner = state.inner.lock().unwrap();
    if let Some(failure) = inner.record("GET /employees".to_string()) {
        return failure;
    }
    if let Some(failure) = inner.list_failure.as_ref() {
        return failure_response(failure);
    }
    HttpResponse::Ok().json(&inner.employees)
}

async fn create_employee(
    state: web::Data<MockState>,
    employee: web::Json<Employee>,
) -> HttpResponse {
    let mut inner = state.inner.lock().unwrap();
    if let Some(failure) = inner.record("POST /employees".to_string()) {
        return failure;
    }

    let mut employee = employee.into_inner();
    inner.next_id += 1;
    employee.id = inner.next_id;
    inner.employees.push(employee.clone());
    HttpResponse::Created().json(employee)
}

async fn update_employee(
    state: web::Data<MockState>,
    id: web::Path<i64>,
    employee: web::Json<Employee>,
) -> HttpResponse {
    let id = id.into_inner();
    let mut inner = state.inner.lock().unwrap();
    if let Some(failure) = inner.record(format!("PUT /employees/{}", id)) {
        return failure;
    }

    match inner.employees.iter_mut().find(|stored| stored.id == id) {
        Some(stored) => {
            *stored = Employee {
                id,
                ..employee.into_inner()
            };
            HttpResponse::Ok().json(stored.clone())
        }
        None => HttpResponse::NotFound().json(json!({ "message": "Employee not found" })),
    }
}

async fn delete_employee(state: web::Data<MockState>, id: web::Path<i64>) -> HttpResponse {
    let id = id.into_inner();
    let mut inner = state.inner.lock().unwrap();
    if let Some(failure) = inner.record(format!("DELETE /employees/{}", id)) {
        return failure;
    }

    let before = inner.employees.len();
    inner.employees.retain(|stored| stored.id != id);
    if inner.employees.len() == before {
        return HttpResponse::NotFound().json(json!({ "message": "Employee not found" }));
    }
    HttpResponse::Ok().json(json!({ "message": "Employee deleted successfully" }))
}

/// Answers confirmations from a script (no answer left means "no") and
/// keeps every alert.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    pub alerts: Vec<String>,
    pub questions: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, question: &str) -> bool {
        self.questions.push(question.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

pub fn controller(base_url: &str, prompt: ScriptedPrompt) -> FormController<ScriptedPrompt> {
    let config = Config::new(base_url)
        .unwrap()
        .with_timeout(Duration::from_secs(5));
    FormController::new(EmployeeStore::new(config).unwrap(), prompt)
}

/// A base URL nothing is listening on.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn grace() -> Employee {
    Employee {
        id: 7,
        employee_number: "7".to_string(),
        first_name: "Grace".to_string(),
        last_name: "Hopper".to_string(),
        full_name: "Rear Admiral Hopper".to_string(),
        salutation: "Dr.".to_string(),
        gender: Gender::Female,
        gross_salary: "90 000".to_string(),
        profile_color: None,
    }
}

pub fn alan() -> Employee {
    Employee {
        id: 12,
        employee_number: "12".to_string(),
        first_name: "Alan".to_string(),
        last_name: "Turing".to_string(),
        full_name: "Alan Turing".to_string(),
        salutation: "Mr.".to_string(),
        gender: Gender::Male,
        gross_salary: "85 000".to_string(),
        profile_color: None,
    }
}
