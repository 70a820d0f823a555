use log::{debug, error, warn};

use crate::errors::AppError;
use crate::handlers::prompt::Prompt;
use crate::models::employee::{Employee, Field, Gender, ProfileColor};
use crate::store::{parse_employee_id, EmployeeStore};
use crate::utils::format::{full_name, group_salary};
use crate::utils::validation::{validate_form, FieldErrors};

pub const DELETE_QUESTION: &str = "Are you sure you want to delete this employee?";

/// What a user action ended in. Failures have already been shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Listed(usize),
    Invalid,
    Created,
    Updated,
    Deleted,
    Declined,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Selected,
    Deselected,
    Missing,
}

/// Owns the draft, its inline errors and the selected row, and drives the
/// record store on behalf of the user.
pub struct FormController<P> {
    store: EmployeeStore,
    prompt: P,
    draft: Employee,
    errors: FieldErrors,
    selected: Option<i64>,
}

impl<P: Prompt> FormController<P> {
    pub fn new(store: EmployeeStore, prompt: P) -> Self {
        Self {
            store,
            prompt,
            draft: Employee::default(),
            errors: FieldErrors::default(),
            selected: None,
        }
    }

    pub fn draft(&self) -> &Employee {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn selected(&self) -> Option<i64> {
        self.selected
    }

    pub fn employees(&self) -> &[Employee] {
        self.store.records()
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Initial load.
    pub async fn mount(&mut self) -> Outcome {
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> Outcome {
        match self.store.list().await {
            Ok(records) => Outcome::Listed(records.len()),
            Err(err) => self.report(err),
        }
    }

    pub fn edit(&mut self, field: Field, value: &str) {
        match field {
            Field::FirstName => {
                self.draft.first_name = value.to_string();
                self.draft.full_name = full_name(&self.draft.first_name, &self.draft.last_name);
            }
            Field::LastName => {
                self.draft.last_name = value.to_string();
                self.draft.full_name = full_name(&self.draft.first_name, &self.draft.last_name);
            }
            Field::Salutation => {
                self.draft.salutation = value.to_string();
                self.draft.gender = Gender::from_salutation(value);
            }
            Field::Gender => self.select_gender(Gender::from(value)),
            Field::GrossSalary => self.edit_salary(value),
            Field::EmployeeNumber => self.draft.employee_number = value.to_string(),
        }
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.draft.gender = gender;
    }

    /// Checking a colour replaces any previous one; unchecking clears it.
    pub fn toggle_color(&mut self, color: ProfileColor, checked: bool) {
        self.draft.profile_color = checked.then_some(color);
    }

    pub fn edit_salary(&mut self, raw: &str) {
        self.draft.gross_salary = group_salary(raw);
    }

    /// Recomputes the inline errors for the current draft.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_form(&self.draft);
        self.errors.is_empty()
    }

    pub fn cancel(&mut self) {
        self.draft = Employee::default();
        self.errors.clear();
    }

    /// "Add" starts a fresh record, dropping any row selection.
    pub fn add(&mut self) {
        self.cancel();
        self.selected = None;
    }

    pub fn load_for_edit(&mut self, employee: &Employee) {
        self.draft = Employee {
            full_name: full_name(&employee.first_name, &employee.last_name),
            ..employee.clone()
        };
    }

    pub fn toggle_row(&mut self, id: i64) -> Selection {
        if self.selected == Some(id) {
            self.selected = None;
            self.draft = Employee::default();
            return Selection::Deselected;
        }

        let Some(row) = self.store.find(id).cloned() else {
            debug!("No employee row with id {}", id);
            return Selection::Missing;
        };
        self.selected = Some(id);
        self.load_for_edit(&row);
        Selection::Selected
    }

    pub async fn submit(&mut self) -> Outcome {
        if !self.validate() {
            debug!("Draft has {} invalid fields", self.errors.len());
            return Outcome::Invalid;
        }

        let (result, outcome) = if self.draft.is_persisted() {
            (self.store.update(&self.draft).await, Outcome::Updated)
        } else {
            (self.store.create(&self.draft).await, Outcome::Created)
        };
        if let Err(err) = result {
            return self.report(err);
        }

        self.add();
        self.refresh().await;
        outcome
    }

    pub async fn delete(&mut self, raw_id: Option<&str>) -> Outcome {
        let id = match parse_employee_id(raw_id) {
            Ok(id) => id,
            Err(err) => return self.report(err),
        };
        if !self.prompt.confirm(DELETE_QUESTION) {
            return Outcome::Declined;
        }

        if let Err(err) = self.store.delete(id).await {
            return self.report(err);
        }

        self.add();
        self.refresh().await;
        Outcome::Deleted
    }

    fn report(&mut self, err: AppError) -> Outcome {
        match &err {
            AppError::Transport { op, source } => error!("Error {}: {}", op, source),
            AppError::Rejected { op, status, message } => {
                warn!("Service rejected {} ({}): {}", op, status, message)
            }
            AppError::InvalidId | AppError::Client(_) => {}
        }
        self.prompt.alert(&err.to_string());
        Outcome::Failed
    }
}
