use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

use crate::handlers::prompt::Prompt;
use crate::models::employee::{Employee, Field, Gender, ProfileColor, Salutation};
use crate::utils::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Add,
    Select(i64),
    Set(Field, String),
    Gender(Gender),
    Color(ProfileColor, bool),
    Salary(String),
    Save,
    Cancel,
    Delete(Option<String>),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command {0:?}, type `help` for a list")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown field {0:?}")]
    UnknownField(String),
    #[error("unknown profile colour {0:?}")]
    UnknownColor(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match verb {
            "list" | "ls" => Ok(Command::List),
            "add" => Ok(Command::Add),
            "select" => rest
                .parse()
                .map(Command::Select)
                .map_err(|_| CommandError::Usage("select <id>")),
            "set" => {
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if name.is_empty() {
                    return Err(CommandError::Usage("set <field> <value>"));
                }
                let field = name
                    .parse()
                    .map_err(|_| CommandError::UnknownField(name.to_string()))?;
                Ok(Command::Set(field, value.trim().to_string()))
            }
            "gender" => Gender::choice(rest)
                .map(Command::Gender)
                .ok_or(CommandError::Usage("gender Male|Female|Unspecified")),
            "color" | "colour" => {
                let (name, state) = rest
                    .split_once(' ')
                    .ok_or(CommandError::Usage("color <name> on|off"))?;
                let color = name
                    .parse()
                    .map_err(|_| CommandError::UnknownColor(name.to_string()))?;
                match state.trim() {
                    "on" => Ok(Command::Color(color, true)),
                    "off" => Ok(Command::Color(color, false)),
                    _ => Err(CommandError::Usage("color <name> on|off")),
                }
            }
            "salary" => Ok(Command::Salary(rest.to_string())),
            "save" => Ok(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "delete" | "rm" => Ok(Command::Delete(
                Some(rest.to_string()).filter(|id| !id.is_empty()),
            )),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub fn help() -> String {
    let fields: Vec<&str> = Field::ALL
        .iter()
        .filter(|field| !matches!(field, Field::Gender | Field::GrossSalary))
        .map(|field| field.as_str())
        .collect();
    let salutations: Vec<&str> = Salutation::ALL.iter().map(|s| s.as_str()).collect();
    let genders: Vec<&str> = Gender::CHOICES.iter().map(|g| g.as_str()).collect();
    let colors: Vec<&str> = ProfileColor::ALL.iter().map(|c| c.as_str()).collect();

    let mut out = String::new();
    let _ = writeln!(out, "list                      reload the employee table");
    let _ = writeln!(out, "add                       start a new employee");
    let _ = writeln!(out, "select <id>               edit a row (again to deselect)");
    let _ = writeln!(out, "set <field> <value>       fields: {}", fields.join(", "));
    let _ = writeln!(out, "                          salutations: {}", salutations.join(" "));
    let _ = writeln!(out, "gender <value>            {}", genders.join(", "));
    let _ = writeln!(out, "color <name> on|off       colours: {}", colors.join(", "));
    let _ = writeln!(out, "salary <amount>           gross salary, any digits");
    let _ = writeln!(out, "save | cancel             submit or clear the form");
    let _ = writeln!(out, "delete <id>               delete a row");
    let _ = writeln!(out, "show | help | quit");
    out
}

pub fn render_table(employees: &[Employee], selected: Option<i64>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<6} {:<12} {:<16} {:<16} {:<10} {:<14} {:>14}",
        "ID", "Employee #", "First Name", "Last Name", "Salutation", "Profile Colour", "Pay"
    );
    if employees.is_empty() {
        let _ = writeln!(out, "  (no employees)");
    }
    for employee in employees {
        let marker = if selected == Some(employee.id) { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:<6} {:<12} {:<16} {:<16} {:<10} {:<14} {:>14}",
            marker,
            employee.id,
            employee.employee_number,
            employee.first_name,
            employee.last_name,
            employee.salutation,
            employee.profile_color.map(ProfileColor::as_str).unwrap_or(""),
            employee.gross_salary,
        );
    }
    out
}

pub fn render_draft(draft: &Employee, errors: &FieldErrors) -> String {
    let mut out = String::new();
    let heading = if draft.is_persisted() {
        format!("Employee Information (editing #{})", draft.id)
    } else {
        "Employee Information (new)".to_string()
    };
    let _ = writeln!(out, "{}", heading);

    let color = draft.profile_color.map(ProfileColor::as_str).unwrap_or("");
    let rows = [
        (Field::EmployeeNumber.label(), Some(Field::EmployeeNumber), draft.employee_number.as_str()),
        (Field::FirstName.label(), Some(Field::FirstName), draft.first_name.as_str()),
        (Field::LastName.label(), Some(Field::LastName), draft.last_name.as_str()),
        (Field::Salutation.label(), Some(Field::Salutation), draft.salutation.as_str()),
        (Field::Gender.label(), Some(Field::Gender), draft.gender.as_str()),
        ("Full Name", None, draft.full_name.as_str()),
        (Field::GrossSalary.label(), Some(Field::GrossSalary), draft.gross_salary.as_str()),
        ("Profile Colour", None, color),
    ];
    for (label, field, value) in rows {
        let _ = writeln!(out, "  {:<18} {}", label, value);
        if let Some(message) = field.and_then(|field| errors.get(field)) {
            let _ = writeln!(out, "  {:<18} ! {}", "", message);
        }
    }
    out
}

/// Prompt backed by the terminal: alerts go to stderr, confirmations read `y/N`.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn alert(&mut self, message: &str) {
        eprintln!("!! {}", message);
    }

    fn confirm(&mut self, question: &str) -> bool {
        print!("{} [y/N] ", question);
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"),
            Err(_) => false,
        }
    }
}
