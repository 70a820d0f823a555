use dotenv::dotenv;
use log::info;
use std::error::Error;
use std::io::{self, BufRead, Write};

use employee_form::cli::{self, Command, TerminalPrompt};
use employee_form::config::Config;
use employee_form::handlers::form::{FormController, Outcome, Selection};
use employee_form::store::EmployeeStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    info!("Using employee service at {}", config.api_base_url);

    let store = EmployeeStore::new(config)?;
    let mut form = FormController::new(store, TerminalPrompt);

    form.mount().await;
    print!("{}", cli::render_table(form.employees(), form.selected()));
    println!("Type `help` for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err);
                continue;
            }
        };

        match command {
            Command::List => {
                form.refresh().await;
                print!("{}", cli::render_table(form.employees(), form.selected()));
            }
            Command::Add => {
                form.add();
                print!("{}", cli::render_draft(form.draft(), form.errors()));
            }
            Command::Select(id) => {
                if form.toggle_row(id) == Selection::Missing {
                    eprintln!("no employee with id {} in the table", id);
                    continue;
                }
                print!("{}", cli::render_table(form.employees(), form.selected()));
                print!("{}", cli::render_draft(form.draft(), form.errors()));
            }
            Command::Set(field, value) => {
                form.edit(field, &value);
                print!("{}", cli::render_draft(form.draft(), form.errors()));
            }
            Command::Gender(gender) => {
                form.select_gender(gender);
                print!("{}", cli::render_draft(form.draft(), form.errors()));
            }
            Command::Color(color, checked) => {
                form.toggle_color(color, checked);
                print!("{}", cli::render_draft(form.draft(), form.errors()));
            }
            Command::Salary(raw) => {
                form.edit_salary(&raw);
                print!("{}", cli::render_draft(form.draft(), form.errors()));
            }
            Command::Save => match form.submit().await {
                Outcome::Invalid => print!("{}", cli::render_draft(form.draft(), form.errors())),
                Outcome::Created | Outcome::Updated => {
                    print!("{}", cli::render_table(form.employees(), form.selected()))
                }
                _ => {}
            },
            Command::Cancel => {
                form.cancel();
                print!("{}", cli::render_draft(form.draft(), form.errors()));
            }
            Command::Delete(id) => {
                if form.delete(id.as_deref()).await == Outcome::Deleted {
                    print!("{}", cli::render_table(form.employees(), form.selected()));
                }
            }
            Command::Show => {
                print!("{}", cli::render_table(form.employees(), form.selected()));
                print!("{}", cli::render_draft(form.draft(), form.errors()));
            }
            Command::Help => print!("{}", cli::help()),
            Command::Quit => break,
        }
    }

    Ok(())
}
