//! The interactive menu loop

use std::io::{BufRead, Write};

use chrono::Local;

use crate::{
    config::LoansConfig,
    console::Console,
    error::{AppError, AppResult},
    models::TableSpec,
    repository::LibraryStore,
    services::{self, Outcome},
};

const MENU: &str = "\
Welcome to the library management system!
Please choose an option:
1. Show authors
2. Show books
3. Add user
4. Register a loan
5. Show loans
6. Exit";

const FAREWELL: &str = "Exiting the library management system. Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ShowAuthors = 1,
    ShowBooks,
    AddUser,
    RegisterLoan,
    ShowLoans,
    Exit,
}

impl MenuOption {
    /// Map a typed choice to an option. Anything that is not one of the
    /// listed numbers yields `None`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(MenuOption::ShowAuthors),
            2 => Some(MenuOption::ShowBooks),
            3 => Some(MenuOption::AddUser),
            4 => Some(MenuOption::RegisterLoan),
            5 => Some(MenuOption::ShowLoans),
            6 => Some(MenuOption::Exit),
            _ => None,
        }
    }
}

/// Run the menu until the user exits or input ends.
///
/// Operation failures are printed and the loop continues; only terminal I/O
/// failures are returned.
pub async fn run<S, R, W>(
    store: &mut S,
    console: &mut Console<R, W>,
    loans: &LoansConfig,
) -> AppResult<()>
where
    S: LibraryStore + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        console.clear_screen()?;
        console.println(MENU)?;

        let Some(line) = console.read_line()? else {
            tracing::debug!("Input closed at menu prompt");
            console.println(FAREWELL)?;
            return Ok(());
        };

        match MenuOption::parse(&line) {
            Some(MenuOption::Exit) => {
                console.println(FAREWELL)?;
                return Ok(());
            }
            Some(option) => match dispatch(option, store, console, loans).await {
                Ok(outcome) => console.print(outcome)?,
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    tracing::debug!("Operation failed: {:?}", e);
                    console.println(e)?;
                }
            },
            None => tracing::debug!("Ignoring menu input {:?}", line),
        }

        console.pause()?;
    }
}

async fn dispatch<S, R, W>(
    option: MenuOption,
    store: &mut S,
    console: &mut Console<R, W>,
    loans: &LoansConfig,
) -> AppResult<Outcome>
where
    S: LibraryStore + ?Sized,
    R: BufRead,
    W: Write,
{
    match option {
        MenuOption::ShowAuthors => show(store, &TableSpec::AUTHORS).await,
        MenuOption::ShowBooks => show(store, &TableSpec::BOOKS).await,
        MenuOption::ShowLoans => show(store, &TableSpec::LOANS).await,
        MenuOption::AddUser => {
            console.println("Adding a new user")?;
            let name = console.prompt("Enter user name: ")?;
            let user = services::add_user(store, &name).await?;
            Ok(Outcome::UserAdded(user))
        }
        MenuOption::RegisterLoan => {
            console.println("Registering a new loan")?;
            let user_id = read_id(console, "Enter user ID: ", "user ID")?;
            let book_id = read_id(console, "Enter book ID: ", "book ID")?;
            let loan = services::register_loan(
                store,
                user_id,
                book_id,
                Local::now(),
                loans.duration_days,
            )
            .await?;
            Ok(Outcome::LoanRegistered(loan))
        }
        MenuOption::Exit => unreachable!("exit is handled by the loop"),
    }
}

async fn show<S>(store: &mut S, spec: &TableSpec) -> AppResult<Outcome>
where
    S: LibraryStore + ?Sized,
{
    services::show_table(store, spec).await.map(Outcome::Table)
}

fn read_id<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
    what: &str,
) -> AppResult<i32> {
    let answer = console.prompt(label)?;
    answer
        .trim()
        .parse()
        .map_err(|e| {
            AppError::InvalidInput(format!("{what} {:?} is not a valid id: {e}", answer.trim()))
        })
}
