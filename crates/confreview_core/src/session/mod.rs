//! Interactive report session.
//!
//! # Responsibility
//! - Drive the menu loop: show menu, read choice, run report, repeat.
//! - Render report outcomes as plain text rows and status messages.
//!
//! # Invariants
//! - The loop has two states and only `MenuOption::Exit` or closed input
//!   moves it to `Stopped`.
//! - A failed report is reported to the operator and the loop continues.

use crate::input::{Console, InputError, MenuOption};
use crate::repo::report_repo::{RepoResult, ReportOutcome, ReportRepository};
use crate::service::report_service::ReportService;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

const MENU_HEADER: &str = "Please select an option by entering a number:";
const FAREWELL: &str = "Ending program...";

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug)]
pub enum SessionError {
    Input(InputError),
    Io(std::io::Error),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Input(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<InputError> for SessionError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<std::io::Error> for SessionError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Menu loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Stopped,
}

/// One operator session over a report service and a console.
pub struct Session<R: ReportRepository, I, O> {
    service: ReportService<R>,
    console: Console<I, O>,
    state: SessionState,
}

impl<R, I, O> Session<R, I, O>
where
    R: ReportRepository,
    I: BufRead,
    O: Write,
{
    pub fn new(service: ReportService<R>, console: Console<I, O>) -> Self {
        Self {
            service,
            console,
            state: SessionState::Running,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs the menu loop until exit is chosen or input closes.
    pub fn run(&mut self) -> SessionResult<()> {
        info!("event=session_start module=session status=ok");
        while self.state == SessionState::Running {
            self.step()?;
        }
        info!("event=session_stop module=session status=ok");
        Ok(())
    }

    /// Consumes the session and returns the console for output inspection.
    pub fn into_console(self) -> Console<I, O> {
        self.console
    }

    fn step(&mut self) -> SessionResult<()> {
        self.render_menu()?;
        let option = match self.console.read_menu_choice() {
            Ok(option) => option,
            Err(InputError::Closed) => {
                warn!("event=session_input_closed module=session status=ok");
                self.state = SessionState::Stopped;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        info!(
            "event=menu_select module=session status=ok option={}",
            option.number()
        );
        let handled = match option {
            MenuOption::AcceptedPapers => self.accepted_papers(),
            MenuOption::AssignedPapers => self.assigned_papers(),
            MenuOption::InconsistentPapers => self.inconsistent_papers(),
            MenuOption::DiffScoreReviewers => self.diff_score_reviewers(),
            MenuOption::Exit => {
                writeln!(self.console.writer(), "{FAREWELL}")?;
                self.state = SessionState::Stopped;
                return Ok(());
            }
        };

        match handled {
            Ok(()) => Ok(()),
            Err(SessionError::Input(InputError::Closed)) => {
                warn!("event=session_input_closed module=session status=ok");
                self.state = SessionState::Stopped;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn render_menu(&mut self) -> SessionResult<()> {
        let out = self.console.writer();
        writeln!(out, "{MENU_HEADER}")?;
        for option in MenuOption::ALL {
            writeln!(out, "{option}")?;
        }
        Ok(())
    }

    fn accepted_papers(&mut self) -> SessionResult<()> {
        writeln!(
            self.console.writer(),
            "\nEnter an area to list the titles of accepted papers in the given area\n\
             in descending order of their overall review score."
        )?;
        let area = self.console.read_area("Area: ")?;
        let result = self.service.accepted_papers(&area);
        self.render_outcome(
            result,
            "Given area does not exist.",
            "No papers were found in the given area.",
        )
    }

    fn assigned_papers(&mut self) -> SessionResult<()> {
        writeln!(
            self.console.writer(),
            "\nEnter a user's email to list the title of papers that they were assigned to review."
        )?;
        let email = self.console.read_email("Email: ")?;
        let result = self.service.assigned_papers(&email);
        self.render_outcome(
            result,
            "This reviewer does not exist.",
            "No papers were assigned to this reviewer",
        )
    }

    fn inconsistent_papers(&mut self) -> SessionResult<()> {
        writeln!(
            self.console.writer(),
            "\nEnter a percentage (X%) for which to find inconsistent papers."
        )?;
        let fraction = self.console.read_percentage("X: ")?;
        let result = self.service.inconsistent_papers(fraction);
        let lines = result.map(|papers| {
            papers
                .into_iter()
                .map(|paper| format!("{} {}", paper.id, paper.title))
                .collect()
        });
        self.render_lines(lines, "No papers were found.")
    }

    fn diff_score_reviewers(&mut self) -> SessionResult<()> {
        writeln!(self.console.writer(), "\nEnter a range from X to Y.")?;
        let low = self.console.read_score("X: ")?;
        let high = self.console.read_score("Y: ")?;
        let result = self.service.reviewers_by_diff_range(low, high);
        let lines = result.map(|reviewers| {
            reviewers
                .into_iter()
                .map(|reviewer| format!("{} {}", reviewer.email, reviewer.name))
                .collect()
        });
        self.render_lines(lines, "No papers were found.")
    }

    fn render_outcome(
        &mut self,
        result: RepoResult<ReportOutcome<String>>,
        not_found: &str,
        no_records: &str,
    ) -> SessionResult<()> {
        let out = self.console.writer();
        match result {
            Ok(ReportOutcome::NotFound) => writeln!(out, "{not_found}")?,
            Ok(ReportOutcome::NoRecords) => writeln!(out, "{no_records}")?,
            Ok(ReportOutcome::Rows(titles)) => {
                for title in titles {
                    writeln!(out, "{title}")?;
                }
            }
            Err(err) => report_failure(&mut *out, &err)?,
        }
        writeln!(out, "\n")?;
        Ok(())
    }

    fn render_lines(&mut self, result: RepoResult<Vec<String>>, empty: &str) -> SessionResult<()> {
        let out = self.console.writer();
        match result {
            Ok(lines) if lines.is_empty() => writeln!(out, "{empty}")?,
            Ok(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Err(err) => report_failure(&mut *out, &err)?,
        }
        writeln!(out, "\n")?;
        Ok(())
    }
}

fn report_failure(out: &mut impl Write, err: &dyn Error) -> SessionResult<()> {
    error!(
        "event=report_render module=session status=error error={}",
        err
    );
    writeln!(out, "Report failed: {err}")?;
    Ok(())
}
