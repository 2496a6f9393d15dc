//! # Session
//!
//! The main menu loop. Each option is a screen in [`crate::commands`].
//!
//! ```text
//!   welcome ──► ┌──────────── main menu ◄───────────┐
//!               │  1 Place New Order ──► order.rs ──┤
//!               │  2 View Menu ────────► menu.rs ───┤
//!               │  3 Orders & Reports ─► report.rs ─┤
//!               │  4 Feedback ─────────► feedback.rs┘
//!               │  5 Exit / EOF
//!               ▼
//!            goodbye
//! ```
//!
//! Errors raised inside a screen are shown and the menu comes back; only
//! a failing console stream ends the session early.

use std::io::{BufRead, Write};

use cafe_store::{FeedbackLog, FileOrderLog, OrderLog, OrderStore};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::input::Console;
use crate::state::AppContext;

pub const MAIN_MENU: [&str; 5] = [
    "Place New Order",
    "View Menu",
    "View Orders & Reports",
    "Customer Feedback",
    "Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Continue,
    Exit,
}

pub struct Session<R, W, L = FileOrderLog> {
    pub(crate) app: AppContext,
    pub(crate) store: OrderStore<L>,
    pub(crate) feedback: FeedbackLog,
    pub(crate) console: Console<R, W>,
}

impl<R: BufRead, W: Write, L: OrderLog> Session<R, W, L> {
    pub fn new(app: AppContext, store: OrderStore<L>, feedback: FeedbackLog, console: Console<R, W>) -> Self {
        Session {
            app,
            store,
            feedback,
            console,
        }
    }

    pub fn store(&self) -> &OrderStore<L> {
        &self.store
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs until Exit or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        self.welcome()?;

        loop {
            match self.main_menu() {
                Ok(MenuAction::Continue) => {}
                Ok(MenuAction::Exit) => break,
                Err(AppError::InputClosed) => {
                    info!("Input closed, leaving");
                    break;
                }
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => self.console.error(&e.to_string())?,
            }
        }

        self.goodbye()
    }

    fn welcome(&mut self) -> AppResult<()> {
        let heading = format!("{} MANAGEMENT SYSTEM", self.app.config.store.name.to_uppercase());
        self.console.clear()?;
        self.console.title(&heading)?;
        self.console.line(&format!("Welcome! Orders start at #{}.", self.app.config.first_order_id()))
    }

    fn goodbye(&mut self) -> AppResult<()> {
        info!(
            orders = self.store.order_count(),
            revenue = %self.store.daily_revenue_today(),
            "Session ended"
        );
        self.console.blank()?;
        self.console
            .line(&format!("Thank you for using {}. Goodbye!", self.app.config.store.name))
    }

    fn main_menu(&mut self) -> AppResult<MenuAction> {
        self.console.title("MAIN MENU")?;
        for (i, label) in MAIN_MENU.iter().enumerate() {
            self.console.option(i + 1, label)?;
        }
        self.console.blank()?;

        let choice = self.console.prompt_number("Select an option: ")?;
        debug!(choice, "Main menu selection");

        match choice {
            1 => self.place_order()?,
            2 => self.show_menu()?,
            3 => self.show_reports()?,
            4 => self.feedback_menu()?,
            5 => return Ok(MenuAction::Exit),
            _ => self
                .console
                .error(&format!("Invalid option {choice}: choose 1-{}", MAIN_MENU.len()))?,
        }

        Ok(MenuAction::Continue)
    }
}
