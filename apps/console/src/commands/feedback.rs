//! # Customer Feedback

use std::io::{BufRead, Write};

use cafe_store::{OrderLog, StoreError};
use chrono::Local;

use crate::error::AppResult;
use crate::session::Session;

impl<R: BufRead, W: Write, L: OrderLog> Session<R, W, L> {
    pub(crate) fn feedback_menu(&mut self) -> AppResult<()> {
        self.console.clear()?;
        self.console.title("CUSTOMER FEEDBACK")?;
        self.console.option(1, "Give Feedback")?;
        self.console.option(2, "View Feedback")?;
        self.console.blank()?;

        match self.console.prompt_number("Choice: ")? {
            1 => self.give_feedback()?,
            2 => self.view_feedback()?,
            other => {
                self.console.error(&format!("Invalid option {other}: choose 1-2"))?;
                return Ok(());
            }
        }

        self.console.pause()
    }

    fn give_feedback(&mut self) -> AppResult<()> {
        let name = self.console.prompt_line("Name: ")?;
        let message = self.console.prompt_line("Feedback: ")?;

        match self.feedback.append(&name, &message, Local::now()) {
            Ok(_) => self.console.success("Thank you for your feedback!"),
            Err(StoreError::EmptyFeedback) => self.console.error("Feedback is empty, nothing saved."),
            Err(e) => Err(e.into()),
        }
    }

    fn view_feedback(&mut self) -> AppResult<()> {
        let entries = match self.feedback.read_all() {
            Ok(entries) => entries,
            Err(StoreError::NotFound { .. }) => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        if entries.is_empty() {
            return self.console.line("No feedback found.");
        }

        self.console.section("Feedback")?;
        for entry in &entries {
            self.console.line(entry)?;
        }
        Ok(())
    }
}
