//! Interactive shell
//!
//! A numbered menu loop that gathers field values line by line and calls
//! into the [`InventoryService`]. Works over any `BufRead`/`Write` pair so
//! sessions can be scripted in tests.

pub mod menu;
pub mod prompt;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{InventoryError, InventoryResult};
use crate::models::HomeRecord;
use crate::services::InventoryService;

pub use menu::{MenuChoice, MENU_LINES};
pub use prompt::{PromptError, Prompter};

/// What the loop does after an action
enum Flow {
    Continue,
    Stop,
}

/// One interactive session over an inventory
pub struct Shell<R, W> {
    prompter: Prompter<R, W>,
    service: InventoryService,
    export_path: PathBuf,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, service: InventoryService, export_path: PathBuf) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            service,
            export_path,
        }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> InventoryResult<()> {
        match self.session() {
            Ok(()) | Err(PromptError::Closed) => {
                debug!("Shell session ended");
                Ok(())
            }
            Err(PromptError::Io(e)) => Err(e.into()),
            Err(e @ PromptError::InvalidNumber(_)) => Err(InventoryError::Io(e.to_string())),
        }
    }

    /// The service, for inspecting the inventory after a session
    pub fn service(&self) -> &InventoryService {
        &self.service
    }

    /// Consume the shell, returning the writer
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn session(&mut self) -> Result<(), PromptError> {
        loop {
            for line in MENU_LINES {
                self.prompter.say(line)?;
            }

            let answer = self.prompter.ask("Enter your choice: ")?;
            let choice = MenuChoice::parse(&answer);
            debug!(?choice, "Menu selection");

            match choice {
                Some(MenuChoice::AddHome) => {
                    let result = self.add_home();
                    self.report_input_error("adding", result)?;
                }
                Some(MenuChoice::RemoveHome) => {
                    let result = self.remove_home();
                    self.report_input_error("removing", result)?;
                }
                Some(MenuChoice::UpdateStatus) => {
                    let result = self.update_home();
                    self.report_input_error("updating", result)?;
                }
                Some(MenuChoice::DisplayInventory) => {
                    self.prompter.say("Current home inventory:")?;
                    let outcome = self.service.list_homes();
                    self.prompter.say(outcome.message())?;
                }
                Some(MenuChoice::Exit) => {
                    self.offer_export()?;
                    self.prompter.say("Exiting program...")?;
                    return Ok(());
                }
                None => self.prompter.say("Invalid choice. Please try again.")?,
            }

            if let Flow::Stop = self.ask_to_continue()? {
                self.prompter.say("Exiting program...")?;
                return Ok(());
            }
        }
    }

    fn add_home(&mut self) -> Result<(), PromptError> {
        let square_feet = self.prompter.ask_number("Enter square feet: ")?;
        let address = self.prompter.ask("Enter address: ")?;
        let city = self.prompter.ask("Enter city: ")?;
        let state = self.prompter.ask("Enter state: ")?;
        let zip_code = self.prompter.ask_number("Enter ZIP code: ")?;
        let model_name = self.prompter.ask("Enter model name: ")?;
        let status_prompt = format!(
            "Enter sale status ({}): ",
            self.service.sale_statuses().join(", ")
        );
        let sale_status = self.prompter.ask(&status_prompt)?;

        let home = HomeRecord::new(
            square_feet,
            address,
            city,
            state,
            zip_code,
            model_name,
            sale_status,
        );
        let outcome = self.service.add_home(home);
        self.prompter.say(outcome.message())
    }

    fn remove_home(&mut self) -> Result<(), PromptError> {
        let address = self.prompter.ask("Enter address of home to remove: ")?;
        let zip_code = self
            .prompter
            .ask_number("Enter ZIP code of home to remove: ")?;

        let outcome = self.service.remove_home(&address, zip_code);
        self.prompter.say(outcome.message())
    }

    fn update_home(&mut self) -> Result<(), PromptError> {
        let address = self.prompter.ask("Enter address of home to update: ")?;
        let zip_code = self
            .prompter
            .ask_number("Enter ZIP code of home to update: ")?;
        let status_prompt = format!(
            "Enter new sale status ({}): ",
            self.service.sale_statuses().join(", ")
        );
        let new_status = self.prompter.ask(&status_prompt)?;

        let outcome = self.service.update_home(&address, zip_code, &new_status);
        self.prompter.say(outcome.message())
    }

    // A bad number abandons the current action but not the session.
    fn report_input_error(
        &mut self,
        verb: &str,
        result: Result<(), PromptError>,
    ) -> Result<(), PromptError> {
        match result {
            Err(err @ PromptError::InvalidNumber(_)) => {
                self.prompter.say(&format!("Error {} home: {}", verb, err))
            }
            other => other,
        }
    }

    fn ask_to_continue(&mut self) -> Result<Flow, PromptError> {
        if self
            .prompter
            .confirm("Do you want to perform another action? (Y/N): ")?
        {
            return Ok(Flow::Continue);
        }

        self.offer_export()?;
        Ok(Flow::Stop)
    }

    fn offer_export(&mut self) -> Result<(), PromptError> {
        if self
            .prompter
            .confirm("Do you want to print the information to a file? (Y/N): ")?
        {
            let outcome = self.service.print_to_file(&self.export_path);
            self.prompter.say(outcome.message())
        } else {
            self.prompter.say("File will not be printed.")
        }
    }
}
