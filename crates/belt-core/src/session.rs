//! Interactive session loop
//!
//! Drives the whole run cycle: render the menu, resolve the selection,
//! configure and run the chosen utility, then ask whether to go again.

use crate::config::Secrets;
use crate::confirm::ConfirmationGate;
use crate::console::{Console, LineSource};
use crate::error::{BeltError, BeltResult};
use crate::registry::UtilityRegistry;
use crate::resolver::{ResolvedAction, resolve};
use std::io::{self, Write};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// User selected the `0) Exit` sentinel (or stdin hit EOF)
    Exited,
    /// User declined to run another option
    Declined,
}

/// The interactive outer loop over a read-only registry
///
/// Generic over the input source so tests can script an entire session.
pub struct SessionLoop<'a, S: LineSource> {
    registry: &'a UtilityRegistry,
    secrets: Secrets,
    console: Console,
    gate: ConfirmationGate,
    input: S,
}

impl<'a, S: LineSource> SessionLoop<'a, S> {
    pub fn new(registry: &'a UtilityRegistry, secrets: Secrets, console: Console, input: S) -> Self {
        Self {
            registry,
            secrets,
            console,
            gate: ConfirmationGate::new(),
            input,
        }
    }

    /// Run the session until the user exits or declines to continue
    ///
    /// A utility failure is not caught here: it propagates as
    /// [`BeltError::Utility`] and terminates the session. Invalid
    /// selections and unreadable confirmations only re-prompt.
    pub async fn run(&mut self) -> BeltResult<SessionOutcome> {
        loop {
            self.render_menu()?;

            let Some(line) = self.input.next_line()? else {
                tracing::info!("EOF at selection prompt, exiting");
                return Ok(SessionOutcome::Exited);
            };
            tracing::info!(input = %line, "user choice");

            match resolve(&line, self.registry) {
                ResolvedAction::Exit => {
                    tracing::info!("exit selected");
                    return Ok(SessionOutcome::Exited);
                }
                ResolvedAction::Invalid => {
                    self.console.error("Please make a valid option");
                }
                ResolvedAction::Run(utility) => {
                    tracing::info!(utility = utility.name(), "running utility");
                    utility.configure(&self.secrets);
                    utility
                        .run()
                        .await
                        .map_err(|e| BeltError::utility(utility.name(), e))?;

                    if self.gate.ask(&self.console, &mut self.input)? {
                        continue;
                    }
                    tracing::info!("user declined to continue");
                    return Ok(SessionOutcome::Declined);
                }
            }
        }
    }

    fn render_menu(&self) -> io::Result<()> {
        println!();
        for (i, key) in self.registry.display_order().iter().enumerate() {
            // keys come from the menu index, so the lookup cannot miss
            if let Some(utility) = self.registry.menu_get(key) {
                println!("{}) {}", i + 1, utility.name());
            }
        }
        println!("0) Exit");
        println!();
        print!("Your choice:");
        io::stdout().flush()
    }
}
