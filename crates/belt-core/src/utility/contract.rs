//! Core Utility trait definition

use super::error::UtilityError;
use crate::config::Secrets;
use async_trait::async_trait;

/// Base trait for all utilities
///
/// A utility is one user-selectable action: typically a single blocking call
/// to a public HTTP endpoint, or a small local computation, that prints its
/// results to the console. The registry indexes utilities by display name and
/// alias; the session loop configures and runs whichever one the user picks.
#[async_trait]
pub trait Utility: Send + Sync {
    /// Display label shown in the menu (e.g., "Cat Fact")
    ///
    /// Names are intended to be unique; when two utilities case-fold to the
    /// same name the registry keeps the later registration.
    fn name(&self) -> &str;

    /// Short invocation tokens, matched case-sensitively at the prompt
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Receive shared runtime configuration before execution
    ///
    /// Called once per run, right before [`Utility::run`]. Implementations
    /// must only store the values they need; no I/O here.
    fn configure(&self, secrets: &Secrets) {
        let _ = secrets;
    }

    /// Perform the utility's entire behavior
    ///
    /// Runs synchronously from the session's point of view: the loop awaits
    /// completion before prompting again. Console and network I/O happen
    /// here.
    ///
    /// # Errors
    ///
    /// Returns `UtilityError` on failure. The session loop applies no fault
    /// isolation; a returned error terminates the session.
    async fn run(&self) -> Result<(), UtilityError>;
}
