//! Utility Belt core library
//!
//! Provides the utility contract, the immutable-after-build registry with
//! its menu and command indexes, input resolution, the yes/no confirmation
//! gate, and the interactive session loop that ties them together.

pub mod config;
pub mod confirm;
pub mod console;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod utility;

// Re-export commonly used types
pub use config::Secrets;
pub use confirm::{ConfirmationGate, parse_confirmation};
pub use console::{Console, LineSource, StdinLineSource};
pub use error::{BeltError, BeltResult};
pub use registry::UtilityRegistry;
pub use resolver::{ResolvedAction, resolve};
pub use session::{SessionLoop, SessionOutcome};
pub use utility::{Utility, UtilityError};
