//! Contract-side services behind the extension api.
//!
//! These are the pieces that run inside the launcher process but belong to
//! the extension surface: command dispatch, status state, per-extension
//! logging, the catalog facade, and the composition root that ties them
//! together. They orchestrate between ports and domain types only; concrete
//! stores and sinks are injected.

mod command_registry;
mod ext_host;
mod games;
mod logger;
mod status;

pub use command_registry::{CommandError, CommandRegistry, CommandResult};
pub use ext_host::{ExtensionApi, ExtensionHost};
pub use games::GamesService;
pub use logger::ExtensionLogger;
pub use status::{StatusField, StatusService, StatusState};
