//! Session persistence: save/load of a risk table as a flat JSON file.

mod error;
mod session;

pub use error::StoreError;
pub use session::{DEFAULT_SESSION_FILE, load, save};
