//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;
mod path_event;

pub use command::AppCommand;
pub use intent::AppIntent;
pub use path_event::{PathAction, PathEvent};
