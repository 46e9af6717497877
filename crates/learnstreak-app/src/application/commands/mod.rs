pub mod activity_commands;
pub mod command_handler;
pub mod handlers;

pub use activity_commands::RecordActivityCommand;
pub use command_handler::{Command, CommandHandler};
