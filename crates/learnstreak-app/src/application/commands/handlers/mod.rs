mod record_activity_handler;


pub use record_activity_handler::RecordActivityCommandHandler;
