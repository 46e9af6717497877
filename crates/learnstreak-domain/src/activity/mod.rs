mod aggregate;
mod repository;

pub use aggregate::ActivityRecord;
pub use repository::ActivityStore;
