pub mod activity_directory_repo;
pub mod seed;

pub use activity_directory_repo::{ActivityRepository, DirectoryError, InMemoryActivityRepository};
