use tracing::{debug, info};

use crate::database::activity_directory_repo::ActivityMap;
use crate::database::{ActivityRepository, DirectoryError};

pub fn list_activities(repo: &dyn ActivityRepository) -> ActivityMap {
    repo.list_activities()
}

/// Adds `email` to the roster and returns the confirmation shown to the student.
pub fn sign_up(
    repo: &dyn ActivityRepository,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    match repo.enroll(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "signup accepted");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            debug!(activity = %activity_name, email = %email, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    repo: &dyn ActivityRepository,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    match repo.withdraw(activity_name, email) {
        Ok(()) => {
            info!(activity = %activity_name, email = %email, "unregister accepted");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            debug!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::InMemoryActivityRepository;

    #[test]
    fn signup_then_unregister_round_trip_messages() {
        let repo = InMemoryActivityRepository::seeded();

        let msg = sign_up(&repo, "Chess Club", "a@x.edu").unwrap();
        assert_eq!(msg, "Signed up a@x.edu for Chess Club");

        let err = sign_up(&repo, "Chess Club", "a@x.edu").unwrap_err();
        assert!(err.to_string().contains("already signed up"));

        let msg = unregister(&repo, "Chess Club", "a@x.edu").unwrap();
        assert_eq!(msg, "Unregistered a@x.edu from Chess Club");

        let err = unregister(&repo, "Chess Club", "a@x.edu").unwrap_err();
        assert!(err.to_string().contains("not signed up"));
    }

    #[test]
    fn list_reflects_signups() {
        let repo = InMemoryActivityRepository::seeded();
        sign_up(&repo, "Tennis Club", "t@x.edu").unwrap();

        let activities = list_activities(&repo);
        assert!(activities["Tennis Club"].has_participant("t@x.edu"));
    }
}
