use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::database::seed::SEED_ACTIVITIES;
use crate::models::{Activity, ActivitySeed};

pub type ActivityMap = BTreeMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound { activity: String },

    #[error("Student {email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("Student {email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
}

impl DirectoryError {
    /// True for rejections caused by the roster state rather than a missing activity.
    pub fn is_invalid_operation(&self) -> bool {
        matches!(
            self,
            DirectoryError::AlreadySignedUp { .. } | DirectoryError::NotSignedUp { .. }
        )
    }
}

/// Storage seam for the activity directory. The HTTP layer only sees this trait.
pub trait ActivityRepository: Send + Sync {
    fn list_activities(&self) -> ActivityMap;
    fn enroll(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError>;
    fn withdraw(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError>;
}

/// Process-lifetime directory. One mutex guards the whole map so every
/// read-modify-write on a roster is serialized.
#[derive(Debug, Default)]
pub struct InMemoryActivityRepository {
    activities: Mutex<ActivityMap>,
}

impl InMemoryActivityRepository {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: Mutex::new(activities),
        }
    }

    pub fn from_seeds(seeds: &[ActivitySeed]) -> Self {
        let activities = seeds
            .iter()
            .map(|seed| (seed.name.to_string(), seed.to_activity()))
            .collect();
        Self::new(activities)
    }

    pub fn seeded() -> Self {
        Self::from_seeds(SEED_ACTIVITIES)
    }

    // Mutations are a single push/remove, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, ActivityMap> {
        self.activities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl ActivityRepository for InMemoryActivityRepository {
    fn list_activities(&self) -> ActivityMap {
        self.lock().clone()
    }

    fn enroll(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.lock();
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::NotFound {
                activity: activity_name.to_string(),
            })?;

        if activity.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    fn withdraw(&self, activity_name: &str, email: &str) -> Result<(), DirectoryError> {
        let mut activities = self.lock();
        let activity = activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::NotFound {
                activity: activity_name.to_string(),
            })?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotSignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(pos);
        Ok(())
    }
}
