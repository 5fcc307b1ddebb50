use serde::Serialize;

// One roster entry as served by GET /activities. The name is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Reported to clients, never enforced on signup.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Static seed row, turned into an `Activity` at startup.
#[derive(Debug, Clone, Copy)]
pub struct ActivitySeed {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: u32,
    pub participants: &'static [&'static str],
}

impl ActivitySeed {
    pub fn to_activity(&self) -> Activity {
        Activity {
            description: self.description.to_string(),
            schedule: self.schedule.to_string(),
            max_participants: self.max_participants,
            participants: self.participants.iter().map(|p| p.to_string()).collect(),
        }
    }
}
