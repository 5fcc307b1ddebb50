use crate::models::ActivitySeed;

pub const SEED_ACTIVITIES: &[ActivitySeed] = &[
    ActivitySeed {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    ActivitySeed {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    ActivitySeed {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    ActivitySeed {
        name: "Basketball Team",
        description: "Practice drills and play in the inter-school league",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu"],
    },
    ActivitySeed {
        name: "Tennis Club",
        description: "Improve your serve and play friendly matches",
        schedule: "Tuesdays and Saturdays, 10:00 AM - 11:30 AM",
        max_participants: 10,
        participants: &["ava@mergington.edu"],
    },
    ActivitySeed {
        name: "Art Studio",
        description: "Explore painting, drawing and mixed media",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["mia@mergington.edu", "lucas@mergington.edu"],
    },
    ActivitySeed {
        name: "Music Ensemble",
        description: "Rehearse and perform with the school ensemble",
        schedule: "Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 25,
        participants: &["isabella@mergington.edu"],
    },
    ActivitySeed {
        name: "Debate Team",
        description: "Sharpen public speaking and argumentation skills",
        schedule: "Mondays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["ethan@mergington.edu", "amelia@mergington.edu"],
    },
    ActivitySeed {
        name: "Science Club",
        description: "Hands-on experiments and science fair projects",
        schedule: "Fridays, 2:00 PM - 3:30 PM",
        max_participants: 20,
        participants: &["benjamin@mergington.edu"],
    },
];
