pub mod activity;

pub use activity::{Activity, ActivitySeed};
