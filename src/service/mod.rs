mod user_activities;

pub use user_activities::UserActivities;
