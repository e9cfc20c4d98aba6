pub mod driver_roster;
pub mod oracle;
pub mod planner;
pub mod simulator;
