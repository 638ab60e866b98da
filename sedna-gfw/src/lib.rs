pub mod effort;
pub mod error;
pub mod location;
pub mod region;
pub mod season;
pub mod station;
