pub mod actor;
pub mod audit;
