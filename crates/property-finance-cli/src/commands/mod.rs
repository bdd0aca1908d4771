pub mod calculator;
pub mod investment;
pub mod mortgage;
