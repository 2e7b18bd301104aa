pub mod assignment;
pub mod participant;
