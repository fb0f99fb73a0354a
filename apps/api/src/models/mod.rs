pub mod assignment;
pub mod skill;
