pub mod tools;
pub mod wind;
