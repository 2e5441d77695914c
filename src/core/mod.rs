pub mod calculator;
pub mod daily;
pub mod logic;
