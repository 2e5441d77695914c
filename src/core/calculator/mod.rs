pub mod cost_code;
pub mod geometry;
pub mod overtime;
pub mod rows;
pub mod schedule;
pub mod timeline;
