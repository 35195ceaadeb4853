pub mod chart;
pub mod menu;
pub mod messages;
pub mod render;
