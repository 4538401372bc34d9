pub mod collision;
pub mod forces;
pub mod motion;
pub mod render;
