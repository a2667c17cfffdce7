pub mod camera;
pub mod input;
pub mod overlay;
pub mod plugin;
pub mod surface;
pub mod ui;
