pub mod network;
pub mod pipeline;
pub mod state;
