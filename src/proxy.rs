pub mod figma;
pub mod server;
