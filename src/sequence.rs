pub mod anchor;
pub mod chain;
pub mod sampler;
pub mod window;
