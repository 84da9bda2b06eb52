pub mod explode;
pub mod motion;
