// Modelos compartidos con el firmware

pub mod status;

pub use status::*;
