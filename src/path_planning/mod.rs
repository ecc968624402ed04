// Path Planning algorithms module

pub mod glc;

pub use glc::*;
