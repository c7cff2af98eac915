// Models module - System record as served by the intel API

pub mod system;

pub use system::*;
