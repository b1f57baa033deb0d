// Game modules

pub mod hotkeys;
