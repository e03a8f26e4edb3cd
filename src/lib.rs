pub mod config;
pub mod dynamics;
pub mod error;
pub mod geometry;
pub mod numerics;
pub mod output;
pub mod state;
