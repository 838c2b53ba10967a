pub mod config;
pub mod error;
pub mod network;
pub mod outcome;
pub mod probing;
pub mod report;
pub mod resolving;
pub mod system;
