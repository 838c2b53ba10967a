pub mod checks;
pub mod prober;
pub mod resolver;
pub mod system;
