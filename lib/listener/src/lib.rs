pub mod children;
pub mod config;
pub mod constants;
pub mod container;
pub mod debounce;
pub mod dom;
pub mod engine;
pub mod errors;
pub mod listener;
pub mod surface;
pub mod threshold;
