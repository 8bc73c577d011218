//! Configuration management module

pub mod builder;
pub mod credentials;
pub mod loader;
pub mod validation;

pub use builder::ConfigBuilder;
pub use credentials::{TokenSource, resolve_credentials};
pub use loader::Config;
pub use validation::ConfigValidator;
