mod cleanup;
mod config;
mod internal;
mod registry;

pub use cleanup::CleanupError;
pub use config::ConfigError;
pub use internal::InternalError;
pub use registry::RegistryError;
