//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::BankistPaths;
pub use settings::Settings;
