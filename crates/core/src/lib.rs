pub mod commands;
pub mod error;
pub mod http;
pub mod known_regions;
pub mod region_provider;
pub mod settings;
pub mod types;

pub use region_provider::{ProviderName, RegionProvider};
pub use settings::Settings;
pub use types::Region;
