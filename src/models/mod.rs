pub mod config;
pub mod palette_request;
pub mod raw_image;

pub use config::AppConfig;
pub use palette_request::PaletteRequest;
pub use raw_image::RawImageSpec;
