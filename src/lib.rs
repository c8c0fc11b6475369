pub mod types;
pub mod categories;
pub mod config;
pub mod layers;
pub mod normalize;
pub mod style;
pub mod summary;
pub mod data;
pub mod choropleth;
pub mod locate;
pub mod districts;
pub mod loader;
pub mod upstream;
pub mod server;
pub mod export;
