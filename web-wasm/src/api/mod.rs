pub mod freshness;

pub use freshness::analyze_image;
