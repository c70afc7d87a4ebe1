// Synthetic series generation
pub mod generator;

// Headless reporting
pub mod summary;
