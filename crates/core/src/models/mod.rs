pub mod analytics;
pub mod cart;
pub mod config;
pub mod order;
pub mod product;
