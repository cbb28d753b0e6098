pub mod config;
pub mod post;
