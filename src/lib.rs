pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod proxy;
pub mod upstream;
pub mod views;

#[cfg(test)]
mod testing;
