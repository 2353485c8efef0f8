pub mod cart;
pub mod client;
pub mod orders;
mod wire;
