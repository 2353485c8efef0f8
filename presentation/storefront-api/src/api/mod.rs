pub mod cart;
pub mod checkout;
pub mod error;
pub mod health;
pub mod machinery;
pub mod notifications;
pub mod product;
pub mod session;
pub mod tags;
pub mod wishlist;
