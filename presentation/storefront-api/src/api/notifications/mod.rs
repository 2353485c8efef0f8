pub mod center;
pub mod dto;
pub mod routes;
