pub mod dto;
pub mod health;
pub mod middleware;
pub mod orders;
