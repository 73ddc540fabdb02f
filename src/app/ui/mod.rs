pub mod auth;
pub mod input;
pub mod panels;
