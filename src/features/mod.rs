pub mod access;
pub mod auth;
pub mod clients;
pub mod complaints;
pub mod notifications;
pub mod photos;
pub mod reports;
pub mod users;
