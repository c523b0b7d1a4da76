extern crate chrono;
extern crate diesel;

pub mod config;
pub mod db;
pub mod logger;
pub mod models;
pub mod payment;
pub mod report;
pub mod services;
