pub mod config;
pub mod logging;

pub mod checksum;
pub mod downloader;
pub mod http;
pub mod human;
pub mod layout;
pub mod listing;
pub mod mirror;
pub mod progress;
pub mod report;
pub mod sources;
pub mod url_model;
