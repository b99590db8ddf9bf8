//! Core utilities for the Yahoo Fantasy Football CLI
//!
//! - `cache`: file system caching of provider payloads
//! - `http`: request headers for the Yahoo Fantasy API

pub mod cache;
pub mod http;

pub use cache::{cache_root, league_settings_path, try_read_to_string, write_string};
pub use http::{auth_header_map, header_map_from_env};
