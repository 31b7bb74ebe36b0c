//! Access to the Pilosa query backend.

pub mod pilosa_utils;
pub mod ride_count;
