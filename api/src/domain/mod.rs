//! Domain layer - DB queries

pub mod videos;
