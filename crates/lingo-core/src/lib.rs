//! # lingo-core
//!
//! Core types shared across all lingo crates:
//! - Entity structs for the vocabulary catalog and study history
//! - Dashboard statistic records
//! - Pagination arithmetic and the `Page<T>` envelope
//! - Seed payloads for bulk catalog inserts

pub mod dashboard;
pub mod entities;
pub mod pagination;
pub mod seed;
