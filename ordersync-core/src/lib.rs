//! Order Sync Core
//!
//! Core types shared by the Order Sync client and worker.
//!
//! This crate contains:
//! - Domain types: order records as returned by the remote order API

pub mod domain;
