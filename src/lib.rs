//! Ride Compare - Comparison and ranking engine for personal electric
//! vehicles.
//!
//! Generates advantage/weakness statements from structured spec sheets
//! in three modes: head-to-head (two products), multi ("best at" across
//! three or more), and single-vs-cohort (one product against its
//! price-bracketed peer group).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
