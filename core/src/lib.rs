//! Synthetic startup-funding dataset generator and dashboard reporter.

pub mod assembler;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod investor_sampler;
pub mod metric_sampler;
pub mod name_generator;
pub mod report;
pub mod rng;
pub mod round_sampler;
pub mod sampler;
pub mod startup_sampler;
pub mod store;
pub mod types;
