// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod logging;
pub mod progress;
pub mod runner;
pub mod trigger;
