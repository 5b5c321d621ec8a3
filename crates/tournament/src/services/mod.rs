pub mod normalization;
pub mod pairings;
pub mod partition;
pub mod progress;
pub mod ranking;
pub mod scope;
pub mod stats;
