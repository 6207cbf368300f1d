//! Bus route planner.
//!
//! Answers: "what is the cheapest way from here to there?", where cheapest
//! means shortest road distance when driving yourself, or fastest/cheapest
//! bus journey when travelling by public transport.

pub mod config;
pub mod fares;
pub mod load;
pub mod network;
pub mod planner;
