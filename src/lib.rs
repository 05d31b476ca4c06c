//! RoutingDB - A lightweight K-shortest-paths routing engine implemented in Rust
//!
//! This crate provides the pathfinding core of a routing service built on an
//! in-memory graph store: Yen's algorithm for the K loopless shortest paths
//! between a source and target vertex in a weighted directed graph, plus a
//! batch driver that runs the search over many (source, destination) pairs.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;
