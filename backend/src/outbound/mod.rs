//! Outbound adapters: implementations of the domain ports.

pub mod persistence;
