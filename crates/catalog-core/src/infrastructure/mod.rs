//! Infrastructure layer - storage implementations of the domain contracts

pub mod memory;
