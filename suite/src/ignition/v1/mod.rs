//! Tests for version 1 of the Ignition config format.

pub mod empty;
