//! Shared helpers for unit tests

#![cfg(test)]

pub mod fixtures;
