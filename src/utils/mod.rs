//! Some utility functions

pub mod comparison;
