//! Application layer orchestrating state and persistence.
//!
//! This module defines the `CalculatorEngine`, the single owner of the
//! in-memory profile and job list. Every mutation goes through it and is
//! mirrored to the snapshot store before the call returns.

pub mod engine;
