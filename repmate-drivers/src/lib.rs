//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in repmate-core for the trainer hardware:
//!
//! - Motion input (digital line from the detection module)
//! - Status LED (GPIO RGB)

#![no_std]
#![deny(unsafe_code)]

pub mod led;
pub mod motion;
