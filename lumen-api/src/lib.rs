//! Lumen API - Core interfaces and types for the Lumen kernel
//!
//! This crate provides the core interfaces, types, and abstractions shared by
//! Lumen kernel components. It serves as the boundary between the privileged
//! call surface and the subsystems it calls into, and ensures consistent APIs
//! across the system.
//!
//! # Architecture
//!
//! The API is organized into several key modules:
//!
//! - **Core**: Fundamental types and constants
//! - **Error**: Common error types and handling mechanisms
//! - **Debug**: Debug facility tags, selectors, and collaborator interfaces
//!
//! # Design Principles
//!
//! - **Dependency Inversion**: High-level modules depend on abstractions
//! - **Interface Segregation**: Small, focused interfaces
//! - **Single Responsibility**: Each interface has a single purpose

#![no_std]

#[cfg(feature = "std")]
extern crate std;

// Core modules
pub mod core;
pub mod debug;
pub mod error;

// Re-export commonly used types
pub use crate::core::types::*;
pub use crate::debug::interface::{ThreadDumper, TraceRecorder};
pub use crate::debug::types::{DebugOperation, ThreadSelector, TraceCommand};
pub use crate::error::{Error, Result};
