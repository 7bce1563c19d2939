//! Shared Kernel - Domain-crossing minimal core
//!
//! The smallest core of vocabulary shared by every feature crate:
//! - Unified error types and result aliases
//! - Typed entity ids
//!
//! **Design Principle**: only things that are hard to change and mean
//! the same thing in every domain belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
