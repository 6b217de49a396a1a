//! Foundation types for folio.
//!
//! Shared by the shell core and its hosts: the error taxonomy, the session
//! theme, shell configuration, and line-editing input events.

pub mod config;
pub mod error;
pub mod input;
pub mod theme;
