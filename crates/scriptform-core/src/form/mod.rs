//! Form assembly from scanned scripts.
//!
//! Combines scanner output with the prompt grammar and the documentation
//! block into a [`FormSpec`](scriptform_types::form::FormSpec), and defines
//! the positional naming convention shared by renderers and submissions.

pub mod builder;
pub mod doc;
pub mod naming;
