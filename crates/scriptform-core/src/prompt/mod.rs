//! Prompt text parsing.
//!
//! Turns the raw string a script passes to `input(...)` into an
//! [`InputField`](scriptform_types::form::InputField).

pub mod grammar;
