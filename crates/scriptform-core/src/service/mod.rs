//! Use-case services.
//!
//! Services orchestrate the script ports and the pure form logic. They
//! depend on traits (ports) -- never on concrete infrastructure.

pub mod form;
