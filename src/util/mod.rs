//! System utilities: command execution, filesystem helpers, privilege
//! checks, and journald forwarding.

pub mod exec;
pub mod fs;
pub mod journald;
pub mod privilege;
