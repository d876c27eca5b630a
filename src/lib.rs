//! Purpose: Example library exporting `say_hello` across the C ABI.
//! Exports: `abi` (the C-callable entry point) and `host` (the print capability seam).
//! Role: Hello-world illustration of a foreign-function export delegating to a host print facility.
//! Invariants: Caller bytes reach the host capability byte-for-byte; nothing is transformed in between.
pub mod abi;
pub mod host;
