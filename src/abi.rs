//! Purpose: C ABI surface for the host print example.
//! Exports: C-callable `say_hello`.
//! Role: Foreign-function entry point; reconstitutes a pointer+length region and forwards it.
//! Invariants: Forwarded bytes are identical to the caller's region; no truncation or transformation.
//! Invariants: Non-null `s` with `len > 0` must reference `len` readable bytes; that precondition is the caller's.
use std::os::raw::c_char;

/// Construct a text value from `len` bytes at `s` and hand it to the host
/// print capability.
///
/// A null `s` or a zero `len` forwards one empty write; callers that pass an
/// empty string with a null data pointer are accepted.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn say_hello(s: *const c_char, len: u32) {
    if s.is_null() || len == 0 {
        crate::host::print("");
        return;
    }
    let bytes = unsafe { std::slice::from_raw_parts(s.cast::<u8>(), len as usize) };
    let text = String::from_utf8_lossy(bytes);
    crate::host::print(&text);
}
