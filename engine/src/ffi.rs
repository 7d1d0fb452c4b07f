//! FFI layer for embedding the engine in other runtimes.
//!
//! This module provides C-compatible functions for hosts such as browser
//! extension bridges or mobile apps. Keys and requests cross the boundary as
//! JSON strings.
//!
//! # Memory Management
//!
//! - Strings returned by `lexorder_*` functions are allocated by Rust
//! - Caller must free them with `lexorder_string_free`
//! - `lexorder_version` returns a static string that must not be freed
//!
//! # Error Handling
//!
//! Functions return JSON with either:
//! - `{"ok": <result>}` on success
//! - `{"error": "<message>"}` on failure

use crate::error::Result;
use crate::KeyRequest;
use std::ffi::{c_char, CStr, CString};

/// Result wrapper for FFI responses.
#[derive(serde::Serialize)]
#[serde(untagged)]
enum FfiResult<T: serde::Serialize> {
    Ok { ok: T },
    Err { error: String },
}

impl<T: serde::Serialize> FfiResult<T> {
    fn err(message: impl Into<String>) -> Self {
        FfiResult::Err {
            error: message.into(),
        }
    }

    fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|e| format!(r#"{{"error":"serialization failed: {}"}}"#, e))
    }
}

impl<T: serde::Serialize> From<Result<T>> for FfiResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(ok) => FfiResult::Ok { ok },
            Err(e) => FfiResult::err(e.to_string()),
        }
    }
}

/// Convert a Rust string to a C string pointer.
/// Caller must free with `lexorder_string_free`.
fn to_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(cs) => cs.into_raw(),
        // Keys over an alphabet containing NUL cannot cross as C strings
        Err(_) => c"{\"error\":\"string contained null bytes\"}"
            .to_owned()
            .into_raw(),
    }
}

/// Convert a C string pointer to a Rust string.
/// Returns None if pointer is null or invalid UTF-8.
unsafe fn from_c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

fn respond<T: serde::Serialize>(result: Result<T>) -> *mut c_char {
    to_c_string(FfiResult::from(result).to_json())
}

fn reject(message: &str) -> *mut c_char {
    to_c_string(FfiResult::<()>::err(message).to_json())
}

// ============================================================================
// Single Keys
// ============================================================================

/// Key for the first item of an empty list.
///
/// # Returns
/// JSON string: `{"ok": "<key>"}` or `{"error": "message"}`
///
/// # Safety
/// - Caller must free the returned string with `lexorder_string_free`
#[no_mangle]
pub extern "C" fn lexorder_initial() -> *mut c_char {
    respond(crate::initial())
}

/// Key that sorts before `next`.
///
/// # Safety
/// - `next` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `lexorder_string_free`
#[no_mangle]
pub unsafe extern "C" fn lexorder_start(next: *const c_char) -> *mut c_char {
    match from_c_string(next) {
        Some(next) => respond(crate::start(&next)),
        None => reject("invalid next key"),
    }
}

/// Key that sorts after `previous`.
///
/// # Safety
/// - `previous` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `lexorder_string_free`
#[no_mangle]
pub unsafe extern "C" fn lexorder_end(previous: *const c_char) -> *mut c_char {
    match from_c_string(previous) {
        Some(previous) => respond(crate::end(&previous)),
        None => reject("invalid previous key"),
    }
}

/// Key between two neighbours.
///
/// # Safety
/// - `previous` and `next` must be valid null-terminated C strings or null
/// - Caller must free the returned string with `lexorder_string_free`
#[no_mangle]
pub unsafe extern "C" fn lexorder_between(
    previous: *const c_char,
    next: *const c_char,
) -> *mut c_char {
    let previous = match from_c_string(previous) {
        Some(s) => s,
        None => return reject("invalid previous key"),
    };

    let next = match from_c_string(next) {
        Some(s) => s,
        None => return reject("invalid next key"),
    };

    respond(crate::between(&previous, &next))
}

// ============================================================================
// General Requests
// ============================================================================

/// Generate keys for a JSON-encoded [`KeyRequest`].
///
/// # Arguments
/// - `request_json`: e.g. `{"start": "2", "end": "3", "count": 3, "alphabet": "0123456789"}`
///
/// # Returns
/// JSON string: `{"ok": ["<key>", ...]}` or `{"error": "message"}`
///
/// # Safety
/// - `request_json` must be a valid null-terminated C string or null
/// - Caller must free the returned string with `lexorder_string_free`
#[no_mangle]
pub unsafe extern "C" fn lexorder_generate(request_json: *const c_char) -> *mut c_char {
    let request_str = match from_c_string(request_json) {
        Some(s) => s,
        None => return reject("invalid request JSON"),
    };

    let request: KeyRequest = match serde_json::from_str(&request_str) {
        Ok(r) => r,
        Err(e) => return reject(&format!("parse error: {}", e)),
    };

    respond(request.run())
}

/// Free a string allocated by the engine.
///
/// # Safety
/// - `s` must be a valid pointer from a `lexorder_*` function
/// - Must not be called twice on the same pointer
#[no_mangle]
pub unsafe extern "C" fn lexorder_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Get the engine version.
#[no_mangle]
pub extern "C" fn lexorder_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}
