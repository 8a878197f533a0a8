//! Session token persistence in browser localStorage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page writes the token after a successful authentication; the
//! dashboard route guard reads it back. There is no expiry or deletion path.
//! Requires a browser environment; other targets safely no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// localStorage key holding the opaque session token.
pub const TOKEN_KEY: &str = "token";

/// Store the session token. Best effort; storage failures are ignored.
pub fn store_token(token: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = token;
    }
}

/// Read the stored session token, if any.
pub fn load_token() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
