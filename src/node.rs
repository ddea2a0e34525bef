//! Bindings to the Node-API module convention.
//!
//! A Node-API host loads a native module and calls its registration entry
//! point, the exported `napi_register_module_v1` symbol, passing opaque
//! handles to the host environment and to the module's exports object.
//! The symbol names, calling convention, and handle types here are
//! dictated entirely by the host; this module only declares them.
//!
//! To build the module as an addon, define the registration symbol in a
//! `cdylib` crate and forward it here, as `example-crates/node-addon`
//! does:
//!
//! ```ignore
//! use scuttle::node::{RawEnv, RawValue};
//!
//! #[unsafe(no_mangle)]
//! pub unsafe extern "C" fn napi_register_module_v1(
//!     env: RawEnv,
//!     exports: RawValue,
//! ) -> RawValue {
//!     unsafe { scuttle::node::register_module(env, exports) }
//! }
//! ```
//!
//! The host symbols declared here are left undefined in the built addon
//! and resolve against the host executable when the module is loaded.

use crate::module::{self, Entry, Registrar, Status};
use core::ffi::{CStr, c_char, c_void};
use core::mem;
use core::ptr::null_mut;
use linux_raw_sys::ctypes::c_int;

/// Opaque handle to the host's execution environment (`napi_env`).
pub type RawEnv = *mut c_void;

/// Opaque handle to a host value (`napi_value`).
pub type RawValue = *mut c_void;

/// Opaque handle to the state of one callback invocation
/// (`napi_callback_info`).
pub type RawCallbackInfo = *mut c_void;

/// Raw status code returned by host API calls (`napi_status`). Zero means
/// success.
pub type RawStatus = c_int;

/// The type of native callables the host can invoke (`napi_callback`).
pub type RawCallback = unsafe extern "C" fn(RawEnv, RawCallbackInfo) -> RawValue;

// These symbols are provided by the host runtime when it loads the
// module.
unsafe extern "C" {
    fn napi_create_function(
        env: RawEnv,
        utf8name: *const c_char,
        length: usize,
        cb: RawCallback,
        data: *mut c_void,
        result: *mut RawValue,
    ) -> RawStatus;

    fn napi_get_cb_info(
        env: RawEnv,
        cbinfo: RawCallbackInfo,
        argc: *mut usize,
        argv: *mut RawValue,
        this_arg: *mut RawValue,
        data: *mut *mut c_void,
    ) -> RawStatus;

    fn napi_set_named_property(
        env: RawEnv,
        object: RawValue,
        utf8name: *const c_char,
        value: RawValue,
    ) -> RawStatus;
}

/// Convert a raw host status into a `Result`.
fn check(raw: RawStatus) -> Result<(), Status> {
    match Status::from_raw(raw) {
        None => Ok(()),
        Some(status) => Err(status),
    }
}

/// The trampoline the host invokes for calls to registered callables.
///
/// Only the registration-time data slot, which holds the [`Entry`] to
/// run, is retrieved from `info`. The caller's arguments are never
/// retrieved or inspected.
unsafe extern "C" fn call_entry(env: RawEnv, info: RawCallbackInfo) -> RawValue {
    let mut data = null_mut();
    let status =
        unsafe { napi_get_cb_info(env, info, null_mut(), null_mut(), null_mut(), &mut data) };
    if status != 0 || data.is_null() {
        // Without the data slot there is nothing to call.
        return null_mut();
    }

    // The data slot was populated from an `Entry` in `create_function`.
    let entry = unsafe { mem::transmute::<*mut c_void, Entry>(data) };
    entry();

    null_mut()
}

/// A [`Registrar`] backed by the host's environment and exports handles.
struct NodeRegistrar {
    env: RawEnv,
    exports: RawValue,
}

impl Registrar for NodeRegistrar {
    type Function = RawValue;

    fn create_function(&mut self, name: &CStr, entry: Entry) -> Result<RawValue, Status> {
        let mut function = null_mut();
        let status = unsafe {
            napi_create_function(
                self.env,
                name.as_ptr(),
                name.count_bytes(),
                call_entry,
                entry as usize as *mut c_void,
                &mut function,
            )
        };
        check(status)?;
        Ok(function)
    }

    fn set_named_property(&mut self, name: &CStr, function: RawValue) -> Result<(), Status> {
        let status =
            unsafe { napi_set_named_property(self.env, self.exports, name.as_ptr(), function) };
        check(status)
    }
}

/// Register the module against a live host.
///
/// Returns `exports` with the module's callables attached, or null to
/// signal load failure to the host. There is no partial recovery: a
/// failure at either registration step fails the whole load.
///
/// # Safety
///
/// `env` and `exports` must be the handles the host supplied for the
/// current module load.
pub unsafe fn register_module(env: RawEnv, exports: RawValue) -> RawValue {
    let mut registrar = NodeRegistrar { env, exports };

    match module::register(&mut registrar) {
        Ok(()) => exports,
        Err(_status) => {
            #[cfg(feature = "log")]
            log::trace!("Module registration failed: {:?}", _status);

            null_mut()
        }
    }
}
