//! A Node-API addon that crashes the process that loads it.
//!
//! Building this crate produces a shared library a Node-API host can load
//! as a `.node` module. The module exports one callable, `abort`, which
//! terminates the host process with `SIGABRT` the moment it is invoked.

#![no_std]

use scuttle::node::{RawEnv, RawValue};

/// The symbol the host looks up when it loads the addon.
///
/// # Safety
///
/// Called by the host with the environment and exports handles for the
/// current module load.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn napi_register_module_v1(env: RawEnv, exports: RawValue) -> RawValue {
    unsafe { scuttle::node::register_module(env, exports) }
}
