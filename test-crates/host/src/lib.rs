//! A minimal stand-in for a host runtime that loads native modules.
//!
//! A real host hands the module opaque handles at load time; this one
//! implements `Registrar` directly and keeps the resulting exports in a
//! map. Calls are dispatched the way a foreign host dispatches them: any
//! caller-supplied arguments are dropped at the boundary, before the
//! registered entry runs.

use core::ffi::CStr;
use scuttle::module::{self, Entry, Status};
use std::collections::BTreeMap;

/// An argument value a caller can pass to an export.
#[derive(Clone, Copy, Debug)]
pub enum Value {
    /// A number.
    Number(i32),
    /// A string.
    String(&'static str),
    /// An object with no properties.
    Object,
}

/// A host process's view of a loaded module.
#[derive(Default)]
pub struct Host {
    exports: BTreeMap<String, Entry>,
}

impl Host {
    /// Load the module, calling its registration entry point.
    ///
    /// Returns the host with its exports populated, or `None` if the
    /// module signaled load failure.
    pub fn load() -> Option<Self> {
        let mut host = Self::default();
        match module::register(&mut host) {
            Ok(()) => Some(host),
            Err(_) => None,
        }
    }

    /// Whether the exports contain a callable named `name`.
    pub fn has_export(&self, name: &str) -> bool {
        self.exports.contains_key(name)
    }

    /// Invoke the export named `name`, dropping `args` without inspecting
    /// them.
    ///
    /// Panics if there is no such export.
    pub fn call(&self, name: &str, args: &[Value]) {
        let entry = self.exports[name];
        let _ = args;
        entry();
    }
}

impl module::Registrar for Host {
    type Function = Entry;

    fn create_function(&mut self, _name: &CStr, entry: Entry) -> Result<Entry, Status> {
        Ok(entry)
    }

    fn set_named_property(&mut self, name: &CStr, function: Entry) -> Result<(), Status> {
        let name = name.to_str().map_err(|_| Status::INVALID_ARG)?;
        self.exports.insert(name.to_owned(), function);
        Ok(())
    }
}
