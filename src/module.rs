//! Module registration.
//!
//! A host runtime that loads this crate as a native module calls its
//! registration entry point once, at load time, passing a capability to
//! create callables and attach them to the module's exports. [`register`]
//! performs the whole of that work: it creates one callable, bound to
//! [`crate::program::abort`], and attaches it to the exports under the
//! name [`ABORT`].
//!
//! The [`Registrar`] trait keeps the registration logic independent of any
//! particular host convention. The Node-API rendition lives in the `node`
//! module; tests provide simulated registrars, including ones that fail.

use core::ffi::CStr;
use core::fmt;

/// The name the abort callable is exported under.
///
/// Host ABIs take NUL-terminated names, so this is a [`CStr`].
pub const ABORT: &CStr = c"abort";

/// The plain function type behind a registered callable.
///
/// Hosts dispatch calls on their own calling convention and drop any
/// caller-supplied arguments before the entry runs.
pub type Entry = fn();

/// An error code reported by the host runtime.
///
/// The values mirror the host's own status vocabulary. Zero means success
/// and is never represented as a `Status`.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Status(i32);

impl Status {
    /// An argument was invalid (`napi_invalid_arg`).
    pub const INVALID_ARG: Self = Self(1);
    /// An object was expected (`napi_object_expected`).
    pub const OBJECT_EXPECTED: Self = Self(2);
    /// A string was expected (`napi_string_expected`).
    pub const STRING_EXPECTED: Self = Self(3);
    /// A function was expected (`napi_function_expected`).
    pub const FUNCTION_EXPECTED: Self = Self(5);
    /// An unspecified host failure (`napi_generic_failure`).
    pub const GENERIC_FAILURE: Self = Self(9);
    /// An exception is pending in the host (`napi_pending_exception`).
    pub const PENDING_EXCEPTION: Self = Self(10);

    /// Construct a `Status` from a raw host status code.
    ///
    /// Returns `None` if `raw` is zero, which means success.
    #[inline]
    pub const fn from_raw(raw: i32) -> Option<Self> {
        if raw == 0 { None } else { Some(Self(raw)) }
    }

    /// The raw host status code.
    #[inline]
    pub const fn as_raw(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INVALID_ARG => f.write_str("Status::INVALID_ARG"),
            Self::OBJECT_EXPECTED => f.write_str("Status::OBJECT_EXPECTED"),
            Self::STRING_EXPECTED => f.write_str("Status::STRING_EXPECTED"),
            Self::FUNCTION_EXPECTED => f.write_str("Status::FUNCTION_EXPECTED"),
            Self::GENERIC_FAILURE => f.write_str("Status::GENERIC_FAILURE"),
            Self::PENDING_EXCEPTION => f.write_str("Status::PENDING_EXCEPTION"),
            Self(raw) => write!(f, "Status({})", raw),
        }
    }
}

/// A capability to register callables with a host runtime, provided to the
/// module at load time.
pub trait Registrar {
    /// Opaque handle to a callable created by the host.
    type Function;

    /// Create a callable that runs `entry` when invoked from the host.
    fn create_function(&mut self, name: &CStr, entry: Entry) -> Result<Self::Function, Status>;

    /// Attach `function` to the module's exports under `name`.
    fn set_named_property(&mut self, name: &CStr, function: Self::Function) -> Result<(), Status>;
}

/// Register the module's exports with the host.
///
/// On success the exports carry one additional entry, [`ABORT`], bound to
/// [`crate::program::abort`]. On failure registration stops at the failing
/// step, so that no partially-initialized surface is exported, and the
/// caller must report load failure to the host.
pub fn register<R: Registrar>(registrar: &mut R) -> Result<(), Status> {
    #[cfg(feature = "log")]
    log::trace!("Creating the {:?} callable", ABORT);

    let function = registrar.create_function(ABORT, abort_entry)?;

    #[cfg(feature = "log")]
    log::trace!("Attaching {:?} to the module exports", ABORT);

    registrar.set_named_property(ABORT, function)?;

    Ok(())
}

/// The entry point behind the [`ABORT`] export.
fn abort_entry() {
    crate::program::abort()
}
