//! Lang items for freestanding builds of the addon.

// Provide a `#[panic_handler]` that aborts the process. This is only
// needed in no-std builds, as std provides a panic handler, and a
// deliberate-crash fixture treats a panic as a crash like any other.
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo<'_>) -> ! {
    crate::program::abort()
}
