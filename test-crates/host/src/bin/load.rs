//! Load the module in a simulated host and check the export surface
//! without invoking anything.

use host_tests::Host;

fn main() {
    let host = Host::load().expect("module failed to load");
    eprintln!("Loaded the module");

    assert!(host.has_export("abort"));
    eprintln!("Exports contain `abort`");
}
