//! Load the module in a simulated host and invoke `abort`.

use host_tests::Host;

fn main() {
    let host = Host::load().expect("module failed to load");
    eprintln!("Loaded the module");

    assert!(host.has_export("abort"));
    eprintln!("Exports contain `abort`");

    eprintln!("Invoking `abort`");
    host.call("abort", &[]);

    // We shouldn't get here.
    eprintln!("`abort` returned");
}
