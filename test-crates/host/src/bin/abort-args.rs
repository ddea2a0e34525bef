//! Invoke `abort` with extraneous arguments of mismatched shape. The
//! arguments are never inspected, so the behavior is identical to
//! invoking it with none.

use host_tests::{Host, Value};

fn main() {
    let host = Host::load().expect("module failed to load");
    eprintln!("Loaded the module");

    eprintln!("Invoking `abort` with extraneous arguments");
    host.call(
        "abort",
        &[Value::Number(1), Value::String("x"), Value::Object],
    );

    // We shouldn't get here.
    eprintln!("`abort` returned");
}
