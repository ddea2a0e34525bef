//! Test `program::trap`.

use scuttle::program;

fn main() {
    program::trap()
}
