//! An example of abandoning a metered loop part-way through.
//!
//! The meter is finished when the iterator is dropped, so the line is never
//! left half-drawn.

use rand::Rng;
use std::time::Duration;
use tallybar::{MeterIteratorExt, Options};

fn main() {
    env_logger::init();
    println!("Starting bar...");

    let mut rng = rand::thread_rng();
    let wait = rng.gen_range(25..250);
    let opts = Options::new()
        .desc("Downloading")
        .leave(true)
        .min_interval(Duration::from_millis(100));

    for n in (0..50).meter_with(opts) {
        // Simulate our "download" failing.
        let it_failed = rng.gen_range(0..=99) < 5;
        if it_failed {
            eprintln!("Chunk #{} failed, giving up.", n);
            break;
        }

        std::thread::sleep(Duration::from_millis(wait));
    }

    println!("Complete!");
}
