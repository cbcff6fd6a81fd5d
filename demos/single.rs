use std::time::Duration;
use tallybar::{MeterIteratorExt, Options};

fn main() {
    env_logger::init();
    println!("Starting bar...");

    // `0..=50` knows its own length, so a full bar is drawn.
    let opts = Options::new()
        .desc("Downloading")
        .leave(true)
        .bar_width_from_terminal();

    for _ in (0..=50).meter_with(opts) {
        std::thread::sleep(Duration::from_millis(60));
    }

    println!("Complete!");
}
