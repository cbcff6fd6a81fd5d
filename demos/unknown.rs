//! Driving a session by hand, over a source with no known length.

use std::io::{self, BufRead};
use tallybar::{Options, Session};

fn main() -> tallybar::Result<()> {
    env_logger::init();

    let mut words = 0;
    let mut session = Session::stderr(Options::new().desc("Reading lines").leave(true));

    session.start()?;
    for line in io::stdin().lock().lines() {
        words += line?.split_whitespace().count();
        session.tick()?;
    }
    session.finish()?;

    println!("{} words", words);
    Ok(())
}
