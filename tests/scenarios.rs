//! Byte-for-byte console output of whole metering runs.

use std::time::Duration;
use tallybar::clock::ManualClock;
use tallybar::{MeterIteratorExt, Options};

/// Iterate `items`, spending one (simulated) second on each, and return
/// everything written to the stream.
fn run<I: Iterator>(items: I, opts: Options) -> String {
    let clock = ManualClock::new();
    let mut out = Vec::new();

    for _ in items.meter_to(opts, &mut out, clock.clone()) {
        clock.advance(Duration::from_secs(1));
    }

    String::from_utf8(out).unwrap()
}

fn blank(len: usize) -> String {
    " ".repeat(len)
}

#[test]
fn empty_sequence_never_displays_a_bar() {
    assert_eq!(run(0..0, Options::new()), "\r\r");
    assert_eq!(run(std::iter::empty::<u8>(), Options::new().leave(true)), "\n");
}

#[test]
fn single_element_left_on_screen() {
    assert_eq!(
        run(0..1, Options::new().leave(true)),
        "\r|##########| 1/1 100% [elapsed: 00:01 left: 00:00,  1.00 iters/sec]\n"
    );
}

#[test]
fn single_element_erased() {
    // The only redraw would be the final one, which is left to `finish`.
    assert_eq!(run(0..1, Options::new()), "\r\r");
}

#[test]
fn five_elements_erased() {
    let expected = format!(
        "{}{}{}{}\r{}\r",
        "\r|##--------| 1/5  20% [elapsed: 00:01 left: 00:04,  1.00 iters/sec]",
        "\r|####------| 2/5  40% [elapsed: 00:02 left: 00:03,  1.00 iters/sec]",
        "\r|######----| 3/5  60% [elapsed: 00:03 left: 00:02,  1.00 iters/sec]",
        "\r|########--| 4/5  80% [elapsed: 00:04 left: 00:01,  1.00 iters/sec]",
        blank(67),
    );
    assert_eq!(run(0..5, Options::new()), expected);
}

#[test]
fn five_elements_left_on_screen() {
    let expected = concat!(
        "\r|##--------| 1/5  20% [elapsed: 00:01 left: 00:04,  1.00 iters/sec]",
        "\r|####------| 2/5  40% [elapsed: 00:02 left: 00:03,  1.00 iters/sec]",
        "\r|######----| 3/5  60% [elapsed: 00:03 left: 00:02,  1.00 iters/sec]",
        "\r|########--| 4/5  80% [elapsed: 00:04 left: 00:01,  1.00 iters/sec]",
        "\r|##########| 5/5 100% [elapsed: 00:05 left: 00:00,  1.00 iters/sec]",
        "\n",
    );
    assert_eq!(run(0..5, Options::new().leave(true)), expected);
}

#[test]
fn six_elements_with_a_description() {
    let expected = format!(
        "{}{}{}{}{}\r{}\r",
        "\rrange: |#---------| 1/6  16% [elapsed: 00:01 left: 00:05,  1.00 iters/sec]",
        "\rrange: |###-------| 2/6  33% [elapsed: 00:02 left: 00:04,  1.00 iters/sec]",
        "\rrange: |#####-----| 3/6  50% [elapsed: 00:03 left: 00:03,  1.00 iters/sec]",
        "\rrange: |######----| 4/6  66% [elapsed: 00:04 left: 00:02,  1.00 iters/sec]",
        "\rrange: |########--| 5/6  83% [elapsed: 00:05 left: 00:01,  1.00 iters/sec]",
        blank(74),
    );
    assert_eq!(run(0..6, Options::new().desc("range")), expected);
}

#[test]
fn unknown_totals_never_draw_a_bar() {
    let text = run((0..20).filter(|n| n % 3 != 0), Options::new().leave(true));

    let lines: Vec<&str> = text.split('\r').filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 13);
    for line in &lines {
        assert!(!line.contains('|'), "{:?}", line);
        assert!(!line.contains('%'), "{:?}", line);
        assert!(line.contains(" iters/sec]"), "{:?}", line);
    }
    assert_eq!(
        lines.last().unwrap(),
        &"13 [elapsed: 00:13,  1.00 iters/sec]\n"
    );
}

#[test]
fn overshooting_the_total_falls_back_to_counts() {
    let text = run(0..3, Options::new().total(2).leave(true));
    let expected = format!(
        "{}{}{}{}\n",
        "\r|#####-----| 1/2  50% [elapsed: 00:01 left: 00:01,  1.00 iters/sec]",
        "\r|##########| 2/2 100% [elapsed: 00:02 left: 00:00,  1.00 iters/sec]",
        "\r3 [elapsed: 00:03,  1.00 iters/sec]",
        blank(32),
    );
    assert_eq!(text, expected);
}

#[test]
fn min_iters_spaces_out_redraws() {
    let text = run(0..10, Options::new().min_iters(4).leave(true));
    let counts: Vec<&str> = text
        .split('\r')
        .filter_map(|l| l.split("| ").nth(1))
        .filter_map(|l| l.split('/').next())
        .collect();

    // Redraws at 4 and 8, then the true final count on finish.
    assert_eq!(counts, vec!["4", "8", "10"]);
}
