//! Terminal bar-chart emitter: consumes the step trace as a paced animation.
//!
//! The palette mirrors the classroom handout: light blue for unsorted bars,
//! pale yellow for the settled region, red for the pair under comparison,
//! orange for swaps and shifts, green for placements.

use std::fmt::Write as _;
use std::io::{self, Write as _};
use std::thread;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use once_cell::sync::Lazy;
use sort_step_tools::{Counters, StepKind, StepRecord, TraceSink};

/// Widest bar, in glyphs.
const BAR_WIDTH: usize = 40;

static BAR_GLYPH: Lazy<&'static str> = Lazy::new(|| {
    // Fallback for terminals without block-element glyphs.
    if std::env::var_os("SORT_CLASSROOM_ASCII").is_some() {
        "#"
    } else {
        "\u{2588}"
    }
});

const UNSORTED: (u8, u8, u8) = (0xb3, 0xe5, 0xfc);
const SETTLED: (u8, u8, u8) = (0xff, 0xf9, 0xc4);
const COMPARING: (u8, u8, u8) = (0xff, 0x52, 0x52);
const MOVING: (u8, u8, u8) = (0xff, 0xb7, 0x4d);
const PLACED: (u8, u8, u8) = (0x4c, 0xaf, 0x50);

/// Blocking trace sink that redraws the chart for every record and sleeps the
/// configured delay afterwards. Pacing lives entirely here; the engines never
/// see it.
pub struct TerminalSink {
    delay: Duration,
}

impl TerminalSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl TraceSink<i64> for TerminalSink {
    fn record(&mut self, step: StepRecord<i64>) {
        print!("\x1b[2J\x1b[1;1H{}", format_frame(&step));
        let _ = io::stdout().flush();
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

fn highlight_color(kind: StepKind) -> (u8, u8, u8) {
    match kind {
        StepKind::Comparing => COMPARING,
        StepKind::Swapping | StepKind::Shifting => MOVING,
        StepKind::Placed | StepKind::Noop => PLACED,
    }
}

fn paint(text: &str, (r, g, b): (u8, u8, u8)) -> ColoredString {
    text.truecolor(r, g, b)
}

fn bar_len(value: i64, max: i64) -> usize {
    if value <= 0 {
        return 1;
    }
    let scaled = (value as f64 / max as f64) * BAR_WIDTH as f64;
    (scaled.round() as usize).max(1)
}

/// Renders one step record as a complete frame: label, bars, counters, legend.
pub fn format_frame(step: &StepRecord<i64>) -> String {
    let mut out = String::new();
    let max = step.values.iter().copied().max().unwrap_or(1).max(1);

    let _ = writeln!(out, "{}\n", step.label.bold());

    for (idx, &value) in step.values.iter().enumerate() {
        let color = if step.highlights.contains(&idx) {
            highlight_color(step.kind)
        } else if step.settled.contains(&idx) {
            SETTLED
        } else {
            UNSORTED
        };
        let bar = BAR_GLYPH.repeat(bar_len(value, max));
        let value_text = value.to_string();
        let value_text = if step.highlights.contains(&idx) {
            value_text.bold()
        } else {
            value_text.normal()
        };
        let _ = writeln!(out, "{idx:>2} {} {}", paint(&bar, color), value_text);
    }

    let _ = writeln!(
        out,
        "\ncomparisons: {}   swaps/moves: {}",
        step.counters.comparisons, step.counters.moves
    );
    let _ = writeln!(
        out,
        "{} unsorted  {} settled  {} comparing  {} swap/shift  {} placed",
        paint("\u{25a0}", UNSORTED),
        paint("\u{25a0}", SETTLED),
        paint("\u{25a0}", COMPARING),
        paint("\u{25a0}", MOVING),
        paint("\u{25a0}", PLACED),
    );

    out
}

/// Renders the closing frame: every bar settled, plus the final totals.
pub fn format_final(values: &[i64], counters: &Counters) -> String {
    let mut out = String::new();
    let max = values.iter().copied().max().unwrap_or(1).max(1);

    let _ = writeln!(out, "{}\n", "sorting complete".bold());
    for (idx, &value) in values.iter().enumerate() {
        let bar = BAR_GLYPH.repeat(bar_len(value, max));
        let _ = writeln!(out, "{idx:>2} {} {}", paint(&bar, SETTLED), value);
    }
    let _ = writeln!(
        out,
        "\ntotal comparisons: {}   total swaps/moves: {}",
        counters.comparisons, counters.moves
    );

    out
}
