//! Terminal rendering of trace frames as rows of bars.

use colored::{ColoredString, Colorize};

use crate::algorithm::Value;
use crate::trace::{Frame, Step};

const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Picks the bar glyph for `value` scaled between `min` and `max`.
pub fn glyph(value: Value, min: Value, max: Value) -> char {
    if max <= min {
        return GLYPHS[GLYPHS.len() - 1];
    }
    let offset = value.clamp(min, max) as i128 - min as i128;
    let span = max as i128 - min as i128;
    let index = offset * (GLYPHS.len() as i128 - 1) / span;
    GLYPHS[index as usize]
}

/// Short label for the kind of step.
pub fn step_label(step: &Step<Value>) -> &'static str {
    match step {
        Step::Compare(..) => "compare",
        Step::Swap(..) => "swap",
        Step::Overwrite { .. } => "write",
    }
}

fn paint(glyph: char, step: Option<&Step<Value>>) -> ColoredString {
    let glyph = glyph.to_string();
    match step {
        Some(Step::Compare(..)) => glyph.yellow().bold(),
        Some(Step::Swap(..)) => glyph.red().bold(),
        Some(Step::Overwrite { .. }) => glyph.green().bold(),
        None => glyph.cyan(),
    }
}

/// Renders `values` as bars, highlighting the indices `step` touched.
pub fn bars(values: &[Value], step: Option<&Step<Value>>, (min, max): (Value, Value)) -> String {
    let touched = step.map(Step::indices);
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let glyph = glyph(value, min, max);
            let highlighted = touched.is_some_and(|(i, j)| i == index || j == Some(index));
            if highlighted {
                paint(glyph, step).to_string()
            } else {
                paint(glyph, None).to_string()
            }
        })
        .collect()
}

/// One numbered line for a frame: `   12 swap     ▁▃▂█`.
pub fn frame_line(number: usize, frame: &Frame<'_, Value>, bounds: (Value, Value)) -> String {
    format!(
        "{:>6} {:<8} {}",
        number,
        step_label(frame.step),
        bars(&frame.values, Some(frame.step), bounds)
    )
}

/// The smallest and largest value, or `(0, 0)` for an empty slice.
pub fn bounds(values: &[Value]) -> (Value, Value) {
    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);
    (min, max)
}
