//! Clock-face rendering: elapsed seconds to a block of ASCII-art rows.
//!
//! Rendering is pure. The same elapsed value and options always produce the
//! same [`ClockFrame`]; writing it to a terminal is the screen's job.

use crate::glyphs::{self, Glyph, GLYPH_HEIGHT};

/// Key hint shown under the digits when hints are enabled.
pub const HINT_LINE: &str = "[r] restart   [p] pause/resume   [q] quit";

const DIGIT_GAP: &str = " ";
const LABEL_GAP: &str = " ";
const GROUP_GAP: &str = "   ";

/// Elapsed time split into clock components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    /// Whole hours; not wrapped at 24 or 100.
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl ClockTime {
    /// Decompose a count of elapsed seconds.
    pub fn from_elapsed(elapsed: u64) -> Self {
        Self {
            hours: elapsed / 3600,
            minutes: ((elapsed % 3600) / 60) as u8,
            seconds: (elapsed % 60) as u8,
        }
    }
}

/// Decimal digits of `value`, most significant first, left-padded with zeros
/// to at least `min_len` digits.
pub fn digits(value: u64, min_len: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut rest = value;
    loop {
        out.push((rest % 10) as u8);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    while out.len() < min_len {
        out.push(0);
    }
    out.reverse();
    out
}

/// A rendered clock face, one string per terminal row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClockFrame {
    rows: Vec<String>,
}

impl ClockFrame {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row, in characters.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Join the rows with newlines (no trailing newline).
    pub fn to_string_display(&self) -> String {
        self.rows.join("\n")
    }
}

/// Renders elapsed time into clock frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    /// Append the key hint line under the digits.
    pub hints: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { hints: true }
    }
}

impl Renderer {
    pub fn new(hints: bool) -> Self {
        Self { hints }
    }

    /// Render the clock face for `elapsed` seconds.
    pub fn render(&self, elapsed: u64) -> ClockFrame {
        let time = ClockTime::from_elapsed(elapsed);
        let groups = [
            (digits(time.hours, 2), &glyphs::HOUR),
            (digits(time.minutes as u64, 2), &glyphs::MINUTE),
            (digits(time.seconds as u64, 2), &glyphs::SECOND),
        ];

        let mut rows: Vec<String> = (0..GLYPH_HEIGHT)
            .map(|row| {
                groups
                    .iter()
                    .map(|(values, label)| group_row(values, label, row))
                    .collect::<Vec<_>>()
                    .join(GROUP_GAP)
            })
            .collect();

        if self.hints {
            rows.push(String::new());
            rows.push(HINT_LINE.to_string());
        }

        ClockFrame { rows }
    }
}

fn group_row(values: &[u8], label: &Glyph, row: usize) -> String {
    let mut line = values
        .iter()
        .filter_map(|&d| glyphs::digit(d))
        .map(|glyph| glyph[row])
        .collect::<Vec<_>>()
        .join(DIGIT_GAP);
    line.push_str(LABEL_GAP);
    line.push_str(label[row]);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_decomposition() {
        let t = ClockTime::from_elapsed(3725);
        assert_eq!(t.hours, 1);
        assert_eq!(t.minutes, 2);
        assert_eq!(t.seconds, 5);
    }

    #[test]
    fn test_clock_time_zero() {
        let t = ClockTime::from_elapsed(0);
        assert_eq!((t.hours, t.minutes, t.seconds), (0, 0, 0));
    }

    #[test]
    fn test_clock_time_does_not_wrap_hours() {
        let t = ClockTime::from_elapsed(360_000 + 59);
        assert_eq!(t.hours, 100);
        assert_eq!(t.minutes, 0);
        assert_eq!(t.seconds, 59);
    }

    #[test]
    fn test_digits_padding() {
        assert_eq!(digits(0, 2), vec![0, 0]);
        assert_eq!(digits(7, 2), vec![0, 7]);
        assert_eq!(digits(42, 2), vec![4, 2]);
        assert_eq!(digits(123, 2), vec![1, 2, 3]);
        assert_eq!(digits(5, 0), vec![5]);
    }

    #[test]
    fn test_digits_max_value() {
        let d = digits(u64::MAX, 2);
        assert_eq!(d.len(), 20);
        assert!(d.iter().all(|&x| x <= 9));
    }

    #[test]
    fn test_render_height_without_hints() {
        let frame = Renderer::new(false).render(0);
        assert_eq!(frame.height(), GLYPH_HEIGHT);
    }

    #[test]
    fn test_render_height_with_hints() {
        let frame = Renderer::new(true).render(0);
        assert_eq!(frame.height(), GLYPH_HEIGHT + 2);
        assert_eq!(frame.rows().last().map(String::as_str), Some(HINT_LINE));
    }

    #[test]
    fn test_render_rows_equal_width() {
        let frame = Renderer::new(false).render(3725);
        let w = frame.rows()[0].chars().count();
        assert!(frame.rows().iter().all(|r| r.chars().count() == w));
        assert_eq!(frame.width(), w);
    }

    #[test]
    fn test_render_zero_top_row() {
        // "00 h   00 m   00 s" in glyph form: every zero's top row is solid.
        let frame = Renderer::new(false).render(0);
        assert_eq!(
            frame.rows()[0],
            "##### ##### #     ##### #####         ##### #####     "
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = Renderer::default();
        assert_eq!(renderer.render(3725), renderer.render(3725));
    }

    #[test]
    fn test_render_differs_per_second() {
        let renderer = Renderer::default();
        assert_ne!(renderer.render(1), renderer.render(2));
    }

    #[test]
    fn test_render_widens_hours_past_99() {
        let renderer = Renderer::new(false);
        let two = renderer.render(99 * 3600).width();
        let three = renderer.render(100 * 3600).width();
        // One more digit glyph plus its gap.
        assert_eq!(three, two + 5 + DIGIT_GAP.len());
    }

    #[test]
    fn test_to_string_display() {
        let frame = Renderer::new(false).render(0);
        let text = frame.to_string_display();
        assert_eq!(text.lines().count(), GLYPH_HEIGHT);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_empty_frame() {
        let frame = ClockFrame::default();
        assert_eq!(frame.width(), 0);
        assert_eq!(frame.height(), 0);
        assert_eq!(frame.to_string_display(), "");
    }
}
