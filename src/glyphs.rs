//! Static ASCII-art glyph table for the clock face.
//!
//! Every glyph is [`GLYPH_HEIGHT`] rows tall. Rows within a glyph share one
//! width so glyphs can be concatenated column-wise without re-padding.

/// Number of text rows in every glyph.
pub const GLYPH_HEIGHT: usize = 5;

/// A multi-row ASCII-art glyph.
pub type Glyph = [&'static str; GLYPH_HEIGHT];

const DIGITS: [Glyph; 10] = [
    ["#####", "#   #", "#   #", "#   #", "#####"],
    ["    #", "    #", "    #", "    #", "    #"],
    ["#####", "    #", "#####", "#    ", "#####"],
    ["#####", "    #", "#####", "    #", "#####"],
    ["#   #", "#   #", "#####", "    #", "    #"],
    ["#####", "#    ", "#####", "    #", "#####"],
    ["#####", "#    ", "#####", "#   #", "#####"],
    ["#####", "    #", "    #", "    #", "    #"],
    ["#####", "#   #", "#####", "#   #", "#####"],
    ["#####", "#   #", "#####", "    #", "#####"],
];

/// Label glyph drawn after the hour digits.
pub const HOUR: Glyph = ["#  ", "#  ", "###", "# #", "# #"];

/// Label glyph drawn after the minute digits.
pub const MINUTE: Glyph = ["     ", "     ", "#### ", "# # #", "# # #"];

/// Label glyph drawn after the second digits.
pub const SECOND: Glyph = ["    ", " ###", "##  ", "  ##", "### "];

/// Look up the glyph for a single decimal digit.
///
/// Returns `None` for values above 9 instead of indexing out of bounds.
pub fn digit(value: u8) -> Option<&'static Glyph> {
    DIGITS.get(value as usize)
}

/// Width in columns of a glyph (all rows are equally wide).
pub fn width(glyph: &Glyph) -> usize {
    glyph[0].chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rectangular(glyph: &Glyph) {
        let w = width(glyph);
        for row in glyph {
            assert_eq!(row.chars().count(), w, "ragged glyph row {:?}", row);
        }
    }

    #[test]
    fn test_every_digit_is_defined() {
        for d in 0..=9 {
            assert!(digit(d).is_some(), "digit {} missing", d);
        }
    }

    #[test]
    fn test_digit_out_of_range() {
        assert!(digit(10).is_none());
        assert!(digit(255).is_none());
    }

    #[test]
    fn test_digits_share_one_width() {
        for d in 0..=9 {
            let glyph = digit(d).unwrap();
            assert_rectangular(glyph);
            assert_eq!(width(glyph), 5);
        }
    }

    #[test]
    fn test_labels_are_rectangular() {
        assert_rectangular(&HOUR);
        assert_rectangular(&MINUTE);
        assert_rectangular(&SECOND);
    }

    #[test]
    fn test_digits_are_distinct() {
        for a in 0..=9u8 {
            for b in (a + 1)..=9u8 {
                assert_ne!(digit(a), digit(b), "digits {} and {} look identical", a, b);
            }
        }
    }
}
