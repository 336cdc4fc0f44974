//! Proportional column width allocation for tabular displays.

use unicode_width::UnicodeWidthStr;

/// Distribute `total` pixels over columns with content-driven wanted
/// widths.
///
/// Columns wanting at most `total / (2 * N)` get exactly what they want.
/// The rest grow from that threshold by a square-root term, so columns
/// wanting little relative to the others get a larger share of what they
/// ask for and one very wide column cannot starve the rest. If the pass
/// leaves space unused, every width is scaled up by `total / width_used`
/// (integer truncation) to fill it.
///
/// Two quirks of the original allocator are kept as observed: a large
/// column only reduces `width_left` when `width_left` still exceeds its
/// wanted width, and `width_used` accumulates wanted (not granted)
/// widths for large columns.
pub fn allocate(wanted: &[i32], total: i32) -> Vec<i32> {
    let columns = wanted.len();
    if columns == 0 {
        return Vec::new();
    }
    let half = total / (columns as i32 * 2);
    let mut got = vec![0i32; columns];
    let mut width_left = total;
    let mut width_used = 0i32;
    let mut columns_left = columns as i32;

    // Small columns get exactly what they want.
    for (i, &w) in wanted.iter().enumerate() {
        if w <= half {
            got[i] = w;
            width_left -= w;
            width_used += w;
            columns_left -= 1;
        }
    }

    // Large columns get the compressed allocation, in index order.
    for (i, &w) in wanted.iter().enumerate() {
        if w > half {
            let inner = (w - half) * width_left / columns_left;
            let x = half + (inner as f64).sqrt() as i32;
            got[i] = w.min(x);
            if width_left > w {
                width_left -= w;
            }
            width_used += w;
            columns_left -= 1;
        }
    }

    if width_used < total && width_used > 0 {
        for g in &mut got {
            *g = (*g as i64 * total as i64 / width_used as i64) as i32;
        }
    }
    got
}

/// Converts displayed text into the allocator's wanted widths.
pub struct TextMetrics {
    pub char_width: i32,
    pub padding_x: i32,
    pub min_column_width: i32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8,
            padding_x: 12,
            min_column_width: 40,
        }
    }
}

impl TextMetrics {
    /// Content-driven wanted width of one cell or header.
    pub fn wanted_width(&self, text: &str) -> i32 {
        let cells = UnicodeWidthStr::width(text) as i32;
        (cells * self.char_width + self.padding_x * 2).max(self.min_column_width)
    }

    /// Wanted widths for a whole header row, ready for [`allocate`].
    pub fn wanted_widths(&self, headers: &[String]) -> Vec<i32> {
        headers.iter().map(|h| self.wanted_width(h)).collect()
    }
}
