use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.split('\t')
        .enumerate()
        .map(|(i, part)| {
            let w = UnicodeWidthStr::width(part);
            if i > 0 { w + 4 } else { w }
        })
        .sum()
}

fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        4
    } else {
        UnicodeWidthStr::width(g)
    }
}

/// Hard-wrap `s` into pieces of at most `width` cells, never splitting a
/// grapheme. Not word-aware. An empty string yields one empty piece.
pub fn chunk_by_width(s: &str, width: usize) -> Vec<&str> {
    if s.is_empty() || width == 0 {
        return vec![s];
    }
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut col = 0;
    for (i, g) in s.grapheme_indices(true) {
        let gw = grapheme_display_width(g);
        if col + gw > width && i > start {
            chunks.push(&s[start..i]);
            start = i;
            col = 0;
        }
        col += gw;
    }
    chunks.push(&s[start..]);
    chunks
}

/// Right-pad with spaces to `width` cells. Longer strings are returned as is.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}
