//! Column width resolution and cell fitting in terminal cells.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::column::Alignment;

/// Display width of `text` in terminal cells.
pub fn display_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Resolve a column's width.
///
/// A fixed width wins, otherwise the widest content decides. `min_width`
/// is a hard floor applied last, and no column resolves narrower than one
/// cell.
pub fn resolve_width<'a, I>(fixed: Option<u16>, min_width: Option<u16>, content: I) -> u16
where
    I: IntoIterator<Item = &'a str>,
{
    let base = match fixed {
        Some(width) => width,
        None => content.into_iter().map(display_width).max().unwrap_or(0),
    };
    base.max(min_width.unwrap_or(0)).max(1)
}

/// Pad or truncate `text` to exactly `width` cells.
///
/// Text that does not fit is cut and ends in an ellipsis.
pub fn fit(text: &str, width: u16, align: Alignment) -> String {
    let width = usize::from(width);
    let text_width = text.width();

    if text_width > width {
        return truncate(text, width);
    }

    let pad = width - text_width;
    match align {
        Alignment::Left => format!("{}{}", text, " ".repeat(pad)),
        Alignment::Right => format!("{}{}", " ".repeat(pad), text),
        Alignment::Center => {
            let left = pad / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
        }
    }
}

fn truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let budget = width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_width_from_content() {
        assert_eq!(resolve_width(None, None, ["Amount", "$1,000.00"]), 9);
    }

    #[test]
    fn test_fixed_width_wins() {
        assert_eq!(resolve_width(Some(4), None, ["a very long value"]), 4);
    }

    #[test]
    fn test_min_width_is_floor() {
        assert_eq!(resolve_width(Some(2), Some(6), ["x"]), 6);
        assert_eq!(resolve_width(None, Some(6), ["abc"]), 6);
    }

    #[test]
    fn test_never_zero() {
        assert_eq!(resolve_width(None, None, [""]), 1);
        assert_eq!(resolve_width(Some(0), None, std::iter::empty()), 1);
    }

    #[test]
    fn test_fit_alignments() {
        assert_eq!(fit("ab", 4, Alignment::Left), "ab  ");
        assert_eq!(fit("ab", 4, Alignment::Right), "  ab");
        assert_eq!(fit("ab", 5, Alignment::Center), " ab  ");
    }

    #[test]
    fn test_fit_truncates_wide_chars() {
        assert_eq!(fit("abcdef", 4, Alignment::Left), "abc…");
        assert_eq!(fit("日本語", 4, Alignment::Left), "日… ");
    }
}
