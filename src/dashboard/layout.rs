//! Card grid layout engine
//!
//! Packs rendered cards into rows bounded by the terminal width. Row
//! membership depends only on the input order and the number of cards per
//! row; cards are never reordered, split, or dropped.

use std::num::NonZeroUsize;

use unicode_width::UnicodeWidthStr;

/// Marker appended to truncated workflow names
pub const ELLIPSIS: &str = "...";

/// Extra columns a card needs beyond the name: ellipsis, padding and border
pub const CARD_CHROME: usize = 5;

/// Shortest name length whose card still fits the widest field label
pub const MIN_NAME_LENGTH: usize = 11;

/// Column width of a card whose names are truncated to `name_length`
#[must_use]
pub const fn card_column_width(name_length: usize) -> usize {
    name_length + CARD_CHROME
}

/// Number of cards that fit on one row.
///
/// One column of cards is held back so borders never wrap. Returns `None`
/// when the terminal is too narrow for a single card; callers decide how
/// to handle that.
#[must_use]
pub fn cards_per_row(terminal_width: usize, card_width: usize) -> Option<NonZeroUsize> {
    if card_width == 0 {
        return None;
    }
    NonZeroUsize::new((terminal_width / card_width).saturating_sub(1))
}

/// Split `cards` into rows of at most `per_row`, preserving order.
///
/// Produces exactly `ceil(cards.len() / per_row)` rows; only the last row
/// may be short.
#[must_use]
pub fn layout_rows<T>(cards: Vec<T>, per_row: NonZeroUsize) -> Vec<Vec<T>> {
    let per_row = per_row.get();
    let total_rows = cards.len().div_ceil(per_row);
    let mut rows: Vec<Vec<T>> = Vec::with_capacity(total_rows);

    for card in cards {
        match rows.last_mut() {
            Some(row) if row.len() < per_row => row.push(card),
            _ => {
                let mut row = Vec::with_capacity(per_row);
                row.push(card);
                rows.push(row);
            }
        }
    }

    rows
}

/// Truncate `name` to `limit` terminal columns, appending `...` when cut.
///
/// Wide characters count as two columns and are never split.
#[must_use]
pub fn truncate_name(name: &str, limit: usize) -> String {
    if name.width() <= limit {
        return name.to_string();
    }

    let mut cut = 0;
    for (i, c) in name.char_indices() {
        let end = i + c.len_utf8();
        if name[..end].width() > limit {
            break;
        }
        cut = end;
    }
    format!("{}{ELLIPSIS}", &name[..cut])
}
