//! Dashboard rendering
//!
//! Turns workflow summaries into bordered cards and prints them as a grid.
//! Colors are applied after widths are measured, so padding is computed on
//! visible terminal columns only.

use std::fmt::Display;
use std::num::NonZeroUsize;

use chrono::TimeDelta;
use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::format::{format_elapsed, pretty_ms};
use super::lookback::describe_window;
use crate::dashboard::layout::{card_column_width, layout_rows, truncate_name};
use crate::dashboard::{total_billable_ms, HealthSymbol, Repository, Workflow};

/// Everything the renderer needs besides the data itself
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Organization or user the dashboard is for
    pub owner: String,
    /// Lookback window, shown in the title
    pub window: TimeDelta,
    /// Terminal width used to center the header
    pub terminal_width: usize,
    /// Number of cards per grid row
    pub cards_per_row: NonZeroUsize,
    /// Cap on runs examined per workflow
    pub max_runs: usize,
    /// Workflow names longer than this are truncated
    pub name_length: usize,
}

fn gray(s: &str) -> ColoredString {
    s.truecolor(128, 128, 128)
}

fn border(s: &str) -> ColoredString {
    s.truecolor(95, 95, 255)
}

const fn glyph(symbol: HealthSymbol) -> &'static str {
    match symbol {
        HealthSymbol::Pass => "✓",
        HealthSymbol::Fail => "x",
        HealthSymbol::Neutral | HealthSymbol::NeutralUnknown => "-",
    }
}

fn styled_symbol(symbol: HealthSymbol) -> ColoredString {
    let glyph = glyph(symbol);
    match symbol {
        HealthSymbol::Pass => glyph.truecolor(50, 205, 50),
        HealthSymbol::Fail => glyph.truecolor(220, 20, 60),
        HealthSymbol::Neutral | HealthSymbol::NeutralUnknown => gray(glyph),
    }
}

/// A line of styled text with a known visible width
#[derive(Debug, Clone, Default)]
struct Line {
    rendered: String,
    width: usize,
}

impl Line {
    fn push(&mut self, visible: &str, styled: impl Display) {
        self.rendered.push_str(&styled.to_string());
        self.width += visible.width();
    }

    fn styled(visible: &str, styled: impl Display) -> Self {
        let mut line = Self::default();
        line.push(visible, styled);
        line
    }

    fn padded(&self, width: usize) -> String {
        format!(
            "{}{}",
            self.rendered,
            " ".repeat(width.saturating_sub(self.width))
        )
    }
}

/// A rendered workflow card: equal-width lines including the border
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    lines: Vec<String>,
    width: usize,
}

impl Card {
    /// Box `content` in a double border with one cell of padding.
    ///
    /// `column_width` is the inner width including padding; the card is two
    /// columns wider once the border is drawn.
    fn boxed(content: &[Line], column_width: usize) -> Self {
        let text_width = column_width.saturating_sub(2);
        let horizontal = "═".repeat(column_width);
        let blank = format!("{}{}{}", border("║"), " ".repeat(column_width), border("║"));

        let mut lines = vec![border(&format!("╔{horizontal}╗")).to_string(), blank.clone()];
        for line in content {
            lines.push(format!(
                "{} {} {}",
                border("║"),
                line.padded(text_width),
                border("║")
            ));
        }
        lines.push(blank);
        lines.push(border(&format!("╚{horizontal}╝")).to_string());

        Self {
            lines,
            width: column_width + 2,
        }
    }

    /// Rendered lines, top to bottom
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Visible width of every line
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }
}

/// Label of the health line, followed by one symbol per examined run
const HEALTH_LABEL: &str = "Health:";

/// Push `label value`, moving the value to its own lines if it would not fit.
///
/// A value wider than the card wraps at whitespace.
fn push_field(content: &mut Vec<Line>, label: &str, value: &str, width: usize) {
    let mut line = Line::styled(label, gray(label));
    if label.width() + 1 + value.width() <= width {
        line.push(" ", " ");
        line.push(value, value);
        content.push(line);
        return;
    }
    content.push(line);

    let mut line = Line::default();
    for word in value.split_whitespace() {
        if line.width > 0 && line.width + 1 + word.width() > width {
            content.push(std::mem::take(&mut line));
        }
        if line.width > 0 {
            line.push(" ", " ");
        }
        line.push(word, word);
    }
    content.push(line);
}

/// Push the health line, continuing symbols under the first one when they
/// run past `width`.
fn push_health(content: &mut Vec<Line>, symbols: &[HealthSymbol], width: usize) {
    let indent = " ".repeat(HEALTH_LABEL.width() + 1);
    let mut line = Line::styled(HEALTH_LABEL, gray(HEALTH_LABEL));
    line.push(" ", " ");

    for &symbol in symbols {
        let glyph = glyph(symbol);
        if line.width + glyph.width() > width {
            content.push(std::mem::replace(&mut line, Line::styled(&indent, &indent)));
        }
        line.push(glyph, styled_symbol(symbol));
    }
    content.push(line);
}

/// Render the summary card for one workflow.
///
/// Every line fits the card as long as `name_length` is at least
/// [`MIN_NAME_LENGTH`](crate::dashboard::layout::MIN_NAME_LENGTH).
#[must_use]
pub fn render_card(workflow: &Workflow, max_runs: usize, name_length: usize) -> Card {
    let column_width = card_column_width(name_length);
    let text_width = column_width.saturating_sub(2);
    let name = truncate_name(&workflow.name, name_length);

    let mut content = vec![Line::styled(&name, name.bold())];

    if workflow.runs.is_empty() {
        content.push(Line::styled("No runs", gray("No runs")));
        return Card::boxed(&content, column_width);
    }

    push_health(&mut content, &workflow.health(max_runs), text_width);

    let elapsed = format_elapsed(workflow.average_elapsed(max_runs));
    push_field(&mut content, "Avg elapsed:", &elapsed, text_width);

    if workflow.billable_ms > 0 {
        let billable = pretty_ms(workflow.billable_ms);
        push_field(&mut content, "Billable time:", &billable, text_width);
    }

    Card::boxed(&content, column_width)
}

/// Join cards side by side, aligned to the top.
///
/// Shorter cards are extended with blank lines of their own width.
#[must_use]
pub fn join_horizontal(cards: &[Card]) -> String {
    let height = cards.iter().map(|c| c.lines.len()).max().unwrap_or(0);
    let mut out = String::new();

    for i in 0..height {
        for card in cards {
            match card.lines.get(i) {
                Some(line) => out.push_str(line),
                None => out.push_str(&" ".repeat(card.width)),
            }
        }
        out.push('\n');
    }

    out
}

/// Leading spaces that center `text` within `width` columns
fn centering_pad(text: &str, width: usize) -> String {
    let left = width.saturating_sub(text.width()) / 2;
    " ".repeat(left)
}

/// Render the full dashboard: header, then one card grid per repository.
///
/// Repositories without workflows are skipped.
#[must_use]
pub fn render_dashboard(repositories: &[Repository], view: &DashboardView) -> String {
    let mut out = String::new();

    let title = format!(
        "GitHub Actions dashboard for {} for the past {}",
        view.owner,
        describe_window(view.window)
    );
    let subtitle = format!(
        "Total billable time: {}",
        pretty_ms(total_billable_ms(repositories))
    );
    out.push_str(&format!(
        "{}{}\n",
        centering_pad(&title, view.terminal_width),
        title.bold()
    ));
    out.push_str(&format!(
        "{}{subtitle}\n",
        centering_pad(&subtitle, view.terminal_width)
    ));

    for repository in repositories.iter().filter(|r| !r.workflows.is_empty()) {
        out.push('\n');
        out.push_str(&format!(
            "{}{}\n\n",
            repository.name.bold(),
            gray(&format!(" https://github.com/{}/actions", repository.name)).italic()
        ));

        let cards: Vec<Card> = repository
            .workflows
            .iter()
            .map(|w| render_card(w, view.max_runs, view.name_length))
            .collect();

        for row in layout_rows(cards, view.cards_per_row) {
            out.push_str(&join_horizontal(&row));
        }
    }

    out
}
