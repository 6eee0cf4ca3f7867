//! Pagination layout engine.
//!
//! Turns a [`LessonDocument`] into fixed-size pages of positioned text
//! lines: word wrapping, `**bold**` emphasis, list markers, and the
//! page-break check that runs before every committed line. Everything
//! here is pure and synchronous; the PDF emission in [`crate::pdf`] only
//! draws what this module lays out.

use tutora_core::models::lesson::{
    ChartData, FinancialData, LessonDocument, ScientificData,
};
use tutora_core::models::subject::Subject;

const PT_TO_MM: f64 = 25.4 / 72.0;

/// Average Helvetica glyph advance, as a fraction of the font size.
/// Stands in for real glyph measurement; the layout works in
/// character-measurement units.
const AVG_CHAR_ADVANCE_EM: f64 = 0.5;

const HEADING_SIZE: f64 = 20.0;
const BODY_SIZE: f64 = 12.0;

/// Indent for list-item continuation lines, in millimetres.
const LIST_INDENT: f64 = 10.0;

/// Extra gap between a section title and its body, in millimetres.
const SECTION_TITLE_GAP: f64 = 5.0;

const BULLET: &str = "\u{2022}";

/// Fixed page geometry, in millimetres (A4 portrait).
#[derive(Debug, Clone, Copy)]
pub struct PageMetrics {
    pub page_width: f64,
    pub page_height: f64,
    pub margin: f64,
    pub line_height: f64,
}

impl Default for PageMetrics {
    fn default() -> Self {
        Self {
            page_width: 210.0,
            page_height: 297.0,
            margin: 20.0,
            line_height: 10.0,
        }
    }
}

impl PageMetrics {
    pub fn content_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    /// Vertical room available for lines on one page.
    pub fn usable_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }
}

/// One positioned line of text. `x`/`y` are millimetres from the page's
/// top-left corner; `y` is the line's baseline offset.
#[derive(Debug, Clone)]
pub struct TextLine {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub bold: bool,
    pub size: f64,
}

/// One laid-out page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<TextLine>,
}

/// A run of text with one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    pub text: String,
    pub bold: bool,
}

/// Wrap text to at most `max_chars` characters per line, breaking at word
/// boundaries only. A word longer than the limit keeps its own
/// (overflowing) line rather than being split mid-word. Empty or
/// whitespace-only input produces no lines.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else if current_chars + 1 + word_chars <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_chars += 1 + word_chars;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_chars = word_chars;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split text on `**` delimiters into alternating normal/bold segments.
///
/// Delimiters come in matched pairs; an unmatched trailing marker still
/// toggles, so the remainder inherits the state the last marker switched
/// to. Empty segments (adjacent delimiters) are dropped.
pub fn split_emphasis(text: &str) -> Vec<StyledSegment> {
    let mut segments = Vec::new();
    let mut remaining = text;
    let mut bold = false;

    while let Some(idx) = remaining.find("**") {
        let before = &remaining[..idx];
        if !before.is_empty() {
            segments.push(StyledSegment {
                text: before.to_string(),
                bold,
            });
        }
        bold = !bold;
        remaining = &remaining[idx + 2..];
    }
    if !remaining.is_empty() {
        segments.push(StyledSegment {
            text: remaining.to_string(),
            bold,
        });
    }
    segments
}

/// Split a leading list marker (`"1. "`, `"* "`, `"- "`) from an item.
///
/// Returns the marker as it should be rendered — numeric markers pass
/// through, `*` and `-` become a bullet glyph — plus the remainder.
pub fn split_list_marker(text: &str) -> Option<(&str, &str)> {
    for plain in ["* ", "- "] {
        if let Some(rest) = text.strip_prefix(plain) {
            return Some((BULLET, rest.trim_start()));
        }
    }

    let digits = text.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits > 0 {
        if let Some(tail) = text[digits..].strip_prefix('.') {
            if let Some(rest) = tail.strip_prefix(' ') {
                return Some((&text[..digits + 1], rest.trim_start()));
            }
        }
    }
    None
}

struct LayoutContext {
    metrics: PageMetrics,
    pages: Vec<Page>,
    y: f64,
}

impl LayoutContext {
    fn new(metrics: PageMetrics) -> Self {
        Self {
            metrics,
            pages: vec![Page::default()],
            y: metrics.margin,
        }
    }

    fn chars_per_line(&self, indent: f64, size: f64) -> usize {
        let width = self.metrics.content_width() - indent;
        let char_width = size * AVG_CHAR_ADVANCE_EM * PT_TO_MM;
        let chars = (width / char_width).floor();
        if chars < 1.0 { 1 } else { chars as usize }
    }

    /// The page-break check. Runs before every line commit so a single
    /// long block can span pages mid-list.
    fn break_page_if_needed(&mut self, required: f64) {
        if self.y + required > self.metrics.page_height - self.metrics.margin {
            self.pages.push(Page::default());
            self.y = self.metrics.margin;
        }
    }

    fn commit_line(&mut self, x: f64, text: String, bold: bool, size: f64) {
        self.break_page_if_needed(self.metrics.line_height);
        let line = TextLine {
            x,
            y: self.y,
            text,
            bold,
            size,
        };
        self.pages.last_mut().expect("one page always exists").lines.push(line);
        self.y += self.metrics.line_height;
    }

    fn advance(&mut self, dy: f64) {
        self.y += dy;
    }

    /// Wrap and commit plain text at the left margin, one style for all
    /// lines.
    fn push_wrapped(&mut self, text: &str, bold: bool, size: f64) {
        let max_chars = self.chars_per_line(0.0, size);
        for line in wrap(text, max_chars) {
            self.commit_line(self.metrics.margin, line, bold, size);
        }
    }

    /// Commit one content line with marker and emphasis handling.
    ///
    /// The first committed line carries the list marker at the left
    /// margin; continuation lines (and every line of a list item's
    /// remainder) sit at the indented margin. Each styled segment wraps
    /// independently and keeps its style across its own line breaks.
    fn push_rich_text(&mut self, text: &str, as_list_item: bool) {
        let (marker, content) = match split_list_marker(text) {
            Some((marker, rest)) => (Some(marker), rest),
            None => (None, text),
        };

        let indent = if as_list_item { LIST_INDENT } else { 0.0 };
        let x = self.metrics.margin + indent;
        let max_chars = self.chars_per_line(indent, BODY_SIZE);

        let mut first_line = true;
        for segment in split_emphasis(content) {
            for line in wrap(&segment.text, max_chars) {
                if first_line {
                    if let Some(marker) = marker {
                        self.commit_line(
                            self.metrics.margin,
                            format!("{marker} {line}"),
                            segment.bold,
                            BODY_SIZE,
                        );
                        first_line = false;
                        continue;
                    }
                }
                self.commit_line(x, line, segment.bold, BODY_SIZE);
                first_line = false;
            }
        }
    }

    fn push_section_title(&mut self, title: &str) {
        self.advance(self.metrics.line_height);
        self.push_wrapped(title, true, BODY_SIZE);
        self.advance(SECTION_TITLE_GAP);
    }

    fn push_section_text(&mut self, title: &str, body: &str) {
        self.push_section_title(title);
        for line in body.split('\n') {
            self.push_rich_text(line, false);
        }
    }

    fn push_section_list(&mut self, title: &str, items: &[String]) {
        self.push_section_title(title);
        for item in items {
            self.push_rich_text(item, true);
        }
    }

    /// Code is committed as plain wrapped text: no marker or emphasis
    /// parsing, so snippets containing `*` or `-` stay intact.
    fn push_code_section(&mut self, title: &str, code: &str) {
        self.push_section_title(title);
        for line in code.split('\n') {
            self.push_wrapped(line, false, BODY_SIZE);
        }
    }

    fn push_paragraphs(&mut self, title: &str, text: &str) {
        self.push_section_title(title);
        let mut first = true;
        for paragraph in text.split("\n\n").map(str::trim).filter(|p| !p.is_empty()) {
            if !first {
                self.advance(SECTION_TITLE_GAP);
            }
            let flowed = paragraph.split_whitespace().collect::<Vec<_>>().join(" ");
            self.push_rich_text(&flowed, false);
            first = false;
        }
    }

    fn push_chart_section(&mut self, chart: &ChartData) {
        self.push_section_text("Chart Information", &format!("Type: {}", chart.kind));
        self.push_wrapped(
            &format!("Labels: {}", chart.data.labels.join(", ")),
            false,
            BODY_SIZE,
        );
        for dataset in &chart.data.datasets {
            self.push_wrapped(&format!("Dataset: {}", dataset.label), false, BODY_SIZE);
            let values = dataset
                .data
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            self.push_wrapped(&format!("Values: {values}"), false, BODY_SIZE);
        }
    }

    fn push_financial_section(&mut self, financial: &FinancialData) {
        self.push_section_title("Financial Information");
        for cost in &financial.estimated_costs {
            self.push_wrapped(
                &format!("{}: ${}", cost.category, cost.amount),
                false,
                BODY_SIZE,
            );
        }
        self.push_wrapped(
            &format!("Total Estimate: ${}", financial.total_estimate),
            false,
            BODY_SIZE,
        );
        self.push_wrapped(
            &format!("Timeframe: {}", financial.timeframe),
            false,
            BODY_SIZE,
        );
        self.push_wrapped(&format!("Notes: {}", financial.notes), false, BODY_SIZE);
    }

    fn push_scientific_section(&mut self, scientific: &ScientificData) {
        self.push_section_title("Scientific Information");
        self.push_wrapped(&format!("Type: {}", scientific.kind), false, BODY_SIZE);
        self.push_wrapped(&format!("Content: {}", scientific.content), false, BODY_SIZE);
        self.push_wrapped(
            &format!("Explanation: {}", scientific.explanation),
            false,
            BODY_SIZE,
        );
    }

    fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

/// Lay out a lesson document as a sequence of pages.
///
/// Optional sections are simply omitted when absent; the layout is a
/// total function over any document.
pub fn layout_lesson(
    document: &LessonDocument,
    subject: Subject,
    topic: &str,
    metrics: PageMetrics,
) -> Vec<Page> {
    let mut ctx = LayoutContext::new(metrics);

    ctx.push_wrapped(&format!("{subject}: {topic}"), true, HEADING_SIZE);

    ctx.push_section_text("Title", &document.title);
    ctx.push_section_text("Introduction", &document.introduction);
    ctx.push_section_list("Key Points", &document.key_points);
    ctx.push_section_list("Activities", &document.activities);
    ctx.push_section_list("Resources", &document.resources);

    if !document.video_script.is_empty() {
        ctx.push_section_text("Video Script", &document.video_script);
    }
    if let Some(code) = non_empty(&document.code_snippet) {
        ctx.push_code_section("Code Snippet", code);
    }
    if let Some(url) = non_empty(&document.video_url) {
        ctx.push_section_text("Video URL", url);
    }
    if let Some(chart) = &document.chart_data {
        ctx.push_chart_section(chart);
    }
    if let Some(financial) = &document.financial_data {
        ctx.push_financial_section(financial);
    }
    if let Some(scientific) = &document.scientific_data {
        ctx.push_scientific_section(scientific);
    }
    if let Some(notes) = non_empty(&document.music_notes) {
        ctx.push_section_text("Music Notes", notes);
    }
    if !document.detailed_content.is_empty() {
        ctx.push_paragraphs("Detailed Content", &document.detailed_content);
    }

    ctx.into_pages()
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|text| !text.is_empty())
}
