//! PDF emission.
//!
//! Writes the laid-out pages as a PDF: catalog, page tree, the two Type1
//! Helvetica fonts, and one content stream per page with each line placed
//! at its layout position. Emission cannot fail — the layout is already
//! fully resolved when it reaches this module.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use tracing::info;

use tutora_core::models::lesson::LessonDocument;
use tutora_core::models::subject::Subject;

use crate::layout::{self, Page, PageMetrics};

const MM_TO_PT: f32 = 72.0 / 25.4;

const FONT_REGULAR: Name<'static> = Name(b"F1");
const FONT_BOLD: Name<'static> = Name(b"F2");

/// Render a lesson document as PDF bytes.
pub fn lesson_pdf(document: &LessonDocument, subject: Subject, topic: &str) -> Vec<u8> {
    let metrics = PageMetrics::default();
    let pages = layout::layout_lesson(document, subject, topic, metrics);
    let bytes = write_pdf(&pages, &metrics);

    info!(
        subject = %subject,
        topic,
        page_count = pages.len(),
        byte_len = bytes.len(),
        "lesson PDF rendered"
    );

    bytes
}

/// The file name a saved lesson PDF gets: `<subject>-<topic>.pdf`.
pub fn lesson_file_name(subject: Subject, topic: &str) -> String {
    format!("{subject}-{topic}.pdf")
}

fn write_pdf(pages: &[Page], metrics: &PageMetrics) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut ref_counter = std::iter::successors(Some(1), |n| Some(n + 1));

    let catalog_ref = Ref::new(ref_counter.next().unwrap());
    let page_tree_ref = Ref::new(ref_counter.next().unwrap());
    let regular_ref = Ref::new(ref_counter.next().unwrap());
    let bold_ref = Ref::new(ref_counter.next().unwrap());

    pdf.catalog(catalog_ref).pages(page_tree_ref);
    pdf.type1_font(regular_ref).base_font(Name(b"Helvetica"));
    pdf.type1_font(bold_ref).base_font(Name(b"Helvetica-Bold"));

    let page_width = metrics.page_width as f32 * MM_TO_PT;
    let page_height = metrics.page_height as f32 * MM_TO_PT;

    let page_refs: Vec<Ref> = pages
        .iter()
        .map(|_| Ref::new(ref_counter.next().unwrap()))
        .collect();

    for (laid_out, &page_ref) in pages.iter().zip(&page_refs) {
        let content_ref = Ref::new(ref_counter.next().unwrap());

        let mut page = pdf.page(page_ref);
        page.media_box(Rect::new(0.0, 0.0, page_width, page_height));
        page.parent(page_tree_ref);
        page.contents(content_ref);
        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(FONT_REGULAR, regular_ref);
        fonts.pair(FONT_BOLD, bold_ref);
        fonts.finish();
        resources.finish();
        page.finish();

        let mut content = Content::new();
        content.begin_text();
        for line in &laid_out.lines {
            let font = if line.bold { FONT_BOLD } else { FONT_REGULAR };
            let x = line.x as f32 * MM_TO_PT;
            // Layout measures from the top edge; PDF from the bottom.
            let y = page_height - line.y as f32 * MM_TO_PT;
            content.set_font(font, line.size as f32);
            content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
            content.show(Str(line.text.as_bytes()));
        }
        content.end_text();
        pdf.stream(content_ref, &content.finish());
    }

    pdf.pages(page_tree_ref)
        .kids(page_refs)
        .count(pages.len() as i32);

    pdf.finish()
}
