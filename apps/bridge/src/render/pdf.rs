//! PDF writer for the bridge report.
//!
//! Layout: centered title cell, one blank line, then the wrapped body on lines of
//! `line_height_pt`, breaking to a new page before a line would cross the bottom
//! margin. All pages share one font resource (standard Helvetica, WinAnsiEncoding).

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use crate::layout::font_metrics::{measure_str, widths_array};
use crate::layout::{wrap_text, PageConfig};
use crate::render::transcode::{encode_win_ansi, to_latin1_lossy};
use crate::render::RenderError;

pub const REPORT_TITLE: &str = "Veda Career Bridge: Official Report";

const FONT_RESOURCE: &str = "F1";
const FIRST_CHAR: u8 = 32;
const LAST_CHAR: u8 = 255;

/// A line of text placed at a top-down offset on its page.
#[derive(Debug, Clone, PartialEq)]
struct PlacedLine {
    x_pt: f32,
    top_pt: f32,
    text: String,
}

/// Renders the report into PDF bytes.
///
/// `body` is transcoded lossily before layout; an empty body yields a title-only page.
pub fn render_report_pdf(body: &str, config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    let body = to_latin1_lossy(body);
    let pages = paginate(&body, config);
    write_document(&pages, config)
}

/// Lays the title and wrapped body out into pages.
fn paginate(body: &str, config: &PageConfig) -> Vec<Vec<PlacedLine>> {
    let mut pages = vec![Vec::new()];
    let mut top = config.margin_pt;

    let title_w = measure_str(REPORT_TITLE, config.font_size_pt);
    pages[0].push(PlacedLine {
        x_pt: (config.page_width_pt - title_w) / 2.0,
        top_pt: top,
        text: REPORT_TITLE.to_string(),
    });
    // Title row plus one blank line.
    top += 2.0 * config.line_height_pt;

    let body_x = config.margin_pt + config.cell_padding_pt;
    for line in wrap_text(body, config) {
        if top + config.line_height_pt > config.break_at_pt() {
            pages.push(Vec::new());
            top = config.margin_pt;
        }
        if !line.is_empty() {
            if let Some(page) = pages.last_mut() {
                page.push(PlacedLine {
                    x_pt: body_x,
                    top_pt: top,
                    text: line,
                });
            }
        }
        top += config.line_height_pt;
    }

    pages
}

/// Content stream operations for one page.
fn page_operations(lines: &[PlacedLine], config: &PageConfig) -> Vec<Operation> {
    let mut ops = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![FONT_RESOURCE.into(), config.font_size_pt.into()]),
    ];

    for line in lines {
        // Baseline sits just below the vertical centre of the line cell.
        let baseline_from_top =
            line.top_pt + 0.5 * config.line_height_pt + 0.3 * config.font_size_pt;
        let y = config.page_height_pt - baseline_from_top;
        ops.push(Operation::new(
            "Tm",
            vec![
                Object::Integer(1),
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(1),
                line.x_pt.into(),
                y.into(),
            ],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&line.text),
                StringFormat::Hexadecimal,
            )],
        ));
    }

    ops.push(Operation::new("ET", vec![]));
    ops
}

fn write_document(pages: &[Vec<PlacedLine>], config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let widths: Vec<Object> = widths_array(FIRST_CHAR, LAST_CHAR)
        .into_iter()
        .map(|w| Object::Integer(i64::from(w)))
        .collect();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
        "FirstChar" => i64::from(FIRST_CHAR),
        "LastChar" => i64::from(LAST_CHAR),
        "Widths" => widths,
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_RESOURCE => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for lines in pages {
        let content = Content {
            operations: page_operations(lines, config),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        config.page_width_pt.into(),
        config.page_height_pt.into(),
    ];
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => media_box,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(REPORT_TITLE),
        "Producer" => Object::string_literal("Veda Career Bridge"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}
