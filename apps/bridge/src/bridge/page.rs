//! Server-rendered HTML for the single-form surface.
//!
//! The credential field is never pre-filled. Report markdown is rendered to HTML
//! with raw HTML demoted to escaped text and script-capable link targets removed. A successful run shows the report,
//! its web sources, and a download form that posts the displayed text back to
//! `/bridge/report.pdf`, so the download never triggers a second generation call.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::bridge::pipeline::BridgeReport;
use crate::bridge::session::{DEFAULT_CURRENT_ROLE, DEFAULT_TARGET_ROLE};

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;color:#1f2933}\
.cols{display:flex;gap:1rem}.cols label{flex:1}input[type=text],input[type=password]{width:100%;padding:.4rem;box-sizing:border-box}\
.hint{color:#52606d;font-size:.9rem}.error{background:#fde8e8;border:1px solid #f8b4b4;padding:.75rem;border-radius:4px}\
.status{color:#057a55}.report{background:#f5f7fa;padding:1rem;border-radius:4px}\
button{padding:.5rem 1rem;margin-top:1rem}footer{margin-top:2rem;border-top:1px solid #cbd2d9;padding-top:.5rem;color:#52606d;font-size:.85rem}";

/// What to show below the form.
pub enum PageOutcome<'a> {
    Report(&'a BridgeReport),
    Error(String),
}

pub struct PageView<'a> {
    pub current_role: &'a str,
    pub target_role: &'a str,
    pub outcome: Option<PageOutcome<'a>>,
}

impl Default for PageView<'_> {
    fn default() -> Self {
        PageView {
            current_role: DEFAULT_CURRENT_ROLE,
            target_role: DEFAULT_TARGET_ROLE,
            outcome: None,
        }
    }
}

/// Escapes text for use in HTML element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link schemes that would run script when clicked.
const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

fn is_safe_url(url: &str) -> bool {
    let url = url.trim().to_ascii_lowercase();
    !UNSAFE_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

/// Renders report markdown to HTML.
///
/// Raw HTML in the report is emitted as escaped text, and links or images with a
/// script-capable target point at `#` instead.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, events);
    out
}

pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Veda: Career Bridge</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));
    html.push_str("<h1>🧭 Veda Career Bridge</h1>\n");
    html.push_str("<h3>Your 2026 AI-Powered Career Pivot Agent</h3>\n");

    write_form(&mut html, view);

    match &view.outcome {
        Some(PageOutcome::Error(message)) => {
            html.push_str(&format!(
                "<div class=\"error\" role=\"alert\">{}</div>\n",
                escape_html(message)
            ));
        }
        Some(PageOutcome::Report(report)) => write_report(&mut html, report),
        None => {}
    }

    html.push_str(
        "<footer>Powered by Gemini 3.0 Pro &amp; Google Search Grounding.</footer>\n</body>\n</html>\n",
    );
    html
}

fn write_form(html: &mut String, view: &PageView<'_>) {
    html.push_str("<form method=\"post\" action=\"/bridge\">\n");
    html.push_str("<fieldset>\n<legend>🔑 Authentication</legend>\n");
    html.push_str(
        "<label>Enter Google API Key <input type=\"password\" name=\"credential\" autocomplete=\"off\"></label>\n",
    );
    html.push_str(
        "<p class=\"hint\">Don't have a key? Get one for free at aistudio.google.com</p>\n</fieldset>\n",
    );
    html.push_str(&format!(
        "<div class=\"cols\">\n<label>Current Profession <input type=\"text\" name=\"current_role\" value=\"{}\" placeholder=\"{}\"></label>\n\
         <label>Dream Pivot <input type=\"text\" name=\"target_role\" value=\"{}\" placeholder=\"{}\"></label>\n</div>\n",
        escape_html(view.current_role),
        DEFAULT_CURRENT_ROLE,
        escape_html(view.target_role),
        DEFAULT_TARGET_ROLE,
    ));
    html.push_str("<button type=\"submit\">🚀 Build My Bridge</button>\n</form>\n");
}

fn write_report(html: &mut String, report: &BridgeReport) {
    html.push_str("<p class=\"status\">✅ Analysis Complete!</p>\n");
    html.push_str("<h2>Your Personalized Bridge Report</h2>\n");
    html.push_str(&format!(
        "<div class=\"report\">\n{}</div>\n",
        markdown_to_html(&report.report_text)
    ));

    if !report.sources.is_empty() {
        html.push_str("<h4>Sources</h4>\n<ul>\n");
        for source in &report.sources {
            html.push_str(&format!(
                "<li><a href=\"{}\" rel=\"noopener noreferrer\" target=\"_blank\">{}</a></li>\n",
                escape_html(&source.uri),
                escape_html(&source.title)
            ));
        }
        html.push_str("</ul>\n");
    }

    html.push_str(&format!(
        "<form method=\"post\" action=\"/bridge/report.pdf\">\n\
         <input type=\"hidden\" name=\"report_text\" value=\"{}\">\n\
         <button type=\"submit\">📥 Download Full PDF Roadmap</button>\n</form>\n",
        escape_html(&report.report_text)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::WebSource;
    use crate::render::ReportDocument;
    use bytes::Bytes;
    use chrono::Utc;
    use uuid::Uuid;

    fn report(text: &str) -> BridgeReport {
        BridgeReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            prompt: "prompt".to_string(),
            report_text: text.to_string(),
            sources: vec![WebSource {
                title: "Careers <at> Acme".to_string(),
                uri: "https://acme.example/jobs?a=1&b=2".to_string(),
            }],
            document: ReportDocument {
                file_name: "Career_Pivot_Plan.pdf",
                mime_type: "application/pdf",
                bytes: Bytes::from_static(b"%PDF"),
            },
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_default_page_has_form_and_defaults() {
        let html = render_page(&PageView::default());
        assert!(html.contains("type=\"password\" name=\"credential\""));
        assert!(html.contains("value=\"K-12 Teacher\""));
        assert!(html.contains("value=\"EdTech Architect\""));
        assert!(html.contains("Build My Bridge"));
        assert!(!html.contains("Download Full PDF Roadmap"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_error_page_has_no_download() {
        let html = render_page(&PageView {
            current_role: "Nurse",
            target_role: "PM",
            outcome: Some(PageOutcome::Error("Error: <boom>".to_string())),
        });
        assert!(html.contains("role=\"alert\">Error: &lt;boom&gt;</div>"));
        assert!(html.contains("value=\"Nurse\""));
        assert!(!html.contains("/bridge/report.pdf"));
    }

    #[test]
    fn test_report_page_renders_markdown_and_offers_download() {
        let text = "### Roadmap\n\n**Week 1**: learn SQL & Python";
        let html = render_page(&PageView {
            current_role: "Sales Rep",
            target_role: "RevOps",
            outcome: Some(PageOutcome::Report(&report(text))),
        });
        assert!(html.contains("Your Personalized Bridge Report"));
        assert!(html.contains("<h3>Roadmap</h3>"));
        assert!(html.contains("<strong>Week 1</strong>"));
        assert!(!html.contains("**Week 1**</div>"));
        // The download form carries the raw markdown, attribute-escaped.
        assert!(html.contains(
            "name=\"report_text\" value=\"### Roadmap\n\n**Week 1**: learn SQL &amp; Python\""
        ));
        assert!(html.contains("action=\"/bridge/report.pdf\""));
        assert!(html.contains("https://acme.example/jobs?a=1&amp;b=2"));
        assert!(html.contains("Careers &lt;at&gt; Acme"));
    }

    #[test]
    fn test_report_page_neutralizes_raw_html() {
        let html = render_page(&PageView {
            current_role: "Nurse",
            target_role: "PM",
            outcome: Some(PageOutcome::Report(&report(
                "<script>alert(1)</script>\n\nUse <img src=x onerror=alert(2)> today",
            ))),
        });
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_markdown_lists_and_emphasis() {
        let out = markdown_to_html("1. Find **two** companies\n2. Translate *three* skills");
        assert!(out.contains("<ol>"));
        assert!(out.contains("<li>Find <strong>two</strong> companies</li>"));
        assert!(out.contains("<em>three</em>"));
    }

    #[test]
    fn test_markdown_script_links_disarmed() {
        let out = markdown_to_html("[apply](javascript:alert(1)) or [jobs](https://jobs.example.com)");
        assert!(!out.contains("javascript:"));
        assert!(out.contains("<a href=\"#\">apply</a>"));
        assert!(out.contains("<a href=\"https://jobs.example.com\">jobs</a>"));
    }
}
