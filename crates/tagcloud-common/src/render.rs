use std::fmt::Write as _;
use std::io;

use crate::types::TagCloud;

/// Stylesheets linked when none are configured: the published course sheet, then a local copy.
pub const DEFAULT_STYLESHEETS: &[&str] = &[
    "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css",
    "tagcloud.css",
];

/// Escape the five HTML-significant characters.
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

/// Render the complete HTML page for a cloud.
pub fn render_html<S: AsRef<str>>(cloud: &TagCloud, stylesheets: &[S]) -> String {
    let name = escape_html(&cloud.document_name);
    let n = cloud.requested;
    let mut html = String::new();

    // writing into a String cannot fail
    let _ = writeln!(html, "<html><head><title>Top {n} Words in {name}</title>");
    for sheet in stylesheets {
        let _ = writeln!(
            html,
            "<link href=\"{}\" rel=\"stylesheet\" type=\"text/css\">",
            escape_html(sheet.as_ref())
        );
    }
    html.push_str("</head>\n");
    let _ = writeln!(html, "<body><h2>Top {n} words in {name}</h2><hr>");

    html.push_str("<div class=\"cdiv\">\n");
    html.push_str("<p class=\"cbox\">\n");
    for word in &cloud.words {
        let _ = writeln!(
            html,
            "<span style=\"cursor:default\" class=\"f{}\" title=\"count:{}\">{}</span>",
            word.font_size,
            word.count,
            escape_html(&word.word)
        );
    }
    html.push_str("</p>\n");
    html.push_str("</div>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

/// Write the HTML page to `out`.
pub fn write_html<S: AsRef<str>, W: io::Write>(
    cloud: &TagCloud,
    stylesheets: &[S],
    out: &mut W,
) -> io::Result<()> {
    out.write_all(render_html(cloud, stylesheets).as_bytes())?;
    out.flush()
}

/// Pretty-printed JSON form of the cloud.
pub fn render_json(cloud: &TagCloud) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(cloud)
}
