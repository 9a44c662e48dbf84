//! HTML for the single-page word form.

use dictionary::Explanation;

pub const TITLE: &str = "📘 Easy E-E Dictionary";
pub const TAGLINE: &str = "Easily understand English words — designed for beginners!";

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem;line-height:1.6}\
input{font-size:1.1rem;padding:.4rem;width:100%;box-sizing:border-box}\
img{max-width:100%;border-radius:.5rem}";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Wraps text between pairs of `delimiter` in `tag`. An unpaired trailing
/// delimiter stays literal.
fn emphasis(text: &str, delimiter: &str, tag: &str) -> String {
    let parts = text.split(delimiter).collect::<Vec<&str>>();
    let pairs = (parts.len() - 1) / 2;
    let mut out = String::with_capacity(text.len());
    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            if index <= pairs * 2 {
                let closing = index % 2 == 0;
                out.push_str(&format!("<{}{tag}>", if closing { "/" } else { "" }));
            } else {
                out.push_str(delimiter);
            }
        }
        out.push_str(part);
    }
    out
}

/// Renders one line of formatted explanation: bold, then italics.
pub fn markdown_line(line: &str) -> String {
    emphasis(&emphasis(&escape_html(line), "**", "strong"), "*", "em")
}

fn render_explanation(explanation: &Explanation) -> String {
    let mut html = String::from("<hr>\n");
    if explanation.text.is_empty() {
        html.push_str("<p>No explanation is available for this word right now.</p>\n");
    } else {
        let lines = explanation
            .text
            .lines()
            .map(markdown_line)
            .collect::<Vec<String>>();
        html.push_str(&format!("<p class=\"explanation\">{}</p>\n", lines.join("<br>\n")));
    }
    if let Some(url) = &explanation.image_url {
        html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">\n",
            escape_html(url),
            escape_html(&explanation.base_word)
        ));
    }
    html.push_str("<hr>\n");
    html
}

pub fn render(word: &str, explanation: Option<&Explanation>) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Easy E-E Dictionary</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{TITLE}</h1>\n<p>{TAGLINE}</p>\n\
         <form method=\"get\" action=\"/\">\n\
         <label for=\"word\">Enter an English word to explain:</label>\n\
         <input id=\"word\" name=\"word\" value=\"{}\" autofocus>\n</form>\n{}</body>\n</html>\n",
        escape_html(word),
        explanation.map(render_explanation).unwrap_or_default()
    )
}
