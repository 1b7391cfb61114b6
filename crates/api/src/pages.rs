//! Server-rendered HTML pages. Data is loaded by `assets/app.js` through the
//! JSON API; these only lay out navigation and mount points.

use crate::navigation::Category;

const STYLE: &str = "\
body{font-family:sans-serif;margin:0}\
nav{background:#243447;padding:.6em 1em}\
nav a{color:#fff;margin-right:1.2em;text-decoration:none}\
main{padding:1em 1.5em}\
table{border-collapse:collapse;margin-top:1em}\
td,th{border:1px solid #ccc;padding:.25em .5em}\
tr.editing{background:#fff6d5}\
.error{color:#b00020}\
textarea{width:100%;min-height:8em;font-family:monospace}";

/// Escape text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
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

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"ru\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <nav><a href=\"/\">Главная</a><a href=\"/documents\">Документы</a>\
         <a href=\"/reference\">Справочники</a><a href=\"/queries\">Запросы</a></nav>\n\
         <main>\n{body}\n</main>\n<script src=\"/static/app.js\"></script>\n</body>\n</html>\n",
        title = escape_html(title),
    )
}

fn table_link(table: &str) -> String {
    let name = escape_html(table);
    format!("<li><a href=\"/table/{name}\">{name}</a></li>")
}

pub fn index() -> String {
    layout(
        "Система управления документами",
        "<h1>Система управления документами</h1>\n\
         <ul>\n\
         <li><a href=\"/documents\">Документы</a>: договоры, акты, протоколы</li>\n\
         <li><a href=\"/reference\">Справочники</a>: города, улицы, лица и другие</li>\n\
         <li><a href=\"/queries\">Запросы</a>: произвольный SQL</li>\n\
         </ul>",
    )
}

pub fn documents(categories: &[Category]) -> String {
    let mut body = String::from("<h1>Документы</h1>\n");
    for category in categories {
        body.push_str(&format!("<h2>{}</h2>\n<ul>\n", escape_html(category.title)));
        for table in category.tables {
            body.push_str(&table_link(table));
            body.push('\n');
        }
        body.push_str("</ul>\n");
    }
    layout("Документы", &body)
}

pub fn reference(tables: &[&str]) -> String {
    let links: Vec<String> = tables.iter().map(|t| table_link(t)).collect();
    let body = format!("<h1>Справочники</h1>\n<ul>\n{}\n</ul>", links.join("\n"));
    layout("Справочники", &body)
}

pub fn queries() -> String {
    layout(
        "Запросы",
        "<h1>Произвольный запрос</h1>\n\
         <div id=\"query-console\">\n\
         <textarea id=\"query-text\" placeholder=\"SELECT 1\"></textarea>\n\
         <button id=\"query-run\">Выполнить</button>\n\
         <div id=\"query-error\" class=\"error\"></div>\n\
         <div id=\"query-result\"></div>\n\
         </div>",
    )
}

pub fn table(name: &str) -> String {
    let escaped = escape_html(name);
    let body = format!(
        "<h1>{escaped}</h1>\n\
         <div id=\"table-view\" data-table=\"{escaped}\">\n\
         <div id=\"table-error\" class=\"error\"></div>\n\
         <form id=\"record-form\"></form>\n\
         <div id=\"table-rows\"></div>\n\
         </div>"
    );
    layout(name, &body)
}
