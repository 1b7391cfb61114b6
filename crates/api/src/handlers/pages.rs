use axum::{extract::Path, http::header, response::{Html, IntoResponse}};

use crate::{
    navigation::{DOCUMENT_CATEGORIES, REFERENCE_TABLES},
    pages,
};

const APP_JS: &str = include_str!("../../assets/app.js");

pub async fn index() -> Html<String> {
    Html(pages::index())
}

pub async fn documents() -> Html<String> {
    Html(pages::documents(DOCUMENT_CATEGORIES))
}

pub async fn reference() -> Html<String> {
    Html(pages::reference(REFERENCE_TABLES))
}

pub async fn queries() -> Html<String> {
    Html(pages::queries())
}

pub async fn table(Path(table): Path<String>) -> Html<String> {
    Html(pages::table(&table))
}

pub async fn app_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/javascript; charset=utf-8")], APP_JS)
}
