#![allow(dead_code)]

use axum::{
    Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::time::Duration;
use tokio::net::TcpListener;

/// One submitted form row: a name written to every column as `"{name}-{col}"`,
/// with optional blanks and an optional real date in column 0.
pub struct Submission {
    pub name: &'static str,
    pub blank: Vec<u16>,
    pub date_serial: Option<f64>,
}

impl Submission {
    pub fn new(name: &'static str) -> Self {
        Submission {
            name,
            blank: Vec::new(),
            date_serial: None,
        }
    }

    pub fn blank(mut self, cols: &[u16]) -> Self {
        self.blank.extend_from_slice(cols);
        self
    }

    pub fn dated(mut self, serial: f64) -> Self {
        self.date_serial = Some(serial);
        self
    }
}

/// Build an XLSX workbook `width` columns wide with a header row.
pub fn workbook(width: u16, rows: &[Submission]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    for c in 0..width {
        worksheet
            .write_string(0, c, format!("Question {}", c).as_str())
            .unwrap();
    }

    for (r, row) in rows.iter().enumerate() {
        let r = (r + 1) as u32;
        for c in 0..width {
            if row.blank.contains(&c) {
                continue;
            }
            match (c, row.date_serial) {
                (0, Some(serial)) => {
                    worksheet
                        .write_number_with_format(r, c, serial, &date_format)
                        .unwrap();
                }
                _ => {
                    worksheet
                        .write_string(r, c, format!("{}-{}", row.name, c).as_str())
                        .unwrap();
                }
            }
        }
    }

    workbook.push_worksheet(worksheet);
    workbook.save_to_buffer().unwrap()
}

/// Serve fixed responses on an ephemeral local port and return its base URL.
///
/// * `/sheet.xlsx` - the given workbook bytes
/// * `/broken` - HTTP 500
/// * `/html` - an HTML page instead of a workbook
/// * `/slow` - a workbook after a 3 second delay
pub async fn upstream(sheet: Vec<u8>) -> String {
    let slow_sheet = sheet.clone();
    let app = Router::new()
        .route(
            "/sheet.xlsx",
            get(move || async move { sheet.clone().into_response() }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response() }),
        )
        .route(
            "/html",
            get(|| async {
                (
                    [(header::CONTENT_TYPE, "text/html")],
                    "<html><body>Sign in to view this sheet</body></html>",
                )
                    .into_response()
            }),
        )
        .route(
            "/slow",
            get(move || async move {
                tokio::time::sleep(Duration::from_secs(3)).await;
                slow_sheet.clone().into_response()
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}
