//! Plain-text rendering of the catalog state
//!
//! Layout only; every decision about what is listed lives in the catalog
//! domain.

use folio_model::Book;
use std::fmt::Write;

use crate::domains::catalog::CatalogState;

const HEADERS: [&str; 5] = ["#", "ISBN", "Title", "Author(s)", "Publisher"];

/// Render the list as a table, with the expanded book's details inline
pub fn render_table(state: &CatalogState) -> String {
    let rows: Vec<[String; 5]> = state
        .results()
        .iter()
        .enumerate()
        .map(|(position, book)| {
            [
                (position + 1).to_string(),
                book.isbn.clone(),
                book.title.clone(),
                book.author.clone(),
                book.publisher.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(str::to_string), &widths);
    for (row, book) in rows.iter().zip(state.results()) {
        push_row(&mut out, row, &widths);
        if state.selection.is_expanded(book.index) {
            push_details(&mut out, book);
        }
    }

    if state.is_loading_more() {
        out.push_str("Loading...\n");
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn push_details(out: &mut String, book: &Book) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "    {} (Paperback)", book.title);
    let _ = writeln!(out, "    by {}", book.author);
    let _ = writeln!(out, "    {}", book.publisher);
    let _ = writeln!(out, "    Cover: {}", book.cover_image);
    let _ = writeln!(out, "    Likes: {}", book.likes);
    let _ = writeln!(out, "    Review(s)");
    if book.has_reviews() {
        for review in &book.reviews {
            let _ = writeln!(out, "      {}", review.text);
            let _ = writeln!(
                out,
                "        - {}, {}",
                review.reviewer, review.company
            );
        }
    } else {
        let _ = writeln!(out, "      No reviews yet.");
    }
}
