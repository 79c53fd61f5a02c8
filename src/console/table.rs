//! Plain-text table rendering.

use crate::models::Contact;

const HEADERS: [&str; 4] = ["id", "name", "phone", "email"];

/// Render contacts as an aligned table, or `(no records)` when empty.
///
/// ```text
/// id | name | phone   | email
/// ---+------+---------+------------
/// 1  | Ada  | 5551234 | ada@ex.com
/// ```
pub fn render_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "(no records)\n".to_string();
    }

    let rows: Vec<[String; 4]> = contacts
        .iter()
        .map(|c| {
            [
                c.id.to_string(),
                c.name.clone(),
                c.phone.clone(),
                c.email.clone(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&join_padded(HEADERS.iter().copied(), &widths));
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &rows {
        out.push_str(&join_padded(row.iter().map(String::as_str), &widths));
    }
    out
}

fn join_padded<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ");
    line + "\n"
}
