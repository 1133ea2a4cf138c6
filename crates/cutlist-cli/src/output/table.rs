use cutlist_core::model::{OutputRow, ProcessResult, PROVIDER_COLUMNS};

/// Format order rows as an aligned text table, one line per piece.
pub fn format_rows(rows: &[OutputRow]) -> String {
    if rows.is_empty() {
        return "No cutting-list rows found.".to_string();
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.cells().iter().map(|c| c.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = PROVIDER_COLUMNS.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = PROVIDER_COLUMNS.iter().map(|h| h.to_string()).collect();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }

    let pieces: u64 = rows.iter().map(|r| u64::from(r.quantity)).sum();
    out.push_str(&format!("\n  {} row(s), {} piece(s)", rows.len(), pieces));
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str("  ");
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

/// Print the outcome of an export run.
pub fn print_result(result: &ProcessResult) {
    match (&result.file_path, result.ok) {
        (Some(path), true) => println!("Wrote {}", path.display()),
        _ => {
            for e in &result.errors {
                eprintln!("Error: {e}");
            }
        }
    }
}
