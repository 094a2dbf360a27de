use std::fmt::Write;

use floodit_core::{ColorIndex, Snapshot};

const SYMBOLS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Letter for a palette entry; flooded cells are shown in upper case.
fn symbol(color: ColorIndex, flooded: bool) -> char {
    let letter = SYMBOLS
        .get(usize::from(color))
        .map(|&byte| char::from(byte))
        .unwrap_or('?');
    if flooded {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}

pub(crate) fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    for (colors, flooded) in snapshot.colors.rows().into_iter().zip(snapshot.flooded.rows()) {
        let line: String = colors
            .iter()
            .zip(flooded.iter())
            .map(|(&color, &flooded)| symbol(color, flooded))
            .collect();
        out.push_str(&line);
        out.push('\n');
    }

    let legend: Vec<String> = snapshot
        .palette
        .iter()
        .enumerate()
        .map(|(index, rgb)| format!("{}={}", symbol(index as ColorIndex, false), rgb))
        .collect();
    let _ = writeln!(out, "{}", legend.join(" "));
    let _ = writeln!(out, "{}", snapshot.status_line());
    let _ = writeln!(out, "{}", snapshot.time_line());
    if let Some(banner) = snapshot.banner() {
        let _ = writeln!(out, "{banner}");
    }

    out
}
