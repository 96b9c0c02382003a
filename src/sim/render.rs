// Text rendering of a result set: runoff qualifiers, bar chart and detail table.

use crate::sim::io_common::{format_percent, group_thousands};
use crate::sim::*;

pub const ZERO_PROMPT: &str = "Move at least one base intention score above 0 to see the results.";

const BAR: char = '#';

pub fn render_report(contest: &str, rs: &ResultSet, width: usize) -> String {
    let mut lines: Vec<String> = vec![
        format!("== {} ==", contest),
        format!(
            "Estimated valid votes: {}",
            group_thousands(rs.electorate_size as f64)
        ),
        String::new(),
    ];
    if rs.is_degenerate() {
        lines.push(ZERO_PROMPT.to_string());
        return lines.join("\n");
    }
    lines.extend(render_runoff(rs));
    lines.push(String::new());
    lines.extend(render_chart(rs, width));
    lines.push(String::new());
    lines.extend(render_table(rs));
    lines.join("\n")
}

fn qualifier_line(place: &str, row: &ResultRow) -> String {
    format!(
        "  {} place (advances to runoff): {}  {} ({} votes)",
        place,
        row.candidate,
        format_percent(row.share_percent),
        group_thousands(row.estimated_votes)
    )
}

pub fn render_runoff(rs: &ResultSet) -> Vec<String> {
    let mut lines = vec!["Runoff".to_string()];
    match rs.runoff_qualifiers() {
        Some((first, second)) => {
            lines.push(qualifier_line("1st", first));
            match second {
                Some(row) => lines.push(qualifier_line("2nd", row)),
                None => lines.push("  2nd place: none, only one candidate".to_string()),
            }
        }
        None => lines.push(format!("  {}", ZERO_PROMPT)),
    }
    lines
}

fn name_width(rs: &ResultSet) -> usize {
    rs.rows
        .iter()
        .map(|r| r.candidate.chars().count())
        .max()
        .unwrap_or(0)
        .max("Candidate".len())
}

// Bars are scaled on the largest share, which gets the full width.
pub fn render_chart(rs: &ResultSet, width: usize) -> Vec<String> {
    let max_share = rs
        .rows
        .iter()
        .map(|r| r.share_percent)
        .fold(0.0_f64, f64::max);
    let nw = name_width(rs);
    let mut lines = vec!["Vote share".to_string()];
    for row in rs.rows.iter() {
        let len = if max_share > 0.0 {
            (row.share_percent / max_share * width as f64).round() as usize
        } else {
            0
        };
        let bar: String = std::iter::repeat(BAR).take(len).collect();
        lines.push(format!(
            "  {:<nw$} {:<width$} {:>6}",
            row.candidate,
            bar,
            format_percent(row.share_percent),
            nw = nw,
            width = width
        ));
    }
    lines
}

pub fn render_table(rs: &ResultSet) -> Vec<String> {
    let nw = name_width(rs);
    let mut lines = vec![
        "Detail".to_string(),
        format!(
            "  {:<nw$} {:>7} {:>16} {:>15}",
            "Candidate",
            "Share",
            "Estimated votes",
            "Base intention",
            nw = nw
        ),
    ];
    for row in rs.rows.iter() {
        lines.push(format!(
            "  {:<nw$} {:>7} {:>16} {:>15}",
            row.candidate,
            format_percent(row.share_percent),
            group_thousands(row.estimated_votes),
            row.raw_score,
            nw = nw
        ));
    }
    lines
}
