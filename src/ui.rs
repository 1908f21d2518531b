//! Terminal UI utilities.
//!
//! A small box-drawing table for `rf list` and the splash dashboard.

use colored::*;
use console::measure_text_width;

const MAX_CELL_WIDTH: usize = 60;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        if row.len() == self.headers.len() {
            self.rows.push(row);
        }
    }

    pub fn print(&self) {
        if self.headers.is_empty() {
            return;
        }

        let mut widths: Vec<usize> = self
            .headers
            .iter()
            .map(|h| measure_text_width(h))
            .collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell_width(cell));
            }
        }

        let sep = |left: &str, mid: &str, right: &str| {
            let mut line = String::from("  ");
            line.push_str(left);
            for (i, w) in widths.iter().enumerate() {
                line.push_str(&"─".repeat(w + 2));
                line.push_str(if i + 1 < widths.len() { mid } else { right });
            }
            line
        };

        println!("{}", sep("┌", "┬", "┐"));
        print!("  │");
        for (i, header) in self.headers.iter().enumerate() {
            print!(" {}{} │", header.as_str().bold(), pad(header, widths[i]));
        }
        println!();
        println!("{}", sep("├", "┼", "┤"));

        for row in &self.rows {
            print!("  │");
            for (i, cell) in row.iter().enumerate() {
                let shown = console::truncate_str(cell, MAX_CELL_WIDTH, "...").into_owned();
                print!(" {}{} │", shown, pad(&shown, widths[i]));
            }
            println!();
        }
        println!("{}", sep("└", "┴", "┘"));
    }
}

fn cell_width(cell: &str) -> usize {
    measure_text_width(cell).min(MAX_CELL_WIDTH)
}

fn pad(cell: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(measure_text_width(cell)))
}
