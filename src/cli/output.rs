//! Plain-text rendering of tables and the task bar chart.

use crate::app::{AttendanceDto, EmployeeDto, TaskDto, TaskSummaryItemDto};
use std::io::{self, Write};

/// Widest bar in the chart, in cells.
pub const CHART_WIDTH: usize = 40;
const BAR_CELL: char = '█';

pub fn write_employees<W: Write>(out: &mut W, rows: &[EmployeeDto]) -> io::Result<()> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|e| vec![e.emp_id.to_string(), e.name.clone(), e.department.clone()])
        .collect();
    write_table(out, &["emp_id", "name", "department"], &cells)
}

pub fn write_attendance<W: Write>(out: &mut W, rows: &[AttendanceDto]) -> io::Result<()> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|a| {
            vec![
                a.emp_id.to_string(),
                a.date.clone(),
                a.check_in.clone(),
                a.check_out.clone(),
            ]
        })
        .collect();
    write_table(out, &["emp_id", "date", "check_in", "check_out"], &cells)
}

pub fn write_tasks<W: Write>(out: &mut W, rows: &[TaskDto]) -> io::Result<()> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|t| {
            vec![
                t.task_id.to_string(),
                t.emp_id.to_string(),
                single_line(&t.task_description),
                t.completed_on.clone(),
            ]
        })
        .collect();
    write_table(
        out,
        &["task_id", "emp_id", "task_description", "completed_on"],
        &cells,
    )
}

/// Horizontal bars, one per employee, scaled so the largest count fills `CHART_WIDTH`.
pub fn write_task_chart<W: Write>(out: &mut W, items: &[TaskSummaryItemDto]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "  (no completed tasks)");
    }
    let max = items.iter().map(|i| i.task_count).max().unwrap_or(0);
    let label_width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(0);
    for item in items {
        let bar: String = std::iter::repeat(BAR_CELL)
            .take(bar_len(item.task_count, max, CHART_WIDTH))
            .collect();
        writeln!(
            out,
            "  {:<width$} | {} {}",
            item.name,
            bar,
            item.task_count,
            width = label_width
        )?;
    }
    Ok(())
}

/// Cells for `count` when `max` fills `width`. Non-zero counts get at least one cell.
pub fn bar_len(count: i64, max: i64, width: usize) -> usize {
    if count <= 0 || max <= 0 {
        return 0;
    }
    let scaled = (count as f64 / max as f64 * width as f64).round() as usize;
    scaled.clamp(1, width)
}

fn single_line(s: &str) -> String {
    s.lines().map(str::trim).collect::<Vec<_>>().join(" / ")
}

fn write_table<W: Write>(out: &mut W, header: &[&str], rows: &[Vec<String>]) -> io::Result<()> {
    if rows.is_empty() {
        return writeln!(out, "  (no rows)");
    }
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let head: Vec<String> = header
        .iter()
        .zip(&widths)
        .map(|(h, w)| format!("{:<w$}", h, w = *w))
        .collect();
    writeln!(out, "  {}", head.join("  ").trim_end())?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "  {}", rule.join("  "))?;
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<w$}", c, w = *w))
            .collect();
        writeln!(out, "  {}", line.join("  ").trim_end())?;
    }
    Ok(())
}
