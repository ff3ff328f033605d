//! Plain-text painting of a [`RenderModel`].
use persian_calendar::{DayCell, RenderModel, TextDirection, render::DATE_COLUMNS};

const BLANK: &str = "    ";

/// Renders the month as text, one line per week.
///
/// Selected endpoints are bracketed, today is parenthesized, days inside a
/// range are flanked by dashes and disabled days carry a trailing dot.
/// Right-to-left calendars are mirrored. The last line is a legend naming the
/// theme colors of the two selection markers.
pub fn render_month(model: &RenderModel) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "< {} | {} | {} >",
        model.previous_label, model.title, model.next_label
    ));
    lines.push(row(
        model.weekday_labels.iter().map(|label| format!("{label:^4}")).collect(),
        model.direction,
    ));
    for week in model.weeks() {
        let mut cells: Vec<String> = week.iter().map(cell_text).collect();
        cells.resize(DATE_COLUMNS, BLANK.to_string());
        lines.push(row(cells, model.direction));
    }
    lines.push(model.display_text.clone());
    lines.push(format!(
        "[d] {}  -d- {}",
        model.theme.primary_color, model.theme.secondary_color
    ));
    lines.join("\n")
}

fn cell_text(cell: &DayCell) -> String {
    let Some(state) = cell.state() else {
        return BLANK.to_string();
    };
    let day = state.day;
    if state.is_selected {
        format!("[{day:>2}]")
    } else if state.is_today {
        format!("({day:>2})")
    } else if state.is_in_range {
        format!("-{day:>2}-")
    } else if state.is_disabled {
        format!(" {day:>2}.")
    } else {
        format!(" {day:>2} ")
    }
}

fn row(mut cells: Vec<String>, direction: TextDirection) -> String {
    if direction == TextDirection::RightToLeft {
        cells.reverse();
    }
    cells.join(" ").trim_end().to_string()
}
