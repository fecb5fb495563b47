use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::render::panel;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    if app.expenses.is_empty() {
        render_empty(f, area, app);
        return;
    }

    let header_cells = ["Date", "Description", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let recurring = if expense.is_recurring { " ↻" } else { "" };

            Row::new(vec![
                Cell::from(format!("  {}", expense.date.format("%b %d, %Y"))),
                Cell::from(format!("{}{recurring}", truncate(&expense.description, 40))),
                Cell::from(expense.category.as_str()),
                Cell::from(Span::styled(
                    format!("-{}", format_amount(expense.amount)),
                    theme::expense_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(16),
        Constraint::Min(20),
        Constraint::Length(20),
        Constraint::Length(14),
    ];

    let search = if app.search_input.is_empty() {
        String::new()
    } else {
        format!(" search: '{}'", app.search_input)
    };
    let title = format!(
        "Expenses ({} of {}): total {}{search}",
        app.expenses.len(),
        app.expense_count,
        format_amount(app.expense_total)
    );

    let table = Table::new(rows, widths).header(header).block(panel(title));
    f.render_widget(table, area);
}

fn render_empty(f: &mut Frame, area: Rect, app: &App) {
    let msg = if app.search_input.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled("No expenses recorded", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one with :expense <amount> <description>[; <category>]",
                theme::dim_style(),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("No expenses matching '{}'", app.search_input),
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to clear the search",
                theme::dim_style(),
            )),
        ]
    };
    let title = format!(
        "Expenses (0 of {}): total {}",
        app.expense_count,
        format_amount(app.expense_total)
    );
    f.render_widget(Paragraph::new(msg).centered().block(panel(title)), area);
}
