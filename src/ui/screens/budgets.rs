use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::budget::{AlertScope, BudgetStatus, Severity};
use crate::ui::app::App;
use crate::ui::render::panel;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, progress_bar, truncate};

const MAX_ALERT_ROWS: usize = 6;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let alert_rows = app.summary.alerts.len().clamp(1, MAX_ALERT_ROWS) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(alert_rows + 2), // Alerts
            Constraint::Length(5),              // Overview cards
            Constraint::Min(5),                 // Categories
        ])
        .split(area);

    render_alerts(f, chunks[0], app);
    render_overview(f, chunks[1], app);
    if app.budgets.is_empty() {
        render_empty(f, chunks[2]);
    } else {
        render_categories(f, chunks[2], app);
    }
}

fn render_alerts(f: &mut Frame, area: Rect, app: &App) {
    let alerts = &app.summary.alerts;
    let lines: Vec<Line> = if alerts.is_empty() {
        vec![Line::from(Span::styled(
            " All budgets are on track",
            theme::income_style(),
        ))]
    } else {
        alerts
            .iter()
            .take(MAX_ALERT_ROWS)
            .map(|alert| {
                let marker = match alert.scope {
                    AlertScope::Overall => "◆",
                    AlertScope::Category(_) => "•",
                };
                Line::from(vec![
                    Span::styled(
                        format!(" {marker} {:<8} ", alert.severity.to_string()),
                        theme::severity_style(alert.severity),
                    ),
                    Span::styled(alert.message.as_str(), theme::normal_style()),
                ])
            })
            .collect()
    };

    let title = format!("Budget Alerts ({})", alerts.len());
    f.render_widget(Paragraph::new(lines).block(panel(title)), area);
}

fn render_overview(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let s = &app.summary;
    let remaining_color = if s.remaining < Decimal::ZERO {
        theme::RED
    } else {
        theme::GREEN
    };
    let overall = s
        .alerts
        .iter()
        .find(|a| a.scope == AlertScope::Overall)
        .map(|a| a.severity);
    let (used, used_color) = match (s.overall_progress, overall) {
        (None, _) => ("no limit".to_string(), theme::TEXT_DIM),
        (Some(pct), Some(Severity::Critical)) => (format_percent(pct), theme::RED),
        (Some(pct), Some(Severity::Warning)) => (format_percent(pct), theme::YELLOW),
        (Some(pct), None) => (format_percent(pct), theme::GREEN),
    };

    render_card(f, cards[0], "Monthly Limit", format_amount(s.overall_limit), theme::ACCENT);
    render_card(f, cards[1], "Total Spent", format_amount(s.total_spent), theme::RED);
    render_card(f, cards[2], "Remaining", format_amount(s.remaining), remaining_color);
    render_card(f, cards[3], "Limit Used", used, used_color);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(panel(title));
    f.render_widget(text, area);
}

fn render_categories(f: &mut Frame, area: Rect, app: &App) {
    let rows = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .budgets
        .iter()
        .zip(&app.summary.rows)
        .enumerate()
        .skip(app.budget_scroll)
        .take(rows)
        .map(|(i, (budget, row))| {
            let color = theme::status_color(row.status);
            let name_style = if i == app.budget_index {
                theme::selected_style()
            } else if i % 2 == 0 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let pct = row
                .percentage
                .map(format_percent)
                .unwrap_or_else(|| "-".into());
            let left = if row.status == BudgetStatus::Over {
                format!("over by {}", format_amount(-row.remaining))
            } else {
                format!("{} left", format_amount(row.remaining))
            };

            ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(theme::swatch(&budget.color))),
                Span::styled(format!("{:<18}", truncate(&budget.category, 17)), name_style),
                Span::styled(
                    format!(
                        "{:>10} / {:<10} ",
                        format_amount(budget.spent),
                        format_amount(budget.budgeted)
                    ),
                    Style::default().fg(color),
                ),
                Span::styled(progress_bar(row.percentage, 20), Style::default().fg(color)),
                Span::styled(
                    format!(" {pct:>5} "),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("{:<9}", row.status.as_str()), Style::default().fg(color)),
                Span::styled(left, theme::dim_style()),
            ]))
        })
        .collect();

    let title = format!(
        "Budget Categories ({}): {} budgeted",
        app.budgets.len(),
        format_amount(app.summary.total_budgeted)
    );
    f.render_widget(List::new(items).block(panel(title)), area);
}

fn render_empty(f: &mut Frame, area: Rect) {
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("No budget categories yet", theme::dim_style())),
        Line::from(""),
        Line::from(Span::styled(
            "Use :budget <category> <amount> to add one",
            theme::dim_style(),
        )),
    ])
    .centered()
    .block(panel("Budget Categories"));
    f.render_widget(msg, area);
}
