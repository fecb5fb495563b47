use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::render::panel;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, progress_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),      // Summary cards
            Constraint::Min(8),         // Breakdown + trend
            Constraint::Percentage(35), // Goals + predictions
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);
    render_breakdown(f, middle[0], app);
    render_trend(f, middle[1], app);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_goals(f, bottom[0], app);
    render_predictions(f, bottom[1], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let d = &app.dashboard;
    render_card(
        f,
        cards[0],
        "Total Balance",
        format_amount(d.total_balance),
        theme::ACCENT,
        String::new(),
    );
    render_card(
        f,
        cards[1],
        "Monthly Income",
        format_amount(d.monthly_income),
        theme::GREEN,
        String::new(),
    );
    render_card(
        f,
        cards[2],
        "Monthly Expenses",
        format_amount(d.monthly_expenses),
        theme::RED,
        String::new(),
    );

    let (color, hint) = if d.approaching_limit() {
        (theme::YELLOW, "Approaching limit".to_string())
    } else {
        (theme::GREEN, "On track".to_string())
    };
    render_card(
        f,
        cards[3],
        "Budget Used",
        format_percent(d.budget_used),
        color,
        hint,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color, hint: String) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint, theme::dim_style())),
    ])
    .centered()
    .block(panel(title));

    f.render_widget(text, area);
}

fn render_empty(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let msg = Paragraph::new(Line::from(Span::styled(
        message.to_string(),
        theme::dim_style(),
    )))
    .centered()
    .block(panel(title));
    f.render_widget(msg, area);
}

fn render_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let d = &app.dashboard;
    if d.breakdown.is_empty() {
        render_empty(f, area, "Spending Breakdown", "No spending recorded");
        return;
    }

    let lines: Vec<Line> = d
        .breakdown
        .iter()
        .zip(d.spending_shares())
        .map(|(slice, (_, share))| {
            Line::from(vec![
                Span::styled(" ■ ", Style::default().fg(theme::swatch(&slice.color))),
                Span::styled(
                    format!("{:<18}", truncate(&slice.name, 18)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!("{:>11}", format_amount(slice.amount)),
                    theme::normal_style(),
                ),
                Span::styled(
                    format!(" {:>5}", format_percent(share)),
                    theme::dim_style(),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(panel("Spending Breakdown")), area);
}

fn render_trend(f: &mut Frame, area: Rect, app: &App) {
    let trend = &app.dashboard.trend;
    if trend.is_empty() {
        render_empty(f, area, "Spending Trend", "No history yet");
        return;
    }

    let bars: Vec<Bar> = trend
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.amount.to_u64().unwrap_or(0))
                .text_value(format!("${}", point.amount.trunc()))
                .label(Line::from(point.month.clone()))
                .style(Style::default().fg(theme::ACCENT))
        })
        .collect();

    let chart = BarChart::default()
        .block(panel("Spending Trend"))
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(2)
        .value_style(
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(chart, area);
}

fn render_goals(f: &mut Frame, area: Rect, app: &App) {
    let goals = &app.dashboard.goals;
    if goals.is_empty() {
        render_empty(f, area, "Savings Goals", "No savings goals");
        return;
    }

    let mut lines = Vec::with_capacity(goals.len() * 2);
    for goal in goals {
        let progress = goal.progress();
        let pct = progress.map(format_percent).unwrap_or_else(|| "-".into());
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {:<20}", truncate(&goal.name, 20)),
                Style::default()
                    .fg(theme::TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "{} / {}  ({})",
                    format_amount(goal.current),
                    format_amount(goal.target),
                    goal.deadline
                ),
                theme::dim_style(),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", progress_bar(progress, 24)),
                Style::default().fg(theme::GREEN),
            ),
            Span::styled(pct, theme::normal_style()),
        ]));
    }

    f.render_widget(Paragraph::new(lines).block(panel("Savings Goals")), area);
}

fn render_predictions(f: &mut Frame, area: Rect, app: &App) {
    let predictions = &app.dashboard.predictions;
    if predictions.is_empty() {
        render_empty(f, area, "Spending Predictions", "Not enough data to predict");
        return;
    }

    let bar = |amount: Decimal, color: Color| {
        Bar::default()
            .value(amount.to_u64().unwrap_or(0))
            .text_value(format!("${}", amount.trunc()))
            .style(Style::default().fg(color))
            .value_style(Style::default().fg(theme::HEADER_BG).bg(color))
    };

    let mut chart = BarChart::default()
        .block(panel("Spending Predictions (current vs next month)"))
        .bar_width(6)
        .bar_gap(1)
        .group_gap(3);
    for p in predictions {
        let bars = [bar(p.current, theme::ACCENT), bar(p.predicted, theme::YELLOW)];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(truncate(&p.category, 13)))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}
