use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::ExpenseCategory;
use crate::settings::ENV_PREFIX;
use crate::ui::app::App;
use crate::ui::render::panel;
use crate::ui::theme;
use crate::ui::util::format_amount;

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<22}"), theme::dim_style()),
        Span::styled(
            value,
            Style::default()
                .fg(theme::TEXT)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {text}"),
        Style::default()
            .fg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let config_file = app
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(no config directory)".into());
    let categories: Vec<&str> = ExpenseCategory::all().iter().map(|c| c.as_str()).collect();

    let lines = vec![
        Line::from(""),
        heading("Budget"),
        row("Monthly limit", format_amount(app.summary.overall_limit)),
        row("Configured limit", format_amount(app.settings.monthly_limit)),
        Line::from(""),
        heading("Startup"),
        row("Demo data", if app.settings.seed_demo_data { "on" } else { "off" }.into()),
        row("Log level", app.settings.log_level.clone()),
        row("Config file", config_file),
        row("Environment prefix", format!("{ENV_PREFIX}_")),
        Line::from(""),
        heading("Expense categories"),
        Line::from(Span::styled(
            format!("  {}", categories.join(", ")),
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Change the limit for this session with :limit <amount>",
            theme::dim_style(),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(panel("Settings")), area);
}
