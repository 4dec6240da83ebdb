use crate::application::{App, AppMode, GRID_COLUMNS, Theme};
use crate::presentation::format::{format_amount, format_percentage};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

/// Number of history entries shown under "Recent taps".
pub const RECENT_TAPS_SHOWN: usize = 12;

const RED: Color = Color::Rgb(0xda, 0x29, 0x29);

struct Palette {
    background: Color,
    text: Color,
    muted: Color,
    border: Color,
    track: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Light => Palette {
            background: Color::White,
            text: Color::Rgb(0x09, 0x09, 0x0b),
            muted: Color::Rgb(0x52, 0x52, 0x5b),
            border: Color::Rgb(0xe4, 0xe4, 0xe7),
            track: Color::Rgb(0xf4, 0xf4, 0xf5),
        },
        Theme::Dark => Palette {
            background: Color::Rgb(0x09, 0x09, 0x0b),
            text: Color::Rgb(0xf4, 0xf4, 0xf5),
            muted: Color::Rgb(0xa1, 0xa1, 0xaa),
            border: Color::Rgb(0x27, 0x27, 0x2a),
            track: Color::Rgb(0x27, 0x27, 0x2a),
        },
    }
}

pub fn render_ui(f: &mut Frame, app: &App) {
    let colors = palette(app.theme);
    f.render_widget(
        Block::default().style(Style::default().bg(colors.background).fg(colors.text)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_header(f, &colors, chunks[0]);
    render_tally(f, app, &colors, panels[0]);
    render_distribution(f, app, &colors, panels[1]);
    render_status_bar(f, app, &colors, chunks[2]);

    if app.mode == AppMode::Help {
        render_help_popup(f, &colors, app.help_scroll);
    }
}

fn render_header(f: &mut Frame, colors: &Palette, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(RED)),
            Span::styled(
                "Ang Pao Counter",
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Count your red packets. Tap a denomination to add one packet.",
            Style::default().fg(colors.muted),
        )),
    ]);
    f.render_widget(header, area);
}

fn panel<'a>(title: &'a str, colors: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(Span::styled(
            title,
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        ))
}

fn render_tally(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let block = panel("Total amount", colors);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let denominations = app.engine.denominations();
    let grid_rows = denominations.len().div_ceil(GRID_COLUMNS);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(grid_rows as u16 * 3),
            Constraint::Min(0),
        ])
        .split(inner);

    let totals = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(sections[0]);

    let total = Paragraph::new(Line::from(Span::styled(
        format_amount(app.engine.total(), &app.currency_symbol),
        Style::default().fg(RED).add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().title(Span::styled("Total", Style::default().fg(colors.muted))));
    f.render_widget(total, totals[0]);

    let packets = Paragraph::new(Line::from(Span::styled(
        app.engine.total_packets().to_string(),
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .title(Line::from(Span::styled("Packets", Style::default().fg(colors.muted))).right_aligned()),
    );
    f.render_widget(packets, totals[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); grid_rows])
        .split(sections[1]);

    for (index, denomination) in denominations.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(rows[index / GRID_COLUMNS]);

        let style = if index == app.selected {
            Style::default().bg(RED).fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(RED)
        };

        let key_hint = if index < 9 {
            format!("[{}] ", index + 1)
        } else {
            String::new()
        };

        let button = Paragraph::new(format!(
            "{}+ {}",
            key_hint,
            format_amount(u64::from(denomination.value()), &app.currency_symbol)
        ))
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(RED)));
        f.render_widget(button, columns[index % GRID_COLUMNS]);
    }

    let tip = Paragraph::new(format!(
        "Tip: Use Undo if you mis-tapped. History keeps the last {} taps.",
        app.engine.history_limit()
    ))
    .style(Style::default().fg(colors.muted))
    .wrap(Wrap { trim: true });
    f.render_widget(tip, sections[2]);
}

fn render_distribution(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let block = panel("Bills Distribution", colors).title(
        Line::from(Span::styled(" Live ", Style::default().fg(RED))).right_aligned(),
    );
    let inner = block.inner(area);
    f.render_widget(block, area);

    let breakdown = app.engine.breakdown();
    let mut constraints = vec![Constraint::Length(2); breakdown.len()];
    constraints.push(Constraint::Min(0));

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (row, area) in breakdown.iter().zip(sections.iter()) {
        let lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*area);

        let label = Paragraph::new(Line::from(vec![
            Span::styled(
                format_amount(u64::from(row.denomination.value()), &app.currency_symbol),
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(format!("x{}", row.count), Style::default().fg(RED)),
            Span::styled("  Subtotal: ", Style::default().fg(colors.muted)),
            Span::styled(
                format_amount(row.subtotal, &app.currency_symbol),
                Style::default().fg(colors.text),
            ),
        ]));
        f.render_widget(label, lines[0]);

        let percentage = Paragraph::new(format_percentage(row.percentage))
            .alignment(Alignment::Right)
            .style(Style::default().fg(colors.text));
        f.render_widget(percentage, lines[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(RED).bg(colors.track))
            .ratio((row.percentage / 100.0).clamp(0.0, 1.0))
            .label("");
        f.render_widget(gauge, lines[1]);
    }

    if let Some(area) = sections.last() {
        render_recent_taps(f, app, colors, *area);
    }
}

fn render_recent_taps(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let recent = app.engine.recent(RECENT_TAPS_SHOWN);
    let taps = if recent.is_empty() {
        Line::from(Span::styled("No taps yet.", Style::default().fg(colors.muted)))
    } else {
        let spans: Vec<Span> = recent
            .iter()
            .flat_map(|d| {
                [
                    Span::styled(
                        format!("+{}", format_amount(u64::from(d.value()), &app.currency_symbol)),
                        Style::default().fg(RED),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        Line::from(spans)
    };

    let widget = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("Recent taps", Style::default().fg(colors.muted))),
        taps,
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, colors: &Palette, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else {
                "1-9/Enter: add | u: undo | r: reset | t: theme | e: export CSV | y: copy | F1/?: help | q: quit".to_string()
            }
        }
        AppMode::Help => "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string(),
        AppMode::ExportCsv => format!("Export CSV as: {} (Enter to export, Esc to cancel)", app.filename_input),
    };

    let undo_hint = if app.engine.can_undo() {
        format!("Undo ({})", app.engine.history().len())
    } else {
        "Undo (empty)".to_string()
    };

    let input = Paragraph::new(input_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title("Status")
                .title(Line::from(undo_hint).right_aligned()),
        )
        .style(match app.mode {
            AppMode::Normal => Style::default().fg(colors.text),
            AppMode::Help => Style::default().fg(Color::Cyan),
            AppMode::ExportCsv => Style::default().fg(Color::Magenta),
        });
    f.render_widget(input, area);
}

fn render_help_popup(f: &mut Frame, colors: &Palette, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Ang Pao Counter Help (Line {}/{})", start_line + 1, help_lines.len()))
                .style(Style::default().fg(RED)),
        )
        .style(Style::default().fg(colors.text).bg(colors.background));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> String {
    r#"ANG PAO COUNTER

=== COUNTING ===
1-9             Add one packet of the denomination at that position
Enter/Space     Add one packet of the highlighted denomination
Arrow keys      Move the highlight (hjkl also work)

=== CORRECTIONS ===
u / Backspace   Undo the most recent tap
Ctrl+Z          Undo the most recent tap
r               Reset every count and clear history
                Undo remembers only the most recent taps; older taps
                stay counted but can no longer be undone

=== DISTRIBUTION ===
Each denomination shows its count, subtotal and share of the total.
Shares are 0% until something has been counted.
Recent taps lists the newest entries first.

=== REPORTS ===
e               Export the breakdown to a CSV file
y               Copy a text summary to the clipboard

=== DISPLAY ===
t               Toggle dark/light theme
F1 or ?         Show this help
q               Quit application

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#
        .to_string()
}
