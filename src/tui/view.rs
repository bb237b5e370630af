use crate::shared::{DisplayState, LoopView, VariantView, DEFAULT_LOOP_COUNT};
use ratatui::layout::{Layout, Direction, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use super::mode::{Focus, TuiState};

const KEY_HELP: &str = "Tab/←→: move  Enter/Space: select  Esc: quit";
const COUNT_HELP: &str = "0-9: type  ↑↓: step  range 1-10000";

pub fn render(frame: &mut Frame, area: Rect, state: &DisplayState, ts: &TuiState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // type buttons
            Constraint::Length(1), // tooltip / key help
            Constraint::Length(3), // loop settings, toggle macros only
            Constraint::Min(0),
        ])
        .split(area);

    draw_type_row(frame, sections[0], state, ts);
    draw_hint(frame, sections[1], state, ts);
    if let Some(loop_view) = state.loop_settings {
        draw_loop_row(frame, sections[2], loop_view, ts);
    }
}

fn focused(style: Style, is_focused: bool) -> Style {
    if is_focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

fn variant_style(v: &VariantView) -> Style {
    if !v.enabled {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else if v.active {
        Style::default().fg(Color::LightMagenta).bg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn draw_type_row(frame: &mut Frame, area: Rect, state: &DisplayState, ts: &TuiState) {
    let mut spans = Vec::with_capacity(state.variants.len() * 2);
    for (i, v) in state.variants.iter().enumerate() {
        let style = focused(variant_style(v), ts.focus == Focus::Variant(i));
        spans.push(Span::styled(format!(" {} {} ", v.icon, v.label), style));
        spans.push(Span::raw(" "));
    }
    let block = Block::bordered()
        .title("Macro Type")
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

// terminals have no hover, so the focused button's tooltip lives here
fn draw_hint(frame: &mut Frame, area: Rect, state: &DisplayState, ts: &TuiState) {
    let text = match ts.focus {
        Focus::Variant(i) => state.variants.get(i).map_or(KEY_HELP, |v| v.tooltip),
        Focus::Infinite => KEY_HELP,
        Focus::Count => COUNT_HELP,
    };
    let hint = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)));
    frame.render_widget(hint, area);
}

fn draw_loop_row(frame: &mut Frame, area: Rect, loop_view: LoopView, ts: &TuiState) {
    let mark = if loop_view.infinite { "x" } else { " " };
    let mut spans = vec![Span::styled(
        format!("[{}] Infinite Loop", mark),
        focused(Style::default(), ts.focus == Focus::Infinite),
    )];

    if !loop_view.infinite {
        let count = match (&ts.count_text, ts.focus) {
            (Some(text), Focus::Count) => text.clone(),
            _ => loop_view.count.unwrap_or(DEFAULT_LOOP_COUNT).to_string(),
        };
        spans.push(Span::raw("   Count: "));
        spans.push(Span::styled(
            format!("{:>5}", count),
            focused(Style::default().fg(Color::LightMagenta), ts.focus == Focus::Count),
        ));
    }

    let block = Block::bordered()
        .title("Loop Settings")
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
