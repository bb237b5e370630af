use std::time::Duration;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crate::editor::loop_config;
use crate::shared::{InputEvent, DEFAULT_LOOP_COUNT};
use super::mode::{Focus, TuiState};

// poll for input from tui, tracks focus and count field text in tuistate,
// resolves keys to the semantic input events the editor handles
pub fn poll_input(timeout: Duration, ts: &mut TuiState) -> anyhow::Result<Vec<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(vec![]);
    }

    if let Event::Key(key) = event::read()? {
        if key.kind != KeyEventKind::Press {
            return Ok(vec![]);
        }
        return Ok(handle_key(key.code, ts));
    }
    Ok(vec![])
}

pub fn handle_key(code: KeyCode, ts: &mut TuiState) -> Vec<InputEvent> {
    match code {
        KeyCode::Esc => vec![InputEvent::Quit],

        KeyCode::Tab | KeyCode::Right => move_focus(1, ts),
        KeyCode::BackTab | KeyCode::Left => move_focus(-1, ts),

        KeyCode::Enter | KeyCode::Char(' ') => activate(ts),

        // count field only from here on
        _ if ts.focus != Focus::Count => vec![],
        KeyCode::Char(c @ ('0'..='9' | '-' | '.')) => {
            let mut text = current_text(ts);
            text.push(c);
            edit_count(text, ts)
        }
        KeyCode::Backspace => {
            let mut text = current_text(ts);
            text.pop();
            edit_count(text, ts)
        }
        KeyCode::Up => step_count(1, ts),
        KeyCode::Down => step_count(-1, ts),

        _ => vec![],
    }
}

// leaving the count field is its blur: an over-max number snaps to the max
fn move_focus(delta: isize, ts: &mut TuiState) -> Vec<InputEvent> {
    let left = ts.move_focus(delta);
    if left != Focus::Count {
        return vec![];
    }
    let clamped = ts.count_text.take().and_then(|t| loop_config::clamp_on_blur(&t));
    match clamped {
        Some(text) => vec![InputEvent::CountChanged(text)],
        None => vec![],
    }
}

fn activate(ts: &TuiState) -> Vec<InputEvent> {
    match ts.focus {
        Focus::Variant(i) => vec![InputEvent::SelectVariant(i)],
        Focus::Infinite => vec![InputEvent::SetInfinite(!ts.infinite)],
        Focus::Count => vec![],
    }
}

fn current_text(ts: &TuiState) -> String {
    match &ts.count_text {
        Some(t) => t.clone(),
        None => ts.loop_count.unwrap_or(DEFAULT_LOOP_COUNT).to_string(),
    }
}

fn edit_count(text: String, ts: &mut TuiState) -> Vec<InputEvent> {
    ts.count_text = Some(text.clone());
    vec![InputEvent::CountChanged(text)]
}

// stepper starts from whatever is typed if it's a number, else the stored count
fn step_count(delta: i64, ts: &mut TuiState) -> Vec<InputEvent> {
    let base = ts
        .count_text
        .as_deref()
        .and_then(|t| t.trim().parse::<u32>().ok())
        .or(ts.loop_count)
        .unwrap_or(DEFAULT_LOOP_COUNT);
    edit_count(loop_config::step(base, delta).to_string(), ts)
}
