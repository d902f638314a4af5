//! Scripted input replay
//!
//! A script is a comma-separated list of steps. Each step holds one or more
//! `+`-joined actions and an optional `*N` repeat, e.g.
//! `"w*40, w+a*25, space*10, s"`. One expanded step is one tick.

use thiserror::Error;

use super::input::{Control, InputState};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptError {
    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("invalid repeat count '{0}'")]
    BadRepeat(String),

    #[error("empty step at position {0}")]
    EmptyStep(usize),
}

/// Parse a single action token; `None` means "no control held"
fn parse_action(token: &str) -> Result<Option<Control>, ScriptError> {
    match token.to_lowercase().as_str() {
        "w" | "up" | "accelerate" => Ok(Some(Control::Accelerate)),
        "s" | "down" | "brake" => Ok(Some(Control::Brake)),
        "a" | "left" => Ok(Some(Control::Left)),
        "d" | "right" => Ok(Some(Control::Right)),
        "space" | "coast" | "idle" | "." => Ok(None),
        _ => Err(ScriptError::UnknownAction(token.to_string())),
    }
}

fn parse_step(index: usize, step: &str) -> Result<(InputState, usize), ScriptError> {
    let (actions, repeat) = match step.rsplit_once('*') {
        Some((actions, count)) => {
            let count = count.trim();
            let n: usize = count
                .parse()
                .map_err(|_| ScriptError::BadRepeat(count.to_string()))?;
            if n == 0 {
                return Err(ScriptError::BadRepeat(count.to_string()));
            }
            (actions, n)
        }
        None => (step, 1),
    };

    let mut input = InputState::default();
    let mut any = false;
    for token in actions.split('+').map(str::trim).filter(|t| !t.is_empty()) {
        any = true;
        if let Some(control) = parse_action(token)? {
            input.set(control, true);
        }
    }
    if !any {
        return Err(ScriptError::EmptyStep(index));
    }

    Ok((input, repeat))
}

/// Expand a script into one input snapshot per tick
pub fn parse_script(script: &str) -> Result<Vec<InputState>, ScriptError> {
    let mut inputs = Vec::new();
    if script.trim().is_empty() {
        return Ok(inputs);
    }

    for (index, step) in script.split(',').enumerate() {
        let (input, repeat) = parse_step(index, step)?;
        inputs.extend(std::iter::repeat_n(input, repeat));
    }
    Ok(inputs)
}
