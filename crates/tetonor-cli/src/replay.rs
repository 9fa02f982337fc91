//! Action scripts: one [`Action`] per line, `#` starts a comment.

use tetonor_game::{Action, ActionBlocked, Game, ParseActionError};

/// A script line that did not change the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub(crate) enum Skipped {
    #[display("line {line}: {error}")]
    Invalid {
        line: usize,
        error: ParseActionError,
    },
    #[display("line {line}: `{action}` rejected: {reason}")]
    Rejected {
        line: usize,
        action: Action,
        reason: ActionBlocked,
    },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ReplayReport {
    pub(crate) applied: usize,
    pub(crate) skipped: Vec<Skipped>,
}

/// Applies every action of `script` to `game`, continuing past bad lines.
pub(crate) fn run_script(game: &mut Game, script: &str) -> ReplayReport {
    let mut report = ReplayReport::default();
    for (number, text) in script.lines().enumerate() {
        let line = number + 1;
        let text = text.split_once('#').map_or(text, |(code, _)| code).trim();
        if text.is_empty() {
            continue;
        }
        let action = match text.parse::<Action>() {
            Ok(action) => action,
            Err(error) => {
                report.skipped.push(Skipped::Invalid { line, error });
                continue;
            }
        };
        match game.apply(action) {
            Ok(()) => report.applied += 1,
            Err(reason) => report.skipped.push(Skipped::Rejected {
                line,
                action,
                reason,
            }),
        }
    }
    report
}
