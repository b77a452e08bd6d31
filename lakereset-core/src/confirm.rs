use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Capability for asking the operator a yes/no question.
///
/// The reset procedure takes this as an injected collaborator so tests can
/// script answers instead of blocking on real interactive input.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool>;
}

/// Blocking interactive confirmation over stdin/stdout.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        print!("{prompt} [y/N] ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;

        Ok(parse_answer(&answer))
    }
}

/// Deterministic confirmation backed by a queue of pre-scripted answers.
/// An exhausted queue answers "no", so a short script never accepts more
/// than it was told to.
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: VecDeque<bool>,
    prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> ScriptedConfirm {
        ScriptedConfirm {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Every prompt asked so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        self.prompts.push(prompt.to_owned());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}

fn parse_answer(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_yes_answers_case_insensitively() {
        for answer in ["y", "Y", "yes", "Yes", "YES", "  y\n"] {
            assert!(parse_answer(answer), "{answer:?} should be accepted");
        }
    }

    #[test]
    fn anything_else_is_a_decline() {
        for answer in ["n", "no", "", "\n", "yep", "quit", "drop everything"] {
            assert!(!parse_answer(answer), "{answer:?} should be declined");
        }
    }

    #[test]
    fn scripted_confirm_replays_answers_then_declines() {
        let mut confirm = ScriptedConfirm::new(vec![true, false]);

        assert!(confirm.confirm("first?").unwrap());
        assert!(!confirm.confirm("second?").unwrap());
        // script exhausted
        assert!(!confirm.confirm("third?").unwrap());

        assert_eq!(confirm.prompts(), &["first?", "second?", "third?"]);
    }
}
