use std::io::{ self, BufRead, Write };

use crate::errors::FormError;
use crate::generators::Sampling;
use crate::password::{ Toggles, submit };
use crate::settings::Settings;

const HELP: &str = "Enter a length (4-16) to generate. \
Toggle classes with: lower, upper, numbers, symbols. \
Other commands: reset, help, quit.";

enum Command<'a> {
    Toggle(&'a str),
    Reset,
    Help,
    Quit,
    Submit(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        "lower" | "upper" | "numbers" | "symbols" => Command::Toggle(line.trim()),
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => Command::Submit(other),
    }
}

fn describe(toggles: &Toggles) -> String {
    let mark = |on: bool| if on { 'x' } else { ' ' };
    format!(
        "[{}] lower  [{}] upper  [{}] numbers  [{}] symbols",
        mark(toggles.lower),
        mark(toggles.upper),
        mark(toggles.digits),
        mark(toggles.symbols),
    )
}

/// Runs the form loop until `quit` or end of input.
///
/// An invalid length is reported and the prompt repeats; nothing is
/// generated until the input is corrected. Returns the last password.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut out: W,
    settings: &Settings,
    mut toggles: Toggles,
    sampling: Sampling,
) -> io::Result<Option<String>> {
    let mut last = None;

    writeln!(out, "{}", HELP)?;
    writeln!(out, "{}", describe(&toggles))?;
    write!(out, "Password length: ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;

        match parse_command(&line) {
            Command::Toggle(name) => {
                match name {
                    "lower" => toggles.lower = !toggles.lower,
                    "upper" => toggles.upper = !toggles.upper,
                    "numbers" => toggles.digits = !toggles.digits,
                    _ => toggles.symbols = !toggles.symbols,
                }
                writeln!(out, "{}", describe(&toggles))?;
            }
            Command::Reset => {
                toggles = Toggles::reset(settings);
                writeln!(out, "{}", describe(&toggles))?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
            Command::Submit(raw) => match submit(raw, &toggles, sampling) {
                Ok(password) => {
                    writeln!(out, "Result: {}", password)?;
                    last = Some(password);
                }
                Err(e @ FormError::Validation(_)) => writeln!(out, "{}", e)?,
                Err(e @ FormError::NoClassesSelected) => {
                    writeln!(out, "{}", e)?;
                    writeln!(out, "{}", describe(&toggles))?;
                }
            },
        }

        write!(out, "Password length: ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, toggles: Toggles) -> (Option<String>, String) {
        let mut out = Vec::new();
        let last = run(
            script.as_bytes(),
            &mut out,
            &Settings::default(),
            toggles,
            Sampling::Uniform,
        )
        .unwrap();

        (last, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reprompts_until_length_is_valid() {
        let (last, output) = run_script("3\nabc\n20\n8\n", Toggles::default());

        assert!(output.contains("Should be min of 4 Chars"));
        assert!(output.contains("Password length must be a whole number"));
        assert!(output.contains("Should be max of 16 Chars"));
        assert_eq!(output.matches("Result: ").count(), 1);

        let password = last.unwrap();
        assert_eq!(password.len(), 8);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn toggles_change_the_alphabet() {
        let (last, _) = run_script("lower\nnumbers\n12\n", Toggles::default());

        let password = last.unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn empty_selection_is_reported() {
        let (last, output) = run_script("lower\n10\n", Toggles::default());

        assert!(last.is_none());
        assert!(output.contains("Select at least one character class"));
    }

    #[test]
    fn reset_restores_configured_defaults() {
        let (_, output) = run_script("reset\nquit\n10\n", Toggles::none());

        assert!(output.contains("[x] lower  [ ] upper  [ ] numbers  [x] symbols"));
        assert!(!output.contains("Result: "));
    }

    #[test]
    fn reset_keeps_last_password() {
        let (last, output) = run_script("8\nreset\n", Toggles::default());

        assert!(output.contains("[x] lower  [ ] upper  [ ] numbers  [x] symbols"));
        assert_eq!(last.map(|p| p.len()), Some(8));
    }
}
