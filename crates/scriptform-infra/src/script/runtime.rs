//! Rhai implementation of [`ScriptRuntime`].
//!
//! Each replay builds a fresh [`Engine`] with the standard packages plus one
//! extra function: an `input` that pops the next answer off an
//! [`AnswerTape`]. `print` output is captured through the engine's print
//! hook, so capture is scoped to the run and needs no global redirection.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use rhai::{Dynamic, Engine, EvalAltResult, Position};
use scriptform_core::script::runtime::ScriptRuntime;
use scriptform_core::script::tape::AnswerTape;
use scriptform_types::error::ReplayError;
use scriptform_types::form::AnswerSequence;
use scriptform_types::replay::ExecutionResult;

use crate::script::{strip_shebang, syntax_error, INPUT_FN};

/// Replay runtime for Rhai scripts.
///
/// Holds no state; the engine is built per call. Rhai engines are not
/// `Send`, so async callers should run replays on a blocking thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct RhaiRuntime;

impl RhaiRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptRuntime for RhaiRuntime {
    fn replay(
        &self,
        source: &str,
        answers: &AnswerSequence,
    ) -> Result<ExecutionResult, ReplayError> {
        let start = Instant::now();
        let tape = Rc::new(RefCell::new(AnswerTape::new(answers)));
        let output = Rc::new(RefCell::new(String::new()));

        let engine = replay_engine(&tape, &output);
        let ast = engine.compile(strip_shebang(source)).map_err(syntax_error)?;
        let outcome = engine.run_ast(&ast);
        drop(engine);

        let tape = tape.borrow();
        let output = std::mem::take(&mut *output.borrow_mut());

        // A run that ran out of answers fails even if the script caught the error.
        tape.check()?;

        match outcome {
            Ok(()) => Ok(ExecutionResult {
                output,
                answers_supplied: tape.supplied(),
                answers_consumed: tape.consumed(),
                duration: start.elapsed(),
            }),
            Err(err) => Err(ReplayError::ScriptFailed {
                message: err.to_string(),
                output,
            }),
        }
    }
}

/// Build an engine whose `input` reads from `tape` and whose `print` appends
/// to `output`.
fn replay_engine(tape: &Rc<RefCell<AnswerTape>>, output: &Rc<RefCell<String>>) -> Engine {
    let mut engine = Engine::new();

    let with_prompt = Rc::clone(tape);
    engine.register_fn(
        INPUT_FN,
        move |prompt: Dynamic| -> Result<String, Box<EvalAltResult>> {
            let prompt = prompt.to_string();
            next_answer(&with_prompt, Some(&prompt))
        },
    );

    let without_prompt = Rc::clone(tape);
    engine.register_fn(INPUT_FN, move || -> Result<String, Box<EvalAltResult>> {
        next_answer(&without_prompt, None)
    });

    let sink = Rc::clone(output);
    engine.on_print(move |text| {
        let mut sink = sink.borrow_mut();
        sink.push_str(text);
        sink.push('\n');
    });

    engine.on_debug(|text, source, pos: Position| {
        tracing::debug!(source, line = pos.line(), "script debug: {text}");
    });

    engine
}

fn next_answer(
    tape: &RefCell<AnswerTape>,
    prompt: Option<&str>,
) -> Result<String, Box<EvalAltResult>> {
    let mut tape = tape.borrow_mut();
    tape.pop_answer(prompt).ok_or_else(|| {
        format!("Not enough inputs provided ({} supplied)", tape.supplied()).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriptform_core::script::scanner::ScriptScanner;

    use crate::script::scanner::RhaiScanner;

    const PASSWORD: &str = r#"
//! Password generator
//! Repeats the allowed characters up to the requested length.

let length = parse_int(input("Password length [12]: "));
print("Building a password of length " + length);
let letters = input("Allowed characters: ");

let password = "";
while password.len() < length {
    password += letters;
}
print("Generated password: " + password.sub_string(0, length));
"#;

    fn replay(source: &str, answers: Vec<&str>) -> Result<ExecutionResult, ReplayError> {
        RhaiRuntime::new().replay(source, &AnswerSequence::from(answers))
    }

    #[test]
    fn test_answers_consumed_in_call_order() {
        let result = replay(PASSWORD, vec!["3", "abc"]).unwrap();
        assert_eq!(
            result.output,
            "Building a password of length 3\nGenerated password: abc\n"
        );
        assert_eq!(result.answers_supplied, 2);
        assert_eq!(result.answers_consumed, 2);
    }

    #[test]
    fn test_output_between_calls_does_not_shift_answers() {
        let result = replay(PASSWORD, vec!["5", "xy"]).unwrap();
        assert!(result.output.ends_with("Generated password: xyxyx\n"));
    }

    #[test]
    fn test_too_few_answers_is_insufficient_input() {
        let err = replay(PASSWORD, vec!["3"]).unwrap_err();
        assert_eq!(
            err,
            ReplayError::InsufficientInput {
                supplied: 1,
                prompt: Some("Allowed characters: ".to_string()),
            }
        );
    }

    #[test]
    fn test_no_answers_at_all() {
        let err = replay(PASSWORD, vec![]).unwrap_err();
        assert!(matches!(
            err,
            ReplayError::InsufficientInput { supplied: 0, .. }
        ));
    }

    #[test]
    fn test_caught_shortfall_still_fails() {
        let source = r#"
try {
    input("Anything?");
} catch (err) {
    print("swallowed");
}
print("carried on");
"#;
        let err = replay(source, vec![]).unwrap_err();
        assert!(matches!(err, ReplayError::InsufficientInput { .. }));
    }

    #[test]
    fn test_surplus_answers_are_reported_not_rejected() {
        let result = replay(r#"print(input("Only:"));"#, vec!["a", "b", "c"]).unwrap();
        assert_eq!(result.output, "a\n");
        assert_eq!(result.answers_consumed, 1);
        assert_eq!(result.unused_answers(), 2);
    }

    #[test]
    fn test_prompt_free_input_consumes_an_answer() {
        let result = replay("print(input());", vec!["bare"]).unwrap();
        assert_eq!(result.output, "bare\n");
    }

    #[test]
    fn test_non_string_prompt_is_accepted() {
        let result = replay("print(input(42));", vec!["ok"]).unwrap();
        assert_eq!(result.output, "ok\n");
    }

    #[test]
    fn test_runtime_failure_keeps_partial_output() {
        let source = "print(\"before\");\nthrow \"boom\";\nprint(\"after\");";
        match replay(source, vec![]).unwrap_err() {
            ReplayError::ScriptFailed { message, output } => {
                assert!(message.contains("boom"), "message: {message}");
                assert_eq!(output, "before\n");
            }
            other => panic!("expected ScriptFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_syntax_error() {
        let err = replay("let x = ;", vec![]).unwrap_err();
        assert!(matches!(err, ReplayError::Syntax(_)));
    }

    #[test]
    fn test_loop_asks_more_than_scanned() {
        let source = r#"for i in 0..3 { print(input("Item:")); }"#;
        let scanned = RhaiScanner::new().scan(source).unwrap();
        assert_eq!(scanned.prompts.len(), 1);

        let err = replay(source, vec!["only one"]).unwrap_err();
        assert!(matches!(err, ReplayError::InsufficientInput { supplied: 1, .. }));
    }

    #[test]
    fn test_scan_and_replay_agree_on_count() {
        let scanned = RhaiScanner::new().scan(PASSWORD).unwrap();
        let answers: AnswerSequence = (0..scanned.prompts.len())
            .map(|i| (i + 2).to_string())
            .collect();
        let result = RhaiRuntime::new().replay(PASSWORD, &answers).unwrap();
        assert_eq!(result.answers_consumed, scanned.prompts.len());
    }

    #[test]
    fn test_concurrent_replays_capture_separately() {
        let script = |tag: &str| format!("for i in 0..50 {{ print(\"{tag}\"); }}");
        let (a, b) = std::thread::scope(|s| {
            let a = s.spawn(|| replay(&script("a"), vec![]).unwrap());
            let b = s.spawn(|| replay(&script("b"), vec![]).unwrap());
            (a.join().unwrap(), b.join().unwrap())
        });
        assert_eq!(a.output, "a\n".repeat(50));
        assert_eq!(b.output, "b\n".repeat(50));
    }

    #[test]
    fn test_shebang_script_runs() {
        let result = replay("#!/usr/bin/env rhai\nprint(input(\"A:\"));", vec!["x"]).unwrap();
        assert_eq!(result.output, "x\n");
    }

    #[test]
    fn test_bundled_scripts() {
        let password = include_str!("../../../../scripts/password.rhai");
        let scanned = RhaiScanner::new().scan(password).unwrap();
        assert_eq!(scanned.prompts.len(), 2);
        let result = replay(password, vec!["5", "ab"]).unwrap();
        assert_eq!(result.output, "Your password: ababa\n");

        let greeting = include_str!("../../../../scripts/greeting.rhai");
        let scanned = RhaiScanner::new().scan(greeting).unwrap();
        assert_eq!(
            scanned.prompts,
            vec!["Your name [Ada]:", r"Your city \[optional\] [Seattle]:"]
        );
        let result = replay(greeting, vec!["Ada", "Paris"]).unwrap();
        assert_eq!(result.output, "Hello, Ada!\nGreetings to Paris.\n");
    }

    #[test]
    fn test_function_prompts_answered_in_scan_order() {
        let source = r#"
fn ask_b() { input("B:") }
fn ask_a() { input("A:") }
let a = ask_a();
let b = ask_b();
let c = input("C:");
print(a + b + c);
"#;
        let scanned = RhaiScanner::new().scan(source).unwrap();
        assert_eq!(scanned.prompts, vec!["A:", "B:", "C:"]);

        // Answer each prompt with its own label: a mismatch would reorder them.
        let answers: AnswerSequence = scanned.prompts.iter().cloned().collect();
        let result = RhaiRuntime::new().replay(source, &answers).unwrap();
        assert_eq!(result.output, "A:B:C:\n");
    }
}
