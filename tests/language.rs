use std::fs;

use logica::{
    error::{EvalError, ParseError, StatementError},
    interpreter::{
        evaluator::core::Session,
        lexer::{TokenKind, scan},
        parser::core::parse,
        value::Value,
    },
    run_source,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_source(&code, false) {
                panic!("DSL example {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No DSL examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```logica") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval_lines(lines: &[&str]) -> Result<Option<Value>, StatementError> {
    let mut session = Session::new();
    let mut last = None;

    for line in lines {
        last = session.eval_line(line)?;
    }

    Ok(last)
}

fn assert_bool(lines: &[&str], expected: bool) {
    match eval_lines(lines) {
        Ok(Some(Value::Bool(b))) => {
            assert_eq!(b, expected, "wrong result for {lines:?}");
        },
        other => panic!("expected a boolean from {lines:?}, got {other:?}"),
    }
}

fn assert_display(lines: &[&str], expected: &str) {
    match eval_lines(lines) {
        Ok(Some(value)) => assert_eq!(format!("{value}"), expected),
        other => panic!("expected a value from {lines:?}, got {other:?}"),
    }
}

fn eval_errors(lines: &[&str]) -> Vec<EvalError> {
    match eval_lines(lines) {
        Err(StatementError::Eval(errors)) => errors,
        other => panic!("expected evaluation errors from {lines:?}, got {other:?}"),
    }
}

fn parse_errors(line: &str) -> Vec<ParseError> {
    let (_, errors) = parse(&scan(line));
    errors
}

#[test]
fn logical_operators_match_truth_tables() {
    assert_bool(&["true ^ false"], false);
    assert_bool(&["true ^ true"], true);
    assert_bool(&["true v false"], true);
    assert_bool(&["false v false"], false);
    assert_bool(&["!true"], false);
    assert_bool(&["not false"], true);
    assert_bool(&["true * false"], true);
    assert_bool(&["true * true"], false);
    assert_bool(&["true = false"], false);
    assert_bool(&["false = false"], true);
}

#[test]
fn material_implication_is_not_a_or_b() {
    assert_bool(&["true → false"], false);
    assert_bool(&["true → true"], true);
    assert_bool(&["false → false"], true);
    assert_bool(&["false → true"], true);
}

#[test]
fn glyphs_and_ascii_aliases_agree() {
    assert_bool(&["true ∧ false"], false);
    assert_bool(&["true ∨ false"], true);
    assert_bool(&["¬true"], false);
    assert_bool(&["true ⊕ true"], false);
    assert_bool(&["true ≡ true"], true);
}

#[test]
fn operators_share_one_left_associative_tier() {
    // Left to right: ((true v false) ^ false) is false; precedence would
    // give true.
    assert_bool(&["true v false ^ false"], false);
    assert_bool(&["true v (false ^ false)"], true);
    assert_bool(&["!true v true"], true);
}

#[test]
fn boolean_digit_literals() {
    assert_bool(&["1 ^ 1"], true);
    assert_bool(&["1 v 0"], true);
    assert_bool(&["0 = false"], true);
}

#[test]
fn ascii_or_needs_trailing_whitespace() {
    let kinds: Vec<_> = scan("p v q").into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Identifier, TokenKind::Or, TokenKind::Identifier]);

    // No whitespace after `v`: the whole run is one identifier.
    let kinds: Vec<_> = scan("pvq").into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Identifier]);

    // A trailing `v` at end of input is identifier-like.
    let kinds: Vec<_> = scan("v").into_iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Identifier]);
}

#[test]
fn scan_positions_index_into_the_source() {
    let source = "nand(p, ¬q) ≡ true";
    let tokens = scan(source);

    assert!(!tokens.is_empty());

    for token in &tokens {
        assert!(token.pos < source.len(), "position {} escapes the source", token.pos);
        assert!(source.is_char_boundary(token.pos));
    }

    // Scanning is deterministic.
    assert_eq!(tokens, scan(source));
}

#[test]
fn oversized_number_becomes_scan_error_token() {
    let tokens = scan("99999999999999999999999999");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Err);
    assert!(tokens[0].err.is_some());

    // And the parser surfaces it as a lexical error.
    let errors = parse_errors("99999999999999999999999999");
    assert!(matches!(errors[0], ParseError::Lexical { .. }));
}

#[test]
fn bindings_are_late_bound() {
    assert_bool(&["p is true", "p ^ !p"], false);
    assert_bool(&["p is true", "q is !p", "q"], false);
    // Rebinding p changes what q means.
    assert_bool(&["p is true", "q is !p", "p is false", "q"], true);
}

#[test]
fn circular_bindings_are_rejected() {
    let errors = eval_errors(&["x is x"]);
    assert!(matches!(errors[0], EvalError::CircularBinding { .. }));

    // Transitive cycles through other bindings are caught too.
    let errors = eval_errors(&["a is b", "b is a"]);
    assert!(matches!(errors[0], EvalError::CircularBinding { .. }));

    // Cycles through sequence elements and call arguments as well.
    let errors = eval_errors(&["s is [true]", "s is [s]"]);
    assert!(matches!(errors[0], EvalError::CircularBinding { .. }));
}

#[test]
fn undefined_identifier_is_reported() {
    let errors = eval_errors(&["p ^ true"]);
    assert!(matches!(errors[0], EvalError::UndefinedIdentifier { .. }));
}

#[test]
fn binary_operands_report_errors_from_both_sides() {
    let errors = eval_errors(&["p ^ q"]);
    assert_eq!(errors.len(), 2);
}

#[test]
fn operators_type_check_their_operands() {
    let errors = eval_errors(&["2 ^ true"]);
    assert!(matches!(errors[0], EvalError::ExpectedBoolean { .. }));

    let errors = eval_errors(&["s is [true]", "s >= 1"]);
    assert!(matches!(errors[0], EvalError::ExpectedBooleanOrNumber { .. }));

    let errors = eval_errors(&["true = 2"]);
    assert!(matches!(errors[0], EvalError::KindMismatch { .. }));
}

#[test]
fn relational_operators_coerce_booleans() {
    assert_bool(&["true > false"], true);
    assert_bool(&["false >= false"], true);
    assert_bool(&["true < 2"], true);
    assert_bool(&["7 >= 7"], true);
    assert_bool(&["3 <= 2"], false);
}

#[test]
fn equality_compares_sequences_deeply() {
    assert_bool(&["[true, 2] = [true, 2]"], true);
    assert_bool(&["[true, 2] = [true, 3]"], false);
    assert_bool(&["[true] = [true, true]"], false);
    assert_bool(&["p is true", "[p, [p, 1]] = [true, [true, 1]]"], true);
}

#[test]
fn gates_apply_their_bodies() {
    assert_bool(&["gate nand(a, b) = !(a ^ b)", "nand(true, true)"], false);
    assert_bool(&["gate nand(a, b) = !(a ^ b)", "nand(true, false)"], true);
    // The body sees caller bindings behind the captured environment.
    assert_bool(&["p is true", "gate g(x) = x ^ p", "g(false)"], false);
}

#[test]
fn gate_arity_is_checked() {
    let errors = eval_errors(&["gate flip(b) = !b", "flip(true, false)"]);
    assert!(matches!(errors[0],
                     EvalError::ArityMismatch { expected: 1,
                                                found: 2,
                                                .. }));

    let errors = eval_errors(&["gate flip(b) = !b", "flip()"]);
    assert!(matches!(errors[0],
                     EvalError::ArityMismatch { expected: 1,
                                                found: 0,
                                                .. }));
}

#[test]
fn parameters_shadow_outer_bindings() {
    // The parameter wins inside the body.
    assert_bool(&["b is true", "gate flip(b) = !b", "flip(false)"], true);
    // Passing the outer binding under its own name resolves through the
    // caller's scope instead of chasing itself.
    assert_bool(&["b is true", "gate flip(b) = !b", "flip(b)"], false);
    assert_bool(&["x is true", "gate same(x) = x", "same(x)"], true);
}

#[test]
fn redeclaring_a_gate_replaces_it() {
    assert_bool(&["gate g(a) = a", "gate g(a) = !a", "g(true)"], false);
}

#[test]
fn continuations_bind_into_the_latest_gate() {
    assert_bool(&["gate vote(a, b, c) = majority ^ quorum",
                  "where majority is (a ^ b) v (b ^ c) v (a ^ c)",
                  "and quorum is a v b v c",
                  "vote(true, true, false)"],
                true);
    assert_bool(&["gate vote(a, b, c) = majority ^ quorum",
                  "where majority is (a ^ b) v (b ^ c) v (a ^ c)",
                  "and quorum is a v b v c",
                  "vote(false, false, false)"],
                false);
    // Helper names stay out of the top-level namespace.
    let errors = eval_errors(&["gate g(a) = helper",
                               "where helper is a",
                               "helper"]);
    assert!(matches!(errors[0], EvalError::UndefinedIdentifier { .. }));
}

#[test]
fn continuation_without_a_gate_is_an_error() {
    let errors = eval_errors(&["where p is true"]);
    assert!(matches!(errors[0], EvalError::NoContinuationTarget { .. }));
}

#[test]
fn sequences_index_by_number_and_boolean() {
    assert_bool(&["s is [true, false, true]", "s(1)"], false);
    assert_bool(&["s is [true, false, true]", "s(0)"], true);
    assert_bool(&["s is [true, false]", "s(true)"], false);
    assert_bool(&["s is [true, false]", "s(false)"], true);
    // Elements are evaluated at access time, in the caller environment.
    assert_bool(&["p is false", "s is [p v true, p]", "s(0)"], true);
}

#[test]
fn sequence_bounds_are_checked() {
    let errors = eval_errors(&["s is [true, false]", "s(5)"]);
    assert!(matches!(errors[0],
                     EvalError::IndexOutOfBounds { length: 2,
                                                   found: 5,
                                                   .. }));

    let errors = eval_errors(&["s is []", "s(0)"]);
    assert!(matches!(errors[0], EvalError::IndexOutOfBounds { length: 0, .. }));
}

#[test]
fn sequence_indexing_type_checks() {
    // Indexing something that is not a sequence.
    let errors = eval_errors(&["p is true", "p(0)"]);
    assert!(matches!(errors[0], EvalError::ExpectedSequence { .. }));

    // Indexing with a sequence.
    let errors = eval_errors(&["s is [true]", "i is [0]", "s(i)"]);
    assert!(matches!(errors[0], EvalError::InvalidIndex { .. }));

    // A call that is neither a gate nor a single-argument indexing.
    let errors = eval_errors(&["s is [true, false]", "s(0, 1)"]);
    assert!(matches!(errors[0], EvalError::UndefinedGate { .. }));

    let errors = eval_errors(&["missing(0)"]);
    assert!(matches!(errors[0], EvalError::UndefinedGate { .. }));
}

#[test]
fn gate_sequences_are_frozen_on_return() {
    // The returned sequence holds literals, not references to the call's
    // locals, so it survives the call and displays as plain data.
    assert_display(&["gate latch(a, b) = [a ^ b, a v b]", "latch(true, false)"],
                   "[false, true]");
    // Nested sequences freeze recursively.
    assert_display(&["gate pair(a) = [a, [a, !a]]", "pair(true)"],
                   "[true, [true, false]]");
    // Numbers freeze to numeric literals.
    assert_display(&["gate wrap(n) = [n]", "wrap(42)"], "[42]");
}

#[test]
fn frozen_sequences_compare_equal_to_their_spelling() {
    assert_bool(&["gate latch(a, b) = [a ^ b, a v b]",
                  "out is latch(true, false)",
                  "out = [false, true]"],
                true);
    // Freezing an already-frozen sequence yields an equal sequence.
    assert_bool(&["gate latch(a, b) = [a ^ b, a v b]",
                  "gate echo(s) = s",
                  "out is latch(true, false)",
                  "echo(out) = out"],
                true);
}

#[test]
fn numbers_evaluate_to_themselves() {
    assert_display(&["42"], "42");
    assert_display(&["n is 7", "n"], "7");
}

#[test]
fn unclosed_groupings_are_parse_errors() {
    let errors = parse_errors("(true ^ false");
    assert!(matches!(errors[0], ParseError::ExpectedClosingParen { .. }));

    let errors = parse_errors("[true, false");
    assert!(matches!(errors[0], ParseError::ExpectedClosingBracket { .. }));
}

#[test]
fn trailing_tokens_are_parse_errors() {
    let errors = parse_errors("true false");
    assert!(matches!(errors[0], ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn dangling_operators_are_parse_errors() {
    let errors = parse_errors("true ^");
    assert!(matches!(errors[0], ParseError::UnexpectedEndOfInput { .. }));

    assert!(!parse_errors("^ true").is_empty());
}

#[test]
fn malformed_gate_declarations_accumulate_errors() {
    let errors = parse_errors("gate g a) = !a");
    assert!(matches!(errors[0], ParseError::MalformedGateDeclaration { .. }));

    let errors = parse_errors("gate g(a, = !a");
    assert!(matches!(errors[0], ParseError::MalformedGateDeclaration { .. }));

    // A declaration missing both its parens and its body reports more than
    // one problem.
    assert!(parse_errors("gate g").len() > 1);
}

#[test]
fn continuation_requires_a_binding_shape() {
    let errors = parse_errors("where true");
    assert!(matches!(errors[0], ParseError::ExpectedBinding { .. }));
}

#[test]
fn parse_never_returns_silent_failure() {
    // Either a clean node that consumed all tokens, or at least one error.
    for source in ["true ^", "((", "gate", "is", "s is", "] true"] {
        let (_, errors) = parse(&scan(source));
        assert!(!errors.is_empty(), "no errors for malformed input {source:?}");
    }
}

#[test]
fn example_script_works() {
    let contents = fs::read_to_string("tests/example.logic").expect("missing file");

    if let Err(e) = run_source(&contents, false) {
        panic!("Script failed: {e}");
    }
}

#[test]
fn failing_scripts_stop_with_an_error() {
    assert!(run_source("q is !p\nq", false).is_err());
    assert!(run_source("x is x", false).is_err());
}
