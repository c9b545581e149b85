// Integration tests for the set calculator

use rand::rngs::StdRng;
use rand::SeedableRng;
use setcal::interpreter::engine::Interpreter;
use setcal::interpreter::errors::RuntimeError;
use setcal::parser::parse::Parser;
use setcal::store::entry::Entry;
use setcal::Error;

/// Run `source` with a fixed seed and return the printed lines.
fn run(source: &str) -> Result<Vec<String>, Error> {
    let mut out = Vec::new();
    setcal::execute(source, &mut out, StdRng::seed_from_u64(2021))?;
    Ok(String::from_utf8(out)
        .expect("output is UTF-8")
        .lines()
        .map(str::to_string)
        .collect())
}

fn lines(output: &[&str]) -> Vec<String> {
    output.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_union_creates_set() {
    let source = "U a b c\nS a b\nS b c\nC union 2 3\n";

    let mut parser = Parser::new(source).expect("Parser creation failed");
    let store = parser.parse_store().expect("Parsing failed");
    let mut interpreter = Interpreter::new(store, Vec::new(), StdRng::seed_from_u64(0));
    interpreter.run().expect("Execution failed");

    assert!(matches!(interpreter.store().line(4), Some(Entry::Set(_))));
    let output = String::from_utf8(interpreter.into_output()).unwrap();
    assert_eq!(output, "U a b c\nS a b\nS b c\nS a b c\n");
}

#[test]
fn test_subseteq() {
    let output = run("U a b\nS a\nS a b\nC subseteq 2 3\n").unwrap();
    assert_eq!(output, lines(&["U a b", "S a", "S a b", "true"]));
}

#[test]
fn test_empty_universe() {
    let output = run("U\nS\nC empty 2\n").unwrap();
    assert_eq!(output, lines(&["U", "S", "true"]));
}

#[test]
fn test_symmetric_relation() {
    let output = run("U a b\nR (a b) (b a)\nC symmetric 2\n").unwrap();
    assert_eq!(output, lines(&["U a b", "R (a b) (b a)", "true"]));
}

#[test]
fn test_transitive_closure() {
    let output = run("U a b c\nR (a b) (b c)\nC transitive 2\nC closure_trans 2\n").unwrap();
    assert_eq!(
        output,
        lines(&["U a b c", "R (a b) (b c)", "false", "R (a b) (a c) (b c)"])
    );
}

#[test]
fn test_all_set_commands() {
    let source = "\
U a b c d
S a b
S b c d
C empty 2
C card 3
C complement 2
C union 2 3
C intersect 2 3
C minus 3 2
C subseteq 2 3
C subset 8 3
C equals 6 1
";
    let output = run(source).unwrap();

    assert_eq!(
        output,
        lines(&[
            "U a b c d",
            "S a b",
            "S b c d",
            "false",
            "3",
            "S c d",
            "S a b c d",
            "S b",
            "S c d",
            "false",
            "true",
            "false",
        ])
    );
}

#[test]
fn test_all_relation_commands() {
    let source = "\
U a b c
S a b
S b c
R (a b) (b c)
C reflexive 4
C symmetric 4
C antisymmetric 4
C transitive 4
C function 4
C domain 4
C codomain 4
C injective 4 2 3
C surjective 4 2 3
C bijective 4 2 3
C closure_ref 4
C closure_sym 4
C closure_trans 4
";
    let output = run(source).unwrap();

    assert_eq!(
        output,
        lines(&[
            "U a b c",
            "S a b",
            "S b c",
            "R (a b) (b c)",
            "false",
            "false",
            "true",
            "false",
            "true",
            "S a b",
            "S b c",
            "true",
            "true",
            "true",
            "R (a a) (a b) (b b) (b c) (c c)",
            "R (a b) (b a) (b c) (c b)",
            "R (a b) (a c) (b c)",
        ])
    );
}

#[test]
fn test_derived_values_are_reusable() {
    // line 4 becomes a set, line 6 a relation; both feed later commands
    let source = "\
U a b c
S a
R (a b)
C complement 2
C card 4
C closure_sym 3
C symmetric 6
C union 4 1
";
    let output = run(source).unwrap();

    assert_eq!(output[3], "S b c");
    assert_eq!(output[4], "2");
    assert_eq!(output[5], "R (a b) (b a)");
    assert_eq!(output[6], "true");
    assert_eq!(output[7], "S a b c");
}

#[test]
fn test_jump_resumes_at_target_line() {
    // line 4 is false and jumps to line 6; line 5 never runs
    let source = "\
U a b
S a
S b
C equals 2 3 6
C card 1
C card 2
C card 3
";
    let output = run(source).unwrap();
    assert_eq!(output, lines(&["U a b", "S a", "S b", "false", "1", "1"]));
}

#[test]
fn test_jump_target_line_is_executed() {
    // the target is itself a command that runs and produces output
    let source = "\
U a b
S a
C empty 2 5
C union 1 1
C complement 2
";
    let output = run(source).unwrap();
    assert_eq!(output, lines(&["U a b", "S a", "false", "S b"]));
}

#[test]
fn test_no_jump_without_target() {
    let output = run("U a\nS a\nC empty 2\nC card 2\n").unwrap();
    assert_eq!(output, lines(&["U a", "S a", "false", "1"]));
}

#[test]
fn test_select_picks_member() {
    let output = run("U a b c\nS a c\nC select 2 5\nC card 3\n").unwrap();

    assert_eq!(output.len(), 4);
    assert!(output[2] == "a" || output[2] == "c", "{:?}", output);
    assert_eq!(output[3], "1");
}

#[test]
fn test_select_from_relation() {
    let output = run("U a b c d\nR (a b) (c c)\nC select 2 4\n").unwrap();
    assert!(["a", "b", "c"].contains(&output[2].as_str()), "{:?}", output);
}

#[test]
fn test_select_empty_jumps() {
    let output = run("U a b\nS\nC select 2 5\nC card 1\nC card 2\n").unwrap();
    assert_eq!(output, lines(&["U a b", "S", "0"]));
}

#[test]
fn test_parse_errors() {
    let cases = [
        "U a b\nS c\nC card 2\n",
        "U a a\nC card 1\n",
        "U a empty\nC card 1\n",
        "U a\nS a a\nC card 2\n",
        "U a\nR (a a) (a a)\nC card 1\n",
        "U a\nC nope 1\n",
        "U a\nC card 0\n",
        "U a\nC card 1\nS a\n",
        "U a\nS a\n",
        "X a\n",
    ];

    for source in cases {
        assert!(
            matches!(run(source), Err(Error::Parse(_))),
            "expected parse error for {:?}",
            source
        );
    }
}

#[test]
fn test_runtime_errors() {
    assert!(matches!(
        run("U a\nS a\nC union 2\n"),
        Err(Error::Runtime(RuntimeError::ArgumentCount { .. }))
    ));
    assert!(matches!(
        run("U a\nS a\nC card 9\n"),
        Err(Error::Runtime(RuntimeError::LineOutOfRange { .. }))
    ));
    assert!(matches!(
        run("U a\nS a\nC symmetric 2\n"),
        Err(Error::Runtime(RuntimeError::ArgumentType { .. }))
    ));
    assert!(matches!(
        run("U a\nS a\nC card 2\nC empty 2 3\n"),
        Err(Error::Runtime(RuntimeError::InvalidJumpTarget { .. }))
    ));
}

#[test]
fn test_backward_jump_is_rejected() {
    let mut out = Vec::new();
    let result = setcal::execute(
        "U a b\nS a\nC card 2\nC card 1\nC empty 2 3\n",
        &mut out,
        StdRng::seed_from_u64(0),
    );

    assert!(matches!(
        result,
        Err(Error::Runtime(RuntimeError::InvalidJumpTarget { target: 3, line: 5, .. }))
    ));
    assert_eq!(String::from_utf8(out).unwrap(), "U a b\nS a\n1\n2\n");
}

#[test]
fn test_four_arguments_with_jump() {
    let output = run("U a b\nS a\nS b\nR (a b)\nC bijective 4 2 3 7\nC card 1\nC card 2\n").unwrap();
    assert_eq!(output, lines(&["U a b", "S a", "S b", "R (a b)", "true", "2", "1"]));
}

#[test]
fn test_output_before_error_is_kept() {
    let mut out = Vec::new();
    let result = setcal::execute("U a\nS a\nC card 2\nC card 7\n", &mut out, StdRng::seed_from_u64(0));

    assert!(result.is_err());
    assert_eq!(String::from_utf8(out).unwrap(), "U a\nS a\n1\n");
}

#[test]
fn test_error_messages_name_the_line() {
    let err = run("U a\nS b\nC card 2\n").unwrap_err();
    assert_eq!(err.to_string(), "line 2: 'b' is not an element of the universe");

    let err = run("U a\nS a\nC union 2\n").unwrap_err();
    assert_eq!(err.to_string(), "line 3: 'union' expects 2 arguments, got 1");

    assert!(matches!(
        err,
        Error::Runtime(ref e) if e.line() == Some(3)
    ));
}
