use rand::rngs::StdRng;
use rand::SeedableRng;
use setcal::interpreter::engine::Interpreter;
use setcal::parser::parse::Parser;
use std::fs;
use std::path::Path;

fn run_demo(name: &str) -> Vec<String> {
    let path = Path::new("demos").join(name);
    let source = fs::read_to_string(&path).expect("Failed to read demo file");

    let mut parser = Parser::new(&source).expect("Parser creation failed");
    let store = parser.parse_store().expect("Parsing failed");

    let mut interpreter = Interpreter::new(store, Vec::new(), StdRng::seed_from_u64(5));
    interpreter.run().expect("Execution failed");

    let output = String::from_utf8(interpreter.into_output()).expect("output is UTF-8");
    println!("Interpreter output:\n{}", output);
    output.lines().map(str::to_string).collect()
}

#[test]
fn test_sets_demo() {
    let output = run_demo("sets.txt");

    assert_eq!(output[0], "U apple banana cherry date");
    assert_eq!(output[3], "S apple banana cherry date");
    assert_eq!(output[4], "S banana");
    assert_eq!(output[5], "S cherry date");
    assert_eq!(output[6], "S cherry date");
    assert_eq!(output[7], "4");
    assert_eq!(output[8], "true");
    assert_eq!(output[9], "true");
}

#[test]
fn test_relations_demo() {
    let output = run_demo("relations.txt");

    assert_eq!(output[3], "true");
    assert_eq!(output[4], "true");
    assert_eq!(
        output[5],
        "R (a a) (a b) (a c) (b a) (b b) (b c) (c a) (c b) (c c)"
    );
    assert_eq!(output[6], "true");
    assert_eq!(output[7], "true");
    assert_eq!(output[8], "S a b c");
}

#[test]
fn test_control_flow_demo() {
    let output = run_demo("control_flow.txt");

    // line 4 is false and jumps to line 6, so line 5 never prints; line 6
    // picks from line 3
    assert_eq!(output.len(), 8);
    assert_eq!(output[1], "S c");
    assert_eq!(output[3], "false");
    assert!(!output.contains(&"3".to_string()), "{:?}", output);
    assert!(output[4] == "a" || output[4] == "b", "{:?}", output);
    assert_eq!(output[5], "1");
    assert_eq!(output[6], "S a b");
    assert_eq!(output[7], "2");
}
