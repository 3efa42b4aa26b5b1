use std::fs;

use intsub::{
    error::{ParseError, RuntimeError},
    run,
};
use walkdir::WalkDir;

#[test]
fn sample_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "isub"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        match output_of(&source) {
            Ok(actual) => assert_eq!(actual, expected, "Program {path:?} printed the wrong output"),
            Err(e) => panic!("Program {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No sample programs found in tests/programs");
}

/// Wraps statements in a program declaring `x`, `y` and `z`.
fn program(body: &str) -> String {
    format!("program T\ninteger x, y, z\nsubroutine T()\n{body}\nendsubroutine\nend T\n")
}

fn output_of(src: &str) -> Result<String, Box<dyn std::error::Error>> {
    let mut out = Vec::new();
    run(src, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn assert_output(body: &str, expected: &str) {
    match output_of(&program(body)) {
        Ok(actual) => assert_eq!(actual, expected),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn parse_error_of(src: &str) -> ParseError {
    match run(src, &mut Vec::new()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e.downcast_ref::<ParseError>()
                   .unwrap_or_else(|| panic!("Expected a parse error, got: {e}"))
                   .clone(),
    }
}

fn runtime_error_of(src: &str) -> RuntimeError {
    match run(src, &mut Vec::new()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e.downcast_ref::<RuntimeError>()
                   .unwrap_or_else(|| panic!("Expected a runtime error, got: {e}"))
                   .clone(),
    }
}

#[test]
fn demo_program_prints_quotient_and_remainder() {
    let source = "program Demo\ninteger x, y\nsubroutine Demo()\nx <- 10\ny <- x / 3\noutput \
                  y\noutput x - y * 3\nendsubroutine\nend Demo\n";
    assert_eq!(output_of(source).unwrap(), "3\n1\n");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("x <- 1 + 2\noutput x", "3\n");
    assert_output("x <- 7 * 9\noutput x", "63\n");
    assert_output("x <- 8 - 5\noutput x", "3\n");
    assert_output("x <- 10 / 2\noutput x", "5\n");
    assert_output("x <- 4\ny <- x * x\nz <- y - x\noutput z", "12\n");
}

#[test]
fn operator_precedence_and_grouping() {
    assert_output("output 2 + 3 * 4", "14\n");
    assert_output("output (2 + 3) * 4", "20\n");
    assert_output("output 10 - 2 - 3", "5\n");
    assert_output("output 64 / 4 / 2", "8\n");
    assert_output("output ((1))", "1\n");
}

#[test]
fn division_rounds_toward_negative_infinity() {
    assert_output("output -7 / 2", "-4\n");
    assert_output("output 7 / -2", "-4\n");
    assert_output("output -7 / -2", "3\n");
    assert_output("output 7 / 2", "3\n");
    assert_output("output -8 / 2", "-4\n");
    assert_output("output 0 / -5", "0\n");
}

#[test]
fn negative_literals() {
    assert_output("output -5", "-5\n");
    assert_output("x <- -5\noutput x * -1", "5\n");
    assert_output("output 3 - -2", "5\n");
    assert_output("output -9223372036854775808", "-9223372036854775808\n");
}

#[test]
fn declared_variables_start_at_zero() {
    assert_output("output x\noutput y\noutput z", "0\n0\n0\n");
    assert_output("x <- 5\noutput y + x", "5\n");
}

#[test]
fn multiple_declaration_lines_are_all_visible() {
    let source = "program P\ninteger a\ninteger b, c\nsubroutine P()\na <- 1\nb <- 2\nc <- \
                  3\noutput a + b + c\nendsubroutine\nend P";
    assert_eq!(output_of(source).unwrap(), "6\n");
}

#[test]
fn duplicate_declarations_are_accepted() {
    let source = "program P\ninteger a, a\ninteger a\nsubroutine P()\na <- 7\noutput \
                  a\nendsubroutine\nend P";
    assert_eq!(output_of(source).unwrap(), "7\n");
}

#[test]
fn keywords_ignore_case() {
    let source = "PROGRAM Up\nInteger v\nSUBROUTINE Up()\nv <- 2\nOUTPUT v\nEndSubroutine\nEND Up";
    assert_eq!(output_of(source).unwrap(), "2\n");
}

#[test]
fn comment_lines_are_ignored() {
    let source = "# header\nprogram C\n# between\ninteger x\nsubroutine C()\n#x <- 99\nx <- 1\n# \
                  output 5\noutput x\nendsubroutine\nend C\n# trailer";
    assert_eq!(output_of(source).unwrap(), "1\n");
}

#[test]
fn statements_need_no_separator() {
    assert_output("x <- 1 y <- 2 output x + y", "3\n");
}

#[test]
fn head_and_tail_names_must_match() {
    let err = parse_error_of("program A\ninteger x\nsubroutine A()\noutput x\nendsubroutine\nend B");
    assert_eq!(err,
               ParseError::NameMismatch { head: "A".to_string(),
                                          tail: "B".to_string(),
                                          line: 6, });
}

#[test]
fn head_and_tail_names_are_case_sensitive() {
    let err = parse_error_of("program Abc integer x subroutine Abc() output x endsubroutine end abc");
    assert!(matches!(err, ParseError::NameMismatch { .. }));
}

#[test]
fn subroutine_name_is_not_checked() {
    let source = "program A integer x subroutine Other() output 1 endsubroutine end A";
    assert_eq!(output_of(source).unwrap(), "1\n");
}

#[test]
fn assigning_undeclared_variable_is_error() {
    let err = runtime_error_of(&program("w <- 1"));
    assert_eq!(err,
               RuntimeError::UnboundIdentifier { name: "w".to_string(),
                                                 line: 4, });
}

#[test]
fn reading_undeclared_variable_is_error() {
    let err = runtime_error_of(&program("x <- w + 1"));
    assert!(matches!(err, RuntimeError::UnboundIdentifier { ref name, .. } if name == "w"));
}

#[test]
fn variable_names_are_case_sensitive() {
    let err = runtime_error_of(&program("X <- 1"));
    assert!(matches!(err, RuntimeError::UnboundIdentifier { .. }));
}

#[test]
fn division_by_zero_is_error() {
    let err = runtime_error_of(&program("x <- 1 / y"));
    assert_eq!(err, RuntimeError::DivisionByZero { line: 4 });
}

#[test]
fn overflow_is_error() {
    let err = runtime_error_of(&program("x <- 9223372036854775807 + 1"));
    assert!(matches!(err, RuntimeError::Overflow { .. }));

    let err = runtime_error_of(&program("x <- -9223372036854775808 / -1"));
    assert!(matches!(err, RuntimeError::Overflow { .. }));
}

#[test]
fn output_before_failure_is_kept() {
    let mut out = Vec::new();
    let res = run(&program("output 1\noutput 2\nx <- 1 / 0\noutput 3"), &mut out);

    assert!(res.is_err());
    assert_eq!(out, b"1\n2\n");
}

#[test]
fn unrecognized_input_is_lexical_error() {
    let err = parse_error_of(&program("x <- 3 % 2"));
    assert_eq!(err,
               ParseError::UnrecognizedInput { text: "%".to_string(),
                                               line: 4, });
}

#[test]
fn comment_in_middle_of_line_is_lexical_error() {
    let err = parse_error_of(&program("x <- 3 # not a comment"));
    assert!(matches!(err, ParseError::UnrecognizedInput { line: 4, .. }));
}

#[test]
fn indented_comment_is_lexical_error() {
    let err = parse_error_of(&program("x <- 3\n  # indented"));
    assert_eq!(err,
               ParseError::UnrecognizedInput { text: "# indented".to_string(),
                                               line: 5, });

    let err = parse_error_of(&program("\t# tabbed"));
    assert!(matches!(err, ParseError::UnrecognizedInput { line: 4, .. }));
}

#[test]
fn unary_minus_only_applies_to_literals() {
    assert!(matches!(parse_error_of(&program("output -x")), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error_of(&program("output -(1)")), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error_of(&program("output - - 3")), ParseError::UnexpectedToken { .. }));
}

#[test]
fn keyword_cannot_be_assigned() {
    let err = parse_error_of(&program("end <- 1"));
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn empty_subroutine_is_syntax_error() {
    let err = parse_error_of("program P integer x subroutine P() endsubroutine end P");
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn missing_declarations_is_syntax_error() {
    let err = parse_error_of("program P subroutine P() output 1 endsubroutine end P");
    assert!(matches!(err, ParseError::UnexpectedToken { .. }));
}

#[test]
fn unclosed_parenthesis_is_syntax_error() {
    let err = parse_error_of(&program("output (1 + 2"));
    assert_eq!(err, ParseError::ExpectedClosingParen { line: 4 });
}

#[test]
fn truncated_program_is_syntax_error() {
    let err = parse_error_of("program P\ninteger x\nsubroutine P()\noutput x");
    assert_eq!(err, ParseError::UnexpectedEndOfInput { line: 4 });
}

#[test]
fn trailing_tokens_are_syntax_error() {
    let err = parse_error_of("program P integer x subroutine P() output x endsubroutine end P output");
    assert!(matches!(err, ParseError::UnexpectedTrailingTokens { .. }));
}

#[test]
fn oversized_literal_is_error() {
    let err = parse_error_of(&program("output 99999999999999999999"));
    assert!(matches!(err, ParseError::LiteralTooLarge { .. }));
}
