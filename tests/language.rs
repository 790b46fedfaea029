use std::{collections::HashMap, fs};

use formulang::{interpreter::series::SymbolTable, run};
use walkdir::WalkDir;

const CLOSE: [f64; 10] = [10.0, 12.0, 15.0, 14.0, 16.0, 18.0, 20.0, 19.0, 22.0, 25.0];

fn market_data() -> HashMap<String, Vec<f64>> {
    let open = vec![9.0, 11.0, 14.0, 15.0, 15.0, 17.0, 19.0, 20.0, 21.0, 23.0];
    let high = vec![11.0, 13.0, 16.0, 16.0, 17.0, 19.0, 21.0, 21.0, 23.0, 26.0];
    let low = vec![8.0, 10.0, 13.0, 13.0, 14.0, 16.0, 18.0, 18.0, 20.0, 22.0];

    HashMap::from([("CLOSE".to_string(), CLOSE.to_vec()),
                   ("OPEN".to_string(), open),
                   ("HIGH".to_string(), high),
                   ("LOW".to_string(), low)])
}

fn assert_success(src: &str) -> SymbolTable {
    run(src, market_data()).unwrap_or_else(|e| panic!("Formula failed: {e}\n{src}"))
}

fn assert_failure(src: &str) {
    if run(src, market_data()).is_ok() {
        panic!("Formula succeeded but was expected to fail:\n{src}")
    }
}

fn assert_series_eq(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "length differs: {actual:?} vs {expected:?}");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "index {i}: expected NaN, found {a}");
        } else {
            assert!((a - e).abs() < 1e-9, "index {i}: expected {e}, found {a}");
        }
    }
}

#[test]
fn documented_formulas_run() {
    let mut count = 0;

    for entry in WalkDir::new("docs").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_formula_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code, market_data()) {
                panic!("Formula example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No formula examples found in docs");
}

fn extract_formula_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```formula") {
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

#[test]
fn composed_window_functions() {
    let symbols = assert_success("V1:=MA(REF(HHV(CLOSE,2),1),3); V2:=LLV(CLOSE,2);");

    // HHV(CLOSE,2)        = [10,12,15,15,16,18,20,20,22,25]
    // REF(..., 1)         = [NaN,10,12,15,15,16,18,20,20,22]
    // MA(..., 3) averages the non-NaN points of each trailing window of three.
    assert_series_eq(&symbols["V1"],
                     &[f64::NAN,
                       10.0,
                       11.0,
                       37.0 / 3.0,
                       14.0,
                       46.0 / 3.0,
                       49.0 / 3.0,
                       18.0,
                       58.0 / 3.0,
                       62.0 / 3.0]);
    assert_series_eq(&symbols["V2"],
                     &[10.0, 10.0, 12.0, 14.0, 14.0, 16.0, 18.0, 19.0, 19.0, 22.0]);
    assert_eq!(symbols.len(), 2);
}

#[test]
fn scalar_broadcast_and_grouping() {
    let symbols = assert_success("V1:=(1+CLOSE)*2;");
    assert_series_eq(&symbols["V1"],
                     &[22.0, 26.0, 32.0, 30.0, 34.0, 38.0, 42.0, 40.0, 46.0, 52.0]);
}

#[test]
fn operator_precedence_and_associativity() {
    let symbols = assert_success("A:=1+2*3; B:=(1+2)*3; C:=10-2-3; D:=12/2/3; E:=8-2*3+1;");
    assert_series_eq(&symbols["A"], &[7.0; 10]);
    assert_series_eq(&symbols["B"], &[9.0; 10]);
    assert_series_eq(&symbols["C"], &[5.0; 10]);
    assert_series_eq(&symbols["D"], &[2.0; 10]);
    assert_series_eq(&symbols["E"], &[3.0; 10]);
}

#[test]
fn both_assignment_operators() {
    let symbols = assert_success("V1:CLOSE; V2:=CLOSE;");
    assert_eq!(symbols["V1"], symbols["V2"]);
}

#[test]
fn reassignment_keeps_last_value() {
    let symbols = assert_success("V1:=CLOSE;\nV1:=V1*2;\nV1:=V1-CLOSE;");
    assert_series_eq(&symbols["V1"], &CLOSE);
    assert_eq!(symbols.len(), 1);
}

#[test]
fn symbols_read_earlier_assignments() {
    let symbols = assert_success("MID:=(HIGH+LOW)/2; SPREAD:=CLOSE-MID;");
    assert_series_eq(&symbols["SPREAD"][..2], &[0.5, 0.5]);
}

#[test]
fn expression_statements_leave_no_symbols() {
    let symbols = assert_success("CLOSE+OPEN; MA(CLOSE,3);");
    assert!(symbols.is_empty());
}

#[test]
fn every_kind_of_whitespace_separates_tokens() {
    let symbols = assert_success("V1:=CLOSE\u{000B}+\t1;\r\n\u{000C}V2 : V1 ;");
    assert_series_eq(&symbols["V2"],
                     &[11.0, 13.0, 16.0, 15.0, 17.0, 19.0, 21.0, 20.0, 23.0, 26.0]);
}

#[test]
fn empty_program_returns_empty_table() {
    assert!(assert_success("").is_empty());
    assert!(assert_success("  \n\t ").is_empty());
}

#[test]
fn identifiers_are_case_sensitive_and_unicode() {
    let symbols = assert_success("v1:=CLOSE; 均线:=MA(CLOSE,3); Ratio2:=v1/均线;");
    assert!(symbols.contains_key("v1"));
    assert!(symbols.contains_key("均线"));
    assert!(symbols.contains_key("Ratio2"));

    // `close` is not the reserved `CLOSE`.
    assert_failure("V1:=close;");
}

#[test]
fn missing_points_propagate_through_arithmetic() {
    let inputs = HashMap::from([("CLOSE".to_string(), vec![1.0, f64::NAN, 3.0])]);
    let symbols = run("V1:=CLOSE+1; V2:=MA(CLOSE,2); V3:=1/CLOSE;", inputs).unwrap();

    assert_series_eq(&symbols["V1"], &[2.0, f64::NAN, 4.0]);
    assert_series_eq(&symbols["V2"], &[1.0, 1.0, 3.0]);
    assert_series_eq(&symbols["V3"], &[1.0, f64::NAN, 1.0 / 3.0]);
}

#[test]
fn numbers_without_inputs_are_empty_series() {
    let symbols = run("V1:=1+2;", HashMap::new()).unwrap();
    assert!(symbols["V1"].is_empty());
}

#[test]
fn literals_with_leading_or_trailing_dot() {
    let symbols = assert_success("V1:=.5+1.;");
    assert_series_eq(&symbols["V1"], &[1.5; 10]);
}

#[test]
fn windows_longer_than_the_series() {
    let symbols = assert_success("H:=HHV(CLOSE,100); L:=LLV(CLOSE,100); M:=MA(CLOSE,100);");
    assert_series_eq(&symbols["H"],
                     &[10.0, 12.0, 15.0, 15.0, 16.0, 18.0, 20.0, 20.0, 22.0, 25.0]);
    assert_series_eq(&symbols["L"], &[10.0; 10]);
    assert_series_eq(&symbols["M"][..3], &[10.0, 11.0, 37.0 / 3.0]);
}

#[test]
fn zero_length_moving_average_is_all_missing() {
    let symbols = assert_success("V1:=MA(CLOSE,0);");
    assert!(symbols["V1"].iter().all(|v| v.is_nan()));
}

#[test]
fn malformed_programs_fail() {
    assert_failure("V1:=MA(CLOSE);");
    assert_failure("V1:=1+;");
    assert_failure("CLOSE:=1;");
    assert_failure("V1:=CLOSE");
    assert_failure("V1:=V2;");
    assert_failure("V1:=FOO(CLOSE,2);");
    assert_failure("V1:=SMA(CLOSE,2);");
    assert_failure("V1:=CLOSE>1;");
    assert_failure("V1:=CLOSE/0;");
    assert_failure("V1:=1.2.3;");
    assert_failure("V1:=CLOSE@2;");
    assert_failure(";");
}
