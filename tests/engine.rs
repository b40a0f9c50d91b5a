//! End-to-end behaviour of the calculator engine.

use deskcalc::{format_number, to_binary, to_fraction, CalcError, Conversion, Engine};
use proptest::prelude::*;

fn engine_with(keys: &str) -> Engine {
    let mut engine = Engine::new();
    for c in keys.chars() {
        engine.append_token(c);
    }
    engine
}

fn eval(keys: &str) -> Result<String, CalcError> {
    engine_with(keys)
        .evaluate()
        .map(|e| e.map(|e| e.formatted_result).unwrap_or_default())
}

#[test]
fn test_division_cases() {
    assert_eq!(eval("5/0"), Err(CalcError::DivisionByZero));
    assert_eq!(eval("5/0.5"), Ok("10".into()));
}

#[test]
fn test_structural_errors() {
    assert_eq!(eval("2++2"), Err(CalcError::InvalidOperatorSequence));
    assert_eq!(eval("2+"), Err(CalcError::IncompleteEquation));
    assert_eq!(eval("2."), Err(CalcError::IncompleteEquation));
}

#[test]
fn test_leading_minus() {
    assert_eq!(eval("-5+3"), Ok("-2".into()));
}

#[test]
fn test_result_too_large() {
    let big = format!("9{}", "0".repeat(60));
    assert_eq!(eval(&format!("{}*{}", big, big)), Err(CalcError::NumberTooLarge));
}

#[test]
fn test_formatter_examples() {
    assert_eq!(format_number(2.0), "2");
    assert_eq!(format_number(2.5), "2.5");
    assert_eq!(format_number(1.0 / 3.0), "0.333");
}

#[test]
fn test_binary_examples() {
    assert_eq!(to_binary(10.0).unwrap(), "1010");
    assert_eq!(to_binary(-5.0).unwrap(), "-101");
    assert_eq!(to_binary(2.5).unwrap(), "10.1");
    assert_eq!(
        to_binary(2f64.powi(33)).unwrap_err().to_string(),
        "NUMBER TOO LARGE FOR BINARY"
    );
}

#[test]
fn test_fraction_examples() {
    assert_eq!(to_fraction(0.5).unwrap(), "1/2");
    assert_eq!(to_fraction(0.0).unwrap(), "0/1");
    assert_eq!(to_fraction(1.0 / 3.0).unwrap(), "1/3");
    assert_eq!(to_fraction(3.0).unwrap(), "3");
}

#[test]
fn test_two_equal_digits_read_as_repeating() {
    // "55" tiles with "5", so 0.55 is taken as 0.555...
    assert_eq!(to_fraction(0.55).unwrap(), "5/9");
}

#[test]
fn test_fraction_through_engine() {
    let mut engine = engine_with("1/3");
    assert_eq!(engine.evaluate().unwrap().unwrap().formatted_result, "0.333");
    assert_eq!(engine.convert_to_fraction(), Conversion::Output("1/3".into()));
}

#[test]
fn test_conversions_are_idempotent() {
    let mut engine = engine_with("22/7");
    engine.evaluate().unwrap();

    let bin1 = engine.convert_to_binary();
    let bin2 = engine.convert_to_binary();
    assert_eq!(bin1, bin2);

    let frac1 = engine.convert_to_fraction();
    let frac2 = engine.convert_to_fraction();
    assert_eq!(frac1, frac2);
    assert_eq!(engine.last_result(), Some(22.0 / 7.0));
}

#[test]
fn test_converter_error_keeps_state() {
    let mut engine = engine_with("0.1+0.2");
    engine.evaluate().unwrap();
    assert_eq!(engine.convert_to_fraction().output(), Some("FRACTION TOO COMPLEX"));
    assert_eq!(engine.equation(), "0.1+0.2");
    assert!(engine.last_result().is_some());
}

#[test]
fn test_history_window_and_storage() {
    let mut engine = Engine::new();
    for n in 1..=11 {
        engine.clear();
        for c in format!("{}+0", n).chars() {
            engine.append_token(c);
        }
        engine.evaluate().unwrap();
    }

    let recent = engine.recent_history(10);
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].display_equation, "2+0");
    assert_eq!(recent[9].display_equation, "11+0");

    let all = engine.history().all();
    assert_eq!(all.len(), 11);
    assert_eq!(all[0].to_string(), "1+0 = 1");
}

#[test]
fn test_history_uses_display_glyphs() {
    let mut engine = engine_with("9-3*2/4");
    engine.evaluate().unwrap();
    assert_eq!(engine.recent_history(1)[0].to_string(), "9−3×2÷4 = 7.5");
}

#[test]
fn test_failed_evaluation_not_recorded() {
    let mut engine = engine_with("1/0");
    assert!(engine.evaluate().is_err());
    assert!(engine.history().is_empty());
    assert_eq!(engine.last_result(), None);
}

fn operand() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100_000).prop_map(|n| n.to_string()),
        (0u32..10_000, 1u32..100).prop_map(|(i, f)| format!("{}.{:02}", i, f)),
    ]
}

proptest! {
    #[test]
    fn prop_two_operand_matches_float_arithmetic(
        a in operand(),
        b in operand(),
        op in prop::sample::select(vec!['+', '-', '*', '/']),
    ) {
        let x: f64 = a.parse().unwrap();
        let y: f64 = b.parse().unwrap();
        prop_assume!(op != '/' || y != 0.0);

        let expected = match op {
            '+' => x + y,
            '-' => x - y,
            '*' => x * y,
            _ => x / y,
        };

        let mut engine = engine_with(&format!("{}{}{}", a, op, b));
        let eval = engine.evaluate().unwrap().unwrap();
        prop_assert_eq!(eval.formatted_result, format_number(expected));
        prop_assert_eq!(engine.last_result(), Some(expected));
    }

    #[test]
    fn prop_binary_integers_match_std(n in 0u64..=u32::MAX as u64) {
        prop_assert_eq!(to_binary(n as f64).unwrap(), format!("{:b}", n));
        prop_assert_eq!(to_binary(-(n as f64)).unwrap(),
            if n == 0 { "0".to_string() } else { format!("-{:b}", n) });
    }

    #[test]
    fn prop_sixteenths_reduce(n in -1000i64..1000) {
        let value = n as f64 / 16.0;
        let mut num = n;
        let mut den = 16i64;
        while num % 2 == 0 && den > 1 {
            num /= 2;
            den /= 2;
        }
        let expected = match (num, den) {
            (0, _) => "0/1".to_string(),
            (n, 1) => n.to_string(),
            (n, d) => format!("{}/{}", n, d),
        };
        prop_assert_eq!(to_fraction(value).unwrap(), expected);
    }

    #[test]
    fn prop_converters_are_pure(x in -1e6f64..1e6) {
        prop_assert_eq!(to_binary(x), to_binary(x));
        prop_assert_eq!(to_fraction(x), to_fraction(x));
    }
}
