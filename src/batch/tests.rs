use crate::batch::{BatchError, SweepRange, evaluate_batch, sweep};
use crate::binding::Binding;
use crate::expression::{Evaluation, ExpressionError, add, multiply};

#[test]
fn test_sweep_range_parse() {
    let range = "0:4:5".parse::<SweepRange>();
    assert_eq!(range, SweepRange::new(0.0, 4.0, 5));
    if let Ok(range) = range {
        assert_eq!(range.points(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}

#[test]
fn test_sweep_range_parse_errors() {
    assert_eq!(
        "0:4".parse::<SweepRange>(),
        Err(BatchError::InvalidRange("0:4".to_string()))
    );
    assert_eq!(
        "a:4:2".parse::<SweepRange>(),
        Err(BatchError::InvalidRange("a:4:2".to_string()))
    );
    assert_eq!("0:4:0".parse::<SweepRange>(), Err(BatchError::ZeroSteps));
    assert!("0:inf:3".parse::<SweepRange>().is_err());
}

#[test]
fn test_sweep_range_single_point_and_descending() {
    let range = SweepRange::new(2.0, 9.0, 1);
    assert!(range.is_ok());
    if let Ok(range) = range {
        assert_eq!(range.points(), vec![2.0]);
    }

    let range = SweepRange::new(1.0, -1.0, 3);
    assert!(range.is_ok());
    if let Ok(range) = range {
        assert_eq!(range.points(), vec![1.0, 0.0, -1.0]);
    }
}

#[test]
fn test_evaluate_batch_preserves_order() {
    let square = multiply("x", "x");
    let bindings: Vec<Binding> = (0..64_u32)
        .map(|i| Binding::new().with("x", f64::from(i)))
        .collect();

    let results = evaluate_batch(&square, "x", &bindings);
    assert_eq!(results.len(), 64);
    for (i, result) in results.into_iter().enumerate() {
        let v = i as f64;
        assert_eq!(
            result,
            Ok(Evaluation {
                value: v * v,
                derivative: 2.0 * v,
            })
        );
    }
}

#[test]
fn test_evaluate_batch_failures_are_independent() {
    let cross = multiply("x", "y");
    let bindings = vec![
        Binding::from([("x", 2.0), ("y", 5.0)]),
        Binding::from([("x", 2.0)]),
        Binding::from([("x", 3.0), ("y", 1.0)]),
    ];

    let results = evaluate_batch(&cross, "x", &bindings);
    assert_eq!(
        results,
        vec![
            Ok(Evaluation {
                value: 10.0,
                derivative: 5.0,
            }),
            Err(ExpressionError::UnboundSymbol("y".to_string())),
            Ok(Evaluation {
                value: 3.0,
                derivative: 1.0,
            }),
        ]
    );
}

#[test]
fn test_sweep_rebinds_variable_over_base() {
    let expr = add(multiply("a", "x"), 1.0);
    let base = Binding::from([("a", 3.0), ("x", 100.0)]);
    let range = SweepRange::new(0.0, 2.0, 3);
    assert!(range.is_ok());
    if let Ok(range) = range {
        let results = sweep(&expr, "x", &base, &range);
        let values: Vec<(f64, f64)> = results
            .iter()
            .filter_map(|(point, result)| result.as_ref().ok().map(|e| (*point, e.value)))
            .collect();
        assert_eq!(values, vec![(0.0, 1.0), (1.0, 4.0), (2.0, 7.0)]);
        assert!(
            results
                .iter()
                .all(|(_, r)| matches!(r, Ok(e) if e.derivative == 3.0))
        );
    }
}
