use numera::evaluate;
use proptest::prelude::*;

/// Produces arithmetic expressions that always evaluate to a finite value.
///
/// Division and exponentiation are left out so generated inputs can hit
/// neither division-by-zero errors nor non-finite intermediate results.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..1000, 1u32..100).prop_map(|(whole, frac)| format!("{whole}.{frac}")),
    ];

    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!['+', '-', '*']), inner.clone())
                .prop_map(|(left, op, right)| format!("{left} {op} {right}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.prop_map(|e| format!("-{e}")),
        ]
    })
}

proptest! {
    #[test]
    fn generated_expressions_evaluate(expr in expression()) {
        prop_assert!(evaluate(&expr).is_ok());
    }

    #[test]
    fn independent_evaluations_agree(expr in expression()) {
        prop_assert_eq!(evaluate(&expr), evaluate(&expr));
    }

    #[test]
    fn added_padding_never_changes_the_value(expr in expression()) {
        let padded = format!(" \t{} \t",
                             expr.replace('(', " ( ")
                                 .replace(')', " ) ")
                                 .replace('+', " + ")
                                 .replace('-', " - ")
                                 .replace('*', " * "));

        prop_assert_eq!(evaluate(&expr), evaluate(&padded));
    }
}
