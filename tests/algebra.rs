use lazy_num::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn assert_domain_violation(n: &Number, kind: OperationKind) {
    match n.value() {
        Err(Error::DomainViolation { kind: k, .. }) => {
            assert_eq!(k, kind, "wrong operation reported for {}", n)
        }
        other => panic!("expected a domain violation for {}, got {:?}", n, other),
    }
}

#[test]
fn literals() {
    init();
    for x in [0.0, -0.0, 1.0, -2.5, 1e300, f64::MIN_POSITIVE] {
        assert_eq!(Number::of(x).value(), Ok(x), "literal did not round-trip: {:e}", x);
    }
    assert_eq!(Number::try_of(42_i64).unwrap().value(), Ok(42.0));
    assert_eq!(Number::try_of(7_u64).unwrap().value(), Ok(7.0));
    assert_eq!("2.5".parse::<Number>().unwrap().value(), Ok(2.5));
    assert_eq!(" -3 ".parse::<Number>().unwrap().value(), Ok(-3.0));
}

#[test]
fn non_numeric_input_fails_at_construction() {
    assert_eq!(
        "two".parse::<Number>().unwrap_err(),
        Error::InvalidLiteral("two".to_string())
    );
    assert!("NaN".parse::<Number>().is_err());
    assert!(matches!(
        Number::minimum(Vec::new()),
        Err(Error::EmptyOperands(OperationKind::Min))
    ));
}

#[test]
fn chain_renders_and_evaluates() {
    init();
    let n = Number::of(2).add(3).multiply_by(4);
    assert_eq!(n.to_string(), "((2 + 3) x 4)");
    assert_eq!(n.value(), Ok(20.0));
    assert_eq!(n.kind(), Some(OperationKind::Multiply));
    assert_eq!(n.operands().len(), 2);
    assert_eq!(n.depth(), 3);
    assert_eq!(OperationKind::Multiply.arity(), algebra::Arity::Binary);
    assert_eq!(OperationKind::Max.arity(), algebra::Arity::Variadic);
}

#[test]
fn square_root() {
    assert_eq!(Number::of(4).square_root().value(), Ok(2.0));
    assert_eq!(Number::of(4).square_root().to_string(), "√(4)");
    assert_domain_violation(&Number::of(-1).square_root(), OperationKind::SquareRoot);
}

#[test]
fn division_by_zero() {
    let n = Number::of(1).divide_by(Number::of(0));
    assert_eq!(
        n.value(),
        Err(Error::DomainViolation {
            kind: OperationKind::Divide,
            values: vec![1.0, 0.0]
        })
    );
    // the divisor only has to resolve to zero
    let n = Number::of(1).divide_by(Number::of(3).subtract(3));
    assert_domain_violation(&n, OperationKind::Divide);
    assert_domain_violation(&Number::of(5).modulo(0), OperationKind::Modulo);
}

#[test]
fn construction_never_evaluates() {
    // every combinator below is out of its domain, building must still succeed
    let n = Number::of(-8)
        .square_root()
        .divide_by(0)
        .arc_cosine()
        .natural_logarithm();
    assert_eq!(n.to_string(), "ln(acos((√(-8) / 0)))");
    // the innermost failure is reported
    assert_domain_violation(&n, OperationKind::SquareRoot);
}

#[test]
fn rendering_is_independent_of_evaluation() {
    let ok = Number::of(9).square_root().power(2);
    let before = ok.to_string();
    assert_eq!(ok.value(), Ok(9.0));
    assert_eq!(ok.to_string(), before);
    assert_eq!(before, "(√(9)^2)");

    let failing = Number::of(2).subtract(5).square_root();
    let before = failing.to_string();
    assert!(failing.value().is_err());
    assert_eq!(failing.to_string(), before);
}

#[test]
fn evaluation_is_idempotent() {
    let n = Number::of(0.1).add(0.2).multiply_by(Number::pi()).sine();
    assert_eq!(n.value(), n.value());
}

#[test]
fn transcendental_domains() {
    assert_domain_violation(&Number::of(1.5).arc_cosine(), OperationKind::ArcCosine);
    assert_domain_violation(&Number::of(-1.01).arc_sine(), OperationKind::ArcSine);
    assert_eq!(Number::of(-1).arc_cosine().value(), Ok(std::f64::consts::PI));
    assert_eq!(Number::of(1).arc_sine().value(), Ok(std::f64::consts::FRAC_PI_2));

    assert_domain_violation(&Number::of(0).natural_logarithm(), OperationKind::NaturalLogarithm);
    assert_domain_violation(&Number::of(-4).binary_logarithm(), OperationKind::BinaryLogarithm);
    assert_domain_violation(&Number::of(0).decimal_logarithm(), OperationKind::DecimalLogarithm);
    assert_eq!(Number::of(8).binary_logarithm().value(), Ok(3.0));
    let log10 = Number::of(1000).decimal_logarithm().value().unwrap();
    assert!((log10 - 3.0).abs() < 1e-15, "log10(1000) = {}", log10);
    let ln = Number::e().natural_logarithm().value().unwrap();
    assert!((ln - 1.0).abs() < 1e-15, "ln(e) = {}", ln);
    assert_eq!(Number::of(0).exponential().value(), Ok(1.0));

    let pole = Number::pi().divide_by(2).tangent();
    assert_domain_violation(&pole, OperationKind::Tangent);
    assert_eq!(Number::of(0).tangent().value(), Ok(0.0));
}

#[test]
fn power_domain() {
    assert_eq!(Number::of(2).power(10).value(), Ok(1024.0));
    assert_eq!(Number::of(-2).power(3).value(), Ok(-8.0));
    assert_eq!(Number::of(0).power(0).value(), Ok(1.0));
    assert_domain_violation(&Number::of(0).power(-1), OperationKind::Power);
    let cube_root = Number::of(-8).power(Number::of(1).divide_by(3));
    assert_domain_violation(&cube_root, OperationKind::Power);
}

#[test]
fn factorial() {
    assert_eq!(Number::of(0).factorial().value(), Ok(1.0));
    assert_eq!(Number::of(6).factorial().value(), Ok(720.0));
    assert_eq!(Number::of(2).add(3).factorial().to_string(), "(2 + 3)!");
    assert_domain_violation(&Number::of(2.5).factorial(), OperationKind::Factorial);
    assert_domain_violation(&Number::of(-3).factorial(), OperationKind::Factorial);
}

#[test]
fn rounding_and_sign() {
    assert_eq!(Number::of(2.5).round().value(), Ok(3.0));
    assert_eq!(Number::of(-2.5).round().value(), Ok(-3.0));
    assert_eq!(Number::of(2.1).ceil().value(), Ok(3.0));
    assert_eq!(Number::of(-2.1).floor().value(), Ok(-3.0));
    assert_eq!(Number::of(-7).absolute().value(), Ok(7.0));
    assert_eq!(Number::of(-7).signum().value(), Ok(-1.0));
    assert_eq!(Number::of(0).signum().value(), Ok(0.0));
    assert_eq!(Number::of(-7).modulo(3).value(), Ok(-1.0));
    assert_eq!(Number::of(3).negate().value(), Ok(-3.0));
    assert_eq!(Number::of(-7).absolute().to_string(), "|-7|");
    assert_eq!(Number::of(3).negate().to_string(), "-(3)");
}

#[test]
fn min_max() {
    let n = Number::minimum([Number::of(3), Number::of(-1), Number::of(2)]).unwrap();
    assert_eq!(n.to_string(), "min(3, -1, 2)");
    assert_eq!(n.value(), Ok(-1.0));
    assert_eq!(Number::of(3).max(4.5).value(), Ok(4.5));
    assert_eq!(Number::of(3).max(4.5).to_string(), "max(3, 4.5)");
}

#[test]
fn literal_formatting() {
    assert_eq!(Number::of(2.0).to_string(), "2");
    assert_eq!(Number::of(0.5).to_string(), "0.5");
    assert_eq!(Number::of(-3.25).to_string(), "-3.25");
    assert_eq!(Number::of(1e20).to_string(), "1e20");
    assert_eq!(Number::of(1.5e-7).to_string(), "1.5e-7");
    assert_eq!(Number::of(f64::INFINITY).to_string(), "∞");
    assert_eq!(Number::pi().add(Number::e()).to_string(), "(π + e)");
}

#[test]
fn comparisons_use_values() {
    let a = Number::of(1).add(1);
    let b = Number::of(4).square_root();
    assert_ne!(a.to_string(), b.to_string());
    assert_eq!(a.equals(&b), Ok(true));
    assert_eq!(Number::of(0.1).add(0.2).equals(0.3), Ok(true));
    assert_eq!(Number::of(3).higher_than(&a), Ok(true));
    assert_eq!(a.higher_than(&b), Ok(false));
    assert_eq!(a.lower_than(3), Ok(true));
    assert!(Number::of(-1).square_root().equals(1).is_err());

    // the tolerance is relative, small magnitudes compare as exactly as large ones
    assert_eq!(Number::of(1e-13).equals(0), Ok(false));
    assert_eq!(Number::of(1e-15).higher_than(0), Ok(true));
    assert_eq!(Number::of(1e-13).higher_than(2e-13), Ok(false));
    assert_eq!(Number::of(1e-13).lower_than(2e-13), Ok(true));
    assert_eq!(Number::of(0.1e-20).add(0.2e-20).equals(0.3e-20), Ok(true));
    assert_eq!(Number::of(f64::INFINITY).equals(1e300), Ok(false));

    let strict = EvalContext::new().tolerance(0.0);
    assert_eq!(Number::of(0.1).add(0.2).equals_with(0.3, &strict), Ok(false));
}

#[test]
fn degrees() {
    let ctx = EvalContext::new().angle_unit(AngleUnit::Degrees);
    let cos = Number::of(60).cosine().value_with(&ctx).unwrap();
    assert!((cos - 0.5).abs() < 1e-15, "cos(60°) = {}", cos);
    let angle = Number::of(1).arc_tangent().value_with(&ctx).unwrap();
    assert!((angle - 45.0).abs() < 1e-12, "atan(1) = {}°", angle);
    let tan = Number::of(90).tangent();
    assert!(matches!(tan.value_with(&ctx), Err(Error::DomainViolation { .. })));
    // reported in the caller's unit
    assert_eq!(
        tan.value_with(&ctx).unwrap_err(),
        Error::DomainViolation {
            kind: OperationKind::Tangent,
            values: vec![90.0]
        }
    );
}

#[test]
fn deep_trees() {
    init();
    let mut n = Number::of(0);
    for _ in 0..100_000 {
        n = n.add(1);
    }
    assert_eq!(n.depth(), 100_001);
    assert_eq!(n.value(), Ok(100_000.0));
    let rendered = n.to_string();
    assert!(rendered.starts_with(&format!("{}0 + 1)", "(".repeat(100_000))));
    assert!(rendered.ends_with(" + 1) + 1)"));
}

#[test]
fn deep_collaborator_chains_render() {
    let data = lazy_num::statistics::Dataset::new(0..5000).unwrap();
    let mean = data.expectation();
    assert!(mean.to_string().ends_with(" + 4999) / 5000)"));
    assert_eq!(mean.value(), Ok(2499.5));
}

#[test]
fn shared_nodes_resolve_once() {
    let mut x = Number::of(1).add(0);
    for _ in 0..64 {
        x = x.multiply_by(&x);
    }
    assert_eq!(x.value(), Ok(1.0));

    let mut y = Number::of(2).square_root();
    for _ in 0..64 {
        y = y.subtract(&y);
    }
    assert_eq!(y.value(), Ok(0.0));
}

#[test]
fn shared_subtrees() {
    let x = Number::of(3).add(4);
    let y = x.multiply_by(&x);
    assert_eq!(y.to_string(), "((3 + 4) x (3 + 4))");
    assert_eq!(y.value(), Ok(49.0));
    assert_eq!(x.value(), Ok(7.0));
}

#[test]
fn numbers_are_shareable_across_threads() {
    let n = Number::of(2).power(8);
    let handle = {
        let n = n.clone();
        std::thread::spawn(move || n.value())
    };
    assert_eq!(handle.join().unwrap(), Ok(256.0));
    assert_eq!(n.value(), Ok(256.0));
}
