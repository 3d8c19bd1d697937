use std::f64::consts::{FRAC_PI_4, PI, TAU};

use komplex::error::{Component, InvalidReason};
use komplex::{Error, I, Komplex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 500;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xC0FFEE)
}

fn sample_part<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(-100.0..100.0)
}

fn sample<R: Rng>(rng: &mut R) -> Komplex {
    Komplex::from_cartesian(sample_part(rng), sample_part(rng)).unwrap()
}

/// Shortest distance between two angles, in radians.
fn angle_delta(a: f64, b: f64) -> f64 {
    let delta = (a - b).rem_euclid(TAU);
    delta.min(TAU - delta)
}

#[test]
fn cartesian_construction_keeps_parts() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let (re, im) = (sample_part(&mut rng), sample_part(&mut rng));
        let k = Komplex::from_cartesian(re, im).unwrap();

        assert_eq!(k.as_cartesian(), (re, im));
        assert!((k.r() - (re * re + im * im).sqrt()).abs() <= 1e-9 * k.r().max(1.0));
        assert!(k.th() > -PI && k.th() <= PI);
    }
}

#[test]
fn polar_construction_round_trips() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let r: f64 = rng.random_range(0.1..100.0);
        let th: f64 = rng.random_range(-10.0..10.0);

        let k = Komplex::from_polar(r, th).unwrap();
        let (re, im) = k.as_cartesian();
        let rederived = Komplex::from_cartesian(re, im).unwrap();

        assert!((rederived.r() - r).abs() <= 1e-9 * r);
        assert!(angle_delta(rederived.th(), th) <= 1e-9, "{th} vs {}", rederived.th());
        assert!(angle_delta(k.th(), th) <= 1e-9);
    }
}

#[test]
fn addition_and_multiplication_commute() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let a = sample(&mut rng);
        let b = sample(&mut rng);

        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
    }
}

#[test]
fn identities() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let a = sample(&mut rng);

        assert_eq!(a + Komplex::ZERO, a);
        assert_eq!(a + 0.0, a);
        assert_eq!(a * Komplex::ONE, a);
        assert_eq!(a * 1.0, a);
        assert_eq!(-(-a), a);
        assert_eq!(a.conjugate().conjugate(), a);
        assert_eq!(a - a, Komplex::ZERO);
    }
}

#[test]
fn division_undoes_multiplication() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let a = sample(&mut rng);
        let b = sample(&mut rng);

        if b.is_zero() {
            continue;
        }

        assert_eq!((a / b) * b, a);
        assert_eq!(b * b.inv(), Komplex::ONE);
    }
}

#[test]
fn invalid_construction() {
    match Komplex::from_cartesian(f64::NAN, 0.0) {
        Err(Error::InvalidArgument(invalid)) => {
            assert_eq!(invalid.component(), Component::Re);
            assert_eq!(*invalid.reason(), InvalidReason::IsNaN);
        }
        other => panic!("unexpected {other:?}"),
    }

    assert!(matches!(
        Komplex::from_polar(-1.0, 0.0),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn zero_divisor() {
    let zero = Komplex::from_cartesian(0.0, 0.0).unwrap();

    assert_eq!(I.checked_div(zero), Err(Error::DivisionByZero));
    assert_eq!(zero.checked_inv(), Err(Error::DivisionByZero));
}

#[test]
fn formatting_examples() {
    assert_eq!(I.to_string(), "0.0 + 1.0 i");
    assert_eq!(format!("{:.2}", I * I), "-1.00 + 0.00 i");

    let product =
        Komplex::from_cartesian(2.0, 3.0).unwrap() * Komplex::from_cartesian(4.0, 5.0).unwrap();
    assert_eq!(product.format_precision(2), "-7.00 + 22.00 i");

    let rotated = Komplex::from_polar(1.0, FRAC_PI_4).unwrap();
    assert_eq!(
        format!("{rotated:?}"),
        "Komplex(re=0.71, im=0.71, r=1.00, th=0.79)"
    );
}

#[test]
fn display_parses_back() {
    let mut rng = rng();

    for _ in 0..SAMPLES {
        let k = sample(&mut rng);
        let parsed: Komplex = k.to_string().parse().unwrap();

        assert_eq!(parsed.as_cartesian(), k.as_cartesian());
    }
}

#[test]
fn serde_json_round_trip() {
    let k = Komplex::from_polar(2.5, -2.0).unwrap();

    let json = serde_json::to_string(&k).unwrap();
    let back: Komplex = serde_json::from_str(&json).unwrap();

    assert_eq!(back.as_cartesian(), k.as_cartesian());
    // the polar pair is re-derived from the Cartesian one
    assert_eq!(back, k);
}
