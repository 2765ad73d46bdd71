use linalg::{ComplexExt, Matrix, C64};

fn c(re: f64, im: f64) -> C64 {
    C64::new(re, im)
}

fn sample_a() -> Matrix {
    Matrix::square(&[c(1.0, 0.5), c(-0.25, 0.0), c(0.0, 2.0), c(0.75, -1.0)]).unwrap()
}

fn sample_b() -> Matrix {
    Matrix::from_rows(&[
        vec![c(0.0, 1.0), c(2.0, 0.0), c(-1.0, -1.0)],
        vec![c(0.5, 0.0), c(0.0, 0.0), c(0.3, 0.1)],
    ])
    .unwrap()
}

fn sample_c() -> Matrix {
    Matrix::col(&[c(0.2, 0.0), c(0.0, -0.4), c(1.5, 0.5)])
}

#[test]
fn tensor_shape_and_entries() {
    let a = sample_a();
    let b = sample_b();
    let t = a.tensor(&b);
    assert_eq!((t.height(), t.width()), (4, 6));

    for i in 0..4 {
        for j in 0..6 {
            let expected = a.get(i / 2, j / 3) * b.get(i % 2, j % 3);
            assert!(t.get(i, j).approx_eq(&expected, 1e-12));
        }
    }
}

#[test]
fn tensor_is_associative() {
    let (a, b, cc) = (sample_a(), sample_b(), sample_c());
    let left = a.tensor(&b).tensor(&cc);
    let right = a.tensor(&b.tensor(&cc));
    assert!(left.approx_eq(&right, 1e-12));
}

#[test]
fn tensor_is_bilinear() {
    let a = sample_a();
    let a2 = Matrix::from_rotation(0.1, 0.2, 0.3);
    let b = sample_b();
    let k = c(0.3, -1.2);

    let lhs = a.plus(&a2).unwrap().tensor(&b);
    let rhs = a.tensor(&b).plus(&a2.tensor(&b)).unwrap();
    assert!(lhs.approx_eq(&rhs, 1e-12));

    let scaled = a.scaled(k).tensor(&b);
    assert!(scaled.approx_eq(&a.tensor(&b.scaled(k)), 1e-12));
}

#[test]
fn low_bit_is_right_factor() {
    // |1> on the right factor sets bit 0 of the basis index.
    let zero = Matrix::col(&[c(1.0, 0.0), c(0.0, 0.0)]);
    let one = Matrix::col(&[c(0.0, 0.0), c(1.0, 0.0)]);
    let v = zero.tensor(&one);
    assert!(v.get(1, 0).approx_eq(&c(1.0, 0.0), 1e-12));
    assert!(v.get(2, 0).approx_eq(&c(0.0, 0.0), 1e-12));
}

#[test]
fn multiply_matches_hand_computation() {
    let a = sample_a();
    let v = Matrix::col(&[c(1.0, 0.0), c(0.0, 1.0)]);
    let out = a.multiply(&v).unwrap();
    assert!(out.get(0, 0).approx_eq(&c(1.0, 0.25), 1e-12));
    assert!(out.get(1, 0).approx_eq(&c(1.0, 2.75), 1e-12));
}

#[test]
fn identity_is_neutral() {
    let a = sample_a();
    let i2 = Matrix::identity(2);
    assert!(i2.multiply(&a).unwrap().approx_eq(&a, 1e-12));
    assert!(a.multiply(&i2).unwrap().approx_eq(&a, 1e-12));
}

#[test]
fn rotations_are_unitary() {
    let axes = [
        (0.5, 0.0, 0.0),
        (0.0, 0.25, 0.0),
        (0.0, 0.0, -1.0 / 16.0),
        (0.3, -0.7, 0.2),
        (1.3, 0.4, -2.2),
        (1e-7, 0.0, 0.0),
    ];
    for (x, y, z) in axes {
        let u = Matrix::from_rotation(x, y, z);
        let product = u.multiply(&u.adjoint()).unwrap();
        assert!(
            product.approx_eq(&Matrix::identity(2), 1e-9),
            "rotation ({}, {}, {}) gave {}",
            x,
            y,
            z,
            product
        );
    }
}

#[test]
fn half_turns_are_paulis() {
    let o = c(0.0, 0.0);
    let l = c(1.0, 0.0);
    let i = c(0.0, 1.0);
    let x = Matrix::square(&[o, l, l, o]).unwrap();
    let y = Matrix::square(&[o, -i, i, o]).unwrap();
    let z = Matrix::square(&[l, o, o, -l]).unwrap();
    let s = std::f64::consts::FRAC_1_SQRT_2;
    let h = Matrix::square(&[c(s, 0.0), c(s, 0.0), c(s, 0.0), c(-s, 0.0)]).unwrap();

    assert!(Matrix::from_rotation(0.5, 0.0, 0.0).approx_eq(&x, 1e-12));
    assert!(Matrix::from_rotation(0.0, 0.5, 0.0).approx_eq(&y, 1e-12));
    assert!(Matrix::from_rotation(0.0, 0.0, 0.5).approx_eq(&z, 1e-12));
    let q = (1.0f64 / 8.0).sqrt();
    assert!(Matrix::from_rotation(q, 0.0, q).approx_eq(&h, 1e-12));
}

#[test]
fn zero_and_full_turns_are_identity() {
    assert!(Matrix::from_rotation(0.0, 0.0, 0.0).approx_eq(&Matrix::identity(2), 0.0));
    assert!(Matrix::from_rotation(1.0, 0.0, 0.0).approx_eq(&Matrix::identity(2), 1e-12));
    assert!(Matrix::from_rotation(0.0, 0.0, -1.0).approx_eq(&Matrix::identity(2), 1e-12));
}

#[test]
fn quarter_turn_squares_to_half_turn() {
    let q = Matrix::from_rotation(0.0, 0.25, 0.0);
    let h = Matrix::from_rotation(0.0, 0.5, 0.0);
    assert!(q.multiply(&q).unwrap().approx_eq(&h, 1e-12));
}

#[test]
fn non_square_is_not_unitary() {
    assert!(!sample_b().is_unitary(1e-9));
    assert!(!sample_a().is_unitary(1e-9));
    assert!(Matrix::identity(4).is_unitary(1e-12));
}
