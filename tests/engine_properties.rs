use num_bigint::BigUint;
use ring_power::decimal::BigDecimal;
use ring_power::matrix::SquareMatrix;
use ring_power::power::{power, power_by_decimal, power_by_digits};
use ring_power::recurrence::{linear_recurrence, profile_coloring, Readout, TransferModel};
use ring_power::ring::{ModRing, Modulus};
use ring_power::EngineError;

fn modulus(m: u64) -> Modulus {
    Modulus::new(m).unwrap()
}

fn sample_matrices(m: Modulus) -> Vec<SquareMatrix<ModRing>> {
    vec![
        SquareMatrix::from_integers(m, [[3, 1, 4], [1, 5, 9], [2, 6, 5]]).unwrap(),
        SquareMatrix::from_integers(m, [[-1, 0, 7], [8, -2, 8], [1, 8, 2]]).unwrap(),
        SquareMatrix::from_integers(m, [[0, 0, 1], [1, 0, 0], [0, 1, 0]]).unwrap(),
        SquareMatrix::from_integers(m, [[999_999, 2, 3], [4, 999_998, 6], [7, 8, 999_997]]).unwrap(),
    ]
}

#[test]
fn ring_operations_close_and_invert() {
    for m in [2u64, 3, 10, 97, 1_000_003, u32::MAX as u64 + 15] {
        let md = modulus(m);
        let probes = [0, 1, 2, m / 2, m - 2, m - 1];
        for &a in &probes {
            for &b in &probes {
                let (x, y) = (ModRing::new(a, md), ModRing::new(b, md));
                for result in [x + y, x - y, x * y] {
                    assert!(result.value() < m);
                }
                assert_eq!((x + y) - y, x);
            }
        }
    }
}

#[test]
fn matrix_product_is_associative() {
    let m = modulus(1_000_003);
    let matrices = sample_matrices(m);
    for a in &matrices {
        for b in &matrices {
            for c in &matrices {
                assert_eq!(&(a * b) * c, a * &(b * c));
            }
        }
    }
}

#[test]
fn identity_is_neutral_on_both_sides() {
    let m = modulus(1_000_003);
    let id = SquareMatrix::identity_mod(3, m);
    for a in sample_matrices(m) {
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
    }
}

#[test]
fn native_and_decimal_exponents_are_equivalent() {
    let m = modulus(1_000_003);
    let exponents = [0u64, 1, 2, 3, 7, 8, 64, 1000, 65_535, 1_000_000_007, u64::MAX];
    for base in sample_matrices(m) {
        let id = base.identity_like();
        for &n in &exponents {
            let decimal: BigDecimal = n.to_string().parse().unwrap();
            assert_eq!(
                power(base.clone(), n, id.clone()),
                power_by_decimal(base.clone(), &decimal, id.clone()),
                "exponent {n}"
            );
        }
    }
}

#[test]
fn decimal_exponent_beyond_u64() {
    // 3^(2 * 10^30) mod 7: ord(3) = 6 and 2 * 10^30 = 2 mod 6, so the result is 9 mod 7
    let m = modulus(7);
    let exponent: BigDecimal = format!("2{}", "0".repeat(30)).parse().unwrap();
    assert_eq!(exponent.to_u64(), None);
    let x = power_by_decimal(ModRing::new(3, m), &exponent, ModRing::one(m));
    assert_eq!(x.value(), 2);
}

#[test]
fn binary_digits_round_trip() {
    let fifty = "12345678901234567890123456789012345678901234567890";
    for text in ["0", "1", "255", "1000000007", fifty] {
        let decimal: BigDecimal = text.parse().unwrap();
        let bits = decimal.to_binary_digits();
        let expected = BigUint::parse_bytes(text.as_bytes(), 10).unwrap();
        assert_eq!(bits.to_biguint(), expected, "{text}");

        // most-significant bit comes last in produced order
        let rebuilt = bits
            .lsb_first()
            .rev()
            .fold(BigUint::from(0u32), |acc, bit| acc * 2u32 + u32::from(bit));
        assert_eq!(rebuilt, expected, "{text}");
    }
    assert_eq!("255".parse::<BigDecimal>().unwrap().to_binary_digits().to_string(), "11111111");
}

#[test]
fn digits_drive_power_directly() {
    let m = modulus(1_000_000_007);
    let digits = BigDecimal::from(1_000_000_006u64).to_binary_digits();
    let x = power_by_digits(ModRing::new(5, m), &digits, ModRing::one(m));
    assert_eq!(x.value(), 1);
}

#[test]
fn five_term_recurrence_scenario() {
    let model = linear_recurrence(modulus(1_000_003), &[1, 1, 1, 1, 1]).unwrap();
    assert_eq!(model.value_at(1).unwrap().value(), 1);
    assert_eq!(model.value_at(6).unwrap().value(), 16);
    assert_eq!(model.value_at_decimal(&"6".parse().unwrap()).unwrap().value(), 16);
}

#[test]
fn single_cell_coloring_scenario() {
    let model = profile_coloring(1, modulus(1_000_000_007)).unwrap();
    assert_eq!(model.value_at(1).unwrap().value(), 2);
    assert_eq!(model.value_at_decimal(&"1".parse().unwrap()).unwrap().value(), 2);
}

#[test]
fn divide_by_two_scenario() {
    let division = "1000003".parse::<BigDecimal>().unwrap().divide_by_two();
    assert_eq!(division.quotient.to_string(), "500001");
    assert_eq!(division.remainder, 1);
}

#[test]
fn custom_readout_reads_requested_cell() {
    let m = modulus(1_000_000_007);
    let q = SquareMatrix::from_integers(m, [[1, 1], [1, 0]]).unwrap();
    let model =
        TransferModel::new(q, Readout::Cell { row: 0, col: 1 }, ModRing::one(m)).unwrap();
    // (Q^n)[0][1] = F(n)
    assert_eq!(model.after_steps(10).value(), 55);
    assert_eq!(model.value_at(11).unwrap().value(), 55);
    assert_eq!(model.value_at(0), Err(EngineError::IndexBeforeAnchor));
}
