mod side;

pub use side::{Error, ToSide};

use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Classification {
    Equilateral,
    Isosceles,
    Scalene,
    #[serde(rename = "Right Isosceles")]
    RightIsosceles,
    #[serde(rename = "Right Scalene")]
    RightScalene,
    Invalid,
}

impl Classification {
    pub fn is_right(&self) -> bool {
        matches!(
            self,
            Classification::RightIsosceles | Classification::RightScalene
        )
    }

    /// The classification without the right angle refinement
    pub fn family(&self) -> Classification {
        match self {
            Classification::RightIsosceles => Classification::Isosceles,
            Classification::RightScalene => Classification::Scalene,
            other => *other,
        }
    }

    fn into_right(self) -> Classification {
        match self {
            Classification::Isosceles => Classification::RightIsosceles,
            Classification::Scalene => Classification::RightScalene,
            other => other,
        }
    }
}

impl Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Classification::Equilateral => "Equilateral",
            Classification::Isosceles => "Isosceles",
            Classification::Scalene => "Scalene",
            Classification::RightIsosceles => "Right Isosceles",
            Classification::RightScalene => "Right Scalene",
            Classification::Invalid => "Invalid",
        };

        write!(f, "{}", label)
    }
}

/// Classifies the triangle with sides `a`, `b` and `c`.
///
/// Fails only when a side cannot be read as a number. Degenerate geometry,
/// such as a non positive side or a side as long as the other two together,
/// is reported as [`Classification::Invalid`]. Comparisons are exact, so a
/// right triangle built from a rounded square root is not detected as right.
///
/// A NaN side is `Invalid` as well. This departs from a literal `<= 0.0`
/// check, which NaN slips past all the way to `Scalene`.
pub fn classify(a: impl ToSide, b: impl ToSide, c: impl ToSide) -> Result<Classification, Error> {
    let (a, b, c) = (a.to_side()?, b.to_side()?, c.to_side()?);

    // negated so that NaN is rejected too
    if !(a > 0.0 && b > 0.0 && c > 0.0) {
        return Ok(Classification::Invalid);
    }

    if a + b <= c || a + c <= b || b + c <= a {
        return Ok(Classification::Invalid);
    }

    if a == b && b == c {
        return Ok(Classification::Equilateral);
    }

    let classification = if a == b || b == c || a == c {
        Classification::Isosceles
    } else {
        Classification::Scalene
    };

    let mut sides = [a, b, c];
    sides.sort_by(f64::total_cmp);

    if sides[0].powi(2) + sides[1].powi(2) == sides[2].powi(2) {
        return Ok(classification.into_right());
    }

    Ok(classification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::*;

    #[test]
    fn should_classify_equilateral() -> Result<(), Error> {
        assert_eq!(classify(3, 3, 3)?, Equilateral);
        assert_eq!(classify(100, 100, 100)?, Equilateral);
        assert_eq!(classify(0.1, 0.1, 0.1)?, Equilateral);

        Ok(())
    }

    #[test]
    fn should_classify_isosceles_for_any_equal_pair() -> Result<(), Error> {
        assert_eq!(classify(5, 5, 8)?, Isosceles);
        assert_eq!(classify(5, 8, 5)?, Isosceles);
        assert_eq!(classify(8, 5, 5)?, Isosceles);
        assert_eq!(classify(3.5, 3.5, 4.5)?, Isosceles);

        Ok(())
    }

    #[test]
    fn should_classify_scalene() -> Result<(), Error> {
        assert_eq!(classify(4, 5, 6)?, Scalene);
        assert_eq!(classify(3, 4, 6)?, Scalene);
        assert_eq!(classify(3.0, 4.0, 5.1)?, Scalene);
        assert_eq!(classify(1.0, 2.0, 2.99)?, Scalene);

        Ok(())
    }

    #[test]
    fn should_classify_right_scalene() -> Result<(), Error> {
        assert_eq!(classify(3, 4, 5)?, RightScalene);
        assert_eq!(classify(5, 3, 4)?, RightScalene);
        assert_eq!(classify(3, 4.0, 5)?, RightScalene);
        assert_eq!(classify(5, 12, 13)?, RightScalene);

        Ok(())
    }

    #[test]
    fn should_not_refine_approximate_right_isosceles() -> Result<(), Error> {
        // the rounded square root of 2 does not square back exactly
        assert_eq!(classify(1.0, 1.0, 1.414213562373095)?, Isosceles);
        assert_eq!(classify(5.0, 5.0, 7.071067811865476)?, Isosceles);

        assert_eq!(classify(1.0, 1.0, 2_f64.sqrt())?, Isosceles);

        Ok(())
    }

    #[test]
    fn should_reject_non_positive_sides() -> Result<(), Error> {
        assert_eq!(classify(-1, 2, 3)?, Invalid);
        assert_eq!(classify(1, -2, 3)?, Invalid);
        assert_eq!(classify(1, 2, -3)?, Invalid);
        assert_eq!(classify(-1, -2, -3)?, Invalid);
        assert_eq!(classify(0, 4, 5)?, Invalid);
        assert_eq!(classify(4, 0, 5)?, Invalid);
        assert_eq!(classify(4, 5, 0)?, Invalid);
        assert_eq!(classify(0, 0, 0)?, Invalid);

        Ok(())
    }

    #[test]
    fn should_reject_triangle_inequality_violations() -> Result<(), Error> {
        assert_eq!(classify(1, 2, 10)?, Invalid);
        assert_eq!(classify(1, 10, 2)?, Invalid);
        assert_eq!(classify(10, 1, 2)?, Invalid);

        Ok(())
    }

    #[test]
    fn should_reject_boundary_sums() -> Result<(), Error> {
        assert_eq!(classify(1, 2, 3)?, Invalid);
        assert_eq!(classify(1, 1, 2)?, Invalid);
        assert_eq!(classify(1.0, 2.0, 3.0)?, Invalid);

        Ok(())
    }

    #[test]
    fn should_reject_non_finite_sides() -> Result<(), Error> {
        assert_eq!(classify(f64::NAN, 4.0, 5.0)?, Invalid);
        assert_eq!(classify(f64::INFINITY, 4.0, 5.0)?, Invalid);
        assert_eq!(
            classify(f64::INFINITY, f64::INFINITY, f64::INFINITY)?,
            Invalid
        );

        Ok(())
    }

    #[test]
    fn should_coerce_numeric_strings() -> Result<(), Error> {
        assert_eq!(classify("3", 4, 5)?, RightScalene);
        assert_eq!(classify("3", "3", String::from("3"))?, Equilateral);
        assert_eq!(classify(" 0 ", 4, 5)?, Invalid);

        Ok(())
    }

    #[test]
    fn should_fail_on_non_numeric_input() {
        assert_eq!(
            classify("a", "b", "c"),
            Err(Error::NotANumber("a".to_string()))
        );
        assert_eq!(classify(None::<f64>, 4, 5), Err(Error::Missing));
        assert_eq!(
            classify(3, 4, Some("five")),
            Err(Error::NotANumber("five".to_string()))
        );
    }

    #[test]
    fn should_be_invariant_under_permutation() -> Result<(), Error> {
        let triangles = [
            (3.0, 3.0, 3.0),
            (5.0, 5.0, 8.0),
            (4.0, 5.0, 6.0),
            (3.0, 4.0, 5.0),
            (1.0, 2.0, 3.0),
            (0.0, 4.0, 5.0),
            (2.5, 6.0, 6.5),
        ];

        for (a, b, c) in triangles {
            let expected = classify(a, b, c)?;
            let permutations = [(a, c, b), (b, a, c), (b, c, a), (c, a, b), (c, b, a)];

            for (x, y, z) in permutations {
                assert_eq!(classify(x, y, z)?, expected, "{} {} {}", x, y, z);
            }
        }

        Ok(())
    }

    #[test]
    fn should_keep_family_for_valid_triangles() -> Result<(), Error> {
        for n in 1..20 {
            let side = n as f64 * 0.7;
            assert_eq!(classify(side, side, side)?, Equilateral);

            let isosceles = classify(side, side, side * 1.5)?;
            assert_eq!(isosceles.family(), Isosceles);

            let scalene = classify(side * 2.0, side * 3.0, side * 4.0)?;
            assert_eq!(scalene.family(), Scalene);
        }

        Ok(())
    }

    #[test]
    fn should_render_labels() {
        assert_eq!(RightScalene.to_string(), "Right Scalene");
        assert_eq!(RightIsosceles.to_string(), "Right Isosceles");
        assert_eq!(Invalid.to_string(), "Invalid");
        assert!(RightIsosceles.is_right());
        assert!(!Equilateral.is_right());
        assert_eq!(RightScalene.family(), Scalene);
    }
}
