use steprange::{range_incl, Direction, Producer, Step};

mod helper;
use helper::{check, steps};

#[test]
fn ascending() {
    check(range_incl(2_i64, 5), &[2, 3, 4, 5]);
}

#[test]
fn descending() {
    check(range_incl(5_i64, 2), &[5, 4, 3, 2]);
}

#[test]
fn single() {
    check(range_incl(3_i64, 3), &[3]);
    check(range_incl(-3_i64, -3), &[-3]);
}

#[test]
fn ascending_then_end() {
    assert_eq!(
        steps(range_incl(2_i64, 5), 6),
        [
            Step::Next(2),
            Step::Next(3),
            Step::Next(4),
            Step::Next(5),
            Step::End,
            Step::End
        ]
    );
}

#[test]
fn single_then_end() {
    assert_eq!(
        steps(range_incl(3_i64, 3), 3),
        [Step::Next(3), Step::End, Step::End]
    );
}

/// Compare against the standard library's ranges for every pair of small bounds.
#[test]
fn matches_std_for_small_bounds() {
    for a in -6_i64..=6 {
        for b in -6_i64..=6 {
            if a <= b {
                itertools::assert_equal(range_incl(a, b), a..=b);
            } else {
                itertools::assert_equal(range_incl(a, b), (b..=a).rev());
            }
            assert_eq!(
                range_incl(a, b).count(),
                usize::try_from(a.abs_diff(b)).unwrap() + 1
            );
        }
    }
}

#[test]
fn full_domain_of_u8() {
    let values: Vec<u8> = range_incl(u8::MIN, u8::MAX).collect();
    assert_eq!(values.len(), 256);
    itertools::assert_equal(values, 0..=255);

    let values: Vec<u8> = range_incl(u8::MAX, u8::MIN).collect();
    itertools::assert_equal(values, (0..=255).rev());
}

#[test]
fn exhaustion_flag() {
    let mut r = range_incl(1_i64, 0);
    assert_eq!(r.direction(), Direction::Descending);
    assert!(!r.is_exhausted());
    assert_eq!(r.advance(), Step::Next(1));
    assert!(!r.is_exhausted());
    assert_eq!(r.advance(), Step::Next(0));
    assert!(r.is_exhausted());
    assert_eq!(r.cursor(), 0);
    assert_eq!(r.end(), 0);
    assert_eq!(r.advance(), Step::End);
    assert!(r.is_exhausted());
}

#[test]
fn size_hint_counts_the_end_bound() {
    let mut r = range_incl(0_i64, 2);
    assert_eq!(Producer::size_hint(&r), (3, Some(3)));
    let _ = r.advance();
    let _ = r.advance();
    assert_eq!(Producer::size_hint(&r), (1, Some(1)));
    let _ = r.advance();
    assert_eq!(Producer::size_hint(&r), (0, Some(0)));
}

#[test]
fn size_hint_when_count_exceeds_usize() {
    let r = range_incl(u128::MIN, u128::MAX);
    assert_eq!(Producer::size_hint(&r), (usize::MAX, None));
}

/// Generates a test per integer type checking ranges that include the type's extremes.
macro_rules! extremes {
    ($($t:ident),* $(,)?) => {
        $(
            paste::paste! {
                #[test]
                fn [<extremes_ $t>]() {
                    check(
                        range_incl($t::MAX - 2, $t::MAX),
                        &[$t::MAX - 2, $t::MAX - 1, $t::MAX],
                    );
                    check(
                        range_incl($t::MIN + 2, $t::MIN),
                        &[$t::MIN + 2, $t::MIN + 1, $t::MIN],
                    );
                    check(range_incl($t::MAX, $t::MAX), &[$t::MAX]);
                    check(range_incl($t::MIN, $t::MIN), &[$t::MIN]);
                }
            }
        )*
    };
}

extremes!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
