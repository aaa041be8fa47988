use proptest::prelude::*;
use segsect::math::point::{self, perp_prod};
use segsect::{classify, Flags, IntersectionResult, Point};

const TOL: f64 = 1e-9;

fn coord() -> impl Strategy<Value = f64> {
    (-50i32..50).prop_map(f64::from)
}

fn grid_point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

fn any_point() -> impl Strategy<Value = Point> {
    (-1e3..1e3f64, -1e3..1e3f64).prop_map(|(x, y)| Point::new(x, y))
}

/// Parameter of `p` along `v1 -> v2`.
fn param_along(p: &Point, v1: &Point, v2: &Point) -> f64 {
    let v = v2 - v1;
    (p - v1).dot(&v) / v.dot(&v)
}

proptest! {
    #[test]
    fn skew_classification_is_symmetric(
        u1 in grid_point(), u2 in grid_point(), v1 in grid_point(), v2 in grid_point(),
    ) {
        prop_assume!(perp_prod(&(u2 - u1), &(v2 - v1)) != 0.0);

        let uv = classify(u1, u2, v1, v2);
        let vu = classify(v1, v2, u1, u2);
        prop_assert_eq!(uv.flags().swap_uv(), vu.flags());
        match (uv.point(), vu.point()) {
            (Some(a), Some(b)) => prop_assert!(point::eq(&a, &b), "a={:?} b={:?}", a, b),
            (None, None) => prop_assert!(uv.is_none() && vu.is_none()),
            _ => prop_assert!(false, "uv={:?} vu={:?}", uv, vu),
        }
    }

    #[test]
    fn skew_point_lies_on_both_segments(
        u1 in grid_point(), u2 in grid_point(), v1 in grid_point(), v2 in grid_point(),
    ) {
        prop_assume!(perp_prod(&(u2 - u1), &(v2 - v1)) != 0.0);

        if let Some(hit) = classify(u1, u2, v1, v2).point() {
            let tu = param_along(&hit, &u1, &u2);
            let tv = param_along(&hit, &v1, &v2);
            prop_assert!((-TOL..=1.0 + TOL).contains(&tu), "tu={}", tu);
            prop_assert!((-TOL..=1.0 + TOL).contains(&tv), "tv={}", tv);
        }
    }

    #[test]
    fn coincident_points(p in any_point()) {
        let r = classify(p, p, p, p);
        prop_assert_eq!(
            r,
            IntersectionResult::Point {
                flags: Flags::DEGENERATE_U
                    | Flags::DEGENERATE_V
                    | Flags::COLLINEAR
                    | Flags::U1
                    | Flags::U2
                    | Flags::V1
                    | Flags::V2,
                point: p,
            }
        );
    }

    #[test]
    fn distinct_points(p in grid_point(), q in grid_point()) {
        prop_assume!(p != q);
        prop_assert_eq!(
            classify(p, p, q, q),
            IntersectionResult::None {
                flags: Flags::DEGENERATE_U | Flags::DEGENERATE_V | Flags::COLLINEAR
            }
        );
    }

    #[test]
    fn parallel_offset_segments(
        u1 in grid_point(),
        dir in grid_point(),
        offset in grid_point(),
        shift in -5i32..5,
        stretch in 1i32..4,
    ) {
        prop_assume!(perp_prod(&dir, &offset) != 0.0);

        let u2 = u1 + dir;
        let v1 = u1 + dir * f64::from(shift) + offset;
        let v2 = v1 + dir * f64::from(stretch);
        prop_assert_eq!(
            classify(u1, u2, v1, v2),
            IntersectionResult::None { flags: Flags::PARALLEL }
        );
    }

    #[test]
    fn full_overlap_is_the_segment_itself(a in grid_point(), b in grid_point()) {
        prop_assume!(a != b);
        let r = classify(a, b, a, b);
        prop_assert_eq!(r.segment(), Some((a, b)));
        prop_assert!(r.flags().contains(Flags::U1 | Flags::U2 | Flags::V1 | Flags::V2));
    }

    #[test]
    fn collinear_overlap_matches_interval_overlap(
        base in grid_point(),
        dir in grid_point(),
        s in proptest::array::uniform4(-10i32..10),
    ) {
        prop_assume!(dir != Point::zeros());
        prop_assume!(s[0] != s[1] && s[2] != s[3]);

        let at = |k: i32| base + dir * f64::from(k);
        let (u1, u2, v1, v2) = (at(s[0]), at(s[1]), at(s[2]), at(s[3]));
        let lo = s[0].min(s[1]).max(s[2].min(s[3]));
        let hi = s[0].max(s[1]).min(s[2].max(s[3]));

        let r = classify(u1, u2, v1, v2);
        prop_assert!(r.flags().contains(Flags::COLLINEAR | Flags::PARALLEL));
        match r {
            IntersectionResult::Segment { start, end, .. } => {
                prop_assert!(lo < hi, "unexpected overlap {:?}", r);
                let t1 = param_along(&start, &v1, &v2);
                let t2 = param_along(&end, &v1, &v2);
                prop_assert!(-TOL <= t1 && t1 <= t2 && t2 <= 1.0 + TOL, "t1={} t2={}", t1, t2);
                let (expected_start, expected_end) = if s[2] < s[3] { (at(lo), at(hi)) } else { (at(hi), at(lo)) };
                prop_assert!(point::eq(&start, &expected_start));
                prop_assert!(point::eq(&end, &expected_end));
            }
            IntersectionResult::Point { point, .. } => {
                prop_assert_eq!(lo, hi);
                prop_assert!(point::eq(&point, &at(lo)));
            }
            IntersectionResult::None { .. } => prop_assert!(lo > hi),
        }
    }

    #[test]
    fn add_then_sub_round_trips(p in any_point(), q in any_point()) {
        let back = point::sub(&point::add(&p, &q), &q);
        prop_assert!(point::eq(&back, &p), "back={:?} p={:?}", back, p);
    }

    #[test]
    fn rotation_round_trips(p in any_point(), pivot in any_point(), angle in -10.0..10.0f64) {
        let back = point::rotate_wrt(&point::rotate_wrt(&p, angle, &pivot), -angle, &pivot);
        prop_assert!(point::eq(&back, &p), "back={:?} p={:?}", back, p);
    }
}

#[test]
fn skew_example() {
    let r = classify(
        Point::new(1.0, 4.0),
        Point::new(4.0, 1.0),
        Point::new(2.0, 1.0),
        Point::new(4.0, 3.0),
    );
    let Some(hit) = r.point() else {
        panic!("expected a point, got {r:?}");
    };
    assert!(point::eq(&hit, &Point::new(3.0, 2.0)), "hit={hit:?}");
}

#[test]
fn sub_segment_overlap_example() {
    let r = classify(
        Point::new(1.0, 2.0),
        Point::new(4.0, 2.0),
        Point::new(2.0, 2.0),
        Point::new(5.0, 2.0),
    );
    let Some((start, end)) = r.segment() else {
        panic!("expected a segment, got {r:?}");
    };
    assert!(point::eq(&start, &Point::new(2.0, 2.0)));
    assert!(point::eq(&end, &Point::new(4.0, 2.0)));
}
