use super::triple::{classify, neighborhood, Classified, Split};
use super::*;
use crate::algebra::{EquationSet, LinXYEta, XYZ};
use crate::cfg::CoverCfg;
use crate::error::{BuildError, DivisionError, GeometryError, ParseError, VerifyError};
use crate::geometry::{ratio, ConvexPolygon, Open, Point, Rectangle};
use crate::region::Line;

fn line(a: i32, b: i32, c: i32) -> Line {
    LinXYEta::xy_eta(a, b, c)
}

fn region(lines: &[(i32, i32, i32)], eqs: &[&str]) -> RegionInput {
    RegionInput {
        lines: lines.iter().map(|&(a, b, c)| line(a, b, c)).collect(),
        equations: eqs.iter().map(|e| e.parse().unwrap()).collect::<EquationSet>(),
    }
}

fn p(x: (i64, i64), y: (i64, i64)) -> Point {
    Point::new(ratio(x.0, x.1), ratio(y.0, y.1))
}

/// `[x0, x1] x [y0, y1]` in eighths.
fn eighths(x0: i64, x1: i64, y0: i64, y1: i64) -> Rectangle {
    Rectangle::new(ratio(x0, 8), ratio(x1, 8), ratio(y0, 8), ratio(y1, 8)).unwrap()
}

fn triangle(a: Point, b: Point, c: Point) -> ConvexPolygon<Open> {
    ConvexPolygon::new(vec![a, b, c]).unwrap()
}

/// `x < 1`, `y < 1`, `x + y > 1`, where all three equations are positive.
fn corner_info() -> StableInfo {
    StableInfo::build(&region(
        &[(-1, 0, 1), (0, -1, 1), (1, 1, -1)],
        &["cos(x)", "cos(y)", "-cos(x+y)"],
    ))
    .unwrap()
}

/// Split along `x = y` with both sides carrying the line factor.
fn diagonal_triple() -> TripleInfo {
    TripleInfo::build(
        line(1, -1, 0),
        &region(&[(-1, 1, 0)], &["-sin(x-y)", "cos(x)"]),
        &region(&[], &["cos(x)"]),
        &region(&[(1, -1, 0)], &["sin(x-y)", "cos(y)"]),
    )
    .unwrap()
}

fn infos() -> CoverInfos {
    let mut infos = CoverInfos::default();
    infos.singles.insert(0, corner_info());
    infos.singles.insert(
        1,
        StableInfo::build(&region(&[(-1, 0, 1), (0, -1, 1), (1, 1, -1)], &["-cos(x)"])).unwrap(),
    );
    infos.triples.insert(0, diagonal_triple());
    infos
}

fn cfg() -> CoverCfg {
    CoverCfg {
        progress_steps: 0,
        ..CoverCfg::default()
    }
}

#[test]
fn proof_tree_parses_and_prints() {
    let text = "D E S 1 T 2 D E E E E";
    let tree: ProofTree = text.parse().unwrap();
    assert_eq!(tree.to_string(), text);
    assert_eq!(tree.leaf_count(), 7);
    assert_eq!(tree.depth(), 2);
    let spaced: ProofTree = "  D\nE  S 1\tT 2 D E E E E ".parse().unwrap();
    assert_eq!(spaced, tree);
    assert_eq!("E".parse::<ProofTree>().unwrap().leaf_count(), 1);
}

#[test]
fn proof_tree_rejects_malformed_input() {
    assert_eq!("D E E".parse::<ProofTree>(), Err(ParseError::TruncatedTree));
    assert_eq!("S".parse::<ProofTree>(), Err(ParseError::TruncatedTree));
    assert_eq!("".parse::<ProofTree>(), Err(ParseError::Empty));
    assert_eq!(
        "E E".parse::<ProofTree>(),
        Err(ParseError::Unexpected {
            position: 1,
            rest: "E".into()
        })
    );
    assert_eq!(
        "X".parse::<ProofTree>(),
        Err(ParseError::Unexpected {
            position: 0,
            rest: "X".into()
        })
    );
    assert_eq!("S -1".parse::<ProofTree>(), Err(ParseError::Number("-1".into())));
}

#[test]
fn stable_info_clips_and_flattens() {
    let info = corner_info();
    assert_eq!(
        info.polygon.vertices(),
        &[p((0, 1), (1, 1)), p((1, 1), (0, 1)), p((1, 1), (1, 1))]
    );
    assert_eq!(info.obligations.sines.len(), 0);
    assert_eq!(info.obligations.cosines.len(), 3);
    let empty = StableInfo::build(&region(&[(-1, 0, 0)], &["cos(x)"]));
    assert_eq!(empty, Err(BuildError::EmptyRegion("stable")));
}

#[test]
fn triple_info_divides_out_line_factor() {
    let info = diagonal_triple();
    // Both sides lose sin(x-y) and keep a positive constant in its place.
    let neg: Vec<String> = info.negative.obligations.cosines.iter().map(|o| o.eq.to_string()).collect();
    let pos: Vec<String> = info.positive.obligations.cosines.iter().map(|o| o.eq.to_string()).collect();
    assert!(info.negative.obligations.sines.is_empty());
    assert!(info.positive.obligations.sines.is_empty());
    assert!(neg.contains(&"cos(0)".to_string()), "{neg:?}");
    assert!(pos.contains(&"cos(0)".to_string()), "{pos:?}");
    assert_eq!(info.unstable.segment.start(), &p((0, 1), (0, 1)));
    assert_eq!(info.unstable.segment.end(), &p((1, 1), (1, 1)));
}

#[test]
fn stripping_angles_shortens_region_equations() {
    let input = region(
        &[(-1, 0, 1), (0, -1, 1), (1, 1, -1)],
        &["cos(x-y)-cos(x+y)", "sin(2x)", "cos(x)"],
    );
    let stripped = input.strip_angles(XYZ::X, XYZ::Y).unwrap();
    assert_eq!(stripped.lines, input.lines);
    let expected: EquationSet = ["cos(0)", "cos(x)"].iter().map(|e| e.parse().unwrap()).collect();
    assert_eq!(stripped.equations, expected);
    let info = StableInfo::build(&stripped).unwrap();
    assert_eq!(info.obligations.cosines.len(), 2);
    assert!(matches!(
        input.strip_angles(XYZ::Y, XYZ::Y),
        Err(DivisionError::SameAngles(_))
    ));
}

#[test]
fn classify_walks_corners_counter_clockwise() {
    let l = line(1, -1, 0);
    // Two corners on the line, one on each side.
    let Classified::Split(split) = classify(&eighths(3, 5, 3, 5), &l, 2).unwrap() else {
        panic!("corners within guard");
    };
    assert_eq!(
        split,
        Split {
            negatives: vec![p((3, 8), (5, 8))],
            zeros: vec![p((3, 8), (3, 8)), p((5, 8), (5, 8))],
            positives: vec![p((5, 8), (3, 8))],
        }
    );

    // Two sign changes give two crossing points.
    let Classified::Split(split) = classify(&eighths(2, 4, 3, 5), &l, 2).unwrap() else {
        panic!("corners within guard");
    };
    assert_eq!(split.negatives, vec![p((1, 4), (3, 8)), p((1, 2), (5, 8)), p((1, 4), (5, 8))]);
    assert_eq!(split.zeros, vec![p((3, 8), (3, 8)), p((1, 2), (1, 2))]);
    assert_eq!(split.positives, vec![p((1, 2), (3, 8))]);

    let (center, rx, ry) = neighborhood(&split.positives, &split.zeros).unwrap();
    assert_eq!(center, p((7, 16), (7, 16)));
    assert_eq!((rx, ry), (ratio(1, 16), ratio(1, 16)));
    assert!(neighborhood(&[], &split.zeros).is_none());

    match classify(&eighths(16, 24, 0, 8), &l, 2).unwrap() {
        Classified::TooFar { corner, value } => {
            assert_eq!(corner, p((2, 1), (0, 1)));
            assert_eq!(value, ratio(2, 1));
        }
        Classified::Split(_) => panic!("lower left corner sits at the guard"),
    }
}

#[test]
fn single_square_is_covered() {
    let target = triangle(p((5, 8), (5, 8)), p((7, 8), (5, 8)), p((5, 8), (7, 8)));
    let tree: ProofTree = "S 0".parse().unwrap();
    let report = verify_cover(&eighths(5, 7, 5, 7), &target, &infos(), &tree, &cfg()).unwrap();
    assert!(report.covered);
    assert_eq!(report.leaves, 1);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn divided_square_is_covered() {
    let target = triangle(p((5, 8), (5, 8)), p((7, 8), (5, 8)), p((5, 8), (7, 8)));
    let tree: ProofTree = "D S 0 S 0 S 0 S 0".parse().unwrap();
    let cfg = CoverCfg {
        progress_steps: 2,
        ..CoverCfg::default()
    };
    let report = verify_cover(&eighths(5, 7, 5, 7), &target, &infos(), &tree, &cfg).unwrap();
    assert!(report.covered);
    assert_eq!(report.leaves, 4);
}

#[test]
fn every_failing_quadrant_is_reported() {
    // The target fills the lower-left quadrant and only touches the others.
    let target = triangle(p((5, 8), (5, 8)), p((3, 4), (5, 8)), p((5, 8), (3, 4)));
    let square = eighths(5, 7, 5, 7);

    let good: ProofTree = "D E E S 0 E".parse().unwrap();
    assert!(verify_cover(&square, &target, &infos(), &good, &cfg()).unwrap().covered);

    let bad: ProofTree = "D S 1 E E E".parse().unwrap();
    let report = verify_cover(&square, &target, &infos(), &bad, &cfg()).unwrap();
    assert!(!report.covered);
    let kinds: Vec<_> = report.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![FailureKind::NotPositive, FailureKind::EmptyIntersects]);
    assert_eq!(report.diagnostics[0].square, eighths(5, 6, 6, 7));
    assert_eq!(report.diagnostics[0].detail[0], "Failure: not positive");
    assert!(report.diagnostics[0].detail.iter().any(|l| l == "f(x, y) = -cos(x)"));
    assert_eq!(report.diagnostics[1].square, eighths(5, 6, 5, 6));
}

#[test]
fn triple_leaf_across_the_diagonal() {
    let target = triangle(p((7, 16), (1, 2)), p((1, 2), (7, 16)), p((9, 16), (9, 16)));
    let tree: ProofTree = "T 0".parse().unwrap();
    let report = verify_cover(&eighths(3, 5, 3, 5), &target, &infos(), &tree, &cfg()).unwrap();
    assert!(report.covered, "{:?}", report.diagnostics);

    let far = triangle(p((17, 8), (1, 8)), p((18, 8), (1, 8)), p((17, 8), (2, 8)));
    let report = verify_cover(&eighths(16, 24, 0, 8), &far, &infos(), &tree, &cfg()).unwrap();
    assert!(!report.covered);
    assert_eq!(report.diagnostics[0].kind, FailureKind::CornerTooFar);
}

#[test]
fn triple_leaf_outside_regions_fails() {
    // Corners beyond x + y = 2 leave the seed triangle.
    let target = triangle(p((3, 4), (3, 4)), p((7, 8), (3, 4)), p((3, 4), (7, 8)));
    let tree: ProofTree = "T 0".parse().unwrap();
    let report = verify_cover(&eighths(6, 10, 6, 10), &target, &infos(), &tree, &cfg()).unwrap();
    assert!(!report.covered);
    assert_eq!(report.diagnostics[0].kind, FailureKind::OutsideRegion);
}

#[test]
fn inconsistent_inputs_abort() {
    let target = triangle(p((5, 8), (5, 8)), p((7, 8), (5, 8)), p((5, 8), (7, 8)));
    let tree: ProofTree = "S 7".parse().unwrap();
    assert_eq!(
        verify_cover(&eighths(5, 7, 5, 7), &target, &infos(), &tree, &cfg()),
        Err(VerifyError::UnknownIndex { kind: "single", index: 7 })
    );
    let tree: ProofTree = "E".parse().unwrap();
    assert_eq!(
        verify_cover(&eighths(6, 7, 6, 7), &target, &infos(), &tree, &cfg()),
        Err(VerifyError::PolygonOutsideSquare)
    );
    assert!(matches!(
        verify_cover(&eighths(5, 7, 5, 8), &target, &infos(), &tree, &cfg()),
        Err(VerifyError::Geometry(GeometryError::NotSquare(_)))
    ));
}

#[test]
fn check_square_reports_center_and_radius() {
    let info = corner_info();
    let check = check_square(3, 3, 4, &info, 10).unwrap();
    assert!(check.covered);
    assert_eq!(check.to_string(), "Center = (3/4, 3/4)\nRadius = 1/8\nCovered = true");

    let check = check_square(1, 1, 4, &info, 10).unwrap();
    assert!(!check.covered);
    assert_eq!(check.diagnostics[0].kind, FailureKind::NotSubset);
    assert_eq!(check.diagnostics[0].detail[0], "Failure: square is not a subset of polygon");

    assert!(check_square(1, 1, 0, &info, 10).is_err());
}
