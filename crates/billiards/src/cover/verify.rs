//! Parallel walk of a proof tree over the cover square.
//!
//! Siblings under a `Divide` run through nested `rayon::join`. Each task owns
//! its evaluator clone; the only shared mutable state is the progress
//! counter. Every leaf is evaluated even after a failure elsewhere, so one run
//! reports all failing leaves.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::info::{StableInfo, TripleInfo};
use super::leaf::{check_empty, check_single, check_triple};
use super::report::{CoverReport, Diagnostic, SquareCheck};
use super::tree::ProofTree;
use crate::cfg::CoverCfg;
use crate::error::{GeometryError, VerifyError};
use crate::evaluator::Evaluator;
use crate::geometry::{int, polygon_in_rect, ratio, ConvexPolygon, Open, Point, Rectangle};

/// Region infos referenced by index from `S i` and `T i` leaves.
#[derive(Clone, Debug, Default)]
pub struct CoverInfos {
    pub singles: BTreeMap<usize, StableInfo>,
    pub triples: BTreeMap<usize, TripleInfo>,
}

impl CoverInfos {
    fn single(&self, index: usize) -> Result<&StableInfo, VerifyError> {
        self.singles
            .get(&index)
            .ok_or(VerifyError::UnknownIndex { kind: "single", index })
    }

    fn triple(&self, index: usize) -> Result<&TripleInfo, VerifyError> {
        self.triples
            .get(&index)
            .ok_or(VerifyError::UnknownIndex { kind: "triple", index })
    }
}

struct Outcome {
    covered: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Outcome {
    fn leaf(diagnostic: Option<Diagnostic>) -> Self {
        Self {
            covered: diagnostic.is_none(),
            diagnostics: diagnostic.into_iter().collect(),
        }
    }

    fn and(mut self, other: Outcome) -> Self {
        self.covered &= other.covered;
        self.diagnostics.extend(other.diagnostics);
        self
    }
}

struct Verifier<'a> {
    polygon: &'a ConvexPolygon<Open>,
    infos: &'a CoverInfos,
    guard: i64,
    evaluator: Evaluator,
    total: u64,
    step: u64,
    done: AtomicU64,
}

impl<'a> Verifier<'a> {
    fn new(polygon: &'a ConvexPolygon<Open>, infos: &'a CoverInfos, tree: &ProofTree, cfg: &CoverCfg) -> Self {
        let total = tree.leaf_count();
        let step = match cfg.progress_steps as u64 {
            0 => 0,
            steps => (total / steps).max(1),
        };
        Self {
            polygon,
            infos,
            guard: cfg.corner_guard,
            evaluator: Evaluator::new(cfg.bits()),
            total,
            step,
            done: AtomicU64::new(0),
        }
    }

    fn run(&self, square: &Rectangle, node: &ProofTree) -> Result<Outcome, VerifyError> {
        let children = match node {
            ProofTree::Divide(children) => children,
            leaf => {
                let diagnostic = self.leaf(square, leaf)?;
                self.tick();
                return Ok(Outcome::leaf(diagnostic));
            }
        };
        let [ul, ur, ll, lr] = square.quadrants();
        let ((a, b), (c, d)) = rayon::join(
            || rayon::join(|| self.run(&ul, &children[0]), || self.run(&ur, &children[1])),
            || rayon::join(|| self.run(&ll, &children[2]), || self.run(&lr, &children[3])),
        );
        Ok(a?.and(b?).and(c?).and(d?))
    }

    fn leaf(&self, square: &Rectangle, leaf: &ProofTree) -> Result<Option<Diagnostic>, VerifyError> {
        tracing::debug!(square = %square, leaf = %leaf, "leaf");
        let mut eval = self.evaluator.clone();
        let diagnostic = match *leaf {
            ProofTree::Empty => check_empty(square, self.polygon),
            ProofTree::Single(i) => check_single(&mut eval, square, self.infos.single(i)?)?,
            ProofTree::Triple(i) => check_triple(&mut eval, square, self.infos.triple(i)?, self.guard)?,
            ProofTree::Divide(_) => None,
        };
        if let Some(d) = &diagnostic {
            tracing::warn!(kind = %d.kind, square = %d.square, detail = ?d.detail, "leaf failed");
        }
        Ok(diagnostic)
    }

    fn tick(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if self.step > 0 && (done % self.step == 0 || done == self.total) {
            tracing::info!(done, total = self.total, "cover progress");
        }
    }
}

/// Check that `tree` proves `square` covered, where `square` must contain
/// `polygon`.
///
/// Returns `Err` only when the run cannot be trusted or the inputs do not fit
/// together; a failing leaf gives `covered = false` with a diagnostic.
pub fn verify_cover(
    square: &Rectangle,
    polygon: &ConvexPolygon<Open>,
    infos: &CoverInfos,
    tree: &ProofTree,
    cfg: &CoverCfg,
) -> Result<CoverReport, VerifyError> {
    if !square.is_square() {
        return Err(GeometryError::NotSquare(square.to_string()).into());
    }
    if !polygon_in_rect(polygon, square) {
        return Err(VerifyError::PolygonOutsideSquare);
    }
    let verifier = Verifier::new(polygon, infos, tree, cfg);
    tracing::info!(leaves = verifier.total, bits = cfg.bits(), "verifying cover");
    let outcome = verifier.run(square, tree)?;
    tracing::info!(
        covered = outcome.covered,
        failures = outcome.diagnostics.len(),
        "cover verified"
    );
    Ok(CoverReport {
        covered: outcome.covered,
        leaves: verifier.total,
        diagnostics: outcome.diagnostics,
    })
}

/// Run a single stable check on the square with center
/// `(numer_x, numer_y) / denom` and side `1 / denom`.
pub fn check_square(
    numer_x: i64,
    numer_y: i64,
    denom: i64,
    info: &StableInfo,
    digits: u32,
) -> Result<SquareCheck, VerifyError> {
    if denom <= 0 {
        return Err(GeometryError::EmptyInterval {
            lower: "0".to_string(),
            upper: denom.to_string(),
        }
        .into());
    }
    let center = Point::new(ratio(numer_x, denom), ratio(numer_y, denom));
    let radius = ratio(1, denom) / int(2);
    let square = Rectangle::new(
        &center.x - &radius,
        &center.x + &radius,
        &center.y - &radius,
        &center.y + &radius,
    )?;
    let mut eval = Evaluator::with_digits(digits);
    let diagnostic = check_single(&mut eval, &square, info)?;
    Ok(SquareCheck {
        center,
        radius,
        covered: diagnostic.is_none(),
        diagnostics: diagnostic.into_iter().collect(),
    })
}
