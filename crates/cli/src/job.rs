//! JSON job files: everything one cover verification needs, as text.
//!
//! Rationals are strings such as `"3/4"`; lines use the `LinXYEta` grammar
//! (`x-y+eta`) and equations the trig-sum grammar (`cos(x)-2sin(x+y)`).
//! An optional `angles` pair such as `["x", "y"]` strips repeated
//! triangle-angle sines from every region's equations in that order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use billiards::algebra::{Equation, EquationSet, LinXYEta, Symbol, XYZ};
use billiards::cover::{CoverInfos, ProofTree, RegionInput, StableInfo, TripleInfo};
use billiards::geometry::{ConvexPolygon, Open, Point, Rational, Rectangle};

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    /// `[xmin, xmax, ymin, ymax]`.
    pub square: [String; 4],
    /// Target polygon vertices as `[x, y]` pairs.
    pub polygon: Vec<[String; 2]>,
    #[serde(default)]
    pub singles: BTreeMap<usize, RegionJson>,
    #[serde(default)]
    pub triples: BTreeMap<usize, TripleJson>,
    pub tree: String,
    #[serde(default)]
    pub digits: Option<u32>,
    #[serde(default)]
    pub angles: Option<[String; 2]>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionJson {
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub equations: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TripleJson {
    pub line: String,
    pub negative: RegionJson,
    #[serde(default)]
    pub unstable: RegionJson,
    pub positive: RegionJson,
}

fn rational(s: &str) -> Result<Rational> {
    s.trim()
        .parse::<Rational>()
        .with_context(|| format!("parsing rational {s:?}"))
}

fn line(s: &str) -> Result<LinXYEta> {
    s.parse::<LinXYEta>()
        .with_context(|| format!("parsing line {s:?}"))
}

pub(crate) fn angle(s: &str) -> Result<XYZ> {
    XYZ::from_name(s.trim()).with_context(|| format!("unknown angle {s:?}"))
}

impl RegionJson {
    pub fn to_input(&self) -> Result<RegionInput> {
        let lines = self.lines.iter().map(|s| line(s)).collect::<Result<_>>()?;
        let equations = self
            .equations
            .iter()
            .map(|s| s.parse::<Equation>().with_context(|| format!("parsing equation {s:?}")))
            .collect::<Result<EquationSet>>()?;
        Ok(RegionInput { lines, equations })
    }
}

impl Job {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("reading job {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing job {}", path.display()))
    }

    pub fn square(&self) -> Result<Rectangle> {
        let [xmin, xmax, ymin, ymax] = &self.square;
        Ok(Rectangle::new(rational(xmin)?, rational(xmax)?, rational(ymin)?, rational(ymax)?)?)
    }

    pub fn polygon(&self) -> Result<ConvexPolygon<Open>> {
        let vertices = self
            .polygon
            .iter()
            .map(|[x, y]| Ok(Point::new(rational(x)?, rational(y)?)))
            .collect::<Result<Vec<_>>>()?;
        ConvexPolygon::new(vertices).context("target polygon")
    }

    /// Region input with the job's angle stripping applied.
    fn input(&self, region: &RegionJson) -> Result<RegionInput> {
        let input = region.to_input()?;
        let Some([first, second]) = &self.angles else {
            return Ok(input);
        };
        input
            .strip_angles(angle(first)?, angle(second)?)
            .context("stripping angle factors")
    }

    pub fn tree(&self) -> Result<ProofTree> {
        self.tree.parse().context("parsing proof tree")
    }

    pub fn single(&self, index: usize) -> Result<StableInfo> {
        let region = self
            .singles
            .get(&index)
            .with_context(|| format!("no single region {index} in job"))?;
        StableInfo::build(&self.input(region)?).with_context(|| format!("building single {index}"))
    }

    /// Build every region the job names; this is where clipping and factor
    /// division happen.
    pub fn infos(&self) -> Result<CoverInfos> {
        let mut infos = CoverInfos::default();
        for &index in self.singles.keys() {
            infos.singles.insert(index, self.single(index)?);
        }
        for (&index, t) in &self.triples {
            let info = TripleInfo::build(
                line(&t.line)?,
                &self.input(&t.negative)?,
                &self.input(&t.unstable)?,
                &self.input(&t.positive)?,
            )
            .with_context(|| format!("building triple {index}"))?;
            infos.triples.insert(index, info);
        }
        tracing::info!(singles = infos.singles.len(), triples = infos.triples.len(), "built regions");
        Ok(infos)
    }
}
