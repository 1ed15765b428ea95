//! The conversion contract shared by every strategy.

use atk_core::UnitSystem;

use crate::error::{ConversionError, ConversionResult};
use crate::hook::Hook;
use crate::null::NullUnitConv;
use crate::pchip::PchipUnitConv;
use crate::poly::PolyUnitConv;

/// Raw conversion step of a strategy.
///
/// Both directions return *candidates*: every value the strategy considers
/// a possible answer, before limits and uniqueness are applied.
pub trait RawConversion {
    fn raw_eng_to_phys(&self, eng_value: f64) -> Vec<f64>;
    fn raw_phys_to_eng(&self, phys_value: f64) -> Vec<f64>;
}

/// Closed set of conversion strategies, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    Null(NullUnitConv),
    Poly(PolyUnitConv),
    Pchip(PchipUnitConv),
}

impl RawConversion for Strategy {
    fn raw_eng_to_phys(&self, eng_value: f64) -> Vec<f64> {
        match self {
            Self::Null(s) => s.raw_eng_to_phys(eng_value),
            Self::Poly(s) => s.raw_eng_to_phys(eng_value),
            Self::Pchip(s) => s.raw_eng_to_phys(eng_value),
        }
    }

    fn raw_phys_to_eng(&self, phys_value: f64) -> Vec<f64> {
        match self {
            Self::Null(s) => s.raw_phys_to_eng(phys_value),
            Self::Poly(s) => s.raw_phys_to_eng(phys_value),
            Self::Pchip(s) => s.raw_phys_to_eng(phys_value),
        }
    }
}

impl From<NullUnitConv> for Strategy {
    fn from(s: NullUnitConv) -> Self {
        Self::Null(s)
    }
}

impl From<PolyUnitConv> for Strategy {
    fn from(s: PolyUnitConv) -> Self {
        Self::Poly(s)
    }
}

impl From<PchipUnitConv> for Strategy {
    fn from(s: PchipUnitConv) -> Self {
        Self::Pchip(s)
    }
}

/// Converts a field value between engineering and physics units.
///
/// Limits are always in engineering units. A forward conversion rejects
/// out-of-range input; an inverse conversion drops out-of-range candidates.
/// Either way exactly one value must remain.
#[derive(Debug, Clone)]
pub struct UnitConv {
    id: u32,
    strategy: Strategy,
    eng_units: String,
    phys_units: String,
    lower_limit: Option<f64>,
    upper_limit: Option<f64>,
    post_eng_to_phys: Hook,
    pre_phys_to_eng: Hook,
}

impl UnitConv {
    /// Wrap a strategy. Interpolated strategies start with their knot range
    /// as limits; the others start unlimited.
    pub fn new(id: u32, strategy: impl Into<Strategy>) -> Self {
        let strategy = strategy.into();
        let (lower_limit, upper_limit) = match &strategy {
            Strategy::Pchip(p) => {
                let (lo, hi) = p.domain();
                (Some(lo), Some(hi))
            }
            Strategy::Null(_) | Strategy::Poly(_) => (None, None),
        };
        Self {
            id,
            strategy,
            eng_units: String::new(),
            phys_units: String::new(),
            lower_limit,
            upper_limit,
            post_eng_to_phys: Hook::identity(),
            pre_phys_to_eng: Hook::identity(),
        }
    }

    /// Identity conversion with the conventional id.
    pub fn null() -> Self {
        Self::new(NullUnitConv::ID, NullUnitConv)
    }

    pub fn with_units(mut self, eng_units: impl Into<String>, phys_units: impl Into<String>) -> Self {
        self.eng_units = eng_units.into();
        self.phys_units = phys_units.into();
        self
    }

    pub fn with_limits(mut self, lower: Option<f64>, upper: Option<f64>) -> Self {
        self.set_conversion_limits(lower, upper);
        self
    }

    pub fn with_post_eng_to_phys(mut self, hook: Hook) -> Self {
        self.post_eng_to_phys = hook;
        self
    }

    pub fn with_pre_phys_to_eng(mut self, hook: Hook) -> Self {
        self.pre_phys_to_eng = hook;
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn eng_units(&self) -> &str {
        &self.eng_units
    }

    pub fn phys_units(&self) -> &str {
        &self.phys_units
    }

    pub fn limits(&self) -> (Option<f64>, Option<f64>) {
        (self.lower_limit, self.upper_limit)
    }

    /// Store engineering-unit limits. Not validated against the strategy.
    pub fn set_conversion_limits(&mut self, lower: Option<f64>, upper: Option<f64>) {
        self.lower_limit = lower;
        self.upper_limit = upper;
    }

    pub fn set_post_eng_to_phys(&mut self, hook: Hook) {
        self.post_eng_to_phys = hook;
    }

    pub fn set_pre_phys_to_eng(&mut self, hook: Hook) {
        self.pre_phys_to_eng = hook;
    }

    /// Convert `value` from `origin` to `target` units.
    pub fn convert(&self, value: f64, origin: UnitSystem, target: UnitSystem) -> ConversionResult<f64> {
        match (origin, target) {
            (UnitSystem::Eng, UnitSystem::Phys) => self.eng_to_phys(value),
            (UnitSystem::Phys, UnitSystem::Eng) => self.phys_to_eng(value),
            (UnitSystem::Eng, UnitSystem::Eng) | (UnitSystem::Phys, UnitSystem::Phys) => Ok(value),
        }
    }

    pub fn eng_to_phys(&self, value: f64) -> ConversionResult<f64> {
        if let Some(limit) = self.lower_limit
            && value < limit
        {
            return Err(ConversionError::BelowLowerLimit {
                id: self.id,
                value,
                limit,
            });
        }
        if let Some(limit) = self.upper_limit
            && value > limit
        {
            return Err(ConversionError::AboveUpperLimit {
                id: self.id,
                value,
                limit,
            });
        }
        let candidates: Vec<f64> = self
            .strategy
            .raw_eng_to_phys(value)
            .into_iter()
            .map(|c| self.post_eng_to_phys.apply(c))
            .collect();
        self.single(value, UnitSystem::Phys, candidates, Vec::new())
    }

    pub fn phys_to_eng(&self, value: f64) -> ConversionResult<f64> {
        let adjusted = self.pre_phys_to_eng.apply(value);
        let raw = self.strategy.raw_phys_to_eng(adjusted);
        let in_range: Vec<f64> = raw.iter().copied().filter(|c| self.within_limits(*c)).collect();
        self.single(value, UnitSystem::Eng, in_range, raw)
    }

    fn within_limits(&self, eng_value: f64) -> bool {
        self.lower_limit.is_none_or(|lo| eng_value >= lo)
            && self.upper_limit.is_none_or(|hi| eng_value <= hi)
    }

    /// Enforce the exactly-one-candidate rule. `rejected` is what the
    /// strategy produced before filtering, reported when nothing survives.
    fn single(
        &self,
        value: f64,
        target: UnitSystem,
        mut candidates: Vec<f64>,
        rejected: Vec<f64>,
    ) -> ConversionResult<f64> {
        match candidates.len() {
            1 => Ok(candidates.remove(0)),
            0 => Err(ConversionError::NoCandidate {
                id: self.id,
                value,
                target,
                candidates: rejected,
                lower: self.lower_limit,
                upper: self.upper_limit,
            }),
            _ => Err(ConversionError::Ambiguous {
                id: self.id,
                value,
                target,
                candidates,
            }),
        }
    }
}
