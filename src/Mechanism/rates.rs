//! Rate representations of a reaction.
//!
//! A reaction carries at most one [`ReactionRate`]. The flat Arrhenius-like
//! forms are grouped in [`SimpleRate`]; every flat form enumerates its own
//! parameters by name through [`RateParameters`], so the comparator can walk
//! them without knowing the concrete form.
use enum_dispatch::enum_dispatch;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const PRE_EXPONENTIAL_FACTOR: &str = "pre_exponential_factor";
pub const TEMPERATURE_EXPONENT: &str = "temperature_exponent";
pub const ACTIVATION_ENERGY: &str = "activation_energy";
pub const INTRINSIC_ACTIVATION_ENERGY: &str = "intrinsic_activation_energy";
pub const BOND_ENERGY: &str = "bond_energy";
pub const GAS_ACTIVATION_ENERGY: &str = "gas_activation_energy";
pub const ELECTRON_ACTIVATION_ENERGY: &str = "electron_activation_energy";

/// named numeric parameters of a flat rate expression
#[enum_dispatch]
pub trait RateParameters {
    /// name of the rate form, two rates of different forms never compare equal
    fn kind(&self) -> &'static str;
    /// all parameters of the rate in a fixed order
    fn parameters(&self) -> Vec<(&'static str, f64)>;
    fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

/// k = A T^b exp(-Ea/RT)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArrheniusRate {
    #[serde(rename = "A")]
    pub pre_exponential_factor: f64,
    #[serde(rename = "b")]
    pub temperature_exponent: f64,
    #[serde(rename = "Ea")]
    pub activation_energy: f64,
}

impl ArrheniusRate {
    pub fn new(pre_exponential_factor: f64, temperature_exponent: f64, activation_energy: f64) -> Self {
        Self {
            pre_exponential_factor,
            temperature_exponent,
            activation_energy,
        }
    }
}

impl RateParameters for ArrheniusRate {
    fn kind(&self) -> &'static str {
        "Arrhenius"
    }
    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![
            (PRE_EXPONENTIAL_FACTOR, self.pre_exponential_factor),
            (TEMPERATURE_EXPONENT, self.temperature_exponent),
            (ACTIVATION_ENERGY, self.activation_energy),
        ]
    }
}

/// Arrhenius form with the activation energy depending on the reaction enthalpy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlowersMaselRate {
    #[serde(rename = "A")]
    pub pre_exponential_factor: f64,
    #[serde(rename = "b")]
    pub temperature_exponent: f64,
    #[serde(rename = "Ea0")]
    pub intrinsic_activation_energy: f64,
    #[serde(rename = "w")]
    pub bond_energy: f64,
}

impl RateParameters for BlowersMaselRate {
    fn kind(&self) -> &'static str {
        "Blowers-Masel"
    }
    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![
            (PRE_EXPONENTIAL_FACTOR, self.pre_exponential_factor),
            (TEMPERATURE_EXPONENT, self.temperature_exponent),
            (INTRINSIC_ACTIVATION_ENERGY, self.intrinsic_activation_energy),
            (BOND_ENERGY, self.bond_energy),
        ]
    }
}

/// electron-temperature dependent rate used in plasma mechanisms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TwoTempPlasmaRate {
    #[serde(rename = "A")]
    pub pre_exponential_factor: f64,
    #[serde(rename = "b")]
    pub temperature_exponent: f64,
    #[serde(rename = "Ea-gas")]
    pub activation_energy: f64,
    #[serde(rename = "Ea-electron")]
    pub electron_activation_energy: f64,
}

impl RateParameters for TwoTempPlasmaRate {
    fn kind(&self) -> &'static str {
        "two-temperature-plasma"
    }
    // no plain activation energy here: the gas term is reported under its own name
    fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![
            (PRE_EXPONENTIAL_FACTOR, self.pre_exponential_factor),
            (TEMPERATURE_EXPONENT, self.temperature_exponent),
            (GAS_ACTIVATION_ENERGY, self.activation_energy),
            (ELECTRON_ACTIVATION_ENERGY, self.electron_activation_energy),
        ]
    }
}

/// enum of flat rate forms
#[enum_dispatch(RateParameters)]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SimpleRate {
    Arrhenius(ArrheniusRate),
    BlowersMasel(BlowersMaselRate),
    TwoTempPlasma(TwoTempPlasmaRate),
}

impl SimpleRate {
    pub fn arrhenius(pre_exponential_factor: f64, temperature_exponent: f64, activation_energy: f64) -> Self {
        SimpleRate::Arrhenius(ArrheniusRate::new(
            pre_exponential_factor,
            temperature_exponent,
            activation_energy,
        ))
    }
}

/// collision partner data of three-body and falloff reactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThirdBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiencies: Option<BTreeMap<String, f64>>,
    #[serde(
        rename = "default-efficiency",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_efficiency: Option<f64>,
}

impl ThirdBody {
    pub fn with_efficiencies(efficiencies: BTreeMap<String, f64>) -> Self {
        Self {
            efficiencies: Some(efficiencies),
            default_efficiency: None,
        }
    }
    /// default efficiency, 1.0 when the mechanism does not set one
    pub fn effective_default(&self) -> f64 {
        self.default_efficiency.unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FalloffKind {
    Lindemann,
    Troe,
    Sri,
    Tsang,
}

/// blending function between the low and high pressure limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FalloffFunction {
    pub kind: FalloffKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<f64>,
}

impl FalloffFunction {
    pub fn lindemann() -> Self {
        Self {
            kind: FalloffKind::Lindemann,
            parameters: Vec::new(),
        }
    }
    /// Troe blending: [A, T3, T1] or [A, T3, T1, T2]
    pub fn troe(parameters: Vec<f64>) -> Self {
        Self {
            kind: FalloffKind::Troe,
            parameters,
        }
    }
    pub fn sri(parameters: Vec<f64>) -> Self {
        Self {
            kind: FalloffKind::Sri,
            parameters,
        }
    }
}

/// Chebyshev polynomial fit in reduced temperature and log-pressure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChebyshevRate {
    /// (Tmin, Tmax)
    #[serde(rename = "temperature-range")]
    pub temperature_range: (f64, f64),
    /// (Pmin, Pmax)
    #[serde(rename = "pressure-range")]
    pub pressure_range: (f64, f64),
    /// rows run over temperature order, columns over pressure order
    #[serde(rename = "data", with = "matrix_rows")]
    pub coeffs: DMatrix<f64>,
}

impl ChebyshevRate {
    /// builds the rate from coefficient rows, None if the rows are ragged
    pub fn from_rows(
        temperature_range: (f64, f64),
        pressure_range: (f64, f64),
        rows: &[Vec<f64>],
    ) -> Option<Self> {
        Some(Self {
            temperature_range,
            pressure_range,
            coeffs: rows_to_matrix(rows)?,
        })
    }
    pub fn n_temperature(&self) -> usize {
        self.coeffs.nrows()
    }
    pub fn n_pressure(&self) -> usize {
        self.coeffs.ncols()
    }
}

pub fn rows_to_matrix(rows: &[Vec<f64>]) -> Option<DMatrix<f64>> {
    let ncols = rows.first().map_or(0, Vec::len);
    if rows.iter().any(|row| row.len() != ncols) {
        return None;
    }
    Some(DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i][j]))
}

mod matrix_rows {
    use nalgebra::DMatrix;
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serialize, Serializer};

    pub fn serialize<S: Serializer>(matrix: &DMatrix<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<Vec<f64>> = matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect();
        rows.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DMatrix<f64>, D::Error> {
        let rows = Vec::<Vec<f64>>::deserialize(deserializer)?;
        super::rows_to_matrix(&rows)
            .ok_or_else(|| de::Error::custom("Chebyshev coefficient rows differ in length"))
    }
}

/// discriminant of a [`ReactionRate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RateKind {
    Elementary,
    ThreeBody,
    Falloff,
    Plog,
    Chebyshev,
}

impl fmt::Display for RateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RateKind::Elementary => "elementary",
            RateKind::ThreeBody => "three-body",
            RateKind::Falloff => "falloff",
            RateKind::Plog => "pressure-dependent-Arrhenius",
            RateKind::Chebyshev => "Chebyshev",
        };
        write!(f, "{}", name)
    }
}

/// rate representation of a reaction, tagged with the Cantera type names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ReactionRate {
    #[serde(rename = "elementary")]
    Elementary {
        #[serde(rename = "rate-constant")]
        rate: SimpleRate,
    },
    #[serde(rename = "three-body")]
    ThreeBody {
        #[serde(rename = "rate-constant")]
        rate: SimpleRate,
        #[serde(rename = "third-body", default)]
        third_body: ThirdBody,
    },
    #[serde(rename = "falloff")]
    Falloff {
        #[serde(rename = "low-P-rate-constant")]
        low: SimpleRate,
        #[serde(rename = "high-P-rate-constant")]
        high: SimpleRate,
        falloff: FalloffFunction,
        #[serde(rename = "third-body", default)]
        third_body: ThirdBody,
    },
    #[serde(rename = "pressure-dependent-Arrhenius")]
    Plog {
        /// (pressure in Pa, rate at that pressure)
        #[serde(rename = "rate-constants")]
        rates: Vec<(f64, SimpleRate)>,
    },
    #[serde(rename = "Chebyshev")]
    Chebyshev(ChebyshevRate),
}

impl ReactionRate {
    pub fn kind(&self) -> RateKind {
        match self {
            ReactionRate::Elementary { .. } => RateKind::Elementary,
            ReactionRate::ThreeBody { .. } => RateKind::ThreeBody,
            ReactionRate::Falloff { .. } => RateKind::Falloff,
            ReactionRate::Plog { .. } => RateKind::Plog,
            ReactionRate::Chebyshev(_) => RateKind::Chebyshev,
        }
    }
    pub fn third_body(&self) -> Option<&ThirdBody> {
        match self {
            ReactionRate::ThreeBody { third_body, .. } | ReactionRate::Falloff { third_body, .. } => {
                Some(third_body)
            }
            _ => None,
        }
    }
    pub fn third_body_mut(&mut self) -> Option<&mut ThirdBody> {
        match self {
            ReactionRate::ThreeBody { third_body, .. } | ReactionRate::Falloff { third_body, .. } => {
                Some(third_body)
            }
            _ => None,
        }
    }
    /// every number of the rate in a fixed order, efficiencies by species name
    pub fn values(&self) -> Vec<f64> {
        fn simple(out: &mut Vec<f64>, rate: &SimpleRate) {
            out.extend(rate.parameters().into_iter().map(|(_, value)| value));
        }
        fn collider(out: &mut Vec<f64>, third_body: &ThirdBody) {
            out.push(third_body.effective_default());
            if let Some(efficiencies) = &third_body.efficiencies {
                out.extend(efficiencies.values().copied());
            }
        }
        let mut out = Vec::new();
        match self {
            ReactionRate::Elementary { rate } => simple(&mut out, rate),
            ReactionRate::ThreeBody { rate, third_body } => {
                simple(&mut out, rate);
                collider(&mut out, third_body);
            }
            ReactionRate::Falloff {
                low,
                high,
                falloff,
                third_body,
            } => {
                simple(&mut out, low);
                simple(&mut out, high);
                out.extend_from_slice(&falloff.parameters);
                collider(&mut out, third_body);
            }
            ReactionRate::Plog { rates } => {
                for (pressure, rate) in rates {
                    out.push(*pressure);
                    simple(&mut out, rate);
                }
            }
            ReactionRate::Chebyshev(rate) => {
                out.extend([
                    rate.temperature_range.0,
                    rate.temperature_range.1,
                    rate.pressure_range.0,
                    rate.pressure_range.1,
                ]);
                out.extend(rate.coeffs.iter().copied());
            }
        }
        out
    }
}
