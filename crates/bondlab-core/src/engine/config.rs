use crate::core::models::element::Element;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// One entry of the bond-order capability table.
///
/// Orders are symmetric: a rule for ("C", "O") also applies to ("O", "C").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BondOrderRule {
    pub a: String,
    pub b: String,
    pub order: u8,
}

/// Maximum number of simultaneous shared pairs per element pair.
///
/// Any pair without an explicit rule is single-bond capable. The table
/// replaces hard-coded symbol comparisons in the inference logic, so new
/// double-bond-capable pairs are a data change, not a code change.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct BondOrderTable {
    rules: Vec<BondOrderRule>,
}

impl Default for BondOrderTable {
    fn default() -> Self {
        Self {
            rules: vec![
                BondOrderRule {
                    a: "C".to_string(),
                    b: "O".to_string(),
                    order: 2,
                },
                BondOrderRule {
                    a: "O".to_string(),
                    b: "O".to_string(),
                    order: 2,
                },
            ],
        }
    }
}

impl BondOrderTable {
    /// Looks up the maximum bond order for an element pair, in either
    /// orientation. Unlisted pairs are single-bond capable.
    pub fn max_order(&self, a: &Element, b: &Element) -> u8 {
        self.rules
            .iter()
            .find(|r| {
                (r.a == a.symbol && r.b == b.symbol) || (r.a == b.symbol && r.b == a.symbol)
            })
            .map(|r| r.order)
            .unwrap_or(1)
    }
}

/// Tunable parameters of the bonding engine.
///
/// All distances are in scene units, all angles in radians, and
/// `hint_rate` in 1/seconds. Defaults reproduce the sandbox's stock
/// behavior; a TOML file can override any subset of the fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Maximum electron-electron distance for a shared pair to form.
    pub pair_cutoff: f64,
    /// Maximum nucleus-nucleus distance for drag hinting, and for the
    /// relaxed acceptance of a double bond's second pair.
    pub neighbor_range: f64,
    /// Half-angle of the symmetric double-bond targets about the axis.
    pub double_bond_splay: f64,
    /// Exponential approach rate of the drag-time hinter.
    pub hint_rate: f64,
    /// Offset of the second hinted electron for double-capable neighbors.
    pub hint_pair_offset: f64,
    /// Per-element-pair maximum bond orders.
    pub bond_orders: BondOrderTable,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            pair_cutoff: 26.0,
            neighbor_range: 80.0,
            double_bond_splay: 14.0_f64.to_radians(),
            hint_rate: 6.0,
            hint_pair_offset: 0.35,
            bond_orders: BondOrderTable::default(),
        }
    }
}

impl SimulationConfig {
    /// Loads a configuration from a TOML file and validates it.
    ///
    /// # Arguments
    ///
    /// * `path` - The TOML file to read. Absent fields keep defaults.
    ///
    /// # Return
    ///
    /// Returns the validated configuration, or a `ConfigError` on I/O,
    /// parse, or validation failure.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects non-positive distances and rates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("pair_cutoff", self.pair_cutoff),
            ("neighbor_range", self.neighbor_range),
            ("hint_rate", self.hint_rate),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be positive, got {}", value),
                });
            }
        }
        if !(self.double_bond_splay > 0.0 && self.double_bond_splay < std::f64::consts::FRAC_PI_2)
        {
            return Err(ConfigError::InvalidValue {
                field: "double_bond_splay",
                reason: format!("must be in (0, PI/2), got {}", self.double_bond_splay),
            });
        }
        Ok(())
    }
}
