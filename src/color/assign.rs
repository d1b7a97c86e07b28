//! Per-row color assignment.
//!
//! Rows that already carry a color string are always parsed with
//! [`parse_hex_color`]. Rows without one get a color from the configured
//! [`ColorStrategy`]. Coordinates are never modified.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::hex::parse_hex_color;
use super::palette::{generate_palette, random_hex_color, DEFAULT_ALPHA};
use super::rgba::Rgba;
use crate::error::MapperError;
use crate::table::{CoordinateRecord, CoordinateTable};

/// How colors are produced for rows that have none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorStrategy {
    /// Evenly spaced HSL hues indexed by row position
    #[default]
    #[serde(rename = "sweep")]
    DeterministicSweep,
    /// Uniformly random `#rrggbb` strings written into the color column
    #[serde(rename = "random")]
    Random,
}

impl ColorStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorStrategy::DeterministicSweep => "sweep",
            ColorStrategy::Random => "random",
        }
    }
}

impl fmt::Display for ColorStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorStrategy {
    type Err = MapperError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sweep" | "deterministic_sweep" | "hsl" => Ok(ColorStrategy::DeterministicSweep),
            "random" => Ok(ColorStrategy::Random),
            _ => Err(MapperError::InvalidParameter {
                param: "color_strategy".to_string(),
                message: format!(
                    "Unknown color strategy: {}. Valid values are 'sweep', 'random'",
                    s
                ),
            }),
        }
    }
}

/// A coordinate table with one fill color per row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColoredTable {
    table: CoordinateTable,
    fill_colors: Vec<Rgba>,
}

impl ColoredTable {
    /// The underlying table (with any generated color strings)
    pub fn table(&self) -> &CoordinateTable {
        &self.table
    }

    /// Fill colors, one per row
    pub fn fill_colors(&self) -> &[Rgba] {
        &self.fill_colors
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Rows paired with their fill color
    pub fn rows(&self) -> impl Iterator<Item = (&CoordinateRecord, Rgba)> + '_ {
        self.table.iter().zip(self.fill_colors.iter().copied())
    }
}

/// Color assignment settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAssigner {
    strategy: ColorStrategy,
    alpha: u8,
    seed: Option<u64>,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new(ColorStrategy::default(), DEFAULT_ALPHA)
    }
}

impl ColorAssigner {
    pub fn new(strategy: ColorStrategy, alpha: u8) -> Self {
        Self {
            strategy,
            alpha,
            seed: None,
        }
    }

    /// Seed the random strategy so its output is reproducible
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Attach a fill color to every row
    pub fn assign(&self, table: CoordinateTable) -> ColoredTable {
        match (self.strategy, self.seed) {
            (ColorStrategy::DeterministicSweep, _) => assign_sweep(table, self.alpha),
            (ColorStrategy::Random, Some(seed)) => {
                assign_random(table, &mut StdRng::seed_from_u64(seed))
            }
            (ColorStrategy::Random, None) => assign_random(table, &mut rand::rng()),
        }
    }
}

/// Rows without a color take the swept palette entry at their index
pub fn assign_sweep(table: CoordinateTable, alpha: u8) -> ColoredTable {
    let palette = generate_palette(table.len(), alpha);
    let fill_colors = table
        .iter()
        .zip(palette)
        .map(|(record, swept)| match record.color.as_deref() {
            Some(color) => parse_hex_color(Some(color)),
            None => swept,
        })
        .collect();

    ColoredTable { table, fill_colors }
}

/// Rows without a color get a random hex string, then every row is parsed
pub fn assign_random<R: Rng>(table: CoordinateTable, rng: &mut R) -> ColoredTable {
    let table = table.fill_missing_colors(|_| random_hex_color(&mut *rng));
    let fill_colors = table
        .iter()
        .map(|record| parse_hex_color(record.color.as_deref()))
        .collect();

    ColoredTable { table, fill_colors }
}
