use crate::core::PricingError;

/// Plain-vanilla option side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OptionType {
    /// Call option payoff profile.
    Call,
    /// Put option payoff profile.
    Put,
}

impl OptionType {
    /// Returns +1.0 for calls and -1.0 for puts.
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Put => "put",
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OptionType {
    type Err = PricingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            other => Err(PricingError::InvalidInput(format!(
                "unknown option type `{other}`, expected `call` or `put`"
            ))),
        }
    }
}

/// Position direction of a strategy leg.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Bought position; pays the premium.
    Long,
    /// Written position; collects the premium.
    Short,
}

impl Direction {
    /// Returns +1.0 for long positions and -1.0 for short positions.
    pub fn sign(self) -> f64 {
        match self {
            Self::Long => 1.0,
            Self::Short => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Direction {
    type Err = PricingError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            other => Err(PricingError::InvalidInput(format!(
                "unknown direction `{other}`, expected `long` or `short`"
            ))),
        }
    }
}
