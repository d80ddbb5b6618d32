//! Contract nature lookup table.
//!
//! `agent_contracts.contract_nature` stores a numeric code; callers filter
//! with the French label ("CDI", "CDD", ...). The mapping is fixed and
//! bijective. Unknown labels translate to "no filter" rather than an error;
//! the filter normalizer surfaces a warning for them.

/// Contract nature, matching the `contract_nature` column codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractNature {
    Cdi,
    Cdd,
    Interim,
    Alternance,
    Stage,
    Autre,
}

impl ContractNature {
    /// Numeric code stored in `agent_contracts.contract_nature`.
    pub fn code(self) -> i16 {
        match self {
            Self::Cdi => 0,
            Self::Cdd => 1,
            Self::Interim => 2,
            Self::Alternance => 3,
            Self::Stage => 4,
            Self::Autre => 5,
        }
    }

    /// Display label, as exposed on the wire.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cdi => "CDI",
            Self::Cdd => "CDD",
            Self::Interim => "Intérim",
            Self::Alternance => "Alternance",
            Self::Stage => "Stage",
            Self::Autre => "Autre",
        }
    }

    /// Translate a label to its nature. `None` for unrecognized labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "CDI" => Some(Self::Cdi),
            "CDD" => Some(Self::Cdd),
            "Intérim" => Some(Self::Interim),
            "Alternance" => Some(Self::Alternance),
            "Stage" => Some(Self::Stage),
            "Autre" => Some(Self::Autre),
            _ => None,
        }
    }

    /// Translate a stored code back to its nature. `None` for unknown codes.
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Cdi),
            1 => Some(Self::Cdd),
            2 => Some(Self::Interim),
            3 => Some(Self::Alternance),
            4 => Some(Self::Stage),
            5 => Some(Self::Autre),
            _ => None,
        }
    }
}

/// Display label for a stored code, with a fallback for unknown codes.
pub fn label_for_code(code: i16) -> &'static str {
    ContractNature::from_code(code).map_or("Inconnu", ContractNature::label)
}
