use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InstrumentError;
use crate::instruments::{
    asas_hi, asdas, asqol, basdai, basfi, dapsa, das28, esspri, facit, lupus_pro, psaqol, sf36,
    sledai, ssdai,
};
use crate::Instrument;

/// Lab marker used by the ASDAS and DAS28 variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum LabMarker {
    /// C-reactive protein.
    Crp,
    /// Erythrocyte sedimentation rate.
    Esr,
}

/// Stored instrument code. The serialized form is the code persisted with
/// every score record and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum InstrumentCode {
    #[serde(rename = "BASDAI")]
    Basdai,
    #[serde(rename = "ASDAS_CRP")]
    AsdasCrp,
    #[serde(rename = "ASDAS_ESR")]
    AsdasEsr,
    #[serde(rename = "DAPSA")]
    Dapsa,
    #[serde(rename = "DAS28_CRP")]
    Das28Crp,
    #[serde(rename = "DAS28_ESR")]
    Das28Esr,
    #[serde(rename = "SLEDAI")]
    Sledai,
    #[serde(rename = "LupusPRO")]
    LupusPro,
    #[serde(rename = "FACIT")]
    Facit,
    #[serde(rename = "SF36")]
    Sf36,
    #[serde(rename = "BASFI")]
    Basfi,
    #[serde(rename = "ASASHI")]
    AsasHi,
    #[serde(rename = "ASQoL")]
    AsQol,
    #[serde(rename = "PSAQoL")]
    PsaQol,
    #[serde(rename = "ESSPRI")]
    Esspri,
    #[serde(rename = "SSDAI")]
    Ssdai,
}

impl InstrumentCode {
    pub const ALL: [InstrumentCode; 16] = [
        InstrumentCode::Basdai,
        InstrumentCode::AsdasCrp,
        InstrumentCode::AsdasEsr,
        InstrumentCode::Dapsa,
        InstrumentCode::Das28Crp,
        InstrumentCode::Das28Esr,
        InstrumentCode::Sledai,
        InstrumentCode::LupusPro,
        InstrumentCode::Facit,
        InstrumentCode::Sf36,
        InstrumentCode::Basfi,
        InstrumentCode::AsasHi,
        InstrumentCode::AsQol,
        InstrumentCode::PsaQol,
        InstrumentCode::Esspri,
        InstrumentCode::Ssdai,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InstrumentCode::Basdai => "BASDAI",
            InstrumentCode::AsdasCrp => "ASDAS_CRP",
            InstrumentCode::AsdasEsr => "ASDAS_ESR",
            InstrumentCode::Dapsa => "DAPSA",
            InstrumentCode::Das28Crp => "DAS28_CRP",
            InstrumentCode::Das28Esr => "DAS28_ESR",
            InstrumentCode::Sledai => "SLEDAI",
            InstrumentCode::LupusPro => "LupusPRO",
            InstrumentCode::Facit => "FACIT",
            InstrumentCode::Sf36 => "SF36",
            InstrumentCode::Basfi => "BASFI",
            InstrumentCode::AsasHi => "ASASHI",
            InstrumentCode::AsQol => "ASQoL",
            InstrumentCode::PsaQol => "PSAQoL",
            InstrumentCode::Esspri => "ESSPRI",
            InstrumentCode::Ssdai => "SSDAI",
        }
    }

    /// Human-facing name, e.g. "ASDAS-CRP" or "SF-36".
    pub fn display_name(self) -> &'static str {
        match self {
            InstrumentCode::AsdasCrp => "ASDAS-CRP",
            InstrumentCode::AsdasEsr => "ASDAS-ESR",
            InstrumentCode::Das28Crp => "DAS28-CRP",
            InstrumentCode::Das28Esr => "DAS28-ESR",
            InstrumentCode::Sf36 => "SF-36",
            InstrumentCode::AsasHi => "ASAS-HI",
            other => other.as_str(),
        }
    }

    pub fn lab_marker(self) -> Option<LabMarker> {
        match self {
            InstrumentCode::AsdasCrp | InstrumentCode::Das28Crp => Some(LabMarker::Crp),
            InstrumentCode::AsdasEsr | InstrumentCode::Das28Esr => Some(LabMarker::Esr),
            _ => None,
        }
    }

    /// The formula and interpreter for this code.
    pub fn instrument(self) -> Box<dyn Instrument> {
        match self {
            InstrumentCode::Basdai => Box::new(basdai::Basdai),
            InstrumentCode::AsdasCrp => Box::new(asdas::Asdas(LabMarker::Crp)),
            InstrumentCode::AsdasEsr => Box::new(asdas::Asdas(LabMarker::Esr)),
            InstrumentCode::Dapsa => Box::new(dapsa::Dapsa),
            InstrumentCode::Das28Crp => Box::new(das28::Das28(LabMarker::Crp)),
            InstrumentCode::Das28Esr => Box::new(das28::Das28(LabMarker::Esr)),
            InstrumentCode::Sledai => Box::new(sledai::Sledai),
            InstrumentCode::LupusPro => Box::new(lupus_pro::LupusPro),
            InstrumentCode::Facit => Box::new(facit::Facit),
            InstrumentCode::Sf36 => Box::new(sf36::Sf36),
            InstrumentCode::Basfi => Box::new(basfi::Basfi),
            InstrumentCode::AsasHi => Box::new(asas_hi::AsasHi),
            InstrumentCode::AsQol => Box::new(asqol::AsQol),
            InstrumentCode::PsaQol => Box::new(psaqol::PsaQol),
            InstrumentCode::Esspri => Box::new(esspri::Esspri),
            InstrumentCode::Ssdai => Box::new(ssdai::Ssdai),
        }
    }
}

impl fmt::Display for InstrumentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstrumentCode {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstrumentCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| InstrumentError::UnknownInstrument(s.to_string()))
    }
}
