//! Local Government Areas accepted by the board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the 13 Ebonyi State Local Government Areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lga {
    Abakaliki,
    #[serde(rename = "Afikpo North")]
    AfikpoNorth,
    #[serde(rename = "Afikpo South")]
    AfikpoSouth,
    Ebonyi,
    #[serde(rename = "Ezza North")]
    EzzaNorth,
    #[serde(rename = "Ezza South")]
    EzzaSouth,
    Ikwo,
    Ishielu,
    Ivo,
    Izzi,
    Ohaozara,
    Ohaukwu,
    Onicha,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown LGA: {0}")]
pub struct LgaParseError(pub String);

impl Lga {
    pub const ALL: [Lga; 13] = [
        Lga::Abakaliki,
        Lga::AfikpoNorth,
        Lga::AfikpoSouth,
        Lga::Ebonyi,
        Lga::EzzaNorth,
        Lga::EzzaSouth,
        Lga::Ikwo,
        Lga::Ishielu,
        Lga::Ivo,
        Lga::Izzi,
        Lga::Ohaozara,
        Lga::Ohaukwu,
        Lga::Onicha,
    ];

    /// Display name, also the value sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lga::Abakaliki => "Abakaliki",
            Lga::AfikpoNorth => "Afikpo North",
            Lga::AfikpoSouth => "Afikpo South",
            Lga::Ebonyi => "Ebonyi",
            Lga::EzzaNorth => "Ezza North",
            Lga::EzzaSouth => "Ezza South",
            Lga::Ikwo => "Ikwo",
            Lga::Ishielu => "Ishielu",
            Lga::Ivo => "Ivo",
            Lga::Izzi => "Izzi",
            Lga::Ohaozara => "Ohaozara",
            Lga::Ohaukwu => "Ohaukwu",
            Lga::Onicha => "Onicha",
        }
    }
}

impl fmt::Display for Lga {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lga {
    type Err = LgaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Lga::ALL
            .into_iter()
            .find(|lga| lga.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LgaParseError(s.to_string()))
    }
}
