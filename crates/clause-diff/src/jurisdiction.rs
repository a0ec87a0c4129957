//! US jurisdictions that can appear in governing-law and venue clauses

use serde::{Deserialize, Serialize};

/// US state (plus DC) named by a governing-law clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
    DC,
}

impl State {
    pub const ALL: [State; 51] = [
        State::AL,
        State::AK,
        State::AZ,
        State::AR,
        State::CA,
        State::CO,
        State::CT,
        State::DE,
        State::FL,
        State::GA,
        State::HI,
        State::ID,
        State::IL,
        State::IN,
        State::IA,
        State::KS,
        State::KY,
        State::LA,
        State::ME,
        State::MD,
        State::MA,
        State::MI,
        State::MN,
        State::MS,
        State::MO,
        State::MT,
        State::NE,
        State::NV,
        State::NH,
        State::NJ,
        State::NM,
        State::NY,
        State::NC,
        State::ND,
        State::OH,
        State::OK,
        State::OR,
        State::PA,
        State::RI,
        State::SC,
        State::SD,
        State::TN,
        State::TX,
        State::UT,
        State::VT,
        State::VA,
        State::WA,
        State::WV,
        State::WI,
        State::WY,
        State::DC,
    ];

    /// Get the full state name
    pub fn name(&self) -> &'static str {
        match self {
            State::AL => "Alabama",
            State::AK => "Alaska",
            State::AZ => "Arizona",
            State::AR => "Arkansas",
            State::CA => "California",
            State::CO => "Colorado",
            State::CT => "Connecticut",
            State::DE => "Delaware",
            State::FL => "Florida",
            State::GA => "Georgia",
            State::HI => "Hawaii",
            State::ID => "Idaho",
            State::IL => "Illinois",
            State::IN => "Indiana",
            State::IA => "Iowa",
            State::KS => "Kansas",
            State::KY => "Kentucky",
            State::LA => "Louisiana",
            State::ME => "Maine",
            State::MD => "Maryland",
            State::MA => "Massachusetts",
            State::MI => "Michigan",
            State::MN => "Minnesota",
            State::MS => "Mississippi",
            State::MO => "Missouri",
            State::MT => "Montana",
            State::NE => "Nebraska",
            State::NV => "Nevada",
            State::NH => "New Hampshire",
            State::NJ => "New Jersey",
            State::NM => "New Mexico",
            State::NY => "New York",
            State::NC => "North Carolina",
            State::ND => "North Dakota",
            State::OH => "Ohio",
            State::OK => "Oklahoma",
            State::OR => "Oregon",
            State::PA => "Pennsylvania",
            State::RI => "Rhode Island",
            State::SC => "South Carolina",
            State::SD => "South Dakota",
            State::TN => "Tennessee",
            State::TX => "Texas",
            State::UT => "Utah",
            State::VT => "Vermont",
            State::VA => "Virginia",
            State::WA => "Washington",
            State::WV => "West Virginia",
            State::WI => "Wisconsin",
            State::WY => "Wyoming",
            State::DC => "District of Columbia",
        }
    }

    /// Parse from state code or full name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        let s = s.trim();
        State::ALL.iter().copied().find(|state| {
            state.name().eq_ignore_ascii_case(s) || format!("{:?}", state).eq_ignore_ascii_case(s)
        })
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
