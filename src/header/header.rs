use crate::error::{Rev1Error, Result};
use crate::utils::{self, Rev1Lines};

//=====================================================================
// Support for the header of Rev-1 files. This contains high-level
// information on the table including the ZAID, atomic weight ratio,
// temperature, processing date, and a free text description.
//
// The header occupies the first two lines of the file:
//     zaid awr kT date
//     info
//=====================================================================

const HEADER_TOKENS: usize = 4;

#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub zaid: String,
    pub awr: f64,   // Atomic weight ratio
    pub temp: f64,  // kT in MeV
    pub date: String,
    pub info: String,
}

impl Header {
    pub fn from_lines(lines: &Rev1Lines) -> Result<Self> {
        // The first line has exactly four fields
        let tokens = lines.tokens_in_line_range(0, Some(1))?;
        if tokens.len() != HEADER_TOKENS {
            return Err(Rev1Error::Arity {
                record: "header",
                expected: format!("exactly {}", HEADER_TOKENS),
                found: tokens.len(),
            });
        }
        let zaid = tokens[0].to_string();
        let awr = utils::parse_f64(tokens[1], "header awr")?;
        let temp = utils::parse_f64(tokens[2], "header temperature")?;
        let date = tokens[3].to_string();

        // The second line is free text
        let info = lines.line(1)?.trim().to_string();

        Ok(Self { zaid, awr, temp, date, info })
    }

    pub fn temperature_in_kelvin(&self) -> f64 {
        utils::compute_temperature_from_kT(self.temp)
    }
}

impl std::fmt::Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (awr {}, kT {} MeV, {})", self.zaid, self.awr, self.temp, self.date)
    }
}
