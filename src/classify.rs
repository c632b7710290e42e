use std::str::FromStr;

use crate::error::MapfolioError;

/// NBA division labels as they appear in the source table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Division {
    Atlantic,
    Central,
    Southeast,
    Pacific,
    Southwest,
    Northwest,
}

impl Division {
    pub const ALL: [Division; 6] = [
        Division::Atlantic,
        Division::Central,
        Division::Southeast,
        Division::Pacific,
        Division::Southwest,
        Division::Northwest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Division::Atlantic => "Atlantic",
            Division::Central => "Central",
            Division::Southeast => "Southeast",
            Division::Pacific => "Pacific",
            Division::Southwest => "Southwest",
            Division::Northwest => "Northwest",
        }
    }

    /// Fixed division-to-color table driving marker styling.
    pub fn color(self) -> MarkerColor {
        match self {
            Division::Atlantic => MarkerColor::Red,
            Division::Central => MarkerColor::Green,
            Division::Southeast => MarkerColor::Beige,
            Division::Pacific => MarkerColor::Orange,
            Division::Southwest => MarkerColor::LightGray,
            Division::Northwest => MarkerColor::Purple,
        }
    }
}

impl FromStr for Division {
    type Err = MapfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Atlantic" => Ok(Division::Atlantic),
            "Central" => Ok(Division::Central),
            "Southeast" => Ok(Division::Southeast),
            "Pacific" => Ok(Division::Pacific),
            "Southwest" => Ok(Division::Southwest),
            "Northwest" => Ok(Division::Northwest),
            other => Err(MapfolioError::classify(format!(
                "unknown division '{other}'"
            ))),
        }
    }
}

/// Marker color vocabulary used by the division table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Red,
    Green,
    Beige,
    Orange,
    LightGray,
    Purple,
}

impl MarkerColor {
    pub fn name(self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Green => "green",
            MarkerColor::Beige => "beige",
            MarkerColor::Orange => "orange",
            MarkerColor::LightGray => "lightgray",
            MarkerColor::Purple => "purple",
        }
    }

    /// CSS value rendered into markers and legend swatches.
    pub fn css(self) -> &'static str {
        match self {
            MarkerColor::Red => "red",
            MarkerColor::Green => "green",
            MarkerColor::Beige => "#ffd78e",
            MarkerColor::Orange => "orange",
            MarkerColor::LightGray => "#999",
            MarkerColor::Purple => "purple",
        }
    }
}

/// Population bracket for the choropleth, split at 5,000,000 and 10,000,000.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PopulationBracket {
    Low,  // under 5,000,000
    Mid,  // [5,000,000, 10,000,000)
    High, // 10,000,000 and up
}

impl PopulationBracket {
    pub const ALL: [PopulationBracket; 3] = [
        PopulationBracket::Low,
        PopulationBracket::Mid,
        PopulationBracket::High,
    ];

    pub fn classify(population: f64) -> PopulationBracket {
        if population < 5_000_000.0 {
            PopulationBracket::Low
        } else if population < 10_000_000.0 {
            PopulationBracket::Mid
        } else {
            PopulationBracket::High
        }
    }

    /// Fill color rendered into choropleth polygons and legend swatches.
    pub fn fill(self) -> &'static str {
        match self {
            PopulationBracket::Low => "#96f296",
            PopulationBracket::Mid => "orange",
            PopulationBracket::High => "#eb5757",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PopulationBracket::Low => "5 million or less",
            PopulationBracket::Mid => "5-10 million",
            PopulationBracket::High => "10 million+",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_colors_match_table() {
        let expect = [
            (Division::Atlantic, "red"),
            (Division::Central, "green"),
            (Division::Southeast, "#ffd78e"),
            (Division::Pacific, "orange"),
            (Division::Southwest, "#999"),
            (Division::Northwest, "purple"),
        ];
        for (division, css) in expect {
            assert_eq!(division.color().css(), css, "{}", division.label());
        }
    }

    #[test]
    fn division_parses_known_labels() {
        for division in Division::ALL {
            assert_eq!(division.label().parse::<Division>().unwrap(), division);
        }
    }

    #[test]
    fn division_rejects_unknown_label() {
        let err = "Midwest".parse::<Division>().unwrap_err();
        assert!(err.to_string().contains("unknown division 'Midwest'"));
    }

    #[test]
    fn division_rejects_wrong_case() {
        assert!("atlantic".parse::<Division>().is_err());
    }

    #[test]
    fn bracket_boundaries_are_half_open() {
        assert_eq!(PopulationBracket::classify(0.0), PopulationBracket::Low);
        assert_eq!(
            PopulationBracket::classify(4_999_999.0),
            PopulationBracket::Low
        );
        assert_eq!(
            PopulationBracket::classify(5_000_000.0),
            PopulationBracket::Mid
        );
        assert_eq!(
            PopulationBracket::classify(9_999_999.0),
            PopulationBracket::Mid
        );
        assert_eq!(
            PopulationBracket::classify(10_000_000.0),
            PopulationBracket::High
        );
        assert_eq!(
            PopulationBracket::classify(38_000_000.0),
            PopulationBracket::High
        );
    }

    #[test]
    fn bracket_fills_match_style_rule() {
        assert_eq!(PopulationBracket::Low.fill(), "#96f296");
        assert_eq!(PopulationBracket::Mid.fill(), "orange");
        assert_eq!(PopulationBracket::High.fill(), "#eb5757");
    }

    #[test]
    fn marker_color_serializes_lowercase() {
        let json = serde_json::to_string(&MarkerColor::LightGray).unwrap();
        assert_eq!(json, "\"lightgray\"");
    }
}
