use serde::Serialize;

use crate::assets::BodyDefinition;

const NOT_AVAILABLE: &str = "N/A";

/// Display attributes of a picked body, as shown in the info panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionPayload {
    pub name: String,
    pub diameter_display: String,
    pub distance_display: String,
    pub orbit_display: String,
    pub atmosphere_display: String,
    pub moons_display: String,
}

impl InspectionPayload {
    pub fn from_definition(def: &BodyDefinition) -> Self {
        let or_na = |s: &Option<String>| s.clone().unwrap_or_else(|| NOT_AVAILABLE.to_owned());
        Self {
            name: def.name.clone(),
            diameter_display: format!("{} km", format_grouped(def.radius_km * 2.0)),
            distance_display: or_na(&def.distance_from_sun_display),
            orbit_display: or_na(&def.orbital_period_display),
            atmosphere_display: or_na(&def.atmospheric_composition),
            moons_display: or_na(&def.moons_display),
        }
    }
}

/// Current info-panel state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    Selected(InspectionPayload),
    #[default]
    Deselected,
}

/// Wire shape: `{"selected":false}` or `{"selected":true,"name":...}`.
#[derive(Serialize)]
struct SelectionJson<'a> {
    selected: bool,
    #[serde(flatten)]
    payload: Option<&'a InspectionPayload>,
}

impl Selection {
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    pub fn payload(&self) -> Option<&InspectionPayload> {
        match self {
            Selection::Selected(p) => Some(p),
            Selection::Deselected => None,
        }
    }

    pub fn to_json(&self) -> String {
        let wire = SelectionJson {
            selected: self.is_selected(),
            payload: self.payload(),
        };
        serde_json::to_string(&wire).unwrap_or_else(|_| r#"{"selected":false}"#.to_owned())
    }
}

/// Format a number with comma thousands separators and at most three
/// fraction digits, trailing zeros trimmed: `12742` → `"12,742"`,
/// `4879.4` → `"4,879.4"`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
