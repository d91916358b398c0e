//! Mission model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::lenient::de;

/// A deployment or trip undertaken by a unit.
///
/// Missions belong to units, not to individuals: every member of the unit
/// is credited with every mission of that unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// Unit that flew the mission.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub unit: Option<String>,
    /// Days away.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub trip_days: Decimal,
    /// Domestic per-diem zone.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub domestic_zone: Option<String>,
    /// Foreign destination, keyed as in the international per-diem table.
    #[serde(default, deserialize_with = "de::optional_text")]
    pub country_city: Option<String>,
    /// Exchange rate for the international per-diem; 1 when absent.
    #[serde(default, deserialize_with = "de::optional_decimal")]
    pub exchange_rate: Option<Decimal>,
    /// Mission entered a hazard zone. Only a literal `true` counts.
    #[serde(default, deserialize_with = "de::strict_true")]
    pub hazard_zone: bool,
    /// Mission type, e.g. "combat".
    #[serde(default, deserialize_with = "de::optional_text")]
    pub mission_type: Option<String>,
    /// Days at sea.
    #[serde(default, deserialize_with = "de::decimal_or_zero")]
    pub sea_days: Decimal,
    /// Joint mission with another branch. Only a literal `true` counts.
    #[serde(default, deserialize_with = "de::strict_true")]
    pub joint_mission: bool,
    /// Planned duration; defaults to `trip_days`.
    #[serde(default, deserialize_with = "de::optional_decimal")]
    pub planned_days: Option<Decimal>,
    /// Actual duration; defaults to `trip_days`.
    #[serde(default, deserialize_with = "de::optional_decimal")]
    pub actual_days: Option<Decimal>,
    /// Hours before departure the mission was cancelled, if it was.
    #[serde(default, deserialize_with = "de::optional_decimal")]
    pub cancel_hours_before: Option<Decimal>,
}

impl Mission {
    /// Mission type that earns combat allowance.
    pub const COMBAT: &'static str = "combat";

    /// Returns true for combat missions.
    pub fn is_combat(&self) -> bool {
        self.mission_type.as_deref() == Some(Self::COMBAT)
    }

    /// Returns true when the mission came home earlier than planned.
    pub fn ended_early(&self) -> bool {
        let planned = self.planned_days.unwrap_or(self.trip_days);
        let actual = self.actual_days.unwrap_or(self.trip_days);
        actual < planned
    }
}
