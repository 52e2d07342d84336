// src/record.rs
//! The canonical hourly record.
//!
//! Both page layouts are projected onto the same 17 positions. A position the
//! layout does not report, or whose cell did not parse, holds `None`.

use std::fmt;

pub const FIELD_COUNT: usize = 17;

/// Record positions, in output order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Hour,
    StationPressure,
    SeaLevelPressure,
    Precipitation,
    Temperature,
    DewPoint,
    VaporPressure,
    Humidity,
    WindSpeed,
    WindDirection,
    Sunshine,
    SolarRadiation,
    Snowfall,
    SnowDepth,
    Weather,
    CloudCover,
    Visibility,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Hour,
        Field::StationPressure,
        Field::SeaLevelPressure,
        Field::Precipitation,
        Field::Temperature,
        Field::DewPoint,
        Field::VaporPressure,
        Field::Humidity,
        Field::WindSpeed,
        Field::WindDirection,
        Field::Sunshine,
        Field::SolarRadiation,
        Field::Snowfall,
        Field::SnowDepth,
        Field::Weather,
        Field::CloudCover,
        Field::Visibility,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name for the optional header line.
    pub fn header(self) -> &'static str {
        match self {
            Field::Hour => "hour",
            Field::StationPressure => "station_pressure_hpa",
            Field::SeaLevelPressure => "sea_level_pressure_hpa",
            Field::Precipitation => "precipitation_mm",
            Field::Temperature => "temperature_c",
            Field::DewPoint => "dew_point_c",
            Field::VaporPressure => "vapor_pressure_hpa",
            Field::Humidity => "humidity_pct",
            Field::WindSpeed => "wind_speed_ms",
            Field::WindDirection => "wind_direction_deg",
            Field::Sunshine => "sunshine_h",
            Field::SolarRadiation => "solar_radiation_mj_m2",
            Field::Snowfall => "snowfall_cm",
            Field::SnowDepth => "snow_depth_cm",
            Field::Weather => "weather",
            Field::CloudCover => "cloud_cover",
            Field::Visibility => "visibility_km",
        }
    }

    /// The value type this position carries.
    pub fn value_type(self) -> ValueType {
        match self {
            Field::Hour | Field::Humidity | Field::Snowfall | Field::SnowDepth => ValueType::Int,
            Field::Weather | Field::CloudCover => ValueType::Text,
            _ => ValueType::Float,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    Int,
    Float,
    Text,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Text(_) => ValueType::Text,
        }
    }
}

impl fmt::Display for Value {
    /// Floats print in shortest form (`45.0` -> `45`, `12.3` -> `12.3`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    values: [Option<Value>; FIELD_COUNT],
}

impl Record {
    /// Every position explicitly absent.
    pub fn empty() -> Self {
        Self { values: std::array::from_fn(|_| None) }
    }

    pub fn get(&self, field: Field) -> Option<&Value> {
        self.values[field.index()].as_ref()
    }

    pub fn set(&mut self, field: Field, value: Option<Value>) {
        self.values[field.index()] = value;
    }

    pub fn values(&self) -> &[Option<Value>; FIELD_COUNT] {
        &self.values
    }

    /// Output cells in field order; absent is the empty string.
    pub fn to_cells(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|v| v.as_ref().map(Value::to_string).unwrap_or_default())
            .collect()
    }

    pub fn int(&self, field: Field) -> Option<i32> {
        match self.get(field) {
            Some(Value::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn float(&self, field: Field) -> Option<f64> {
        match self.get(field) {
            Some(Value::Float(x)) => Some(*x),
            _ => None,
        }
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        match self.get(field) {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        }
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::empty()
    }
}

pub fn header_cells() -> Vec<String> {
    Field::ALL.iter().map(|f| s!(f.header())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_are_in_position_order() {
        for (i, f) in Field::ALL.iter().enumerate() {
            assert_eq!(f.index(), i);
        }
        assert_eq!(Field::WindDirection.index(), 9);
        assert_eq!(Field::Visibility.index(), 16);
    }

    #[test]
    fn empty_record_is_all_absent() {
        let r = Record::empty();
        assert_eq!(r.values().len(), FIELD_COUNT);
        assert!(r.values().iter().all(Option::is_none));
        assert_eq!(r.to_cells(), vec![s!(); FIELD_COUNT]);
    }

    #[test]
    fn display_matches_emitter_format() {
        assert_eq!(Value::Float(45.0).to_string(), "45");
        assert_eq!(Value::Float(12.3).to_string(), "12.3");
        assert_eq!(Value::Float(0.0).to_string(), "0");
        assert_eq!(Value::Float(-1.5).to_string(), "-1.5");
        assert_eq!(Value::Int(13).to_string(), "13");
        assert_eq!(Value::Text(s!("晴れ")).to_string(), "晴れ");
    }

    #[test]
    fn typed_getters() {
        let mut r = Record::empty();
        r.set(Field::Hour, Some(Value::Int(5)));
        r.set(Field::Temperature, Some(Value::Float(12.3)));
        r.set(Field::Weather, Some(Value::Text(s!("雨"))));
        assert_eq!(r.int(Field::Hour), Some(5));
        assert_eq!(r.float(Field::Temperature), Some(12.3));
        assert_eq!(r.text(Field::Weather), Some("雨"));
        assert_eq!(r.float(Field::Hour), None);
        assert_eq!(r.get(Field::Visibility), None);
    }

    #[test]
    fn headers_cover_every_field() {
        let h = header_cells();
        assert_eq!(h.len(), FIELD_COUNT);
        assert_eq!(h[0], "hour");
        assert_eq!(h[16], "visibility_km");
    }
}
