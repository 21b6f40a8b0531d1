// ABOUTME: Pure conversion of a submitted value between two units of one category
// ABOUTME: Resolves unit keys against the unit tables and rejects keys outside the category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Converter
//!
//! Linear categories compute `value * factor[from] / factor[to]`; temperature
//! goes through Celsius with the scale's own affine functions.

use crate::errors::{AppError, AppResult};
use crate::units::{DistanceUnit, TemperatureUnit, UnitCategory, WeightUnit};
use std::str::FromStr;

/// One conversion submitted through a category form
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Value expressed in `from_unit`
    pub value: f64,
    /// Source unit key
    pub from_unit: String,
    /// Target unit key
    pub to_unit: String,
    /// Category whose table the keys belong to
    pub category: UnitCategory,
}

impl ConversionRequest {
    /// Build a request
    pub fn new(
        category: UnitCategory,
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            category,
        }
    }

    /// Run the conversion
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` if either key is not in the category's table
    pub fn convert(&self) -> AppResult<f64> {
        convert(self.category, self.value, &self.from_unit, &self.to_unit)
    }
}

/// Convert `value` from one unit of `category` to another
///
/// # Errors
///
/// Returns `UnknownUnit` if either key is not in the category's table
pub fn convert(category: UnitCategory, value: f64, from: &str, to: &str) -> AppResult<f64> {
    match category {
        UnitCategory::Distance => {
            let from = resolve::<DistanceUnit>(category, from)?;
            let to = resolve::<DistanceUnit>(category, to)?;
            Ok(scale(value, from.meters(), to.meters()))
        }
        UnitCategory::Weight => {
            let from = resolve::<WeightUnit>(category, from)?;
            let to = resolve::<WeightUnit>(category, to)?;
            Ok(scale(value, from.grams(), to.grams()))
        }
        UnitCategory::Temperature => {
            let from = resolve::<TemperatureUnit>(category, from)?;
            let to = resolve::<TemperatureUnit>(category, to)?;
            if from == to {
                return Ok(value);
            }
            Ok(to.from_celsius(from.to_celsius(value)))
        }
    }
}

fn resolve<U>(category: UnitCategory, key: &str) -> AppResult<U>
where
    U: FromStr<Err = crate::units::UnknownUnitName>,
{
    key.parse::<U>()
        .map_err(|e| AppError::unknown_unit(key, category.slug()).with_source(e))
}

fn scale(value: f64, from_factor: f64, to_factor: f64) -> f64 {
    // identical factors must give back the input bit for bit
    if from_factor.to_bits() == to_factor.to_bits() {
        return value;
    }
    value * from_factor / to_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_gram_to_kilogram() {
        let result = convert(UnitCategory::Weight, 1000.0, "gram", "kilogram").unwrap();
        assert!((result - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mile_to_kilometer() {
        let result = convert(UnitCategory::Distance, 1.0, "mile", "kilometer").unwrap();
        assert_close(result, 1.609_34);
    }

    #[test]
    fn test_foot_to_inch() {
        let result = convert(UnitCategory::Distance, 1.0, "foot", "inch").unwrap();
        assert_close(result, 12.0);
    }

    #[test]
    fn test_pound_to_ounce() {
        let result = convert(UnitCategory::Weight, 1.0, "pound", "ounce").unwrap();
        assert_close(result, 453.592 / 28.35);
    }

    #[test]
    fn test_identity_for_every_unit() {
        for category in UnitCategory::ALL {
            for unit in category.unit_names() {
                for value in [0.0, 1.0, -17.5, 123_456.789] {
                    let result = convert(category, value, unit, unit).unwrap();
                    assert_eq!(
                        result.to_bits(),
                        value.to_bits(),
                        "{category} {unit}: {value} became {result}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_celsius_fahrenheit_round_trip() {
        let f = convert(UnitCategory::Temperature, 0.0, "celsius", "fahrenheit").unwrap();
        assert_close(f, 32.0);
        let c = convert(UnitCategory::Temperature, f, "fahrenheit", "celsius").unwrap();
        assert_close(c, 0.0);
    }

    #[test]
    fn test_celsius_kelvin_round_trip() {
        let k = convert(UnitCategory::Temperature, 0.0, "celsius", "kelvin").unwrap();
        assert_close(k, 273.15);
        let c = convert(UnitCategory::Temperature, k, "kelvin", "celsius").unwrap();
        assert_close(c, 0.0);
    }

    #[test]
    fn test_fahrenheit_to_kelvin_goes_through_celsius() {
        let k = convert(UnitCategory::Temperature, 212.0, "fahrenheit", "kelvin").unwrap();
        assert_close(k, 373.15);
    }

    #[test]
    fn test_unknown_from_unit_is_an_error() {
        let err = convert(UnitCategory::Distance, 1.0, "furlong", "meter").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownUnit);
        assert!(err.message.contains("furlong"));
    }

    #[test]
    fn test_unit_from_another_category_is_an_error() {
        let err = convert(UnitCategory::Weight, 1.0, "gram", "meter").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownUnit);
        assert_eq!(err.message, "unknown weight unit 'meter'");
    }

    #[test]
    fn test_request_convert_delegates() {
        let request = ConversionRequest::new(UnitCategory::Weight, 2.0, "kilogram", "gram");
        assert_close(request.convert().unwrap(), 2000.0);
    }
}
