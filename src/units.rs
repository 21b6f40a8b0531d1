// ABOUTME: Static unit tables for the distance, weight and temperature categories
// ABOUTME: Scalar factors for linear units and a tagged enum for affine temperature units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Unit tables
//!
//! Distance and weight units convert through a base unit (meter, gram) by a
//! single multiplicative factor. Temperature units are affine relative to
//! Celsius, so each one carries its own pair of conversion functions.

use crate::constants::units::{
    CELSIUS_PER_FAHRENHEIT_DEGREE, FAHRENHEIT_FREEZING_POINT, FAHRENHEIT_PER_CELSIUS_DEGREE,
    GRAMS_PER_KILOGRAM, GRAMS_PER_MILLIGRAM, GRAMS_PER_OUNCE, GRAMS_PER_POUND, KELVIN_OFFSET,
    METERS_PER_CENTIMETER, METERS_PER_FOOT, METERS_PER_INCH, METERS_PER_KM, METERS_PER_MILE,
    METERS_PER_MILLIMETER,
};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Conversion category; selects the unit table and the form page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitCategory {
    /// Lengths, base unit meter
    Distance,
    /// Masses, base unit gram
    Weight,
    /// Temperatures, base unit Celsius
    Temperature,
}

impl UnitCategory {
    /// All categories in navigation order
    pub const ALL: [Self; 3] = [Self::Distance, Self::Weight, Self::Temperature];

    /// Path segment and form action for this category
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
        }
    }

    /// Human readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Distance => "Distance",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
        }
    }

    /// Valid unit keys, in the order the form lists them
    #[must_use]
    pub fn unit_names(self) -> Vec<&'static str> {
        match self {
            Self::Distance => DistanceUnit::ALL.iter().map(|u| u.name()).collect(),
            Self::Weight => WeightUnit::ALL.iter().map(|u| u.name()).collect(),
            Self::Temperature => TemperatureUnit::ALL.iter().map(|u| u.name()).collect(),
        }
    }

    /// Resolve a path segment; `None` for anything that is not a category
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Returned by the unit `FromStr` impls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown unit '{0}'")]
pub struct UnknownUnitName(pub String);

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

/// Distance units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    /// inch
    Inch,
    /// foot
    Foot,
    /// mile
    Mile,
    /// millimeter
    Millimeter,
    /// centimeter
    Centimeter,
    /// meter
    Meter,
    /// kilometer
    Kilometer,
}

impl DistanceUnit {
    /// Table order
    pub const ALL: [Self; 7] = [
        Self::Inch,
        Self::Foot,
        Self::Mile,
        Self::Millimeter,
        Self::Centimeter,
        Self::Meter,
        Self::Kilometer,
    ];

    /// Form key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Inch => "inch",
            Self::Foot => "foot",
            Self::Mile => "mile",
            Self::Millimeter => "millimeter",
            Self::Centimeter => "centimeter",
            Self::Meter => "meter",
            Self::Kilometer => "kilometer",
        }
    }

    /// How many meters one of this unit is
    #[must_use]
    pub const fn meters(self) -> f64 {
        match self {
            Self::Inch => METERS_PER_INCH,
            Self::Foot => METERS_PER_FOOT,
            Self::Mile => METERS_PER_MILE,
            Self::Millimeter => METERS_PER_MILLIMETER,
            Self::Centimeter => METERS_PER_CENTIMETER,
            Self::Meter => 1.0,
            Self::Kilometer => METERS_PER_KM,
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = UnknownUnitName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|u| u.name() == key)
            .ok_or_else(|| UnknownUnitName(s.to_owned()))
    }
}

/// Weight units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    /// milligram
    Milligram,
    /// gram
    Gram,
    /// kilogram
    Kilogram,
    /// avoirdupois ounce
    Ounce,
    /// avoirdupois pound
    Pound,
}

impl WeightUnit {
    /// Table order
    pub const ALL: [Self; 5] = [
        Self::Milligram,
        Self::Gram,
        Self::Kilogram,
        Self::Ounce,
        Self::Pound,
    ];

    /// Form key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Milligram => "milligram",
            Self::Gram => "gram",
            Self::Kilogram => "kilogram",
            Self::Ounce => "ounce",
            Self::Pound => "pound",
        }
    }

    /// How many grams one of this unit is
    #[must_use]
    pub const fn grams(self) -> f64 {
        match self {
            Self::Milligram => GRAMS_PER_MILLIGRAM,
            Self::Gram => 1.0,
            Self::Kilogram => GRAMS_PER_KILOGRAM,
            Self::Ounce => GRAMS_PER_OUNCE,
            Self::Pound => GRAMS_PER_POUND,
        }
    }
}

impl FromStr for WeightUnit {
    type Err = UnknownUnitName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|u| u.name() == key)
            .ok_or_else(|| UnknownUnitName(s.to_owned()))
    }
}

/// Temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// degrees Fahrenheit
    Fahrenheit,
    /// degrees Celsius (base)
    Celsius,
    /// kelvin
    Kelvin,
}

impl TemperatureUnit {
    /// Table order
    pub const ALL: [Self; 3] = [Self::Fahrenheit, Self::Celsius, Self::Kelvin];

    /// Form key
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fahrenheit => "fahrenheit",
            Self::Celsius => "celsius",
            Self::Kelvin => "kelvin",
        }
    }

    /// Translate a reading on this scale into Celsius
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Fahrenheit => {
                (value - FAHRENHEIT_FREEZING_POINT) * CELSIUS_PER_FAHRENHEIT_DEGREE
            }
            Self::Celsius => value,
            Self::Kelvin => value - KELVIN_OFFSET,
        }
    }

    /// Translate a Celsius reading onto this scale
    #[must_use]
    pub fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            Self::Fahrenheit => {
                celsius.mul_add(FAHRENHEIT_PER_CELSIUS_DEGREE, FAHRENHEIT_FREEZING_POINT)
            }
            Self::Celsius => celsius,
            Self::Kelvin => celsius + KELVIN_OFFSET,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnknownUnitName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        Self::ALL
            .into_iter()
            .find(|u| u.name() == key)
            .ok_or_else(|| UnknownUnitName(s.to_owned()))
    }
}
