// ABOUTME: Unit conversion constants for distance, weight and temperature
// ABOUTME: Provides named constants to eliminate magic numbers in the unit tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Meters per inch
pub const METERS_PER_INCH: f64 = 0.0254;

/// Meters per foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per mile
pub const METERS_PER_MILE: f64 = 1609.34;

/// Meters per millimeter
pub const METERS_PER_MILLIMETER: f64 = 0.001;

/// Meters per centimeter
pub const METERS_PER_CENTIMETER: f64 = 0.01;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Grams per milligram
pub const GRAMS_PER_MILLIGRAM: f64 = 0.001;

/// Grams per kilogram
pub const GRAMS_PER_KILOGRAM: f64 = 1000.0;

/// Grams per ounce
pub const GRAMS_PER_OUNCE: f64 = 28.35;

/// Grams per pound
pub const GRAMS_PER_POUND: f64 = 453.592;

/// Water freezing point in Fahrenheit
pub const FAHRENHEIT_FREEZING_POINT: f64 = 32.0;

/// Celsius degrees per Fahrenheit degree
pub const CELSIUS_PER_FAHRENHEIT_DEGREE: f64 = 5.0 / 9.0;

/// Fahrenheit degrees per Celsius degree
pub const FAHRENHEIT_PER_CELSIUS_DEGREE: f64 = 9.0 / 5.0;

/// Offset between Kelvin and Celsius
pub const KELVIN_OFFSET: f64 = 273.15;
