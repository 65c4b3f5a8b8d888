// ABOUTME: ConvertTool - unit conversion across length, mass, and temperature.
// ABOUTME: Cross-category conversions are explicit error results.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Units the converter understands, grouped by physical quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    // length
    Meters,
    Kilometers,
    Miles,
    Feet,
    // mass
    Kilograms,
    Pounds,
    // temperature
    Celsius,
    Fahrenheit,
    Kelvin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Length,
    Mass,
    Temperature,
}

impl Unit {
    fn category(self) -> Category {
        match self {
            Unit::Meters | Unit::Kilometers | Unit::Miles | Unit::Feet => Category::Length,
            Unit::Kilograms | Unit::Pounds => Category::Mass,
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => Category::Temperature,
        }
    }

    /// Factor to the category's base unit (meters or kilograms).
    fn to_base(self) -> f64 {
        match self {
            Unit::Meters => 1.0,
            Unit::Kilometers => 1000.0,
            Unit::Miles => 1609.344,
            Unit::Feet => 0.3048,
            Unit::Kilograms => 1.0,
            Unit::Pounds => 0.45359237,
            // Temperature is affine, handled separately.
            Unit::Celsius | Unit::Fahrenheit | Unit::Kelvin => 1.0,
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            Unit::Celsius => value,
            Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            Unit::Kelvin => value - 273.15,
            _ => value,
        }
    }

    fn from_celsius(self, value: f64) -> f64 {
        match self {
            Unit::Celsius => value,
            Unit::Fahrenheit => value * 9.0 / 5.0 + 32.0,
            Unit::Kelvin => value + 273.15,
            _ => value,
        }
    }
}

fn convert(value: f64, from: Unit, to: Unit) -> Result<f64, String> {
    if from.category() != to.category() {
        return Err(format!(
            "cannot convert between {:?} and {:?}",
            from, to
        ));
    }

    Ok(match from.category() {
        Category::Temperature => to.from_celsius(from.to_celsius(value)),
        Category::Length | Category::Mass => value * from.to_base() / to.to_base(),
    })
}

/// Tool for unit conversion.
pub struct ConvertTool;

#[async_trait]
impl Tool for ConvertTool {
    fn name(&self) -> &str {
        "convert_units"
    }

    fn description(&self) -> &str {
        "Convert a value between units of length, mass, or temperature"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "value": {
                    "type": "number",
                    "description": "The value to convert"
                },
                "from": {
                    "type": "string",
                    "description": "Source unit",
                    "enum": ["meters", "kilometers", "miles", "feet",
                             "kilograms", "pounds",
                             "celsius", "fahrenheit", "kelvin"]
                },
                "to": {
                    "type": "string",
                    "description": "Target unit",
                    "enum": ["meters", "kilometers", "miles", "feet",
                             "kilograms", "pounds",
                             "celsius", "fahrenheit", "kelvin"]
                }
            },
            "required": ["value", "from", "to"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Args {
            value: f64,
            from: Unit,
            to: Unit,
        }
        let args: Args = serde_json::from_value(args)?;

        match convert(args.value, args.from, args.to) {
            Ok(result) => Ok(ToolResult::ok(serde_json::json!({
                "value": args.value,
                "from": format!("{:?}", args.from).to_lowercase(),
                "to": format!("{:?}", args.to).to_lowercase(),
                "result": result,
            }))),
            Err(message) => Ok(ToolResult::error(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        let km = convert(1609.344, Unit::Meters, Unit::Kilometers).unwrap();
        assert!((km - 1.609344).abs() < 1e-9);

        let miles = convert(1.0, Unit::Kilometers, Unit::Miles).unwrap();
        assert!((miles - 0.621371).abs() < 1e-4);
    }

    #[test]
    fn test_mass_conversion() {
        let pounds = convert(1.0, Unit::Kilograms, Unit::Pounds).unwrap();
        assert!((pounds - 2.204623).abs() < 1e-4);
    }

    #[test]
    fn test_temperature_conversion() {
        assert_eq!(convert(0.0, Unit::Celsius, Unit::Fahrenheit).unwrap(), 32.0);
        assert_eq!(convert(212.0, Unit::Fahrenheit, Unit::Celsius).unwrap(), 100.0);
        assert_eq!(convert(0.0, Unit::Celsius, Unit::Kelvin).unwrap(), 273.15);
    }

    #[test]
    fn test_cross_category_is_error() {
        assert!(convert(1.0, Unit::Meters, Unit::Kilograms).is_err());
        assert!(convert(1.0, Unit::Celsius, Unit::Miles).is_err());
    }

    #[tokio::test]
    async fn test_execute_success() {
        let result = ConvertTool
            .execute(serde_json::json!({"value": 100, "from": "celsius", "to": "fahrenheit"}))
            .await
            .unwrap();
        assert!(!result.is_error);
        assert_eq!(result.payload["result"], 212.0);
    }

    #[tokio::test]
    async fn test_execute_cross_category_is_error_result() {
        let result = ConvertTool
            .execute(serde_json::json!({"value": 1, "from": "meters", "to": "pounds"}))
            .await
            .unwrap();
        assert!(result.is_error);
    }

    #[tokio::test]
    async fn test_execute_unknown_unit_fails_deserialization() {
        let result = ConvertTool
            .execute(serde_json::json!({"value": 1, "from": "furlongs", "to": "meters"}))
            .await;
        assert!(result.is_err());
    }
}
