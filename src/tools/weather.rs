// ABOUTME: WeatherTool - current weather lookup via the OpenWeather API.
// ABOUTME: Returns temperature, description, and humidity for a city.

use async_trait::async_trait;
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

const OPENWEATHER_DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5";

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    main: WeatherMain,
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

/// Tool for fetching current weather for a city.
pub struct WeatherTool {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl WeatherTool {
    /// Create a new WeatherTool with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            api_key: api_key.into(),
            base_url: OPENWEATHER_DEFAULT_BASE_URL.to_string(),
            client,
        })
    }

    /// Create a new WeatherTool from the OPENWEATHER_API_KEY variable.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let api_key = std::env::var("OPENWEATHER_API_KEY")
            .map_err(|_| anyhow::anyhow!("OPENWEATHER_API_KEY environment variable not set"))?;
        Self::new(api_key)
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Get current weather information for a given city"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "City name to get weather for"
                }
            },
            "required": ["location"]
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Args {
            location: String,
        }
        let args: Args = serde_json::from_value(args)?;

        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(&args.location),
            self.api_key
        );

        let response = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => return Ok(ToolResult::error(format!("Weather lookup failed: {}", e))),
        };

        if !response.status().is_success() {
            return Ok(ToolResult::error("Location not found"));
        }

        let data: WeatherResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                return Ok(ToolResult::error(format!(
                    "Malformed weather response: {}",
                    e
                )));
            }
        };

        let description = data
            .weather
            .first()
            .map(|c| c.description.clone())
            .unwrap_or_default();

        Ok(ToolResult::ok(serde_json::json!({
            "location": args.location,
            "temperature_celsius": data.main.temp,
            "description": description,
            "humidity": data.main.humidity,
        })))
    }
}
