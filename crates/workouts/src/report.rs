use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    errors::{Result, WorkoutError},
    training::Training,
};

/// Summary of a finished workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    /// Kilocalories.
    pub calories: f64,
}

impl InfoMessage {
    pub fn get_message(&self) -> String {
        format!(
            "Activity type: {}; Duration: {:.3} h.; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type,
            self.duration,
            round3(self.distance),
            round3(self.speed),
            round3(self.calories),
        )
    }

    /// Copy with distance, speed and calories rounded to three decimals.
    pub fn rounded(&self) -> Self {
        Self {
            training_type: self.training_type.clone(),
            duration: self.duration,
            distance: round3(self.distance),
            speed: round3(self.speed),
            calories: round3(self.calories),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(WorkoutError::InvalidConfig(format!(
                "unsupported output format {other:?}, expected \"text\" or \"json\""
            ))),
        }
    }
}

/// Renders one line for `workout`; metrics are computed exactly once.
pub fn render_report(workout: &impl Training, format: OutputFormat) -> Result<String> {
    let info = workout.show_training_info();
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(&info.rounded())?),
    }
}

/// Rounds half away from zero on the value scaled by 1000.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::{Running, Swimming};

    #[test]
    fn test_message_format() {
        let info = InfoMessage {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        };
        assert_eq!(
            info.get_message(),
            "Activity type: Running; Duration: 1.000 h.; Distance: 9.750 km; Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
        assert_eq!(info.to_string(), info.get_message());
    }

    #[test]
    fn test_values_rounded_to_three_places() {
        let info = InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 0.75,
            distance: 0.9936,
            speed: 1.23456,
            calories: 12.0004,
        };
        assert_eq!(
            info.get_message(),
            "Activity type: Swimming; Duration: 0.750 h.; Distance: 0.994 km; Avg speed: 1.235 km/h; Calories burned: 12.000."
        );
    }

    #[test]
    fn test_round3_ties_away_from_zero() {
        // 0.0625 is exact in binary, so the scaled value is a true tie
        assert_eq!(round3(0.0625), 0.063);
        assert_eq!(round3(-0.0625), -0.063);
    }

    #[test]
    fn test_json_report() {
        let swim = Swimming::new(720.0, 1.0, 80.0, 25.0, 40.0);
        let line = render_report(&swim, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["training_type"], "Swimming");
        assert_eq!(value["distance"], 0.994);
        assert_eq!(value["speed"], 1.0);
        assert_eq!(value["calories"], 336.0);
    }

    #[test]
    fn test_text_report() {
        let run = Running::new(15000.0, 1.0, 75.0);
        let line = render_report(&run, OutputFormat::Text).unwrap();
        assert!(line.starts_with("Activity type: Running; Duration: 1.000 h.;"));
        assert!(line.ends_with("Calories burned: 699.750."));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" text ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(WorkoutError::InvalidConfig(_))
        ));
    }
}
