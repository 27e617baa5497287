//! Safe operating ranges and the remediation advice recorded when a reading leaves them.

use crate::parameter::Parameter;
use crate::store::readings::NewReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breach {
    Low,
    High,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdRule {
    pub parameter: Parameter,
    pub min: f64,
    pub max: f64,
    /// `None` means values under `min` are tolerated.
    pub low_message: Option<&'static str>,
    pub high_message: &'static str,
}

/// An alert ready to be written to `ras_history`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDraft {
    pub title: &'static str,
    pub description: &'static str,
    pub value: String,
}

/// Rules in evaluation order.
pub static RULES: [ThresholdRule; 4] = [
    ThresholdRule {
        parameter: Parameter::Ph,
        min: 6.5,
        max: 8.6,
        low_message: Some(
            "The water is too acidic. Consider adding a pH increaser or buffering agent to raise the pH. Ensure gradual adjustments and recheck pH after 24 hours.",
        ),
        high_message: "The water is too alkaline. Consider adding a pH reducer or acidic buffer to bring the pH back to a balanced level. Monitor closely and make adjustments gradually to avoid sudden changes that could stress the aquatic life.",
    },
    ThresholdRule {
        parameter: Parameter::DissolvedOxygen,
        min: 6.0,
        max: 9.0,
        low_message: Some(
            "Dissolved oxygen is low, which can lead to stress in fish. Increase aeration by adding air stones, adjusting flow rate, or installing additional water pumps to circulate and oxygenate the water.",
        ),
        high_message: "Dissolved oxygen is very high. If you're noticing bubbles or gas bubble disease in fish, reduce aeration slightly and monitor. Typically, natural fluctuations will lower the DO.",
    },
    ThresholdRule {
        parameter: Parameter::Temperature,
        min: 22.0,
        max: 28.0,
        low_message: Some(
            "Temperature is below the safe range. Adjust the heater setting or place insulation around the tank to stabilize the temperature. Avoid sudden increases that could stress fish or other organisms.",
        ),
        high_message: "Temperature is above the safe range. Turn down heaters, increase cooling by adding ice packs carefully or using a fan, and check surrounding equipment. Avoid drastic temperature changes that could shock aquatic life.",
    },
    ThresholdRule {
        parameter: Parameter::Ammonia,
        min: 0.00,
        max: 0.08,
        low_message: None,
        high_message: "Ammonia levels are dangerously high and could harm aquatic life. Perform a partial water change (20–30%) to dilute ammonia levels, and check your filtration system. Consider adding beneficial bacteria to help convert ammonia to less toxic forms.",
    },
];

impl ThresholdRule {
    /// Bounds are inclusive: only values strictly outside `[min, max]` breach.
    #[must_use]
    pub fn breach(&self, value: f64) -> Option<Breach> {
        if value < self.min {
            Some(Breach::Low)
        } else if value > self.max {
            Some(Breach::High)
        } else {
            None
        }
    }

    /// Evaluate a stored reading value. Non-numeric text never raises an alert.
    #[must_use]
    pub fn evaluate(&self, raw: &str) -> Option<AlertDraft> {
        let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;

        let description = match self.breach(value)? {
            Breach::Low => self.low_message?,
            Breach::High => self.high_message,
        };

        Some(AlertDraft {
            title: self.parameter.title(),
            description,
            value: raw.to_string(),
        })
    }
}

/// All alerts a reading raises, in rule order.
#[must_use]
pub fn evaluate_reading(reading: &NewReading) -> Vec<AlertDraft> {
    RULES
        .iter()
        .filter_map(|rule| rule.evaluate(reading.value(rule.parameter)))
        .collect()
}
