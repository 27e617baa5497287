use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

use crate::common::text::clean_field;
use crate::common::time::format_timestamp;
use crate::common::ResponseStatus;
use crate::entity::readings;
use crate::error::{AppError, AppResult};
use crate::filters::DateFilter;
use crate::parameter::Parameter;
use crate::store::readings::{NewReading, ReadingQuery};

/// Sensor reading posted by a device. Values may be JSON strings or numbers.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct IngestRequest {
    /// Water temperature (°C)
    #[serde(default, deserialize_with = "text_or_number")]
    #[schema(example = "25.4")]
    pub temp: Option<String>,
    /// Dissolved oxygen (mg/L)
    #[serde(default, rename = "do", deserialize_with = "text_or_number")]
    #[schema(example = "7.2")]
    pub dissolved_oxygen: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    #[schema(example = "7.0")]
    pub ph: Option<String>,
    /// Ammonia (mg/L), may be omitted
    #[serde(default, deserialize_with = "text_or_number")]
    #[schema(example = "0.02")]
    pub ammonia: Option<String>,
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    }))
}

impl IngestRequest {
    /// Decode a request body, which must be a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON, non-object bodies and
    /// fields that are neither text, number nor null.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields = serde_json::from_slice::<Map<String, Value>>(body)?;
        serde_json::from_value(Value::Object(fields))
    }

    /// Sanitise the fields and enforce that temp, do and ph are present.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` naming the first empty required field.
    pub fn into_reading(self) -> AppResult<NewReading> {
        let reading = NewReading {
            temp: clean_field(self.temp.as_deref()),
            dissolved_oxygen: clean_field(self.dissolved_oxygen.as_deref()),
            ph: clean_field(self.ph.as_deref()),
            ammonia: clean_field(self.ammonia.as_deref()),
        };

        let required = [
            (&reading.temp, "Temperature cannot be empty"),
            (&reading.dissolved_oxygen, "Dissolved Oxygen cannot be empty"),
            (&reading.ph, "PH cannot be empty"),
        ];
        if let Some((_, message)) = required.iter().find(|(value, _)| value.is_empty()) {
            return Err(AppError::Validation((*message).to_string()));
        }

        Ok(reading)
    }
}

/// Query parameters for the readings endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReadingsQuery {
    /// Parameter to query: temp, do, ph or ammonia
    pub param: Option<String>,
    /// Exact temperature value (used when param=temp)
    pub temp: Option<String>,
    /// Exact dissolved oxygen value (used when param=do)
    #[serde(rename = "do")]
    pub dissolved_oxygen: Option<String>,
    /// Exact pH value (used when param=ph)
    pub ph: Option<String>,
    /// Exact ammonia value (used when param=ammonia)
    pub ammonia: Option<String>,
    /// First day to include (YYYY-MM-DD)
    pub start_date: Option<String>,
    /// Last day to include (YYYY-MM-DD)
    pub end_date: Option<String>,
    /// yearly, monthly, weekly, daily or all (default)
    pub range: Option<String>,
}

impl ReadingsQuery {
    /// Validate the raw query string into a typed query.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for an unknown `param` or a malformed date.
    pub fn into_reading_query(self) -> AppResult<ReadingQuery> {
        let parameter = self
            .param
            .as_deref()
            .and_then(Parameter::from_key)
            .ok_or_else(|| AppError::Validation("Invalid parameter selected.".to_string()))?;

        let dates = DateFilter::parse(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            self.range.as_deref(),
        )?;

        let exact_value = match parameter {
            Parameter::Temperature => self.temp,
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::Ph => self.ph,
            Parameter::Ammonia => self.ammonia,
        }
        .filter(|v| !v.is_empty());

        Ok(ReadingQuery {
            parameter,
            exact_value,
            dates,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingResponse {
    pub id: i32,
    pub temp: String,
    #[serde(rename = "do")]
    pub dissolved_oxygen: String,
    pub ph: String,
    pub ammonia: String,
    /// Local time, `YYYY-MM-DD HH:MM:SS`
    #[schema(example = "2024-05-01 08:30:00")]
    pub created_at: String,
}

impl From<readings::Model> for ReadingResponse {
    fn from(r: readings::Model) -> Self {
        Self {
            id: r.id,
            temp: r.temp,
            dissolved_oxygen: r.dissolved_oxygen,
            ph: r.ph,
            ammonia: r.ammonia,
            created_at: format_timestamp(&r.created_at),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: ResponseStatus,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReadingsListResponse {
    pub status: ResponseStatus,
    pub data: Vec<ReadingResponse>,
}
