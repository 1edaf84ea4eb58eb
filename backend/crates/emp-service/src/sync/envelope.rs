//! Wire shape of the third-party `/employees` response.
//!
//! Only `data` is consumed. The API has served numeric fields both as JSON
//! numbers and as numeric strings, so both are accepted.

use emp_core::Employee;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub(crate) struct EmployeeEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub data: Option<Vec<RemoteEmployee>>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoteEmployee {
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    pub employee_name: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub employee_salary: f64,
    #[serde(deserialize_with = "lenient_i32")]
    pub employee_age: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub profile_image: String,
}

impl From<RemoteEmployee> for Employee {
    fn from(remote: RemoteEmployee) -> Self {
        Employee::new(
            remote.id,
            remote.employee_name,
            remote.employee_salary,
            remote.employee_age,
            remote.profile_image,
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

impl<T> NumberOrString<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    fn into_value<E: serde::de::Error>(self) -> Result<T, E> {
        match self {
            NumberOrString::Number(value) => Ok(value),
            NumberOrString::Text(text) => text
                .trim()
                .parse::<T>()
                .map_err(|e| E::custom(format!("invalid number '{}': {}", text, e))),
        }
    }
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    NumberOrString::<i64>::deserialize(deserializer)?.into_value()
}

fn lenient_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    NumberOrString::<i32>::deserialize(deserializer)?.into_value()
}

/// Rejects `"NaN"` and `"inf"`, which `f64::from_str` would otherwise accept.
fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let value: f64 = NumberOrString::<f64>::deserialize(deserializer)?.into_value::<D::Error>()?;
    if !value.is_finite() {
        return Err(serde::de::Error::custom(format!(
            "non-finite number: {}",
            value
        )));
    }
    Ok(value)
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
