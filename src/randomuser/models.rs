use serde::{de, Deserialize, Deserializer};
use std::fmt;

// user
//  └── location
//       ├── street
//       │    ├── number
//       │    └── name
//       ├── city
//       ├── state
//       ├── country
//       ├── postcode      (number or string)
//       └── coordinates
//            ├── latitude  (number or numeric string)
//            └── longitude (number or numeric string)
//
// Every field is optional here; absence is reported by the normalizer.
// Other keys (name, email, login, ...) are not read and serde skips them.

#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    pub results: Vec<RawUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub location: Option<RawLocation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    pub street: Option<Street>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<Postcode>,
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Street {
    pub number: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Coordinates {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
}

/// Some regions publish numeric postcodes, others alphanumeric ones.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Postcode {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Postcode::Number(n) => write!(f, "{n}"),
            Postcode::Text(s) => f.write_str(s),
        }
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    let value = match Option::<NumberOrText>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(NumberOrText::Number(n)) => n,
        Some(NumberOrText::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid coordinate {s:?}")))?,
    };

    // "NaN" and "inf" parse as f64 but are not coordinates
    if !value.is_finite() {
        return Err(de::Error::custom(format!("invalid coordinate {value}")));
    }
    Ok(Some(value))
}
