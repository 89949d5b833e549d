use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Availability of the lodging attached to a reservation.
///
/// `Pending` is the neutral "no decision yet" value; selecting it never
/// triggers an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Available,
    Unavailable,
}

impl ReservationStatus {
    /// All statuses in the order they are offered to staff
    pub const ALL: [ReservationStatus; 3] = [
        ReservationStatus::Pending,
        ReservationStatus::Available,
        ReservationStatus::Unavailable,
    ];

    /// Value used on the wire and in `<option value=..>`
    pub fn as_str(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Available => "available",
            ReservationStatus::Unavailable => "unavailable",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value.trim() {
            "pending" => Some(ReservationStatus::Pending),
            "available" => Some(ReservationStatus::Available),
            "unavailable" => Some(ReservationStatus::Unavailable),
            _ => None,
        }
    }

    /// Label shown to staff in the status dropdown
    pub fn label(self) -> &'static str {
        match self {
            ReservationStatus::Pending => "En attente...",
            ReservationStatus::Available => "Dispo",
            ReservationStatus::Unavailable => "Pas dispo",
        }
    }

    pub fn is_pending(self) -> bool {
        self == ReservationStatus::Pending
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReservationStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Unknown or null statuses fall back to the neutral value
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .and_then(ReservationStatus::from_wire)
            .unwrap_or_default())
    }
}

/// Identifier as sent by the backend, which uses numbers or strings
/// depending on the resource.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ReservationId(String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct LodgingId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(ReservationId);
string_id!(LodgingId);

/// Guest who made the booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

impl Tenant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname.trim(), self.lastname.trim())
            .trim()
            .to_string()
    }
}

/// Pitch, mobile home or cabin a reservation occupies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lodging {
    pub id: LodgingId,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    /// Arrival day
    #[serde(with = "wire_date")]
    pub date_start: NaiveDate,
    /// Departure day
    #[serde(with = "wire_date")]
    pub date_end: NaiveDate,
    #[serde(default)]
    pub status: ReservationStatus,
    #[serde(default, alias = "users", deserialize_with = "embedded_or_none")]
    pub tenant: Option<Tenant>,
    #[serde(default, alias = "logement", deserialize_with = "embedded_or_none")]
    pub lodging: Option<Lodging>,
}

impl Reservation {
    /// Tenant full name, empty when the booking has no tenant attached
    pub fn tenant_name(&self) -> String {
        self.tenant
            .as_ref()
            .map(Tenant::full_name)
            .unwrap_or_default()
    }

    pub fn lodging_label(&self) -> &str {
        self.lodging
            .as_ref()
            .map(|lodging| lodging.label.as_str())
            .unwrap_or("")
    }

    /// Identifier that status updates address
    pub fn lodging_id(&self) -> Option<&LodgingId> {
        self.lodging.as_ref().map(|lodging| &lodging.id)
    }
}

/// Relations are only usable when the backend embeds them; an IRI string or
/// a partial object is treated as absent.
fn embedded_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| serde_json::from_value(value).ok()))
}

/// Collection envelope returned by the reservations endpoint.
///
/// Members are decoded one by one: a record with a missing or unreadable
/// date is dropped and counted in `skipped` instead of failing the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReservationCollection {
    pub member: Vec<Reservation>,
    #[serde(skip)]
    pub skipped: usize,
}

#[derive(Deserialize)]
struct RawCollection {
    #[serde(default, alias = "hydra:member")]
    member: Vec<serde_json::Value>,
}

impl<'de> Deserialize<'de> for ReservationCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawCollection::deserialize(deserializer)?;
        let total = raw.member.len();
        let member: Vec<Reservation> = raw
            .member
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect();

        Ok(Self {
            skipped: total - member.len(),
            member,
        })
    }
}

impl ReservationCollection {
    pub fn new(member: Vec<Reservation>) -> Self {
        Self { member, skipped: 0 }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Parse a backend date, keeping only the calendar day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the day is taken in the
/// timestamp's own offset) and naive `YYYY-MM-DDTHH:MM:SS` timestamps.
pub fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(timestamp) = chrono::DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    if let Ok(timestamp) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(timestamp.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

mod wire_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_wire_date(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid date: {raw}")))
    }
}
