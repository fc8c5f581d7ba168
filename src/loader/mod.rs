//! Record store: one-time extraction of transfer records from the two
//! schedule documents.
//!
//! Each document optionally carries a nested `templates.content` array of
//! record objects. Absence of that path is normal (an empty dataset), never
//! an error. Field names inside the record objects vary across upstream
//! exports (`PickupTime` vs `Time` has been observed), so extraction goes
//! through an explicit [`FieldMap`] instead of a hardcoded shape.

use crate::model::{Dataset, TransferRecord};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// JSON field names used to extract the four record fields.
///
/// Supplied at load time, typically from the `[fields]` config section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldMap {
    /// Field holding the booking reference.
    #[serde(default = "default_booking_ref_field")]
    pub booking_ref: String,
    /// Field holding the flight number.
    #[serde(default = "default_flight_field")]
    pub flight: String,
    /// Field holding the hotel name.
    #[serde(default = "default_hotel_field")]
    pub hotel: String,
    /// Field holding the pick-up time.
    #[serde(default = "default_pickup_time_field")]
    pub pickup_time: String,
}

fn default_booking_ref_field() -> String {
    "id".to_string()
}

fn default_flight_field() -> String {
    "Flight".to_string()
}

fn default_hotel_field() -> String {
    "HotelName".to_string()
}

fn default_pickup_time_field() -> String {
    "PickupTime".to_string()
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            booking_ref: default_booking_ref_field(),
            flight: default_flight_field(),
            hotel: default_hotel_field(),
            pickup_time: default_pickup_time_field(),
        }
    }
}

/// Extract the records of one schedule document.
///
/// Reads `templates.content`; a missing path, a non-array value, or
/// non-object elements all degrade to an empty/partial result rather than
/// failing. Missing mapped fields become empty display strings.
pub fn parse_document(doc: &Value, fields: &FieldMap) -> Vec<TransferRecord> {
    let content = doc
        .get("templates")
        .and_then(|t| t.get("content"))
        .and_then(|c| c.as_array());

    let Some(items) = content else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| item.as_object())
        .map(|obj| {
            let field = |name: &str| {
                obj.get(name)
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string()
            };
            TransferRecord {
                booking_ref: field(&fields.booking_ref),
                flight: field(&fields.flight),
                hotel: field(&fields.hotel),
                pickup_time: field(&fields.pickup_time),
            }
        })
        .collect()
}

/// Immutable holder for both datasets, populated once at startup.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    today: Vec<TransferRecord>,
    tomorrow: Vec<TransferRecord>,
}

impl RecordStore {
    /// Build the store from the two parsed schedule documents.
    ///
    /// Source order is preserved; the store is read-only afterward.
    pub fn load(today_doc: &Value, tomorrow_doc: &Value, fields: &FieldMap) -> Self {
        let today = parse_document(today_doc, fields);
        let tomorrow = parse_document(tomorrow_doc, fields);
        debug!(
            today = today.len(),
            tomorrow = tomorrow.len(),
            "Record store loaded"
        );
        Self { today, tomorrow }
    }

    /// Construct a store directly from record vectors (tests, fixtures).
    pub fn from_records(today: Vec<TransferRecord>, tomorrow: Vec<TransferRecord>) -> Self {
        Self { today, tomorrow }
    }

    /// Records of the given dataset, in source order.
    pub fn records(&self, dataset: Dataset) -> &[TransferRecord] {
        match dataset {
            Dataset::Today => &self.today,
            Dataset::Tomorrow => &self.tomorrow,
        }
    }

    /// Record count of the given dataset.
    pub fn len(&self, dataset: Dataset) -> usize {
        self.records(dataset).len()
    }

    /// True when the given dataset holds no records.
    pub fn is_empty(&self, dataset: Dataset) -> bool {
        self.records(dataset).is_empty()
    }
}
