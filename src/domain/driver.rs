use serde::{Deserialize, Serialize};

/// Identifier carried by a driver that has not been persisted yet.
///
/// The store assigns the real identifier when the insert is committed.
pub const UNASSIGNED_ID: i64 = 0;

/// Driver entity
///
/// Serialized as `{ "id", "name", "driverNumber", "team" }`. A request body may
/// omit `id`, in which case it is treated as unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub driver_number: i32,
    pub team: String,
}

impl Driver {
    /// Creates a driver that has not been stored yet
    pub fn new(name: impl Into<String>, driver_number: i32, team: impl Into<String>) -> Self {
        Self {
            id: UNASSIGNED_ID,
            name: name.into(),
            driver_number,
            team: team.into(),
        }
    }

    /// Whether the store has assigned this driver an identifier
    #[cfg(test)]
    pub(crate) fn is_persisted(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    /// Drops any client-supplied identifier before the driver is added.
    pub fn clear_id(&mut self) {
        self.id = UNASSIGNED_ID;
    }

    /// Copies the editable fields from `source`.
    ///
    /// Only `name`, `driver_number` and `team` change; `id` is left untouched.
    pub fn apply_changes(&mut self, source: &Driver) {
        self.name.clone_from(&source.name);
        self.driver_number = source.driver_number;
        self.team.clone_from(&source.team);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let mut driver = Driver::new("Max Verstappen", 1, "Red Bull");
        driver.id = 7;

        let value = serde_json::to_value(&driver).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Max Verstappen",
                "driverNumber": 1,
                "team": "Red Bull"
            })
        );
    }

    #[test]
    fn test_missing_id_deserializes_as_unassigned() {
        let driver: Driver = serde_json::from_value(json!({
            "name": "Lando Norris",
            "driverNumber": 4,
            "team": "McLaren"
        }))
        .unwrap();

        assert_eq!(driver.id, UNASSIGNED_ID);
        assert!(!driver.is_persisted());
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_value::<Driver>(json!({
            "id": 1,
            "driverNumber": 4,
            "team": "McLaren"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_apply_changes_keeps_id() {
        let mut stored = Driver::new("Charles Leclerc", 16, "Ferrari");
        stored.id = 3;
        let mut incoming = Driver::new("Carlos Sainz", 55, "Williams");
        incoming.id = 99;

        stored.apply_changes(&incoming);

        assert_eq!(stored.id, 3);
        assert_eq!(stored.name, "Carlos Sainz");
        assert_eq!(stored.driver_number, 55);
        assert_eq!(stored.team, "Williams");
    }

    #[test]
    fn test_clear_id_resets_to_sentinel() {
        let mut driver = Driver::new("Oscar Piastri", 81, "McLaren");
        driver.id = 42;

        driver.clear_id();

        assert_eq!(driver.id, UNASSIGNED_ID);
    }
}
