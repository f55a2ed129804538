use crate::state::Attributes;

/// Read-only attribute table keyed by entity name.
pub trait AttributeOracle: Send + Sync {
    fn record(&self, name: &str) -> Option<&AttributeRecord>;

    fn attributes(&self, name: &str) -> Option<Attributes> {
        self.record(name).map(|record| record.to_attributes())
    }
}

/// One row of the attribute table as it appears in content files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeRecord {
    pub health: i32,
    /// Movement range in cells per turn.
    pub distance: u32,
    pub damage: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub remote: bool,
}

impl AttributeRecord {
    pub fn to_attributes(&self) -> Attributes {
        Attributes {
            max_health: self.health,
            movement_range: self.distance,
            base_damage: self.damage,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            is_remote: self.remote,
        }
    }
}

impl<S> AttributeOracle for std::collections::HashMap<String, AttributeRecord, S>
where
    S: std::hash::BuildHasher + Send + Sync,
{
    fn record(&self, name: &str) -> Option<&AttributeRecord> {
        self.get(name)
    }
}

impl AttributeOracle for std::collections::BTreeMap<String, AttributeRecord> {
    fn record(&self, name: &str) -> Option<&AttributeRecord> {
        self.get(name)
    }
}
