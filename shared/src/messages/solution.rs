//! Optimizer boundary
//!
//! The solver answers with a list of solutions. Each solution groups
//! identical armor pieces under an opaque JSON key with a repeat count, and
//! optionally lists the +5/-5 tunings it relies on. Key order in those maps
//! is meaningful (it fixes the order checklist items are created in), so
//! they are read into [`OrderedMap`] rather than a hashed map.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::Stat;

/// Frozen target stat vector a checklist was built for
pub type TargetStats = BTreeMap<Stat, u32>;

/// Piece key -> number of identical pieces
pub type PieceCounts = OrderedMap<String, u32>;

/// Boosted stat -> the tunings needed to boost it
pub type TuningRequirements = OrderedMap<Stat, Vec<TuningDemand>>;

/// A JSON object read as a list of entries, keeping wire order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<K, V>(Vec<(K, V)>);

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.0.iter().map(|(k, v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: PartialEq, V> OrderedMap<K, V> {
    /// Insert or replace, keeping the original position of an existing key
    pub fn insert(&mut self, key: K, value: V) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for OrderedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Serialize, V: Serialize> Serialize for OrderedMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K, V> Visitor<'de> for OrderedMapVisitor<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    type Value = OrderedMap<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedMap<K, V>
where
    K: Deserialize<'de> + PartialEq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// `count` tunings of +5 to the keyed stat, each taking 5 from `siphon_from`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningDemand {
    pub count: u32,
    pub siphon_from: Stat,
}

/// One optimizer solution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub pieces: PieceCounts,
    pub deviation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_stats: Option<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuning_requirements: Option<TuningRequirements>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flexible_pieces: Option<u32>,
}

impl Solution {
    /// Deterministic identity of the solution's piece multiset.
    ///
    /// The pieces map is re-serialized with its keys sorted, so two
    /// responses listing the same pieces in a different order agree.
    pub fn fingerprint(&self) -> String {
        let sorted: BTreeMap<&str, u32> = self
            .pieces
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect();
        // String keys and integer values; serialization cannot fail.
        serde_json::to_string(&sorted).unwrap_or_default()
    }

    /// Total number of armor pieces the solution asks for
    pub fn total_pieces(&self) -> u32 {
        self.pieces.iter().fold(0u32, |total, (_, count)| total.saturating_add(*count))
    }

    /// Total number of +5/-5 tunings the solution relies on
    pub fn total_tuning_demand(&self) -> u32 {
        self.tuning_requirements
            .as_ref()
            .map(|reqs| {
                reqs.iter()
                    .flat_map(|(_, demands)| demands)
                    .fold(0u32, |total, d| total.saturating_add(d.count))
            })
            .unwrap_or(0)
    }
}

/// Envelope returned by the optimizer service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResponse {
    #[serde(default)]
    pub solutions: Vec<Solution>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub compute_time_seconds: Option<f64>,
    #[serde(default)]
    pub cached: Option<bool>,
}
