//! Serde adapter for `clipboardStore`: a JSON object whose key order is kept.
//!
//! Reading is lenient. A repeated key replaces the earlier value in place, a
//! group that is not a list is dropped, and items that do not decode are
//! skipped. A `clipboardStore` that is not an object reads as absent.
use std::fmt;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;
use tracing::warn;

use crate::clipboard::ClipItem;

pub type OrderedGroups = Vec<(String, Vec<ClipItem>)>;

pub fn serialize<S>(groups: &[(String, Vec<ClipItem>)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(groups.len()))?;
    for (name, items) in groups {
        map.serialize_entry(name, items)?;
    }
    map.end()
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OrderedGroups>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(OrderedGroupsVisitor)
}

fn decode_items(name: &str, value: Value) -> Option<Vec<ClipItem>> {
    let Value::Array(raw_items) = value else {
        warn!(group = %name, "dropping snapshot group that is not a list");
        return None;
    };
    let total = raw_items.len();
    let items: Vec<ClipItem> = raw_items
        .into_iter()
        .filter_map(|raw| ClipItem::deserialize(raw).ok())
        .collect();
    if items.len() < total {
        warn!(group = %name, skipped = total - items.len(), "skipping undecodable snapshot items");
    }
    Some(items)
}

struct OrderedGroupsVisitor;

impl OrderedGroupsVisitor {
    fn absent<T: fmt::Debug>(found: T) -> Option<OrderedGroups> {
        warn!(found = ?found, "clipboardStore is not an object, keeping default groups");
        None
    }
}

impl<'de> Visitor<'de> for OrderedGroupsVisitor {
    type Value = Option<OrderedGroups>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of group name to clipboard items")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut groups: OrderedGroups = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, Value>()? {
            let Some(items) = decode_items(&name, value) else {
                continue;
            };
            match groups.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = items,
                None => groups.push((name, items)),
            }
        }
        Ok(Some(groups))
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while access.next_element::<IgnoredAny>()?.is_some() {}
        Ok(Self::absent("list"))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Self::absent(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Self::absent(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Self::absent(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Self::absent(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Self::absent(v))
    }
}
