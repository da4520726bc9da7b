//! Lenient deserializers for the structured-text shape of profiles and requirements

use serde::{Deserialize, Deserializer};
use std::collections::{BTreeMap, HashMap};

/// Skills arrive either as a `name -> years` map or as a list of
/// `{ "skill_name": .., "yoe": .. }` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum SkillsWire {
    Map(BTreeMap<String, u32>),
    List(Vec<SkillEntry>),
}

#[derive(Deserialize)]
struct SkillEntry {
    skill_name: String,
    yoe: u32,
}

pub(crate) fn deserialize_skills<'de, D>(deserializer: D) -> Result<BTreeMap<String, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let skills = match Option::<SkillsWire>::deserialize(deserializer)? {
        None => BTreeMap::new(),
        Some(SkillsWire::Map(map)) => map,
        // Later duplicates overwrite earlier ones
        Some(SkillsWire::List(entries)) => entries
            .into_iter()
            .map(|entry| (entry.skill_name, entry.yoe))
            .collect(),
    };
    Ok(skills)
}

/// A required degree is either a bare title or an education record carrying `edu_degree`.
#[derive(Deserialize)]
#[serde(untagged)]
enum DegreeWire {
    Title(String),
    // A map rather than a struct so repeated keys resolve to the last value
    Record(HashMap<String, serde_json::Value>),
}

pub(crate) fn deserialize_degrees<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Option::<Vec<DegreeWire>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(entries
        .into_iter()
        .filter_map(|entry| match entry {
            DegreeWire::Title(title) => Some(title),
            DegreeWire::Record(record) => record
                .get("edu_degree")
                .and_then(|value| value.as_str())
                .map(str::to_string),
        })
        .collect())
}
