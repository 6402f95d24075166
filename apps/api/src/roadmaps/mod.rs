//! Career roadmaps: phased learning plans keyed by career title.
//!
//! Unlike the reference tables, roadmap lookup is loose: a
//! suggested "Game Developer" should still find the "Game Developer (Unity)"
//! roadmap. Tiers are tried in order, first hit wins:
//! 1. exact title (case-insensitive)
//! 2. every word of the career is a word of the title
//! 3. the career appears in the title on word boundaries
//! 4. any significant career word (> 3 chars) appears on word boundaries

pub mod handlers;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Career words this short are ignored by the last matching tier.
const MIN_SIGNIFICANT_WORD_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub title: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRoadmap {
    pub title: String,
    pub phases: Vec<RoadmapPhase>,
}

/// All roadmaps, iterated in sorted key order so resolution is deterministic.
#[derive(Debug, Clone, Default)]
pub struct RoadmapTable {
    roadmaps: BTreeMap<String, CareerRoadmap>,
}

impl RoadmapTable {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roadmap table '{}'", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid roadmap table '{}'", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let roadmaps: BTreeMap<String, CareerRoadmap> = serde_json::from_str(raw)?;
        Ok(Self { roadmaps })
    }

    pub fn len(&self) -> usize {
        self.roadmaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roadmaps.is_empty()
    }

    /// Finds the roadmap for `career`, returning the matched key with it.
    pub fn resolve(&self, career: &str) -> Option<(&str, &CareerRoadmap)> {
        let career = career.trim().to_lowercase();
        if career.is_empty() {
            return None;
        }
        let career_words: Vec<&str> = career.split_whitespace().collect();

        self.find(|key| key == career)
            .or_else(|| {
                self.find(|key| {
                    let key_words: Vec<&str> = key.split_whitespace().collect();
                    career_words.iter().all(|word| key_words.contains(word))
                })
            })
            .or_else(|| self.find(|key| contains_on_word_boundary(key, &career)))
            .or_else(|| {
                let significant: Vec<&str> = career_words
                    .iter()
                    .copied()
                    .filter(|word| word.len() >= MIN_SIGNIFICANT_WORD_LEN)
                    .collect();
                self.find(|key| {
                    significant
                        .iter()
                        .any(|word| contains_on_word_boundary(key, word))
                })
            })
    }

    fn find<F>(&self, mut matches: F) -> Option<(&str, &CareerRoadmap)>
    where
        F: FnMut(&str) -> bool,
    {
        self.roadmaps
            .iter()
            .find(|(key, _)| matches(&key.to_lowercase()))
            .map(|(key, roadmap)| (key.as_str(), roadmap))
    }
}

/// `needle` appears in `haystack` delimited by spaces or the string ends.
fn contains_on_word_boundary(haystack: &str, needle: &str) -> bool {
    haystack == needle
        || haystack.starts_with(&format!("{needle} "))
        || haystack.ends_with(&format!(" {needle}"))
        || haystack.contains(&format!(" {needle} "))
}
