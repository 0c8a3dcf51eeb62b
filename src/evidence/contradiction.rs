//! Contradiction detection over declared links.
//!
//! No semantic inference happens here: two items contradict only when one of
//! them names the other in its contradicting-id set.

use std::collections::HashMap;

use super::record::Evidence;

/// True iff either item declares a contradiction with the other.
pub fn contradicts(a: &Evidence, b: &Evidence) -> bool {
    a.contradicting_evidence_ids.contains(&b.id) || b.contradicting_evidence_ids.contains(&a.id)
}

/// Every unordered contradicting pair in `evidence`, as `(earlier_id, later_id)`
/// in input order.
pub fn find_contradictions(evidence: &[Evidence]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (i, a) in evidence.iter().enumerate() {
        for b in &evidence[i + 1..] {
            if contradicts(a, b) {
                pairs.push((a.id.clone(), b.id.clone()));
            }
        }
    }
    pairs
}

/// Caller-supplied lookup table for resolving evidence ids.
///
/// Holds borrows only; the owner of the evidence keeps its lifecycle.
#[derive(Debug, Default)]
pub struct EvidenceIndex<'a> {
    by_id: HashMap<&'a str, &'a Evidence>,
}

impl<'a> EvidenceIndex<'a> {
    pub fn new(evidence: &'a [Evidence]) -> Self {
        Self {
            by_id: evidence.iter().map(|e| (e.id.as_str(), e)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&'a Evidence> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Evidence> + '_ {
        self.by_id.values().copied()
    }

    /// Items in the index that contradict `evidence`, in either direction.
    /// Declared ids the index does not know are skipped. Sorted by id.
    pub fn resolve_contradictions(&self, evidence: &Evidence) -> Vec<&'a Evidence> {
        let mut found: Vec<&'a Evidence> = self
            .by_id
            .values()
            .copied()
            .filter(|other| other.id != evidence.id && contradicts(evidence, other))
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }
}
