//! EvidenceChain: the partitioned evidence and argument backing one claim.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::evidence::Evidence;

/// A premise grounded in one evidence item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Premise {
    pub evidence_id: String,
    pub statement: String,
}

/// An inference drawn from one or more evidence items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InferenceStep {
    pub id: String,
    pub from_evidence: Vec<String>,
    pub conclusion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentStructure {
    pub premises: Vec<Premise>,
    pub inferences: Vec<InferenceStep>,
    pub conclusion: String,
}

impl ArgumentStructure {
    /// Every evidence id the argument cites, premises first.
    pub fn referenced_evidence_ids(&self) -> impl Iterator<Item = &str> {
        self.premises
            .iter()
            .map(|p| p.evidence_id.as_str())
            .chain(self.inferences.iter().flat_map(|s| s.from_evidence.iter().map(String::as_str)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Claim,
    Evidence,
    Inference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Supports,
    Contradicts,
    Relates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    pub weight: f64,
}

/// Opaque rendering payload for visualization collaborators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvidenceGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl EvidenceGraph {
    /// Edges whose source or target is not a node of this graph.
    pub fn dangling_edges(&self) -> Vec<&GraphEdge> {
        let ids: HashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        self.edges
            .iter()
            .filter(|e| !ids.contains(e.source.as_str()) || !ids.contains(e.target.as_str()))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceChain {
    pub claim_id: String,
    pub primary_evidence: Vec<Evidence>,
    pub supporting_evidence: Vec<Evidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contradictory_evidence: Option<Vec<Evidence>>,
    pub argument: ArgumentStructure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<EvidenceGraph>,
}

impl EvidenceChain {
    pub fn contradictory(&self) -> &[Evidence] {
        self.contradictory_evidence.as_deref().unwrap_or(&[])
    }

    /// All evidence across the three partitions.
    pub fn all_evidence(&self) -> impl Iterator<Item = &Evidence> {
        self.primary_evidence
            .iter()
            .chain(self.supporting_evidence.iter())
            .chain(self.contradictory().iter())
    }

    /// Argument references that name no evidence in any partition.
    pub fn dangling_references(&self) -> Vec<String> {
        let known: HashSet<&str> = self.all_evidence().map(|e| e.id.as_str()).collect();
        let mut dangling: Vec<String> = Vec::new();
        for id in self.argument.referenced_evidence_ids() {
            if !known.contains(id) && !dangling.iter().any(|d| d == id) {
                dangling.push(id.to_string());
            }
        }
        dangling
    }

    pub fn is_consistent(&self) -> bool {
        self.dangling_references().is_empty()
    }
}
