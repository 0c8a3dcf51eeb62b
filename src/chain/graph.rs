//! Node/edge export of an evidence chain.

use std::collections::HashMap;

use super::types::{EdgeKind, EvidenceChain, EvidenceGraph, GraphEdge, GraphNode, NodeKind};
use crate::evidence::Evidence;

fn claim_node_id(claim_id: &str) -> String {
    format!("claim:{}", claim_id)
}

fn evidence_node_id(evidence_id: &str) -> String {
    format!("evidence:{}", evidence_id)
}

fn inference_node_id(step_id: &str) -> String {
    format!("inference:{}", step_id)
}

/// Edge weight for an evidence item, in [0, 1].
fn edge_weight(evidence: &Evidence) -> f64 {
    evidence.weighted_score() / 100.0
}

/// Export `chain` as nodes and edges.
///
/// Node ids are namespaced by kind. Inference steps citing ids outside the
/// chain's partitions get no edge for those ids, so every emitted edge
/// references a node in the same export.
pub fn export_graph(chain: &EvidenceChain) -> EvidenceGraph {
    let claim_id = claim_node_id(&chain.claim_id);
    let mut nodes = vec![GraphNode {
        id: claim_id.clone(),
        kind: NodeKind::Claim,
        label: chain.argument.conclusion.clone(),
    }];
    let mut edges = Vec::new();
    let mut by_id: HashMap<&str, &Evidence> = HashMap::new();

    let supporting = chain
        .primary_evidence
        .iter()
        .chain(chain.supporting_evidence.iter())
        .map(|e| (e, EdgeKind::Supports));
    let contradicting = chain.contradictory().iter().map(|e| (e, EdgeKind::Contradicts));

    for (evidence, kind) in supporting.chain(contradicting) {
        if by_id.insert(evidence.id.as_str(), evidence).is_some() {
            continue;
        }
        let node_id = evidence_node_id(&evidence.id);
        nodes.push(GraphNode {
            id: node_id.clone(),
            kind: NodeKind::Evidence,
            label: evidence.original_text.clone(),
        });
        edges.push(GraphEdge {
            source: node_id,
            target: claim_id.clone(),
            kind,
            weight: edge_weight(evidence),
        });
    }

    for step in &chain.argument.inferences {
        let step_node = inference_node_id(&step.id);
        nodes.push(GraphNode {
            id: step_node.clone(),
            kind: NodeKind::Inference,
            label: step.conclusion.clone(),
        });

        let cited: Vec<&Evidence> = step
            .from_evidence
            .iter()
            .filter_map(|id| by_id.get(id.as_str()).copied())
            .collect();
        for evidence in &cited {
            edges.push(GraphEdge {
                source: evidence_node_id(&evidence.id),
                target: step_node.clone(),
                kind: EdgeKind::Relates,
                weight: edge_weight(evidence),
            });
        }

        let step_weight = if cited.is_empty() {
            0.0
        } else {
            cited.iter().map(|e| edge_weight(e)).sum::<f64>() / cited.len() as f64
        };
        edges.push(GraphEdge {
            source: step_node,
            target: claim_id.clone(),
            kind: EdgeKind::Supports,
            weight: step_weight,
        });
    }

    EvidenceGraph { nodes, edges }
}
