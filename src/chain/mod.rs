//! Evidence chains: partitioning, strength aggregation, argument integrity, graph export.

pub mod aggregator;
pub mod builder;
pub mod graph;
pub mod types;

pub use aggregator::{chain_strength, compute_chain_strength, ChainStrength};
pub use builder::{build_chain, is_primary};
pub use graph::export_graph;
pub use types::{
    ArgumentStructure, EdgeKind, EvidenceChain, EvidenceGraph, GraphEdge, GraphNode, InferenceStep, NodeKind,
    Premise,
};
