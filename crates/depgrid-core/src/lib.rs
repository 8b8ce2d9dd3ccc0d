//! depgrid Core Types and Definitions
//!
//! This crate provides the foundational types shared by every depgrid crate:
//!
//! - **Identifiers**: String-interned entity identifiers ([`identifier::Id`])
//! - **Edges**: Directed dependency edges between identifiers ([`graph::Edge`])
//! - **Grid nodes**: Entities placed on the layout grid ([`graph::GraphNode`])
//! - **DAG**: The positioned output structure ([`graph::Dag`])

pub mod graph;
pub mod identifier;
