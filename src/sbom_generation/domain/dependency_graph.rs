use super::PackageId;

/// DependencyGraph: the flattened node list of a `vcpkg depend-info` graph
///
/// Nodes keep document order and duplicates; edges are not retained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    nodes: Vec<PackageId>,
}

impl DependencyGraph {
    pub fn new(nodes: Vec<PackageId>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[PackageId] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, id: &PackageId) -> bool {
        self.nodes.contains(id)
    }
}
