use indexmap::IndexMap;

use super::non_empty_list;
use crate::application::dto::NormalizerOptions;
use crate::application::factories::NormalizerFactory;
use crate::application::normalized::NormalizedDependency;
use crate::sbom_model::domain::{Bom, BomRef, BomRefRepository, PreOrder};

/// Adjacency of every addressable component, in first-visit order
type DependencyGraph<'b> = IndexMap<&'b BomRef, &'b BomRefRepository>;

/// Flattens the component tree into the BOM's `dependencies` list
///
/// The graph is collected by a pre-order walk over the metadata root
/// component and then over every top-level component. Each emitted entry
/// only points at refs that have an entry of their own, so the output is
/// closed under `dependsOn` and never contains self-edges.
pub struct DependencyGraphNormalizer<'s> {
    factory: NormalizerFactory<'s>,
}

impl<'s> DependencyGraphNormalizer<'s> {
    pub fn new(factory: NormalizerFactory<'s>) -> Self {
        Self { factory }
    }

    /// Returns `None` when the target version has no dependency graph
    pub fn normalize(
        &self,
        data: &Bom,
        options: &NormalizerOptions,
    ) -> Option<Vec<NormalizedDependency>> {
        if !self.factory.spec().supports_dependency_graph() {
            return None;
        }

        let graph = self.collect(data);
        let mut dependencies: Vec<NormalizedDependency> = graph
            .iter()
            .filter(|(bom_ref, _)| !bom_ref.is_empty())
            .map(|(&bom_ref, &edges)| {
                let mut depends_on: Vec<String> = edges
                    .iter()
                    .filter(|dep| !dep.is_empty() && *dep != bom_ref && graph.contains_key(*dep))
                    .map(|dep| dep.value().to_string())
                    .collect();
                if options.sort_lists {
                    depends_on.sort();
                }
                NormalizedDependency {
                    bom_ref: bom_ref.value().to_string(),
                    depends_on: non_empty_list(depends_on),
                }
            })
            .collect();

        if options.sort_lists {
            dependencies.sort_by(|a, b| a.bom_ref.cmp(&b.bom_ref));
        }

        tracing::debug!(
            collected = graph.len(),
            emitted = dependencies.len(),
            "Normalized dependency graph"
        );
        Some(dependencies)
    }

    /// Components of a type the target version rejects are left out together with
    /// their nested components, matching what the component normalizer emits.
    fn collect<'b>(&self, data: &'b Bom) -> DependencyGraph<'b> {
        let spec = self.factory.spec();
        let mut graph = DependencyGraph::new();

        let walks = data
            .root_component()
            .map(PreOrder::from_root)
            .into_iter()
            .chain(std::iter::once(data.components.tree_iter()));

        for mut walk in walks {
            while let Some(component) = walk.next() {
                if !spec.supports_component_type(component.component_type) {
                    walk.skip_subtree();
                    continue;
                }
                // re-inserting an existing ref keeps its position
                graph.insert(&component.bom_ref, &component.dependencies);
            }
        }
        graph
    }
}
