use super::Component;

/// Stack-based pre-order iterator over a component tree.
///
/// Each component is yielded before its nested components, and a component's
/// whole subtree is yielded before its next sibling. Depth is bounded only by
/// heap memory. Cloning the iterator yields an independent cursor.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<std::slice::Iter<'a, Component>>,
    descended: bool,
}

impl<'a> PreOrder<'a> {
    pub fn new(roots: &'a [Component]) -> Self {
        Self {
            stack: vec![roots.iter()],
            descended: false,
        }
    }

    /// Starts a walk at a single root component
    pub fn from_root(root: &'a Component) -> Self {
        Self::new(std::slice::from_ref(root))
    }

    /// Skips the nested components of the component most recently yielded
    pub fn skip_subtree(&mut self) {
        if self.descended {
            self.stack.pop();
            self.descended = false;
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a Component;

    fn next(&mut self) -> Option<Self::Item> {
        self.descended = false;
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(component) => {
                    self.stack.push(component.components.iter());
                    self.descended = true;
                    return Some(component);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sbom_model::domain::{ComponentRepository, ComponentType};

    fn lib(name: &str) -> Component {
        Component::new(ComponentType::Library, name)
    }

    fn names(iter: PreOrder<'_>) -> Vec<String> {
        iter.map(|c| c.name.clone()).collect()
    }

    fn sample_tree() -> ComponentRepository {
        ComponentRepository::from(vec![
            lib("a")
                .with_component(lib("a1").with_component(lib("a1x")))
                .with_component(lib("a2")),
            lib("b"),
            lib("c").with_component(lib("c1")),
        ])
    }

    #[test]
    fn test_pre_order_visits_parents_before_children() {
        let tree = sample_tree();
        assert_eq!(
            names(tree.tree_iter()),
            vec!["a", "a1", "a1x", "a2", "b", "c", "c1"]
        );
    }

    #[test]
    fn test_empty_tree() {
        let tree = ComponentRepository::new();
        assert_eq!(tree.tree_iter().count(), 0);
    }

    #[test]
    fn test_from_root_includes_root() {
        let root = lib("root").with_component(lib("child"));
        assert_eq!(names(PreOrder::from_root(&root)), vec!["root", "child"]);
    }

    #[test]
    fn test_skip_subtree() {
        let tree = sample_tree();
        let mut iter = tree.tree_iter();
        let mut visited = Vec::new();
        while let Some(component) = iter.next() {
            visited.push(component.name.clone());
            if component.name == "a1" || component.name == "c" {
                iter.skip_subtree();
            }
        }
        assert_eq!(visited, vec!["a", "a1", "a2", "b", "c"]);
    }

    #[test]
    fn test_skip_subtree_twice_is_noop() {
        let tree = sample_tree();
        let mut iter = tree.tree_iter();
        iter.next();
        iter.skip_subtree();
        iter.skip_subtree();
        assert_eq!(names(iter), vec!["b", "c", "c1"]);
    }

    #[test]
    fn test_clone_restarts_independently() {
        let tree = sample_tree();
        let mut iter = tree.tree_iter();
        iter.next();
        let snapshot = iter.clone();
        assert_eq!(iter.count(), 6);
        assert_eq!(names(snapshot), vec!["a1", "a1x", "a2", "b", "c", "c1"]);
    }

    #[test]
    fn test_deep_tree_does_not_recurse() {
        let mut node = lib("leaf");
        for i in 0..1_000 {
            node = lib(&format!("n{}", i)).with_component(node);
        }
        let root = ComponentRepository::from(vec![node]);
        assert_eq!(root.tree_iter().count(), 1_001);
    }
}
