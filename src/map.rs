use crate::Node;

/// A dense map from [`Node`] to `T`, backed by the node's arena index.
///
/// An absent entry means "no value" (for search bookkeeping: infinity).
#[derive(Default, Debug)]
pub struct NodeMap<T> {
    v: Vec<Option<T>>,
}

impl<T> std::ops::Index<Node> for NodeMap<T> {
    type Output = T;
    fn index(&self, n: Node) -> &T {
        if let Some(t) = self.get(&n) {
            t
        } else {
            panic!("Node not in map: {:?}", n);
        }
    }
}

impl<T> NodeMap<T> {
    pub fn new() -> Self {
        Self { v: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            v: Vec::with_capacity(cap),
        }
    }

    pub fn insert(&mut self, n: Node, t: T) {
        let i = n.index();
        if i >= self.v.len() {
            self.v.resize_with(i + 1, || None);
        }
        self.v[i] = Some(t);
    }

    pub fn has(&self, n: &Node) -> bool {
        match self.v.get(n.index()) {
            Some(slot) => slot.is_some(),
            None => false,
        }
    }

    pub fn get(&self, n: &Node) -> Option<&T> {
        self.v.get(n.index())?.as_ref()
    }

    pub fn remove(&mut self, n: &Node) -> Option<T> {
        self.v.get_mut(n.index())?.take()
    }
}
