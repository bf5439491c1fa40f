use crate::node::{min_value_node, Link, Node};

/// What became of a node that matched a deletion key.
pub(crate) enum Excision<K> {
    /// The node had at most one child and was replaced by it (or by nothing).
    Replaced(Link<K>),
    /// The node had two children. It now holds its in-order successor's value and that value
    /// has been deleted from its right subtree. The caller still owns the node.
    Retained(Box<Node<K>>),
}

/// Removes `node`'s own value from its subtree. With two children the in-order successor's value
/// is copied up and then deleted from the right subtree by `delete_right`, which lets each
/// discipline recurse with its own delete.
pub(crate) fn excise<K, F>(mut node: Box<Node<K>>, delete_right: F) -> Excision<K>
where
    K: Clone,
    F: FnOnce(Link<K>, &K) -> Link<K>,
{
    let successor = match (node.left.is_some(), node.right.as_deref()) {
        (false, _) => return Excision::Replaced(node.right.take()),
        (true, None) => return Excision::Replaced(node.left.take()),
        (true, Some(right)) => min_value_node(right).value.clone(),
    };

    node.value = successor.clone();
    node.right = delete_right(node.right.take(), &successor);
    Excision::Retained(node)
}
