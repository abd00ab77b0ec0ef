use crate::value::Value;
use crate::value_data::ValueData;
use std::collections::HashSet;
use std::sync::RwLock;

/// Stable identity of a node: the address of its shared allocation.
///
/// The pointer is never dereferenced. It keys visited sets and hash maps
/// while the traversal holds strong references to every node it has met.
pub(crate) type NodeId = *const RwLock<ValueData>;

/// One in-progress node of the depth-first walk.
struct Frame {
    node: Value,
    operands: Vec<Value>,
    next: usize,
}

/// Builds a topological ordering of the graph reachable from `root`.
///
/// Depth-first post-order over operand links, driven by an explicit frame
/// stack so call-stack depth stays constant regardless of graph depth. Every
/// reachable node appears exactly once, after all of its operands; the root
/// comes last.
pub(crate) fn topological_sort(root: &Value) -> Vec<Value> {
    let mut sorted: Vec<Value> = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut stack: Vec<Frame> = Vec::new();

    visited.insert(root.node_id());
    stack.push(Frame {
        node: root.clone(),
        operands: root.read_data().prev.clone(),
        next: 0,
    });

    while let Some(frame) = stack.last_mut() {
        if frame.next < frame.operands.len() {
            let child = frame.operands[frame.next].clone();
            frame.next += 1;
            // Nodes are marked when first discovered. A marked operand is
            // already fully emitted: operand links cannot form cycles, so it
            // can never sit further up this stack.
            if visited.insert(child.node_id()) {
                let operands = child.read_data().prev.clone();
                stack.push(Frame {
                    node: child,
                    operands,
                    next: 0,
                });
            }
        } else {
            // Operands exhausted: emit in post-order.
            if let Some(done) = stack.pop() {
                sorted.push(done.node);
            }
        }
    }

    sorted
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::arithmetic::{add_op, mul_op};

    fn position(order: &[Value], node: &Value) -> usize {
        order
            .iter()
            .position(|candidate| candidate == node)
            .expect("node missing from ordering")
    }

    #[test]
    fn test_single_leaf_ordering() {
        let v = Value::new(42.0);
        let order = topological_sort(&v);
        assert_eq!(order.len(), 1);
        assert_eq!(order[0], v);
    }

    #[test]
    fn test_every_node_follows_its_operands() {
        let a = Value::new(2.0);
        let b = Value::new(-3.0);
        let c = add_op(&[a.clone(), b.clone()]).unwrap();
        let d = mul_op(&[c.clone(), b.clone()]).unwrap();

        let order = topological_sort(&d);
        assert_eq!(order.len(), 4);
        assert!(position(&order, &c) > position(&order, &a));
        assert!(position(&order, &c) > position(&order, &b));
        assert!(position(&order, &d) > position(&order, &c));
        assert!(position(&order, &d) > position(&order, &b));
        assert_eq!(position(&order, &d), order.len() - 1);
    }

    #[test]
    fn test_shared_operand_appears_once() {
        // Diamond: both branches consume y, and y consumes x twice itself.
        let x = Value::new(1.5);
        let y = add_op(&[x.clone(), x.clone()]).unwrap();
        let left = add_op(&[y.clone(), x.clone()]).unwrap();
        let right = mul_op(&[y.clone(), y.clone()]).unwrap();
        let root = add_op(&[left.clone(), right.clone()]).unwrap();

        let order = topological_sort(&root);
        assert_eq!(order.len(), 5);
        assert!(position(&order, &y) > position(&order, &x));
        assert!(position(&order, &left) > position(&order, &y));
        assert!(position(&order, &right) > position(&order, &y));
        assert_eq!(position(&order, &root), 4);
    }

    #[test]
    fn test_sibling_order_respects_shared_descendants() {
        // The root lists c after a, but a depends on c: c must still be
        // emitted before a.
        let c = Value::new(4.0);
        let a = mul_op(&[c.clone(), c.clone()]).unwrap();
        let root = add_op(&[a.clone(), c.clone()]).unwrap();

        let order = topological_sort(&root);
        assert_eq!(order.len(), 3);
        assert!(position(&order, &a) > position(&order, &c));
    }
}
