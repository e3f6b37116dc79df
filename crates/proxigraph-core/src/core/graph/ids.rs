use slotmap::new_key_type;

new_key_type! {
    pub struct EdgeId;
}

/// A 1-based node index, stable for the lifetime of the node.
pub type NodeIndex = usize;
