use super::edge::Edge;
use super::ids::{EdgeId, NodeIndex};
use slotmap::SlotMap;
use tracing::trace;

/// A fixed-type object pool for the edges of one graph.
///
/// Freed slots go onto the slot map's free list and are handed out again by the next
/// [`construct`](Self::construct); backing storage never shrinks, so a graph rebuilt over and
/// over settles at its high-water mark and stops touching the allocator. Generational
/// [`EdgeId`]s make a stale or foreign handle detectable rather than silently aliasing a
/// reused slot.
#[derive(Debug)]
pub struct EdgePool<E> {
    slots: SlotMap<EdgeId, Edge<E>>,
    high_water_mark: usize,
    total_allocations: u64,
}

impl<E> Default for EdgePool<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EdgePool<E> {
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            high_water_mark: 0,
            total_allocations: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: SlotMap::with_capacity_and_key(capacity),
            high_water_mark: 0,
            total_allocations: 0,
        }
    }

    /// Places a new edge in a free slot, growing the pool only when none is available.
    pub fn construct(&mut self, first: NodeIndex, second: NodeIndex, data: E) -> EdgeId {
        let grows = self.slots.len() == self.slots.capacity();
        let id = self.slots.insert(Edge::new(first, second, data));
        self.total_allocations += 1;
        if self.slots.len() > self.high_water_mark {
            self.high_water_mark = self.slots.len();
        }
        if grows {
            trace!(capacity = self.slots.capacity(), "Edge pool grew.");
        }
        id
    }

    /// Releases an edge, returning its record.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this pool or has already been released.
    pub fn destroy(&mut self, id: EdgeId) -> Edge<E> {
        match self.slots.remove(id) {
            Some(edge) => edge,
            None => panic!("edge {id:?} is not owned by this pool or was already released"),
        }
    }

    /// Releases every edge while keeping the backing storage.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Releases every edge, yielding the records. Backing storage is kept.
    pub fn drain(&mut self) -> impl Iterator<Item = (EdgeId, Edge<E>)> + '_ {
        self.slots.drain()
    }

    pub fn get(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.slots.get(id)
    }

    pub fn get_mut(&mut self, id: EdgeId) -> Option<&mut Edge<E>> {
        self.slots.get_mut(id)
    }

    pub fn contains(&self, id: EdgeId) -> bool {
        self.slots.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeId, &Edge<E>)> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// The largest number of edges that were ever live at once.
    pub fn high_water_mark(&self) -> usize {
        self.high_water_mark
    }

    pub fn total_allocations(&self) -> u64 {
        self.total_allocations
    }
}
