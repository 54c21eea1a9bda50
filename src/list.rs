//! Singly-linked entity list stored in an index arena.
//!
//! Slot 0 of the arena is a sentinel head that never carries an entity, so
//! every live node always has a predecessor. `tail` names the last live slot,
//! or the head when the list is empty, which keeps `append` O(1). Removal only
//! happens inside [`EntityList::sweep`], where the trailing predecessor is at
//! hand and unlinking is O(1) as well.
//!
//! Released slots are recycled for later appends, but their generation is
//! bumped first so any [`EntityId`] still naming the old occupant stops
//! resolving.

use log::trace;

use crate::entities::{Entity, EntityId};

const HEAD: u32 = 0;

#[derive(Clone, Debug)]
struct Node {
    entity: Option<Entity>,
    next: Option<u32>,
    generation: u32,
}

impl Node {
    fn vacant() -> Self {
        Self {
            entity: None,
            next: None,
            generation: 0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EntityList {
    nodes: Vec<Node>,
    /// Released slots, reused by `append` before the arena grows.
    free: Vec<u32>,
    tail: u32,
    len: usize,
}

impl Default for EntityList {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityList {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::vacant()],
            free: Vec::new(),
            tail: HEAD,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Links `entity` after the current tail and returns its id.
    pub fn append(&mut self, entity: Entity) -> EntityId {
        let index = self.allocate(entity);
        self.nodes[self.tail as usize].next = Some(index);
        self.tail = index;
        self.len += 1;
        self.id_at(index)
    }

    /// One pass over the list that moves, tests and unlinks.
    ///
    /// For every node in order `motion` runs first, then `predicate`. A node
    /// for which the predicate holds is spliced out, its slot released and
    /// the entity handed to `on_remove`; iteration resumes from its
    /// predecessor. Returns the number of removed nodes.
    pub fn sweep<M, P, R>(&mut self, mut motion: M, mut predicate: P, mut on_remove: R) -> usize
    where
        M: FnMut(EntityId, &mut Entity),
        P: FnMut(EntityId, &Entity) -> bool,
        R: FnMut(EntityId, Entity),
    {
        let mut removed = 0;
        let mut prev = HEAD;
        let mut cursor = self.nodes[HEAD as usize].next;

        while let Some(index) = cursor {
            let id = self.id_at(index);
            let node = &mut self.nodes[index as usize];
            let next = node.next;

            let doomed = match node.entity.as_mut() {
                Some(entity) => {
                    motion(id, entity);
                    predicate(id, entity)
                }
                None => false,
            };

            if doomed {
                if self.tail == index {
                    self.tail = prev;
                }
                self.nodes[prev as usize].next = next;
                if let Some(entity) = self.release(index) {
                    trace!("released {id:?}");
                    on_remove(id, entity);
                }
                removed += 1;
            } else {
                prev = index;
            }
            cursor = next;
        }

        removed
    }

    /// Releases every node. The list is empty afterwards and all ids are stale.
    pub fn clear(&mut self) {
        let mut cursor = self.nodes[HEAD as usize].next.take();
        while let Some(index) = cursor {
            cursor = self.nodes[index as usize].next;
            self.release(index);
        }
        self.tail = HEAD;
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        if id.index == HEAD {
            return None;
        }
        self.nodes
            .get(id.index as usize)
            .filter(|node| node.generation == id.generation)
            .and_then(|node| node.entity.as_ref())
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        if id.index == HEAD {
            return None;
        }
        self.nodes
            .get_mut(id.index as usize)
            .filter(|node| node.generation == id.generation)
            .and_then(|node| node.entity.as_mut())
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    pub fn first(&self) -> Option<EntityId> {
        self.nodes[HEAD as usize].next.map(|index| self.id_at(index))
    }

    /// Id of the last node, `None` while the tail is the sentinel head.
    pub fn tail(&self) -> Option<EntityId> {
        (self.tail != HEAD).then(|| self.id_at(self.tail))
    }

    /// Head-to-tail traversal.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.nodes[HEAD as usize].next,
        }
    }

    fn id_at(&self, index: u32) -> EntityId {
        EntityId {
            index,
            generation: self.nodes[index as usize].generation,
        }
    }

    fn allocate(&mut self, entity: Entity) -> u32 {
        if let Some(index) = self.free.pop() {
            let node = &mut self.nodes[index as usize];
            node.entity = Some(entity);
            node.next = None;
            index
        } else {
            let index = self.nodes.len() as u32;
            self.nodes.push(Node {
                entity: Some(entity),
                next: None,
                generation: 0,
            });
            index
        }
    }

    fn release(&mut self, index: u32) -> Option<Entity> {
        let node = &mut self.nodes[index as usize];
        let entity = node.entity.take();
        node.next = None;
        node.generation = node.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        entity
    }
}

pub struct Iter<'a> {
    list: &'a EntityList,
    cursor: Option<u32>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (EntityId, &'a Entity);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor?;
        let node = &self.list.nodes[index as usize];
        self.cursor = node.next;
        let id = EntityId {
            index,
            generation: node.generation,
        };
        node.entity.as_ref().map(|entity| (id, entity))
    }
}

impl<'a> IntoIterator for &'a EntityList {
    type Item = (EntityId, &'a Entity);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
