//! [`vec-sequence`] is an implementation of a doubly-linked sequence using an underlying
//! [`Vec`] to store the nodes, so that links are indexes rather than pointers.
//!
//! Values at either end are reached in constant time. Values in the interior are reached
//! by walking the links from whichever end is closer.
//!
//! ```
//! use vec_sequence::{Sequence, SequenceError,};
//!
//! let mut seq = Sequence::new();
//! seq.push_back(10);
//! seq.push_back(30);
//! seq.insert(1, 20)?;
//!
//! assert_eq!(seq.get(1), Ok(&20));
//! assert_eq!(seq.remove(0), Ok(10));
//! assert_eq!(seq.front(), Ok(&20));
//! assert_eq!(seq.get(2), Err(SequenceError::IndexOutOfRange { index: 2, len: 2, }));
//! # Ok::<(), SequenceError>(())
//! ```
//!
//! Every operation which could fail returns a [`Result`]; a failed operation leaves the
//! [`Sequence`] untouched.

mod errors;
mod nodes;

use std::fmt::{self, Debug,};

use self::nodes::Node;
pub use self::errors::{Result, SequenceError,};

/// A doubly-linked sequence backed by a `Vec` of index-linked nodes.
#[derive(Clone,)]
pub struct Sequence<T,> {
    /// The [`Node`]s of the [`Sequence`], linked and vacant.
    nodes: Vec<Node<T,>,>,
    /// The number of linked [`Node`]s in the [`Sequence`].
    len: usize,
    /// The indexes of the head and tail [`Node`]s in `nodes`.
    ends: Option<(usize, usize,)>,
    /// A stack of vacant [`Node`]s not used in the chain.
    empty: Option<usize,>,
}

impl<T,> Sequence<T,> {
    /// Append `to` to `from`.
    ///
    /// # Params
    ///
    /// from --- The index of the [`Node`] to append to.
    /// to --- The index of the [`Node`] to append.
    fn append(&mut self, from: usize, to: usize,) {
        debug_assert!(self.nodes[from].next.is_none(), "`from` has `next`: {}", from,);
        debug_assert!(self.nodes[to].prev.is_none(), "`to` has `prev`: {}", to,);

        self.nodes[from].next = Some(to);
        self.nodes[to].prev = Some(from);
    }
    /// Populates a [`Node`] with `value` and returns its index.
    ///
    /// The [`Node`] is not linked into the chain.
    ///
    /// # Params
    ///
    /// value --- The value to populate the [`Node`] with.
    fn new_node(&mut self, value: T,) -> usize {
        self.len += 1;

        match self.empty {
            //Reuse a vacant `Node`.
            Some(new) => {
                self.empty = self.nodes[new].stack_pop();
                self.nodes[new].value = Some(value);

                new
            },
            None => {
                let new = self.nodes.len();

                self.nodes.push(Node::new(value,));

                new
            },
        }
    }
    /// Unlinks `node` from the chain, places it on the `empty` stack and returns its
    /// value.
    ///
    /// # Params
    ///
    /// node --- The index of the linked [`Node`] to remove.
    fn remove_node(&mut self, node: usize,) -> T {
        self.len -= 1;

        let prev = self.nodes[node].prev.take();
        let next = self.nodes[node].next.take();

        //Relink the neighbours of `node` to each other.
        if let Some(prev) = prev { self.nodes[prev].next = next }
        if let Some(next) = next { self.nodes[next].prev = prev }

        if let Some((head, tail,)) = self.ends {
            let head = if head == node { next } else { Some(head) };
            let tail = if tail == node { prev } else { Some(tail) };

            //Both ends clear together when the last `Node` leaves.
            self.ends = head.zip(tail);
        }

        self.nodes[node].stack_push(self.empty);
        self.empty = Some(node);

        self.nodes[node].take_value()
    }
    /// Links a new [`Node`] holding `value` directly before the interior [`Node`] `at`.
    ///
    /// # Params
    ///
    /// at --- The index of a [`Node`] which has a previous [`Node`].
    /// value --- The value to insert.
    fn link_before(&mut self, at: usize, value: T,) {
        let prev = self.nodes[at].prev();
        let new = self.new_node(value,);

        self.nodes[prev].next = None;
        self.nodes[at].prev = None;

        self.append(prev, new,);
        self.append(new, at,);
    }
    /// Returns the index of the [`Node`] at `index` in the chain.
    ///
    /// Walks from the head for the first half of the chain and from the tail otherwise.
    ///
    /// # Panics
    ///
    /// * If `index` is out of bounds.
    fn node_at(&self, index: usize,) -> usize {
        assert!(index < self.len, "`index` is out of bounds: {}", index,);

        let (head, tail,) = self.ends.expect("`Sequence::node_at` no `ends`");

        if index < self.len / 2 { self.index_forward(head, index,) }
        else { self.index_backward(tail, self.len - 1 - index,) }
    }
    /// Returns the index of the [`Node`] `steps` forward from `at`.
    fn index_forward(&self, at: usize, steps: usize,) -> usize {
        (0..steps).fold(at, |at, _| self.nodes[at].next())
    }
    /// Returns the index of the [`Node`] `steps` backward from `at`.
    fn index_backward(&self, at: usize, steps: usize,) -> usize {
        (0..steps).fold(at, |at, _| self.nodes[at].prev())
    }
    /// Returns the index of the [`Node`] at `index`, or an error if there is none.
    fn find_node(&self, index: usize,) -> Result<usize,> {
        if index < self.len { Ok(self.node_at(index,)) }
        else { Err(SequenceError::IndexOutOfRange { index, len: self.len, }) }
    }
    /// Walks the values from head to tail.
    fn values(&self,) -> impl Iterator<Item = &T,> + '_ {
        std::iter::successors(self.ends.map(|(head, _,)| head), move |&at| self.nodes[at].next)
            .map(move |at| self.nodes[at].value())
    }
}

impl<T,> Sequence<T,> {
    /// Returns a new empty [`Sequence`].
    #[inline]
    pub const fn new() -> Self {
        Self { nodes: Vec::new(), len: 0, ends: None, empty: None, }
    }
    /// Returns the number of values in this [`Sequence`].
    #[inline]
    pub const fn len(&self,) -> usize { self.len }
    /// `true` if this [`Sequence`] is empty.
    #[inline]
    pub const fn is_empty(&self,) -> bool { self.len() == 0 }
    /// Removes every value from the [`Sequence`].
    pub fn clear(&mut self,) {
        self.nodes.clear();
        self.len = 0;
        self.ends = None;
        self.empty = None;
    }
    /// Returns the first value.
    ///
    /// # Errors
    ///
    /// * [`SequenceError::Empty`] if there are no values.
    #[inline]
    pub fn front(&self,) -> Result<&T,> {
        self.ends.map(|(head, _,)| self.nodes[head].value())
            .ok_or(SequenceError::Empty)
    }
    /// Returns the first value mutably.
    ///
    /// # Errors
    ///
    /// * [`SequenceError::Empty`] if there are no values.
    #[inline]
    pub fn front_mut(&mut self,) -> Result<&mut T,> {
        match self.ends {
            Some((head, _,)) => Ok(self.nodes[head].value_mut()),
            None => Err(SequenceError::Empty),
        }
    }
    /// Returns the last value.
    ///
    /// # Errors
    ///
    /// * [`SequenceError::Empty`] if there are no values.
    #[inline]
    pub fn back(&self,) -> Result<&T,> {
        self.ends.map(|(_, tail,)| self.nodes[tail].value())
            .ok_or(SequenceError::Empty)
    }
    /// Returns the last value mutably.
    ///
    /// # Errors
    ///
    /// * [`SequenceError::Empty`] if there are no values.
    #[inline]
    pub fn back_mut(&mut self,) -> Result<&mut T,> {
        match self.ends {
            Some((_, tail,)) => Ok(self.nodes[tail].value_mut()),
            None => Err(SequenceError::Empty),
        }
    }
    /// Returns the value at `index`.
    ///
    /// # Params
    ///
    /// index --- The position of the value, counting from `0` at the front.
    ///
    /// # Errors
    ///
    /// * [`SequenceError::IndexOutOfRange`] if `index` is not less than the length.
    pub fn get(&self, index: usize,) -> Result<&T,> {
        let node = self.find_node(index,)?;

        Ok(self.nodes[node].value())
    }
    /// Returns the value at `index` mutably.
    ///
    /// # Params
    ///
    /// index --- The position of the value, counting from `0` at the front.
    ///
    /// # Errors
    ///
    /// * [`SequenceError::IndexOutOfRange`] if `index` is not less than the length.
    pub fn get_mut(&mut self, index: usize,) -> Result<&mut T,> {
        let node = self.find_node(index,)?;

        Ok(self.nodes[node].value_mut())
    }
    /// Pushes a value onto the front of the [`Sequence`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    pub fn push_front(&mut self, value: T,) {
        let new = self.new_node(value,);

        self.ends = match self.ends {
            None => Some((new, new,)),
            Some((head, tail,)) => {
                self.append(new, head,);

                Some((new, tail,))
            },
        };
    }
    /// Pushes a value onto the back of the [`Sequence`].
    ///
    /// # Params
    ///
    /// value --- The value to push on.
    pub fn push_back(&mut self, value: T,) {
        let new = self.new_node(value,);

        self.ends = match self.ends {
            None => Some((new, new,)),
            Some((head, tail,)) => {
                self.append(tail, new,);

                Some((head, new,))
            },
        };
    }
    /// Inserts `value` so that it is found at `index`, shifting every later value back one
    /// position.
    ///
    /// An `index` equal to the length appends the value.
    ///
    /// # Params
    ///
    /// index --- The position the value will occupy.
    /// value --- The value to insert.
    ///
    /// # Errors
    ///
    /// * [`SequenceError::IndexOutOfRange`] if `index` is greater than the length.
    pub fn insert(&mut self, index: usize, value: T,) -> Result<(),> {
        if index > self.len {
            return Err(SequenceError::IndexOutOfRange { index, len: self.len, })
        }

        if index == 0 { self.push_front(value,) }
        else if index == self.len { self.push_back(value,) }
        else {
            let at = self.node_at(index,);

            self.link_before(at, value,)
        }

        Ok(())
    }
    /// Pops the first value off the front of the [`Sequence`].
    ///
    /// # Errors
    ///
    /// * [`SequenceError::Empty`] if there are no values.
    pub fn pop_front(&mut self,) -> Result<T,> {
        let (head, _,) = self.ends.ok_or(SequenceError::Empty)?;

        Ok(self.remove_node(head,))
    }
    /// Pops the last value off the back of the [`Sequence`].
    ///
    /// # Errors
    ///
    /// * [`SequenceError::Empty`] if there are no values.
    pub fn pop_back(&mut self,) -> Result<T,> {
        let (_, tail,) = self.ends.ok_or(SequenceError::Empty)?;

        Ok(self.remove_node(tail,))
    }
    /// Removes and returns the value at `index`, shifting every later value forward one
    /// position.
    ///
    /// # Params
    ///
    /// index --- The position of the value to remove.
    ///
    /// # Errors
    ///
    /// * [`SequenceError::IndexOutOfRange`] if `index` is not less than the length.
    pub fn remove(&mut self, index: usize,) -> Result<T,> {
        if self.is_empty() {
            return Err(SequenceError::IndexOutOfRange { index, len: self.len, })
        }

        if index == 0 { return self.pop_front() }
        if index == self.len - 1 { return self.pop_back() }

        let node = self.find_node(index,)?;

        Ok(self.remove_node(node,))
    }
}

impl<T,> Default for Sequence<T,> {
    #[inline]
    fn default() -> Self { Self::new() }
}

impl<T: PartialEq,> PartialEq for Sequence<T,> {
    fn eq(&self, rhs: &Self,) -> bool {
        self.len() == rhs.len() && self.values().eq(rhs.values())
    }
}

impl<T: Eq,> Eq for Sequence<T,> {}

impl<T: Debug,> Debug for Sequence<T,> {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        fmt.debug_list().entries(self.values()).finish()
    }
}
