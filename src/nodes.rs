/// A node in a doubly linked list.
#[derive(Clone,)]
pub struct Node<T,> {
  /// The value inside this [`Node`], `None` while the [`Node`] is vacant.
  pub value: Option<T>,
  /// The index of the previous [`Node`].
  pub prev: Option<usize>,
  /// The index of the next [`Node`].
  pub next: Option<usize>,
}

impl<T,> Node<T,> {
  /// Create a new, populated and unlinked [`Node`].
  ///
  /// # Params
  ///
  /// value --- The value to populate the [`Node`] with.
  #[inline]
  pub fn new(value: T,) -> Self {
    Self { value: Some(value,), prev: None, next: None, }
  }
  /// Get the next [`Node`].
  ///
  /// # Panics
  ///
  /// * If there is no next [`Node`].
  #[inline]
  pub fn next(&self,) -> usize {
    self.next.expect("`Node::next` no next `Node`")
  }
  /// Get the previous [`Node`].
  ///
  /// # Panics
  ///
  /// * If there is no previous [`Node`].
  #[inline]
  pub fn prev(&self,) -> usize {
    self.prev.expect("`Node::prev` no previous `Node`")
  }
  /// Get the value in this [`Node`].
  ///
  /// # Panics
  ///
  /// * If the [`Node`] is vacant.
  #[inline]
  pub fn value(&self,) -> &T {
    self.value.as_ref().expect("`Node::value` vacant `Node`")
  }
  /// Get the value in this [`Node`] mutably.
  ///
  /// # Panics
  ///
  /// * If the [`Node`] is vacant.
  #[inline]
  pub fn value_mut(&mut self,) -> &mut T {
    self.value.as_mut().expect("`Node::value_mut` vacant `Node`")
  }
  /// Moves the value out, leaving this [`Node`] vacant.
  ///
  /// # Panics
  ///
  /// * If the [`Node`] is already vacant.
  #[inline]
  pub fn take_value(&mut self,) -> T {
    self.value.take().expect("`Node::take_value` vacant `Node`")
  }
  /// Pushes this [`Node`] onto the head of a stack.
  #[inline]
  pub fn stack_push(&mut self, next: Option<usize>,) { self.next = next }
  /// Pops this [`Node`] off the head of a stack, returning the rest of the stack.
  #[inline]
  pub fn stack_pop(&mut self,) -> Option<usize> { self.next.take() }
}
