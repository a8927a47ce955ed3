//! Rotation-to-front variants of an ordered city list.
//!
//! For `[a, b, c]` the variants are `[a, b, c]`, `[b, a, c]` and `[c, a, b]`:
//! one per element, that element first, the rest in their original order.
//! There are exactly `m` variants for `m` cities, not `m!`.

/// One variant produced by [`rotations`]: the list with one element moved to
/// the front. Borrows the source list instead of copying it.
#[derive(Debug, Clone, Copy)]
pub struct Rotation<'a> {
    items: &'a [usize],
    front: usize,
}

impl<'a> Rotation<'a> {
    /// The element moved to the front.
    pub fn first(&self) -> usize {
        self.items[self.front]
    }

    /// Position of [`first`](Self::first) in the source list.
    pub fn source_index(&self) -> usize {
        self.front
    }

    /// The remaining elements in their original relative order.
    pub fn rest(&self) -> impl Iterator<Item = usize> + 'a {
        let (items, front) = (self.items, self.front);
        items
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != front)
            .map(|(_, &c)| c)
    }

    /// The whole variant, front element first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + 'a {
        std::iter::once(self.first()).chain(self.rest())
    }

    /// Number of elements in the variant.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the source list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Materializes the variant.
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

/// Iterator over the rotation-to-front variants of a list.
#[derive(Debug, Clone)]
pub struct Rotations<'a> {
    items: &'a [usize],
    next: usize,
}

impl<'a> Iterator for Rotations<'a> {
    type Item = Rotation<'a>;

    fn next(&mut self) -> Option<Rotation<'a>> {
        if self.next >= self.items.len() {
            return None;
        }
        let rotation = Rotation {
            items: self.items,
            front: self.next,
        };
        self.next += 1;
        Some(rotation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len() - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Rotations<'_> {}

/// Yields one variant per element of `items`, in source order: variant `i`
/// has `items[i]` first and the other elements in their original order.
///
/// # Examples
///
/// ```
/// use held_karp::subset::rotations;
///
/// let rows: Vec<Vec<usize>> = rotations(&[1, 2, 4, 5]).map(|r| r.to_vec()).collect();
/// assert_eq!(rows[2], vec![4, 1, 2, 5]);
/// assert_eq!(rows.len(), 4);
/// ```
pub fn rotations(items: &[usize]) -> Rotations<'_> {
    Rotations { items, next: 0 }
}
