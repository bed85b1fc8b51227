use crate::core::shape::RANK;

// -- Indexer ( major to minor, width fastest )

/// Iterator over every `[plane, depth, height, width]` coordinate of an
/// array, in storage order.
#[derive(Clone, Debug)]
pub struct Indexer {
    sizes: [usize; RANK],
    indices: [usize; RANK],
    current: usize,
    maximum: usize,
}

impl Indexer {
    pub(crate) fn new(sizes: [usize; RANK]) -> Self {
        Indexer {
            sizes,
            indices: [0; RANK],
            current: 0,
            maximum: sizes.iter().product(),
        }
    }
}

impl Iterator for Indexer {
    type Item = [usize; RANK];

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == self.maximum {
            return None;
        };

        let next = self.indices;

        for i in (0..RANK).rev() {
            self.indices[i] += 1;

            if self.indices[i] >= self.sizes[i] {
                self.indices[i] = 0;
            } else {
                break;
            }
        }

        self.current += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.maximum - self.current;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Indexer {}
