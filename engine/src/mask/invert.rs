use super::Mask;

/// The logical negation of another mask over the same bounding box.
#[derive(Debug, Clone)]
pub struct InvertMask {
    pub(super) inner: Box<Mask>,
}

impl InvertMask {
    pub fn new(mask: Mask) -> Self {
        InvertMask {
            inner: Box::new(mask),
        }
    }

    pub fn inner(&self) -> &Mask {
        &self.inner
    }

    pub fn collides_at(&self, x: i32, y: i32) -> bool {
        !self.inner.collides_at(x, y)
    }
}
