//! Tag sinks consuming finished tags.

use csstags_core::{Tag, TagKind};

/// Write-only consumer of finished tags, called in discovery order.
pub trait TagSink {
    fn emit(&mut self, tag: Tag);
}

impl TagSink for Vec<Tag> {
    fn emit(&mut self, tag: Tag) {
        self.push(tag);
    }
}

impl<T: TagSink + ?Sized> TagSink for &mut T {
    fn emit(&mut self, tag: Tag) {
        (**self).emit(tag);
    }
}

/// Forwards only tags whose kind is enabled.
#[derive(Debug)]
pub struct KindFilter<S> {
    inner: S,
    enabled: Vec<TagKind>,
}

impl<S: TagSink> KindFilter<S> {
    pub fn new(inner: S, enabled: impl IntoIterator<Item = TagKind>) -> Self {
        Self {
            inner,
            enabled: enabled.into_iter().collect(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: TagSink> TagSink for KindFilter<S> {
    fn emit(&mut self, tag: Tag) {
        if self.enabled.contains(&tag.kind) {
            self.inner.emit(tag);
        }
    }
}
