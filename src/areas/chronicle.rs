use crate::artifacts::date::normalizer::DateNormalizer;
use std::cell::{RefCell, RefMut};
use std::io::Write;

/// One report session
///
/// Holds the output writer and the date settings shared by both parsers. The
/// commands in `crate::commands` are implemented as methods on it.
pub struct Chronicle {
    writer: RefCell<Box<dyn Write>>,
    normalizer: DateNormalizer,
}

impl Chronicle {
    pub fn new(writer: Box<dyn Write>, normalizer: DateNormalizer) -> Self {
        Chronicle {
            writer: RefCell::new(writer),
            normalizer,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn normalizer(&self) -> &DateNormalizer {
        &self.normalizer
    }
}
