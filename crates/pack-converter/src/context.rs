//! Conversion context: the data of one conversion plus its logging.

use std::fmt::Display;

use tracing::{debug, error, info, warn};

use crate::data::ConversionData;

/// Owns the conversion data and logs on behalf of the converters.
///
/// Every message is tagged with the pack name; warnings and errors are
/// counted so the final report can say how clean the conversion was.
#[derive(Debug)]
pub struct PackConversionContext<D: ConversionData> {
    pack_name: String,
    data: D,
    warnings: usize,
    errors: usize,
}

impl<D: ConversionData> PackConversionContext<D> {
    pub fn new(pack_name: impl Into<String>, data: D) -> Self {
        Self {
            pack_name: pack_name.into(),
            data,
            warnings: 0,
            errors: 0,
        }
    }

    pub fn pack_name(&self) -> &str {
        &self.pack_name
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    pub fn into_data(self) -> D {
        self.data
    }

    pub fn warnings(&self) -> usize {
        self.warnings
    }

    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn debug(&self, message: &str) {
        debug!(pack = %self.pack_name, "{}", message);
    }

    pub fn info(&self, message: &str) {
        info!(pack = %self.pack_name, "{}", message);
    }

    pub fn warn(&mut self, message: &str) {
        self.warnings += 1;
        warn!(pack = %self.pack_name, "{}", message);
    }

    pub fn error(&mut self, message: &str) {
        self.errors += 1;
        error!(pack = %self.pack_name, "{}", message);
    }

    pub fn error_with(&mut self, message: &str, err: &dyn Display) {
        self.errors += 1;
        error!(pack = %self.pack_name, "{}: {}", message, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BaseConversionData;
    use crate::pack::JavaResourcePack;
    use std::sync::Arc;

    #[test]
    fn test_counts_warnings_and_errors() {
        let data = BaseConversionData::new("in", "out", Arc::new(JavaResourcePack::new()));
        let mut ctx = PackConversionContext::new("Test", data);

        ctx.debug("quiet");
        ctx.info("hello");
        ctx.warn("careful");
        ctx.error("broken");
        ctx.error_with("also broken", &"io failure");

        assert_eq!(ctx.pack_name(), "Test");
        assert_eq!(ctx.warnings(), 1);
        assert_eq!(ctx.errors(), 2);
    }
}
