//! Identifier and literal emission.

use ts2dart_core::lang::keywords::{self, KeywordId};

use super::Translator;
use crate::backend::errors::TranslateError;
use crate::backend::output::OutputBuffer;

impl<'a> Translator<'a> {
    pub(super) fn visit_identifier(&self, name: &str, out: &mut OutputBuffer) -> Result<(), TranslateError> {
        out.emit(name);
        Ok(())
    }

    /// Numeric and regular-expression literals keep their source text.
    pub(super) fn visit_raw_literal(&self, raw: &str, out: &mut OutputBuffer) -> Result<(), TranslateError> {
        out.emit(raw);
        Ok(())
    }

    /// Re-encode the decoded string value with JSON escaping.
    ///
    /// `$` is not escaped, so a value containing `$` reads as interpolation in Dart.
    pub(super) fn visit_string_literal(&self, value: &str, out: &mut OutputBuffer) -> Result<(), TranslateError> {
        let encoded = serde_json::Value::String(value.to_owned()).to_string();
        out.emit(&encoded);
        Ok(())
    }

    /// `true`, `false` and `null` are spelled the same in Dart.
    pub(super) fn visit_keyword_literal(
        &self,
        keyword: KeywordId,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        out.emit(keywords::as_str(keyword));
        Ok(())
    }
}
