//! Type emission: primitive keyword rewriting, type references, and type parameter lists.

use ts2dart_core::lang::types::{self, PrimitiveTypeId};
use ts2dart_syntax::ast::{SyntaxNode, TypeParameter, TypeReference};

use super::{Scope, Translator};
use crate::backend::errors::TranslateError;
use crate::backend::output::OutputBuffer;

impl<'a> Translator<'a> {
    /// Rewrite a primitive type keyword through the registry (`number` → `num`, ...).
    ///
    /// Primitives without a Dart keyword are unsupported.
    pub(super) fn visit_primitive_type(
        &self,
        node: &SyntaxNode,
        id: PrimitiveTypeId,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        match types::dart_keyword(id) {
            Some(keyword) => {
                out.emit(keyword);
                Ok(())
            }
            None => Err(self.unsupported_node(node)),
        }
    }

    /// Emit `Name [< A , B >]`.
    pub(super) fn visit_type_reference(
        &self,
        reference: &'a TypeReference,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        self.visit(&reference.type_name, scope, out)?;
        self.visit_angle_list(reference.type_arguments.as_deref(), scope, out)
    }

    pub(super) fn visit_type_parameters(
        &self,
        parameters: Option<&'a [SyntaxNode]>,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        self.visit_angle_list(parameters, scope, out)
    }

    /// Emit `T [extends Bound]`.
    pub(super) fn visit_type_parameter(
        &self,
        param: &'a TypeParameter,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        self.visit(&param.name, scope, out)?;
        if let Some(constraint) = param.constraint.as_deref() {
            out.emit("extends");
            self.visit(constraint, scope, out)?;
        }
        Ok(())
    }

    /// Emit `< a , b >`; nothing for an absent or empty list.
    fn visit_angle_list(
        &self,
        nodes: Option<&'a [SyntaxNode]>,
        scope: Scope<'a>,
        out: &mut OutputBuffer,
    ) -> Result<(), TranslateError> {
        match nodes {
            Some(nodes) if !nodes.is_empty() => {
                out.emit("<");
                self.visit_list(nodes, scope, out)?;
                out.emit(">");
                Ok(())
            }
            _ => Ok(()),
        }
    }
}
