//! Short textual forms of types for diagnostics.
//!
//! This is not a renderer: it only produces enough text for error messages
//! and log fields to identify the offending type.

use crate::CodeModel;
use crate::def::{ExecId, ExecutableKind};
use crate::types::{TypeData, TypeId, WildcardBound};

struct TypeFormatter<'a> {
    model: &'a CodeModel,
    out: String,
}

impl<'a> TypeFormatter<'a> {
    fn new(model: &'a CodeModel) -> Self {
        Self {
            model,
            out: String::new(),
        }
    }

    fn write_list(&mut self, list: &[TypeId], separator: &str) {
        for (index, &ty) in list.iter().enumerate() {
            if index > 0 {
                self.out.push_str(separator);
            }
            self.write(ty);
        }
    }

    fn write_args(&mut self, args: &[TypeId]) {
        if !args.is_empty() {
            self.out.push('<');
            self.write_list(args, ", ");
            self.out.push('>');
        }
    }

    fn write(&mut self, ty: TypeId) {
        let model = self.model;
        match model.types.lookup(ty) {
            TypeData::Void => self.out.push_str("void"),
            TypeData::Primitive(kind) => self.out.push_str(kind.keyword()),
            TypeData::Array(component) => {
                self.write(component);
                self.out.push_str("[]");
            }
            TypeData::TypeVariable(name) => self.out.push_str(&model.names.resolve(name)),
            TypeData::Wildcard(bound) => match bound {
                WildcardBound::Unbounded => self.out.push('?'),
                WildcardBound::Extends(upper) => {
                    self.out.push_str("? extends ");
                    self.write(upper);
                }
                WildcardBound::Super(lower) => {
                    self.out.push_str("? super ");
                    self.write(lower);
                }
            },
            TypeData::Intersection(components) => self.write_list(&components, " & "),
            TypeData::Object(object) => {
                match object.enclosing {
                    Some(outer) => {
                        self.write(outer);
                        let name = model.defs.object(object.def).name;
                        self.out.push('.');
                        self.out.push_str(&model.names.resolve(name));
                    }
                    None => self.out.push_str(&model.qualified_name(object.def)),
                }
                self.write_args(&object.args);
            }
            TypeData::Executable(exec) => {
                self.write_args(&exec.args);
                if !exec.args.is_empty() {
                    self.out.push(' ');
                }
                match exec.enclosing {
                    Some(outer) => {
                        self.write(outer);
                        self.out.push('.');
                        self.out.push_str(&model.executable_simple_name(exec.exec));
                    }
                    None => self.out.push_str(&model.executable_name(exec.exec)),
                }
                let params: Vec<TypeId> = model
                    .defs
                    .executable(exec.exec)
                    .params
                    .iter()
                    .map(|param| param.type_id)
                    .collect();
                self.out.push('(');
                self.write_list(&params, ", ");
                self.out.push(')');
            }
        }
    }
}

impl CodeModel {
    /// Diagnostic text for `ty`, e.g. `java.util.Map<K, ? extends V>`.
    pub fn display_type(&self, ty: TypeId) -> String {
        let mut formatter = TypeFormatter::new(self);
        formatter.write(ty);
        formatter.out
    }

    fn executable_simple_name(&self, exec: ExecId) -> String {
        match self.defs.executable(exec).kind {
            ExecutableKind::Method { name, .. } => self.names.resolve(name).to_string(),
            ExecutableKind::Constructor => "<init>".to_string(),
        }
    }

    /// `Owner.method` or `Owner.<init>`.
    pub fn executable_name(&self, exec: ExecId) -> String {
        let parent = self.defs.executable(exec).nesting.parent;
        format!(
            "{}.{}",
            self.qualified_name(parent),
            self.executable_simple_name(exec)
        )
    }
}

#[cfg(test)]
#[path = "../tests/format_tests.rs"]
mod tests;
