//! Canonical text signatures rebuilt from declaration records
//!
//! Rendering reads only the record's own fields, so two files that differ
//! only in formatting or comments render identically.

use crate::decl::{
    any_declaration_dispatch, AnyDeclaration, Argument, AssociatedType, Attribute, Case, Class,
    Declaration, Deinitializer, Enumeration, Extension, Function, GenericParameter,
    GenericRequirement, Import, Initializer, Modifier, Operator, Parameter, PrecedenceGroup,
    Protocol, Structure, Subscript, Typealias, Variable,
};
use std::fmt;

/// Space-joined attributes, modifiers, keyword and name
fn write_heading<D: Declaration + ?Sized>(f: &mut fmt::Formatter<'_>, decl: &D) -> fmt::Result {
    write_prefix(f, decl)?;
    write!(f, "{} {}", decl.keyword(), decl.name())
}

/// Attributes and modifiers, each followed by a space
fn write_prefix<D: Declaration + ?Sized>(f: &mut fmt::Formatter<'_>, decl: &D) -> fmt::Result {
    for attribute in decl.attributes() {
        write!(f, "{attribute} ")?;
    }
    for modifier in decl.modifiers() {
        write!(f, "{modifier} ")?;
    }
    Ok(())
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_generic_parameters(
    f: &mut fmt::Formatter<'_>,
    parameters: &[GenericParameter],
) -> fmt::Result {
    if parameters.is_empty() {
        return Ok(());
    }
    f.write_str("<")?;
    write_joined(f, parameters)?;
    f.write_str(">")
}

fn write_generic_requirements(
    f: &mut fmt::Formatter<'_>,
    requirements: &[GenericRequirement],
) -> fmt::Result {
    if requirements.is_empty() {
        return Ok(());
    }
    f.write_str(" where ")?;
    write_joined(f, requirements)
}

fn write_parameter_list(f: &mut fmt::Formatter<'_>, parameters: &[Parameter]) -> fmt::Result {
    f.write_str("(")?;
    write_joined(f, parameters)?;
    f.write_str(")")
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name())?;
        if !self.arguments().is_empty() {
            write_argument_list(f, self.arguments())?;
        }
        Ok(())
    }
}

fn write_argument_list(f: &mut fmt::Formatter<'_>, arguments: &[Argument]) -> fmt::Result {
    f.write_str("(")?;
    write_joined(f, arguments)?;
    f.write_str(")")
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}: {}", self.value()),
            None => f.write_str(self.value()),
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{}({detail})", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

impl fmt::Display for GenericParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.constraint() {
            Some(constraint) => write!(f, "{}: {constraint}", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

impl fmt::Display for GenericRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericRequirement::Conformance {
                type_name,
                protocol,
            } => write!(f, "{type_name}: {protocol}"),
            GenericRequirement::SameType { left, right } => write!(f, "{left} == {right}"),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [self.first_name(), self.second_name()]
            .into_iter()
            .flatten()
            .collect();
        let names = names.join(" ");

        match (names.is_empty(), self.type_name()) {
            (true, Some(ty)) => f.write_str(ty)?,
            (false, Some(ty)) => write!(f, "{names}: {ty}")?,
            (_, None) => f.write_str(&names)?,
        }
        if self.is_variadic() {
            f.write_str("...")?;
        }
        if let Some(default) = self.default_argument() {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        write_generic_parameters(f, self.generic_parameters())?;
        write_generic_requirements(f, self.generic_requirements())
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        if let Some(values) = self.associated_value() {
            write_parameter_list(f, values)?;
        }
        if let Some(raw) = self.raw_value() {
            write!(f, " = {raw}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        write_generic_parameters(f, self.generic_parameters())?;
        write_generic_requirements(f, self.generic_requirements())
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        write_generic_parameters(f, self.generic_parameters())?;
        write_generic_requirements(f, self.generic_requirements())
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        write_generic_requirements(f, self.generic_requirements())
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        write_generic_parameters(f, self.generic_parameters())?;
        write_generic_requirements(f, self.generic_requirements())
    }
}

impl fmt::Display for AssociatedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        write_generic_requirements(f, self.generic_requirements())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        if let Some(group) = self.precedence_group() {
            write!(f, ": {group}")?;
        }
        Ok(())
    }
}

impl fmt::Display for PrecedenceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        write_generic_parameters(f, self.generic_parameters())?;

        let signature = self.signature();
        write_parameter_list(f, signature.input())?;
        if signature.is_async() {
            f.write_str(" async")?;
        }
        if let Some(throws) = signature.throws_keyword() {
            write!(f, " {throws}")?;
        }
        if let Some(output) = signature.output() {
            write!(f, " -> {output}")?;
        }
        write_generic_requirements(f, self.generic_requirements())
    }
}

impl fmt::Display for Initializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_prefix(f, self)?;
        f.write_str(self.keyword())?;
        if let Some(optional) = self.optional() {
            f.write_str(optional)?;
        }
        write_generic_parameters(f, self.generic_parameters())?;
        write_parameter_list(f, self.parameters())?;
        if self.is_async() {
            f.write_str(" async")?;
        }
        if let Some(throws) = self.throws_keyword() {
            write!(f, " {throws}")?;
        }
        write_generic_requirements(f, self.generic_requirements())
    }
}

impl fmt::Display for Deinitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_prefix(f, self)?;
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Subscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_prefix(f, self)?;
        f.write_str(self.keyword())?;
        write_generic_parameters(f, self.generic_parameters())?;
        write_parameter_list(f, self.parameters())?;
        if let Some(output) = self.return_type() {
            write!(f, " -> {output}")?;
        }
        write_generic_requirements(f, self.generic_requirements())
    }
}

impl fmt::Display for Typealias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        write_generic_parameters(f, self.generic_parameters())?;
        if let Some(ty) = self.initialized_type() {
            write!(f, " = {ty}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_heading(f, self)?;
        if let Some(ty) = self.type_annotation() {
            write!(f, ": {ty}")?;
        }
        if let Some(value) = self.initialized_value() {
            write!(f, " = {value}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_prefix(f, self)?;
        f.write_str(self.keyword())?;
        if let Some(kind) = self.import_kind() {
            write!(f, " {kind}")?;
        }
        write!(f, " {}", self.name())
    }
}

impl fmt::Display for AnyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        any_declaration_dispatch!(self, d => fmt::Display::fmt(d, f))
    }
}
