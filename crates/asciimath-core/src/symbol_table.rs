use std::sync::LazyLock;

use rustc_hash::FxHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

use asciimath_renderer::symbol::{SymbolId, SymbolValue};

use crate::error::TableError;
use crate::predefined::SYMBOLS;

/// How the parser treats a symbol.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrammarClass {
    /// A plain symbol, e.g. `+` or `alpha`.
    #[default]
    Symbol,
    /// An operator with one operand, e.g. `sqrt`.
    Unary,
    /// An operator with two operands, e.g. `frac`.
    Binary,
    /// An operator written between its operands: `/`, `_` and `^`.
    Infix,
    LParen,
    RParen,
    /// A delimiter that can open or close a group, e.g. `|`.
    LRParen,
}

/// A conversion the parser applies to an operand before building the operator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperandConversion {
    #[default]
    None,
    /// Turn the operand into a `Node::Color`.
    ColorText,
}

/// What a spelling means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolDescriptor {
    pub value: SymbolValue,
    pub class: GrammarClass,
    /// Conversions for the first and second operand.
    pub conversions: [OperandConversion; 2],
}

impl SymbolDescriptor {
    #[inline]
    pub fn id(&self) -> Option<SymbolId> {
        match self.value {
            SymbolValue::Id(id) => Some(id),
            SymbolValue::Custom(_) => None,
        }
    }
}

static DEFAULT_TABLE: LazyLock<SymbolTable> = LazyLock::new(|| {
    let mut builder = SymbolTable::builder();
    for entry in SYMBOLS {
        let descriptor = SymbolDescriptor {
            value: SymbolValue::Id(entry.id),
            class: entry.class,
            conversions: entry.conversions,
        };
        for spelling in entry.spellings {
            builder.insert(spelling, descriptor.clone());
        }
    }
    builder.build()
});

/// The mapping from spellings to symbols, used by the tokenizer and the parser.
///
/// A table is immutable. To derive a table from another one, use [`SymbolTable::to_builder`].
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: FxHashMap<Box<str>, SymbolDescriptor>,
    longest_spelling_length: usize,
}

impl SymbolTable {
    /// An empty builder.
    #[inline]
    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder {
            entries: FxHashMap::default(),
            allow_overwrite: true,
        }
    }

    /// The predefined ASCIIMath symbols.
    #[inline]
    pub fn default_table() -> &'static SymbolTable {
        &DEFAULT_TABLE
    }

    /// A builder that starts out with all entries of this table.
    pub fn to_builder(&self) -> SymbolTableBuilder {
        SymbolTableBuilder {
            entries: self.entries.clone(),
            allow_overwrite: true,
        }
    }

    #[inline]
    pub fn lookup(&self, spelling: &str) -> Option<&SymbolDescriptor> {
        self.entries.get(spelling)
    }

    /// The length of the longest spelling, in characters.
    #[inline]
    pub fn longest_spelling_length(&self) -> usize {
        self.longest_spelling_length
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All spellings with their descriptors, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SymbolDescriptor)> {
        self.entries
            .iter()
            .map(|(spelling, descriptor)| (&**spelling, descriptor))
    }
}

static_assertions::assert_impl_all!(SymbolTable: Send, Sync);

/// Accumulates entries for a [`SymbolTable`].
///
/// By default, a spelling that is added again replaces the earlier entry. With
/// `allow_overwrite(false)`, this is an error instead.
#[derive(Debug, Clone)]
pub struct SymbolTableBuilder {
    entries: FxHashMap<Box<str>, SymbolDescriptor>,
    allow_overwrite: bool,
}

impl SymbolTableBuilder {
    pub fn allow_overwrite(&mut self, allow: bool) -> &mut Self {
        self.allow_overwrite = allow;
        self
    }

    /// Register `value` under all of the given spellings.
    ///
    /// The operand conversions are derived from the value: `color` converts its first
    /// operand to a color, everything else converts nothing.
    pub fn add(
        &mut self,
        spellings: &[&str],
        value: impl Into<SymbolValue>,
        class: GrammarClass,
    ) -> Result<&mut Self, TableError> {
        let value = value.into();
        let conversions = match value {
            SymbolValue::Id(SymbolId::Color) => {
                [OperandConversion::ColorText, OperandConversion::None]
            }
            _ => [OperandConversion::None; 2],
        };
        self.add_with_conversion(spellings, value, class, conversions)
    }

    /// Like [`add`](Self::add), with explicit operand conversions.
    pub fn add_with_conversion(
        &mut self,
        spellings: &[&str],
        value: impl Into<SymbolValue>,
        class: GrammarClass,
        conversions: [OperandConversion; 2],
    ) -> Result<&mut Self, TableError> {
        if spellings.is_empty() {
            return Err(TableError::NoSpelling);
        }
        for spelling in spellings {
            if spelling.is_empty() {
                return Err(TableError::EmptySpelling);
            }
            if !self.allow_overwrite && self.entries.contains_key(*spelling) {
                return Err(TableError::DuplicateSpelling(spelling.to_string()));
            }
        }
        let descriptor = SymbolDescriptor {
            value: value.into(),
            class,
            conversions,
        };
        for spelling in spellings {
            self.insert(spelling, descriptor.clone());
        }
        Ok(self)
    }

    #[inline]
    pub(crate) fn insert(&mut self, spelling: &str, descriptor: SymbolDescriptor) {
        self.entries.insert(spelling.into(), descriptor);
    }

    pub fn build(&self) -> SymbolTable {
        let longest_spelling_length = self
            .entries
            .keys()
            .map(|spelling| spelling.chars().count())
            .max()
            .unwrap_or(0);
        SymbolTable {
            entries: self.entries.clone(),
            longest_spelling_length,
        }
    }
}
