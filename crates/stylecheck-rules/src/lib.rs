//! # stylecheck-rules
//!
//! Built-in style rules for stylecheck.
//!
//! ## Available Rules
//!
//! | Code  | Name | Description |
//! |-------|------|-------------|
//! | SC001 | `naming-convention` | Enforces casing per declaration kind |
//! | SC002 | `import-order` | Requires grouped, alphabetical imports |
//! | SC003 | `no-index-key` | Forbids array indexes as list keys |
//! | SC004 | `no-default-export` | Forbids default exports |
//! | SC005 | `no-inline-style` | Forbids inline style objects |
//! | SC006 | `no-any-type` | Forbids banned type annotations |
//! | SC007 | `component-size` | Limits statements per component |
//! | SC008 | `boolean-prop-shorthand` | Prefers bare boolean attributes |
//! | SC009 | `no-string-literal-braces` | Forbids braces around string values |
//! | SC010 | `no-literal-color` | Forbids colors outside the palette (off by default) |
//! | SC011 | `prefer-inline-style-dynamic` | Static inline styles extracted (off by default) |
//!
//! ## Usage
//!
//! ```ignore
//! use stylecheck_core::{CancelToken, Runner};
//! use stylecheck_rules::builtin_registry;
//!
//! let runner = Runner::builder()
//!     .root("./src")
//!     .registry(builtin_registry())
//!     .build()?;
//! let report = runner.run(&CancelToken::new())?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod boolean_prop_shorthand;
mod component_size;
mod import_order;
mod naming_convention;
mod no_any_type;
mod no_default_export;
mod no_index_key;
mod no_inline_style;
mod no_literal_color;
mod no_string_literal_braces;
mod prefer_inline_style_dynamic;
mod presets;
mod util;

pub use boolean_prop_shorthand::BooleanPropShorthand;
pub use component_size::ComponentSize;
pub use import_order::ImportOrder;
pub use naming_convention::NamingConvention;
pub use no_any_type::NoAnyType;
pub use no_default_export::NoDefaultExport;
pub use no_index_key::NoIndexKey;
pub use no_inline_style::NoInlineStyle;
pub use no_literal_color::NoLiteralColor;
pub use no_string_literal_braces::NoStringLiteralBraces;
pub use prefer_inline_style_dynamic::PreferInlineStyleDynamic;
pub use presets::{builtin_registry, builtin_rules};

/// Re-export core types for convenience.
pub use stylecheck_core::{Rule, Severity, Violation};
