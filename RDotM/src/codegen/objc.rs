//! Objective-C rendering
//!
//! Each resource becomes a class method. The header declares them; the
//! implementation returns the value:
//!
//! ```objc
//! + (NSString *)string_title_main { return @"Main"; }
//! + (UIColor *)color_accent { return [UIColor colorWithRed:255/255.0 green:64/255.0 blue:129/255.0 alpha:255/255.0]; }
//! ```

use std::borrow::Cow;
use std::fmt::Write;

use super::options::{GenerateOptions, is_identifier};
use super::types::SkippedEntry;
use crate::formats::color::parse_hex_color;
use crate::formats::values::{ResourceEntry, ResourceKind, Resources};

/// Banner at the top of both generated files.
pub const OUTPUT_HEADER: &str = "// DO NOT EDIT.
// This file is automatically generated by rdotm tool.
// https://github.com/ksoichiro/rdotm

";

/// One rendered class method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub kind: ResourceKind,
    /// Method signature without terminator, e.g. `+ (NSString *)string_title`
    pub signature: String,
    /// Method body including braces
    pub body: String,
}

impl Accessor {
    fn declaration(&self) -> String {
        format!("{};", self.signature)
    }

    fn definition(&self) -> String {
        format!("{} {}", self.signature, self.body)
    }
}

/// Accessors to emit plus the entries that had to be left out.
#[derive(Debug, Clone, Default)]
pub struct AccessorPlan {
    pub accessors: Vec<Accessor>,
    pub skipped: Vec<SkippedEntry>,
}

impl AccessorPlan {
    /// Number of accessors of one kind.
    #[must_use]
    pub fn count(&self, kind: ResourceKind) -> usize {
        self.accessors.iter().filter(|a| a.kind == kind).count()
    }
}

/// Decide which accessors to emit, in output order: strings, colors, then
/// integers and drawables when enabled.
///
/// An entry that cannot be rendered is dropped from both files and recorded
/// in [`AccessorPlan::skipped`].
#[must_use]
pub fn plan_accessors(resources: &Resources, options: &GenerateOptions) -> AccessorPlan {
    let mut plan = AccessorPlan::default();

    let mut kinds = vec![ResourceKind::String, ResourceKind::Color];
    if options.emit_integers {
        kinds.push(ResourceKind::Integer);
    }
    if options.emit_drawables {
        kinds.push(ResourceKind::Drawable);
    }

    for kind in kinds {
        for entry in resources.entries(kind) {
            match accessor_for(entry) {
                Ok(accessor) => plan.accessors.push(accessor),
                Err(reason) => {
                    tracing::warn!("Skipping {} '{}': {}", entry.kind, entry.name, reason);
                    plan.skipped.push(SkippedEntry {
                        kind: entry.kind,
                        name: entry.name.clone(),
                        reason,
                    });
                }
            }
        }
    }

    plan
}

fn accessor_for(entry: &ResourceEntry) -> Result<Accessor, String> {
    if !is_identifier(&entry.name) {
        return Err(format!("'{}' is not a valid method name", entry.name));
    }

    let name = &entry.name;
    let (signature, body) = match entry.kind {
        ResourceKind::String => (
            format!("+ (NSString *)string_{name}"),
            format!("{{ return @\"{}\"; }}", escape_objc_string(&entry.raw_value)),
        ),
        ResourceKind::Color => {
            let argb = parse_hex_color(&entry.raw_value).map_err(|e| e.to_string())?;
            (
                format!("+ (UIColor *)color_{name}"),
                format!(
                    "{{ return [UIColor colorWithRed:{}/255.0 green:{}/255.0 blue:{}/255.0 alpha:{}/255.0]; }}",
                    argb.red, argb.green, argb.blue, argb.alpha
                ),
            )
        }
        ResourceKind::Integer => {
            let value: i64 = entry
                .raw_value
                .trim()
                .parse()
                .map_err(|_| format!("'{}' is not an integer", entry.raw_value))?;
            (
                format!("+ (NSInteger)integer_{name}"),
                format!("{{ return {value}; }}"),
            )
        }
        ResourceKind::Drawable => (
            format!("+ (UIImage *)drawable_{name}"),
            format!("{{ return [UIImage imageNamed:@\"{name}\"]; }}"),
        ),
    };

    Ok(Accessor {
        kind: entry.kind,
        signature,
        body,
    })
}

/// Render the `.h` file.
#[must_use]
pub fn render_header(resources: &Resources, options: &GenerateOptions) -> String {
    render_header_from(&plan_accessors(resources, options), options)
}

/// Render the `.m` file.
#[must_use]
pub fn render_implementation(resources: &Resources, options: &GenerateOptions) -> String {
    render_implementation_from(&plan_accessors(resources, options), options)
}

pub(crate) fn render_header_from(plan: &AccessorPlan, options: &GenerateOptions) -> String {
    let class = &options.class_name;
    let mut out = String::from(OUTPUT_HEADER);
    let _ = write!(out, "#import <UIKit/UIKit.h>\n\n@interface {class} : NSObject\n\n");
    for accessor in &plan.accessors {
        out.push_str(&accessor.declaration());
        out.push('\n');
    }
    out.push_str("\n@end\n");
    out
}

pub(crate) fn render_implementation_from(plan: &AccessorPlan, options: &GenerateOptions) -> String {
    let class = &options.class_name;
    let mut out = String::from(OUTPUT_HEADER);
    let _ = write!(out, "#import \"{class}.h\"\n\n@implementation {class}\n\n");
    for accessor in &plan.accessors {
        out.push_str(&accessor.definition());
        out.push('\n');
    }
    out.push_str("\n@end\n");
    out
}

/// Escape only what would end an Objective-C string literal early.
///
/// Backslash sequences already in the value (Android's `\'`, `\n`, `\"`)
/// are passed through untouched. Bare `"` and raw line breaks are escaped,
/// and an unpaired trailing backslash is doubled so it cannot swallow the
/// closing quote.
#[must_use]
pub fn escape_objc_string(s: &str) -> Cow<'_, str> {
    if !s.contains(['"', '\n', '\r']) && !ends_with_unpaired_backslash(s) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 8);
    let mut escaped = false;
    for c in s.chars() {
        match c {
            // A raw line break cannot complete a pending escape
            '\n' | '\r' if escaped => {
                out.push('\\');
                out.push_str(if c == '\n' { "\\n" } else { "\\r" });
            }
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' if !escaped => out.push_str("\\\""),
            _ => out.push(c),
        }
        escaped = c == '\\' && !escaped;
    }
    if escaped {
        out.push('\\');
    }
    Cow::Owned(out)
}

fn ends_with_unpaired_backslash(s: &str) -> bool {
    s.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}
