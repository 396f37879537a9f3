pub mod catalog;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

pub use catalog::CatalogMessageSource;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display, EnumString, Serialize, Deserialize, ToSchema)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ja,
    En,
}

/// Renders the display text of a message key.
///
/// `args` fill the `{0}`, `{1}`, ... placeholders of the template.
pub trait MessageSource: Send + Sync {
    fn lookup(&self, key: &str, args: &[String], locale: Locale) -> String;
}

impl<F> MessageSource for F
where
    F: Fn(&str, &[String], Locale) -> String + Send + Sync,
{
    fn lookup(&self, key: &str, args: &[String], locale: Locale) -> String {
        self(key, args, locale)
    }
}

/// Substitutes `{n}` placeholders with the matching argument. Placeholders
/// without an argument are left as they are.
pub fn format_message(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            let arg = args.get(index)?;
            Some((arg, close))
        });
        match replaced {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
