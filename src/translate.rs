//! Message formatting for conflict reports.

/// Renders user-facing conflict messages.
///
/// The scanner depends on this interface, not on any particular
/// translation backend; hosts with a real localization layer implement
/// it, and the default positional formatter covers everything else.
pub trait Translator {
    /// Render `template`, substituting each `%s` with the next
    /// parameter in order. `domain` names the message catalog; the
    /// default implementation ignores it.
    fn trans(&self, template: &str, params: &[&str], domain: &str) -> String;
}

/// Identity formatter: positional `%s` substitution, no catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslator;

impl Translator for DefaultTranslator {
    fn trans(&self, template: &str, params: &[&str], _domain: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut params = params.iter();
        let mut rest = template;
        while let Some(pos) = rest.find("%s") {
            out.push_str(&rest[..pos]);
            // Placeholders beyond the supplied params stay literal.
            out.push_str(params.next().copied().unwrap_or("%s"));
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_in_order() {
        let t = DefaultTranslator;
        assert_eq!(
            t.trans("%s conflicts with %s", &["a.php", "b.php"], "validate"),
            "a.php conflicts with b.php"
        );
    }

    #[test]
    fn surplus_placeholders_stay_literal() {
        let t = DefaultTranslator;
        assert_eq!(t.trans("%s and %s", &["only"], ""), "only and %s");
    }

    #[test]
    fn no_placeholders() {
        let t = DefaultTranslator;
        assert_eq!(t.trans("plain", &["unused"], ""), "plain");
    }
}
