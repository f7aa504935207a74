//! Pairwise conflict checks between two files' extracted members.
//!
//! Each check is a case-sensitive set-intersection test that
//! short-circuits on the first shared name. Which name collided is not
//! reported, only that a collision exists; the scan-level message
//! names the two files. Reporting the member itself is a known
//! enhancement opportunity (see DESIGN.md).

use rustc_hash::FxHashSet;

use overscan_parser::Members;

fn any_shared(a: &[String], b: &[String]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let b_set: FxHashSet<&str> = b.iter().map(String::as_str).collect();
    a.iter().any(|name| b_set.contains(name.as_str()))
}

/// Whether any method name is declared by both files.
pub fn has_conflicting_method(a: &Members, b: &Members) -> bool {
    any_shared(&a.methods, &b.methods)
}

/// Whether any property name (sigil included) is declared by both files.
pub fn has_conflicting_property(a: &Members, b: &Members) -> bool {
    any_shared(&a.properties, &b.properties)
}

/// Whether any class constant name is declared by both files.
pub fn has_conflicting_constant(a: &Members, b: &Members) -> bool {
    any_shared(&a.constants, &b.constants)
}

/// Whether the two files conflict on any member kind.
pub fn members_conflict(a: &Members, b: &Members) -> bool {
    has_conflicting_method(a, b) || has_conflicting_property(a, b) || has_conflicting_constant(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(methods: &[&str], properties: &[&str], constants: &[&str]) -> Members {
        Members {
            methods: methods.iter().map(|s| s.to_string()).collect(),
            properties: properties.iter().map(|s| s.to_string()).collect(),
            constants: constants.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn shared_method_conflicts() {
        let a = members(&["foo", "bar"], &[], &[]);
        let b = members(&["baz", "foo"], &[], &[]);
        assert!(has_conflicting_method(&a, &b));
        assert!(members_conflict(&a, &b));
    }

    #[test]
    fn disjoint_members_do_not_conflict() {
        let a = members(&["foo"], &["$a"], &["X"]);
        let b = members(&["bar"], &["$b"], &["Y"]);
        assert!(!members_conflict(&a, &b));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let a = members(&["getValue"], &[], &[]);
        let b = members(&["getvalue"], &[], &[]);
        assert!(!has_conflicting_method(&a, &b));
    }

    #[test]
    fn kinds_do_not_cross() {
        // A method named like a constant is not a conflict.
        let a = members(&["X"], &[], &[]);
        let b = members(&[], &[], &["X"]);
        assert!(!members_conflict(&a, &b));
    }

    #[test]
    fn property_sigil_is_part_of_the_name() {
        let a = members(&[], &["$count"], &[]);
        let b = members(&[], &["$count"], &[]);
        assert!(has_conflicting_property(&a, &b));
    }

    #[test]
    fn empty_members_never_conflict() {
        let a = Members::default();
        let b = members(&["foo"], &["$a"], &["X"]);
        assert!(!members_conflict(&a, &b));
        assert!(!members_conflict(&a, &a));
    }
}
