//! # Descriptor Placement Policy
//!
//! The fixed filesystem locations the placement rule checks. For a web
//! application archive the CDI descriptor must live in the `WEB-INF`
//! directory; the `META-INF` location is only correct for EJB modules and
//! plain jars (<https://docs.oracle.com/javaee/6/tutorial/doc/gjbnz.html>).
//!
//! Both locations are relative to a module's base directory and are built
//! component-wise, so joining them onto a base directory always yields
//! platform-native separators in reported paths.

use std::path::PathBuf;

/// The packaging type the placement policy governs.
///
/// Comparison is exact and case-sensitive; every other packaging type is
/// exempt from the policy.
pub const GOVERNED_PACKAGING: &str = "war";

/// File name of the CDI component descriptor.
pub const DESCRIPTOR_FILE: &str = "beans.xml";

/// Descriptor location for EJB modules and plain jars, relative to the
/// module base directory. Disallowed in [`GOVERNED_PACKAGING`] modules.
pub fn ejb_or_jar_descriptor() -> PathBuf {
    ["src", "main", "resources", "META-INF", DESCRIPTOR_FILE]
        .iter()
        .collect()
}

/// Descriptor location for web application archives, relative to the module
/// base directory. Required in [`GOVERNED_PACKAGING`] modules.
pub fn webapp_descriptor() -> PathBuf {
    ["src", "main", "webapp", "WEB-INF", DESCRIPTOR_FILE]
        .iter()
        .collect()
}
