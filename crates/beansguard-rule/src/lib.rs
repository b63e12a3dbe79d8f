//! # beansguard-rule — Descriptor Placement Enforcement
//!
//! The single beansguard rule: in a `war`-packaged module the CDI descriptor
//! must live at `src/main/webapp/WEB-INF/beans.xml`, and must not sit at the
//! EJB/jar location `src/main/resources/META-INF/beans.xml`. Every other
//! packaging type is exempt.
//!
//! ## Architecture
//!
//! ```text
//! host build tool  -->  protocol (BuildRule / RuleHelper)  -->  validation
//!   project model         BeansXmlLocationRule                   placement check
//!   expression eval       cache contract (never cached)          two fs probes
//! ```
//!
//! The host implements [`RuleHelper`] over its own project model and invokes
//! [`BuildRule::execute`] once per module. A failed check returns a
//! [`RuleError`](beansguard_core::RuleError) whose message the host surfaces
//! to the user verbatim.

pub mod protocol;
pub mod rule;
pub mod validation;

pub use protocol::{BuildRule, RuleHelper, RuleLog, TracingLog};
pub use rule::BeansXmlLocationRule;
pub use validation::check_descriptor_location;
