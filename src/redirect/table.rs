//! Legacy auth route table.
//!
//! Single source of truth for which paths are legacy, where they go, and the
//! loop-breaker marker that keeps the guard from redirecting twice. The guard
//! and the page fallbacks both consult this table instead of carrying their
//! own copies of the mapping.

/// Query parameter set on guard-issued redirects; once present with value
/// `true`, no further redirect may be issued for the request.
pub const LOOP_BREAKER_PARAM: &str = "no_redirect";

/// Canonical destination for the legacy auth routes.
pub const CREATE_PROFILE_PATH: &str = "/create-profile";

/// Destination of a successful magic-link sign-in.
pub const PROFILE_PATH: &str = "/profile";

/// Provenance tag carried on fallback redirect targets so the destination
/// page can tell which legacy route the visitor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Signin,
    Signup,
}

impl Provenance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signin => "signin",
            Self::Signup => "signup",
        }
    }
}

/// A legacy auth route the Edge Guard intercepts.
#[derive(Debug, Clone, Copy)]
pub struct LegacyRoute {
    pub prefix: &'static str,
    pub from: Provenance,
}

/// The two legacy routes. Prefix match, so trailing segments or query strings
/// on the request do not defeat interception.
pub const LEGACY_AUTH_ROUTES: [LegacyRoute; 2] = [
    LegacyRoute {
        prefix: "/auth/signin",
        from: Provenance::Signin,
    },
    LegacyRoute {
        prefix: "/auth/signup",
        from: Provenance::Signup,
    },
];

/// Look up the legacy route matching `path`, if any.
#[must_use]
pub fn legacy_route(path: &str) -> Option<&'static LegacyRoute> {
    LEGACY_AUTH_ROUTES
        .iter()
        .find(|route| path.starts_with(route.prefix))
}

/// Guard redirect target: canonical destination plus the loop breaker.
#[must_use]
pub fn guarded_target() -> String {
    format!("{CREATE_PROFILE_PATH}?{LOOP_BREAKER_PARAM}=true")
}

/// Page-fallback redirect target: canonical destination plus provenance.
#[must_use]
pub fn fallback_target(from: Provenance) -> String {
    format!("{CREATE_PROFILE_PATH}?from={}", from.as_str())
}
