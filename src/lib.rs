pub mod constants;
mod content_type;
mod context;
mod guard;
mod options;
mod origin;
mod result;
mod sec_fetch_site;
mod util;

pub use content_type::{DEFAULT_PROTECTED_CONTENT_TYPES, ProtectedContentTypes};
pub use context::RequestContext;
pub use guard::CsrfGuard;
pub use options::{CsrfOptions, ValidationError};
pub use origin::{OriginMatcher, OriginPredicateFn, PatternError, TrustedOrigin};
pub use result::{Applicability, CsrfError, Signals, Verdict};
pub use sec_fetch_site::{
    SecFetchSite, SecFetchSitePredicateFn, TrustedSecFetchSite, UnknownSecFetchSite,
};
pub use util::{normalize_lower, serialized_origin};
