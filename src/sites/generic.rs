//! Any site publishing schema.org Recipe metadata.

use super::SiteProfile;

pub static PROFILE: SiteProfile = SiteProfile {
    key: "generic",
    ..SiteProfile::GENERIC
};
