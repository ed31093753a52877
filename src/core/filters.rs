use crate::models::{Profile, Role, SwipeMode};

/// Check whether a candidate's role is one the viewer can be paired with
///
/// Owners look for volunteers, volunteers look for owners, and `both`
/// profiles sit on either side.
#[inline]
pub fn role_compatible(viewer: Role, candidate: Role) -> bool {
    match viewer {
        Role::Both => true,
        Role::Owner => candidate != Role::Owner,
        Role::Volunteer => candidate != Role::Volunteer,
    }
}

/// Narrow a `both` viewer's feed to one side of the walk
///
/// Single-role viewers are already narrowed by [`role_compatible`], so the
/// mode only applies to `both`.
#[inline]
pub fn matches_swipe_mode(viewer: Role, mode: SwipeMode, candidate: Role) -> bool {
    if viewer != Role::Both {
        return true;
    }

    match mode {
        SwipeMode::Volunteers => matches!(candidate, Role::Volunteer | Role::Both),
        SwipeMode::Owners => matches!(candidate, Role::Owner | Role::Both),
    }
}

/// Check if a profile belongs in the viewer's feed, ignoring swipe history
#[inline]
pub fn is_candidate(me: &Profile, profile: &Profile) -> bool {
    profile.id != me.id && role_compatible(me.role, profile.role)
}
