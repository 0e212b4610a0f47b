//! # Workflow Operations — Submit and Resolve
//!
//! The generic approval pipeline. `submit` files a request without touching
//! the profile; `resolve` adjudicates it, applying the kind-specific effect
//! atomically with the status flip — all fallible checks run before the
//! first mutation, so a failed resolution leaves both the request and the
//! profile exactly as they were.

use fixnet_core::{EngineError, Timestamp};
use fixnet_geo::ZoneIndex;
use fixnet_onboarding::TechnicianProfile;

use crate::request::{
    ChangeRequest, ChangeRequestKind, RequestStatus, Resolution, ServiceAction, ZoneAction,
};

/// File a change request on behalf of a technician.
///
/// Allowed only for `VERIFIED` technicians; the profile is not mutated.
///
/// # Errors
///
/// - [`EngineError::InvalidStateTransition`] — technician is not verified.
/// - [`EngineError::Validation`] — malformed payload.
/// - [`EngineError::UnservicableZone`] — a zone-add request naming a zone
///   that does not currently resolve to an active zone.
pub fn submit(
    profile: &TechnicianProfile,
    kind: ChangeRequestKind,
    zones: &ZoneIndex,
) -> Result<ChangeRequest, EngineError> {
    if !profile.is_verified() {
        return Err(EngineError::InvalidStateTransition {
            technician_id: profile.id.to_string(),
            from: profile.verification_status.to_string(),
            attempted: "SUBMIT_CHANGE_REQUEST".to_string(),
        });
    }
    validate_kind(profile, &kind, zones)?;
    Ok(ChangeRequest::new(profile.id, kind))
}

/// Adjudicate a pending request.
///
/// On approval the kind-specific effect and the status flip commit
/// together; on rejection only `status`, `admin_comments`, and
/// `resolved_at` change. Legal only while the request is `PENDING`, which
/// is also what makes a double-resolve race safe: the second caller
/// observes a non-pending status and fails.
///
/// # Errors
///
/// - [`EngineError::InvalidStateTransition`] — request already resolved.
/// - [`EngineError::Validation`] — request does not belong to this profile.
/// - [`EngineError::StaleZoneReference`] — a zone-add approval naming a
///   zone deactivated since submission; the request stays `PENDING` for
///   re-resolution.
pub fn resolve(
    request: &mut ChangeRequest,
    profile: &mut TechnicianProfile,
    resolution: Resolution,
    zones: &ZoneIndex,
    now: Timestamp,
) -> Result<(), EngineError> {
    if request.technician_id != profile.id {
        return Err(EngineError::validation(format!(
            "{} does not belong to {}",
            request.id, profile.id
        )));
    }
    if request.status != RequestStatus::Pending {
        return Err(EngineError::InvalidStateTransition {
            technician_id: profile.id.to_string(),
            from: request.status.to_string(),
            attempted: "RESOLVE".to_string(),
        });
    }

    match resolution {
        Resolution::Reject { comments } => {
            request.status = RequestStatus::Rejected;
            request.admin_comments = comments;
            request.resolved_at = Some(now);
        }
        Resolution::Approve { comments } => {
            // All fallible checks precede the first mutation.
            if let ChangeRequestKind::Zone {
                action: ZoneAction::Add,
                zone_id,
            } = &request.kind
            {
                if !zones.is_serviceable(zone_id) {
                    return Err(EngineError::StaleZoneReference {
                        zone_id: zone_id.to_string(),
                    });
                }
            }

            apply_effect(profile, &request.kind);
            profile.recompute_verification();
            request.status = RequestStatus::Approved;
            request.admin_comments = comments;
            request.resolved_at = Some(now);
        }
    }
    Ok(())
}

/// Structural validation of a request payload at submission time.
fn validate_kind(
    profile: &TechnicianProfile,
    kind: &ChangeRequestKind,
    zones: &ZoneIndex,
) -> Result<(), EngineError> {
    match kind {
        ChangeRequestKind::Service {
            action,
            category_id,
        } => {
            if category_id.as_str().trim().is_empty() {
                return Err(EngineError::validation("category_id must not be empty"));
            }
            if *action == ServiceAction::Remove && !profile.category_ids.contains(category_id) {
                return Err(EngineError::validation(format!(
                    "category {category_id} is not currently offered"
                )));
            }
            Ok(())
        }
        ChangeRequestKind::Zone { action, zone_id } => match action {
            ZoneAction::Add => {
                if !zones.is_serviceable(zone_id) {
                    return Err(EngineError::UnservicableZone {
                        zone_id: zone_id.to_string(),
                    });
                }
                Ok(())
            }
            ZoneAction::Remove => {
                if !profile.zone_ids.contains(zone_id) {
                    return Err(EngineError::validation(format!(
                        "zone {zone_id} is not currently assigned"
                    )));
                }
                Ok(())
            }
        },
        ChangeRequestKind::Bank { details } => {
            for (field, value) in [
                ("account_holder", &details.account_holder),
                ("account_number", &details.account_number),
                ("bank_name", &details.bank_name),
                ("branch_code", &details.branch_code),
            ] {
                if value.trim().is_empty() {
                    return Err(EngineError::validation(format!(
                        "{field} must not be empty"
                    )));
                }
            }
            Ok(())
        }
    }
}

/// Apply an approved request's effect to the profile.
///
/// Set mutations are idempotent: adding an already-present member or
/// removing an already-absent one leaves the set consistent either way.
fn apply_effect(profile: &mut TechnicianProfile, kind: &ChangeRequestKind) {
    match kind {
        ChangeRequestKind::Service {
            action,
            category_id,
        } => match action {
            ServiceAction::Add => {
                profile.category_ids.insert(category_id.clone());
            }
            ServiceAction::Remove => {
                profile.category_ids.remove(category_id);
            }
        },
        ChangeRequestKind::Zone { action, zone_id } => match action {
            ZoneAction::Add => {
                profile.zone_ids.insert(zone_id.clone());
            }
            ZoneAction::Remove => {
                profile.zone_ids.remove(zone_id);
            }
        },
        ChangeRequestKind::Bank { details } => {
            // Wholesale replacement, never a partial-field merge.
            profile.bank = Some(details.clone());
        }
    }
}
