//! # TechnicianEngine — The Exposed Operation Groups
//!
//! The synchronous facade collaborators call. Every operation either
//! commits in full or leaves stored state untouched; every
//! administrator-only operation takes an explicit [`AdminContext`] and is
//! checked against the authorizer before any state is read.

use std::sync::Arc;

use tracing::{info, warn};

use fixnet_core::{AdminContext, EngineError, RequestId, TechnicianId, ZoneId};
use fixnet_geo::{GeoPoint, Zone, ZoneIndex};
use fixnet_onboarding::{
    DocumentType, Registration, ReviewDecision, StepPayload, TechnicianProfile,
};
use fixnet_workflow::{self as workflow, ChangeRequestKind, Resolution};

use crate::auth::AdminAuthorizer;
use crate::files::FileResolver;
use crate::projection::StatusProjection;
use crate::store::{ProfileStore, TechnicianAggregate};

/// The technician lifecycle engine.
///
/// Generic over its three seams so deployments can swap persistence,
/// authorization, and file resolution without touching lifecycle logic.
pub struct TechnicianEngine<S, A, F> {
    store: S,
    auth: A,
    files: F,
    zones: Arc<ZoneIndex>,
}

impl<S, A, F> TechnicianEngine<S, A, F>
where
    S: ProfileStore,
    A: AdminAuthorizer,
    F: FileResolver,
{
    /// Assemble an engine from its collaborators.
    pub fn new(store: S, auth: A, files: F, zones: Arc<ZoneIndex>) -> Self {
        Self {
            store,
            auth,
            files,
            zones,
        }
    }

    /// The shared zone index.
    pub fn zones(&self) -> &ZoneIndex {
        &self.zones
    }

    // ── Onboarding ───────────────────────────────────────────────────

    /// Register a new technician at step 0.
    pub fn register(&self, registration: Registration) -> Result<TechnicianId, EngineError> {
        let profile = TechnicianProfile::register(registration);
        let id = profile.id;
        self.store.create(TechnicianAggregate::new(profile))?;
        info!(technician_id = %id, "technician registered");
        Ok(id)
    }

    /// Submit one onboarding step on behalf of a technician.
    ///
    /// Document uploads are resolved to durable URLs before the payload
    /// reaches the state machine.
    pub fn advance_step(
        &self,
        technician_id: TechnicianId,
        step: u8,
        mut payload: StepPayload,
    ) -> Result<(), EngineError> {
        if let StepPayload::Documents { uploads } = &mut payload {
            for upload in uploads {
                upload.file_url = self.files.durable_url(&upload.file_url)?;
            }
        }
        let zones = Arc::clone(&self.zones);
        self.store.update(&technician_id, move |agg| {
            agg.profile.advance(step, payload, &zones)
        })?;
        info!(technician_id = %technician_id, step, "onboarding step accepted");
        Ok(())
    }

    /// Flip the technician's availability flag.
    pub fn set_availability(
        &self,
        technician_id: TechnicianId,
        online: bool,
    ) -> Result<(), EngineError> {
        self.store.update(&technician_id, |agg| {
            agg.profile.is_online = online;
            Ok(())
        })
    }

    // ── Document review ──────────────────────────────────────────────

    /// Apply an administrator verdict to one document.
    pub fn review_document(
        &self,
        ctx: &AdminContext,
        technician_id: TechnicianId,
        doc_type: DocumentType,
        decision: ReviewDecision,
    ) -> Result<(), EngineError> {
        self.require_admin(ctx, "review_document")?;
        let status = self.store.update(&technician_id, |agg| {
            agg.profile.review_document(doc_type, decision)?;
            Ok(agg.profile.verification_status)
        })?;
        info!(
            technician_id = %technician_id,
            document = %doc_type,
            verification_status = %status,
            admin = %ctx,
            "document reviewed"
        );
        Ok(())
    }

    /// Reject the whole profile with a global reason.
    pub fn reject_profile(
        &self,
        ctx: &AdminContext,
        technician_id: TechnicianId,
        reason: impl Into<String>,
    ) -> Result<(), EngineError> {
        self.require_admin(ctx, "reject_profile")?;
        let reason = reason.into();
        self.store
            .update(&technician_id, |agg| agg.profile.reject(reason))?;
        warn!(technician_id = %technician_id, admin = %ctx, "profile rejected");
        Ok(())
    }

    /// Deactivate a technician. Profiles are never deleted.
    pub fn deactivate_technician(
        &self,
        ctx: &AdminContext,
        technician_id: TechnicianId,
    ) -> Result<(), EngineError> {
        self.require_admin(ctx, "deactivate_technician")?;
        self.store.update(&technician_id, |agg| {
            agg.profile.is_active = false;
            agg.profile.is_online = false;
            Ok(())
        })?;
        info!(technician_id = %technician_id, admin = %ctx, "technician deactivated");
        Ok(())
    }

    // ── Change requests ──────────────────────────────────────────────

    /// File a change request. Allowed only for verified technicians; the
    /// profile is not mutated until approval.
    pub fn submit_change_request(
        &self,
        technician_id: TechnicianId,
        kind: ChangeRequestKind,
    ) -> Result<RequestId, EngineError> {
        let zones = Arc::clone(&self.zones);
        let request_id = self.store.update(&technician_id, move |agg| {
            let request = workflow::submit(&agg.profile, kind, &zones)?;
            let id = request.id;
            agg.requests.push(request);
            Ok(id)
        })?;
        info!(technician_id = %technician_id, request_id = %request_id, "change request filed");
        Ok(request_id)
    }

    /// Adjudicate a pending change request. Effect and status commit
    /// together or not at all.
    pub fn resolve_change_request(
        &self,
        ctx: &AdminContext,
        request_id: RequestId,
        resolution: Resolution,
    ) -> Result<(), EngineError> {
        self.require_admin(ctx, "resolve_change_request")?;
        let owner = self.store.find_request_owner(&request_id)?;
        let zones = Arc::clone(&self.zones);
        self.store.update(&owner, move |agg| {
            let profile = &mut agg.profile;
            let request = agg
                .requests
                .iter_mut()
                .find(|r| r.id == request_id)
                .ok_or_else(|| EngineError::not_found(request_id))?;
            workflow::resolve(
                request,
                profile,
                resolution,
                &zones,
                fixnet_core::Timestamp::now(),
            )
        })?;
        info!(request_id = %request_id, technician_id = %owner, admin = %ctx, "change request resolved");
        Ok(())
    }

    // ── Moderation ledger ────────────────────────────────────────────

    /// Set the dismissed flag on a request. Idempotent; legal in any status.
    pub fn dismiss_request(&self, request_id: RequestId) -> Result<(), EngineError> {
        self.flag_request(request_id, |r| r.dismiss())
    }

    /// Set the archived flag on a request. Idempotent; legal in any status.
    pub fn archive_request(&self, request_id: RequestId) -> Result<(), EngineError> {
        self.flag_request(request_id, |r| r.archive())
    }

    fn flag_request(
        &self,
        request_id: RequestId,
        set: impl FnOnce(&mut fixnet_workflow::ChangeRequest),
    ) -> Result<(), EngineError> {
        let owner = self.store.find_request_owner(&request_id)?;
        self.store.update(&owner, move |agg| {
            let request = agg
                .requests
                .iter_mut()
                .find(|r| r.id == request_id)
                .ok_or_else(|| EngineError::not_found(request_id))?;
            set(request);
            Ok(())
        })
    }

    // ── Projections ──────────────────────────────────────────────────

    /// Read-only lifecycle snapshot for presentation layers.
    pub fn status(&self, technician_id: TechnicianId) -> Result<StatusProjection, EngineError> {
        let aggregate = self.store.read(&technician_id)?;
        Ok(StatusProjection::from_aggregate(&aggregate))
    }

    /// Raw moderation flag state for a request, for audit consumers.
    pub fn request_flags(&self, request_id: RequestId) -> Result<(bool, bool), EngineError> {
        let owner = self.store.find_request_owner(&request_id)?;
        let aggregate = self.store.read(&owner)?;
        let request = aggregate
            .requests
            .iter()
            .find(|r| r.id == request_id)
            .ok_or_else(|| EngineError::not_found(request_id))?;
        Ok((request.is_dismissed, request.is_archived))
    }

    // ── Zone administration ──────────────────────────────────────────

    /// Insert or replace a zone. Administrator-only; effective immediately.
    pub fn upsert_zone(&self, ctx: &AdminContext, zone: Zone) -> Result<(), EngineError> {
        self.require_admin(ctx, "upsert_zone")?;
        info!(zone_id = %zone.id, admin = %ctx, "zone upserted");
        self.zones.upsert_zone(zone);
        Ok(())
    }

    /// Mark a zone inactive. Administrator-only.
    pub fn deactivate_zone(&self, ctx: &AdminContext, zone_id: &ZoneId) -> Result<(), EngineError> {
        self.require_admin(ctx, "deactivate_zone")?;
        self.zones
            .deactivate_zone(zone_id)
            .map_err(|_| EngineError::not_found(format!("zone {zone_id}")))?;
        info!(zone_id = %zone_id, admin = %ctx, "zone deactivated");
        Ok(())
    }

    /// All active zones containing the point, in insertion order. An empty
    /// result means the caller should offer manual zone selection.
    pub fn find_zones_containing(&self, point: GeoPoint) -> Vec<Zone> {
        self.zones.find_containing(point)
    }

    /// Every zone, active or not.
    pub fn list_zones(&self) -> Vec<Zone> {
        self.zones.list_all()
    }

    // ── Authorization ────────────────────────────────────────────────

    fn require_admin(&self, ctx: &AdminContext, action: &str) -> Result<(), EngineError> {
        if self.auth.is_admin(ctx) {
            Ok(())
        } else {
            warn!(admin = %ctx, action, "unauthorized administrator action");
            Err(EngineError::NotAuthorized {
                action: action.to_string(),
            })
        }
    }
}
