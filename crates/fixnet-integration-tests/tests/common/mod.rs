//! Shared fixtures for cross-crate flows.

use std::sync::Arc;

use fixnet_core::{AdminContext, CategoryId, TechnicianId, ZoneId};
use fixnet_engine::{
    EngineConfig, MemoryStore, PassthroughResolver, StaticRoster, TechnicianEngine,
};
use fixnet_geo::{GeoPoint, Polygon, Zone, ZoneIndex};
use fixnet_onboarding::{
    BankDetails, DocumentType, DocumentUpload, Registration, ReviewDecision, StepPayload,
};

pub type Engine = TechnicianEngine<MemoryStore, StaticRoster, PassthroughResolver>;

pub fn admin() -> AdminContext {
    AdminContext::new("ops-1")
}

pub fn square(origin_lat: f64, origin_lng: f64, side: f64) -> Polygon {
    Polygon::new(vec![
        GeoPoint::new(origin_lat, origin_lng),
        GeoPoint::new(origin_lat, origin_lng + side),
        GeoPoint::new(origin_lat + side, origin_lng + side),
        GeoPoint::new(origin_lat + side, origin_lng),
    ])
    .expect("fixture polygon is valid")
}

/// Engine with zones z1 (Clifton) and z2 (Saddar), both active, and a
/// single administrator `ops-1`.
pub fn engine() -> Engine {
    let zones = Arc::new(ZoneIndex::new());
    zones.upsert_zone(Zone::new(ZoneId::new("z1"), "Clifton", square(24.8, 67.0, 0.2)));
    zones.upsert_zone(Zone::new(ZoneId::new("z2"), "Saddar", square(24.8, 67.3, 0.2)));
    TechnicianEngine::new(
        MemoryStore::new(),
        StaticRoster::from_config(&EngineConfig::with_admins(["ops-1"])),
        PassthroughResolver,
        zones,
    )
}

pub fn register(engine: &Engine) -> TechnicianId {
    engine
        .register(Registration {
            phone: "+92-300-1234567".to_string(),
        })
        .expect("registration succeeds")
}

pub fn step_payload(step: u8) -> StepPayload {
    match step {
        1 => StepPayload::PersonalDetails {
            full_name: "Ayesha Khan".to_string(),
            phone: "+92-300-1234567".to_string(),
            email: Some("ayesha@example.com".to_string()),
        },
        2 => StepPayload::ServiceSelection {
            category_ids: vec![CategoryId::new("plumbing")],
        },
        3 => StepPayload::Location {
            point: GeoPoint::new(24.9, 67.1),
            address: "12 Canal Road, Karachi".to_string(),
        },
        4 => StepPayload::ZoneSelection {
            zone_ids: vec![ZoneId::new("z1")],
        },
        5 => StepPayload::Bank {
            details: BankDetails {
                account_holder: "Ayesha Khan".to_string(),
                account_number: "PK36SCBL0000001123456702".to_string(),
                bank_name: "Standard Chartered".to_string(),
                branch_code: "0101".to_string(),
            },
        },
        6 => StepPayload::Documents {
            uploads: DocumentType::REQUIRED
                .iter()
                .map(|t| DocumentUpload {
                    doc_type: *t,
                    file_url: format!("https://files/{t}.pdf"),
                })
                .collect(),
        },
        other => panic!("no payload for step {other}"),
    }
}

pub fn complete_onboarding(engine: &Engine, id: TechnicianId) {
    for step in 1..=6 {
        engine
            .advance_step(id, step, step_payload(step))
            .expect("step accepted");
    }
}

pub fn approve_all_documents(engine: &Engine, id: TechnicianId) {
    for doc_type in DocumentType::REQUIRED {
        engine
            .review_document(&admin(), id, doc_type, ReviewDecision::Approve)
            .expect("review accepted");
    }
}

pub fn verify(engine: &Engine, id: TechnicianId) {
    complete_onboarding(engine, id);
    approve_all_documents(engine, id);
}
