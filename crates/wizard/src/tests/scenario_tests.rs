// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    Reply, ScriptedClient, color, corte, create_wizard, june_first, june_second, lucia, martin,
    slot_at,
};
use crate::{BookingWizard, CollectionView, WizardError, WizardEvent};
use salon_booking::{Collection, Completion, CoreError};
use salon_booking_domain::{AvailableSlot, ProfessionalChoice, Service};
use serde_json::{Value, json};
use std::sync::Arc;
use time::macros::{date, datetime};

#[tokio::test]
async fn test_start_loads_services() {
    let client: Arc<ScriptedClient> =
        Arc::new(ScriptedClient::new().with_services(vec![color(), corte()]));
    let mut wizard: BookingWizard = create_wizard(&client);

    assert_eq!(wizard.services_view(), CollectionView::Idle);
    wizard.start().unwrap();
    assert_eq!(wizard.services_view(), CollectionView::Loading);

    let events: Vec<WizardEvent> = wizard.settle().await.unwrap();

    assert_eq!(
        events,
        vec![WizardEvent::CollectionUpdated {
            collection: Collection::Services
        }]
    );
    let CollectionView::Ready(services) = wizard.services_view() else {
        panic!("expected services to be ready");
    };
    let names: Vec<&str> = services.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Color", "Corte"]);
}

#[tokio::test]
async fn test_service_without_professionals_still_reaches_slots() {
    let client: Arc<ScriptedClient> = Arc::new(
        ScriptedClient::new()
            .with_services(vec![corte()])
            .with_professionals(&corte(), Vec::new()),
    );
    let mut wizard: BookingWizard = create_wizard(&client);

    wizard.select_service(corte()).unwrap();
    wizard.settle().await.unwrap();

    assert_eq!(
        wizard.professionals_view(),
        CollectionView::Empty {
            title: "No hay profesionales disponibles",
            guidance: "Podés continuar sin preferencia de profesional.",
        }
    );
    assert!(wizard.state().error(Collection::Professionals).is_none());

    wizard
        .select_professional(ProfessionalChoice::NoPreference)
        .unwrap();
    wizard.select_date(june_first()).unwrap();
    assert_eq!(wizard.slots_view(), CollectionView::Loading);
    wizard.settle().await.unwrap();

    assert_eq!(
        client.slot_calls(),
        vec![json!({
            "p_professional_id": null,
            "p_service_id": "svc-corte",
            "p_date": "2025-06-01"
        })]
    );
    assert!(matches!(wizard.slots_view(), CollectionView::Empty { .. }));
}

#[tokio::test]
async fn test_selecting_slot_completes_with_no_preference() {
    let slot: AvailableSlot = slot_at(datetime!(2025-06-01 10:00 UTC), 30);
    let client: Arc<ScriptedClient> = Arc::new(
        ScriptedClient::new()
            .with_services(vec![corte()])
            .with_professionals(&corte(), Vec::new())
            .with_slots(&corte(), None, "2025-06-01", Reply::slots(&[slot])),
    );
    let mut wizard: BookingWizard = create_wizard(&client);
    let mut events = wizard.subscribe();

    wizard.select_service(corte()).unwrap();
    wizard
        .select_professional(ProfessionalChoice::NoPreference)
        .unwrap();
    wizard.select_date(june_first()).unwrap();
    wizard.settle().await.unwrap();

    assert_eq!(wizard.slots_view(), CollectionView::Ready(&[slot][..]));
    let completion: Option<Completion> = wizard.select_slot(slot).unwrap();

    let expected: Completion = Completion {
        service: corte(),
        professional: ProfessionalChoice::NoPreference,
        date: june_first(),
        slot,
    };
    assert_eq!(completion, Some(expected.clone()));
    assert_eq!(wizard.completion(), Some(&expected));

    let mut received: Vec<WizardEvent> = Vec::new();
    while let Ok(event) = events.try_recv() {
        received.push(event);
    }
    assert_eq!(received.last(), Some(&WizardEvent::Completed(expected)));
}

#[tokio::test]
async fn test_slot_failure_then_retry_repeats_request() {
    let slot: AvailableSlot = slot_at(datetime!(2025-06-02 14:00 UTC), 60);
    let client: Arc<ScriptedClient> = Arc::new(
        ScriptedClient::new()
            .with_professionals(&corte(), vec![lucia()])
            .with_slots(&corte(), Some(&lucia()), "2025-06-02", Reply::failure())
            .with_slots(&corte(), Some(&lucia()), "2025-06-02", Reply::slots(&[slot])),
    );
    let mut wizard: BookingWizard = create_wizard(&client);

    wizard.select_service(corte()).unwrap();
    wizard.settle().await.unwrap();
    wizard
        .select_professional(ProfessionalChoice::Specific(lucia()))
        .unwrap();
    wizard.select_date(june_second()).unwrap();
    wizard.settle().await.unwrap();

    let view = wizard.slots_view();
    assert_eq!(
        view,
        CollectionView::Failed {
            message: "No pudimos cargar los horarios. Por favor, intentá de nuevo.",
        }
    );
    assert!(view.can_retry());

    wizard.retry(Collection::Slots).unwrap();
    wizard.settle().await.unwrap();

    let calls: Vec<Value> = client.slot_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    assert_eq!(wizard.slots_view(), CollectionView::Ready(&[slot][..]));
    assert!(wizard.state().error(Collection::Slots).is_none());
}

#[tokio::test]
async fn test_professional_not_offered_is_rejected() {
    let client: Arc<ScriptedClient> =
        Arc::new(ScriptedClient::new().with_professionals(&corte(), vec![lucia()]));
    let mut wizard: BookingWizard = create_wizard(&client);

    wizard.select_service(corte()).unwrap();
    wizard.settle().await.unwrap();
    let result = wizard.select_professional(ProfessionalChoice::Specific(martin()));

    assert!(matches!(
        result,
        Err(WizardError::Rejected(CoreError::ProfessionalNotOffered { .. }))
    ));
    assert!(wizard.state().professional().is_none());
}

#[tokio::test]
async fn test_date_outside_window_is_rejected() {
    let client: Arc<ScriptedClient> = Arc::new(ScriptedClient::new());
    let mut wizard: BookingWizard = create_wizard(&client);

    wizard.select_service(corte()).unwrap();
    let result = wizard.select_date(date!(2025 - 05 - 31));

    assert!(matches!(result, Err(WizardError::Rejected(_))));
    assert_eq!(wizard.in_flight(), 1);
}

#[tokio::test]
async fn test_service_change_clears_completion_and_reselect_fires_again() {
    let slot: AvailableSlot = slot_at(datetime!(2025-06-01 10:00 UTC), 30);
    let client: Arc<ScriptedClient> = Arc::new(ScriptedClient::new().with_slots(
        &corte(),
        None,
        "2025-06-01",
        Reply::slots(&[slot]),
    ));
    let mut wizard: BookingWizard = create_wizard(&client);

    let book = |wizard: &mut BookingWizard, service: Service| {
        wizard.select_service(service).unwrap();
        wizard.select_date(june_first()).unwrap();
    };

    book(&mut wizard, corte());
    wizard.settle().await.unwrap();
    assert!(wizard.select_slot(slot).unwrap().is_some());

    wizard.select_service(color()).unwrap();
    assert!(wizard.completion().is_none());
    assert!(wizard.state().slot().is_none());
    assert!(wizard.state().date().is_none());

    book(&mut wizard, corte());
    wizard.settle().await.unwrap();
    assert!(wizard.select_slot(slot).unwrap().is_some());
}
