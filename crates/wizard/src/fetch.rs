// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use salon_booking::{FetchKind, FetchedItems};
use salon_booking_client::{BookingCatalog, ClientError};

/// Performs one fetch requested by the state machine.
///
/// # Arguments
///
/// * `catalog` - The catalog to read from
/// * `kind` - The request parameters issued with the fetch ticket
///
/// # Errors
///
/// Returns the `ClientError` of the underlying query or call.
pub async fn run_fetch(
    catalog: &BookingCatalog,
    kind: FetchKind,
) -> Result<FetchedItems, ClientError> {
    match kind {
        FetchKind::Services => catalog
            .active_services()
            .await
            .map(FetchedItems::Services),
        FetchKind::Professionals { service_id } => catalog
            .professionals_for_service(&service_id)
            .await
            .map(FetchedItems::Professionals),
        FetchKind::Slots {
            service_id,
            professional_id,
            date,
        } => catalog
            .available_slots(&service_id, professional_id.as_ref(), date)
            .await
            .map(FetchedItems::Slots),
    }
}
